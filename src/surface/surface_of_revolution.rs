use nalgebra::Point3;

use crate::curve::SplineCurve;
use crate::misc::FloatingPoint;

use super::ParametricSurface;

/// A surface swept by revolving a profile curve through a full turn about
/// the y axis. `u` is the revolution angle, `v` the normalized curve
/// parameter. The surface owns its profile curve; updating the curve points
/// in place reshapes the surface on the next evaluation.
///
/// # Example
/// ```
/// use lathe::prelude::*;
///
/// let profile = ProfileSolver::try_new(CurvatureCase::Spindle, 1.)
///     .unwrap()
///     .try_solve(200)
///     .unwrap()
///     .recentered();
/// let curve = SplineCurve::try_from_profile(&profile, KnotStyle::Centripetal).unwrap();
/// let sphere = SurfaceOfRevolution::new(curve);
/// let mesh = sphere.tessellate(SurfaceTessellationOptions::default()).unwrap();
/// assert_eq!(mesh.points().len(), 33 * 33);
/// ```
#[derive(Clone, Debug)]
pub struct SurfaceOfRevolution<T: FloatingPoint> {
    curve: SplineCurve<T>,
}

impl<T: FloatingPoint> SurfaceOfRevolution<T> {
    pub fn new(curve: SplineCurve<T>) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &SplineCurve<T> {
        &self.curve
    }

    /// Mutable access to the owned profile curve, e.g. to replace its points
    /// after a shape parameter change
    pub fn curve_mut(&mut self) -> &mut SplineCurve<T> {
        &mut self.curve
    }

    pub fn into_curve(self) -> SplineCurve<T> {
        self.curve
    }
}

impl<T: FloatingPoint> ParametricSurface<T> for SurfaceOfRevolution<T> {
    fn u_domain(&self) -> (T, T) {
        (T::zero(), T::two_pi())
    }

    fn v_domain(&self) -> (T, T) {
        self.curve.domain()
    }

    fn point_at(&self, u: T, v: T) -> Point3<T> {
        let p = self.curve.point_at(v);
        Point3::new(p.x * u.cos(), p.y, -p.x * u.sin())
    }
}
