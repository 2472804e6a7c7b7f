use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// A parametric surface over a rectangular `(u, v)` domain.
///
/// Analytic normals are an optional capability: a surface either overrides
/// [`ParametricSurface::normal_at`] for its whole domain or leaves the
/// default, in which case a tessellator falls back to averaging adjacent
/// face normals. Mixing the two within one surface is not supported.
pub trait ParametricSurface<T: FloatingPoint> {
    /// Parameter interval in the `u` direction
    fn u_domain(&self) -> (T, T);

    /// Parameter interval in the `v` direction
    fn v_domain(&self) -> (T, T);

    /// Evaluate the surface position
    fn point_at(&self, u: T, v: T) -> Point3<T>;

    /// Analytic unit normal, if the surface can provide one
    fn normal_at(&self, _u: T, _v: T) -> Option<Vector3<T>> {
        None
    }
}
