use gauss_quad::GaussLegendre;
use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;
use crate::profile::Profile;

use super::{CubicSegment, KnotStyle};

/// Number of arc length table spans per spline segment
const LENGTH_SPANS_PER_SEGMENT: usize = 8;

/// Degree of the Gauss-Legendre rule used for span lengths
const GAUSS_DEGREE: usize = 16;

/// A Catmull-Rom interpolant through an ordered 3D point sequence,
/// parameterized over `[0, 1]` and passing exactly through every input point.
///
/// The curve owns its control points and an arc length table derived from
/// them. [`SplineCurve::try_update_points`] replaces the points in place and
/// rebuilds the table before returning, so the table is always consistent
/// with the current points when a query is served. Objects holding a
/// reference to the curve observe the new shape on their next evaluation.
#[derive(Clone, Debug)]
pub struct SplineCurve<T: FloatingPoint> {
    points: Vec<Point3<T>>,
    closed: bool,
    knot_style: KnotStyle,
    tension: T,
    /// cumulative arc lengths at uniformly spaced parameters
    arc_lengths: Vec<T>,
    /// set while `points` and `arc_lengths` disagree
    dirty: bool,
}

impl<T: FloatingPoint> SplineCurve<T> {
    /// Interpolate a point sequence.
    /// # Failures
    /// - if fewer than two points are given
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    /// use nalgebra::Point3;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![
    ///     Point3::new(0., 0., 0.),
    ///     Point3::new(1., 1., 0.),
    ///     Point3::new(2., 0., 0.),
    /// ];
    /// let curve = SplineCurve::try_new(points.clone(), KnotStyle::Centripetal, false).unwrap();
    /// assert_relative_eq!(curve.point_at(0.), points[0]);
    /// assert_relative_eq!(curve.point_at(1.), points[2]);
    /// ```
    pub fn try_new(
        points: Vec<Point3<T>>,
        knot_style: KnotStyle,
        closed: bool,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(points.len() >= 2, "Too few points to interpolate");
        let mut curve = Self {
            points,
            closed,
            knot_style,
            tension: T::from_f64(0.5).unwrap(),
            arc_lengths: vec![],
            dirty: true,
        };
        curve.rebuild_arc_lengths()?;
        Ok(curve)
    }

    /// Interpolate a profile polyline, lifted into the x/y plane
    pub fn try_from_profile(profile: &Profile<T>, knot_style: KnotStyle) -> anyhow::Result<Self> {
        let points = profile
            .points()
            .iter()
            .map(|p| Point3::new(p.x, p.y, T::zero()))
            .collect();
        Self::try_new(points, knot_style, false)
    }

    /// Replace the tension used by uniform parameterization
    pub fn try_with_tension(mut self, tension: T) -> anyhow::Result<Self> {
        self.tension = tension;
        self.dirty = true;
        self.rebuild_arc_lengths()?;
        Ok(self)
    }

    /// Replace the backing point sequence in place and rebuild the arc
    /// length table. The interpolant itself survives, so surfaces built on
    /// top of it pick up the new shape without being recreated.
    pub fn try_update_points(&mut self, points: Vec<Point3<T>>) -> anyhow::Result<()> {
        anyhow::ensure!(points.len() >= 2, "Too few points to interpolate");
        self.points = points;
        self.dirty = true;
        self.rebuild_arc_lengths()
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn knot_style(&self) -> KnotStyle {
        self.knot_style
    }

    pub fn tension(&self) -> T {
        self.tension
    }

    /// The fixed parameter domain of the curve
    pub fn domain(&self) -> (T, T) {
        (T::zero(), T::one())
    }

    fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Map a normalized parameter to a segment index and local weight
    fn locate(&self, t: T) -> (usize, T) {
        let segments = self.segment_count();
        let t = t.max(T::zero()).min(T::one());
        let scaled = t * T::from_usize(segments).unwrap();
        let floor = scaled.floor();
        let mut index = floor.to_usize().unwrap_or(0);
        let mut w = scaled - floor;
        if index >= segments {
            index = segments - 1;
            w = T::one();
        }
        (index, w)
    }

    /// Surrounding control points of a segment; open ends use
    /// reflected virtual neighbors
    fn control_points(&self, index: usize) -> [Point3<T>; 4] {
        let n = self.points.len();
        if self.closed {
            let p0 = self.points[(index + n - 1) % n];
            let p1 = self.points[index % n];
            let p2 = self.points[(index + 1) % n];
            let p3 = self.points[(index + 2) % n];
            [p0, p1, p2, p3]
        } else {
            let p1 = self.points[index];
            let p2 = self.points[index + 1];
            let p0 = if index == 0 {
                p1 + (p1 - p2)
            } else {
                self.points[index - 1]
            };
            let p3 = if index + 2 >= n {
                p2 + (p2 - p1)
            } else {
                self.points[index + 2]
            };
            [p0, p1, p2, p3]
        }
    }

    fn segment(&self, index: usize) -> CubicSegment<T> {
        let [p0, p1, p2, p3] = self.control_points(index);
        match self.knot_style {
            KnotStyle::Uniform => CubicSegment::uniform(&p0, &p1, &p2, &p3, self.tension),
            style => {
                let alpha: T = style.alpha();
                let eps = T::from_f64(1e-4).unwrap();
                let mut dt0 = (p1 - p0).norm().powf(alpha);
                let mut dt1 = (p2 - p1).norm().powf(alpha);
                let mut dt2 = (p3 - p2).norm().powf(alpha);
                // guard against coincident neighbors
                if dt1 < eps {
                    dt1 = T::one();
                }
                if dt0 < eps {
                    dt0 = dt1;
                }
                if dt2 < eps {
                    dt2 = dt1;
                }
                CubicSegment::non_uniform(&p0, &p1, &p2, &p3, dt0, dt1, dt2)
            }
        }
    }

    /// Evaluate the curve at `t` in `[0, 1]`
    pub fn point_at(&self, t: T) -> Point3<T> {
        let (index, w) = self.locate(t);
        self.segment(index).point(w)
    }

    /// Unit tangent direction at `t` in `[0, 1]`
    pub fn tangent_at(&self, t: T) -> Vector3<T> {
        let (index, w) = self.locate(t);
        let d = self.segment(index).derivative(w);
        d.try_normalize(T::default_epsilon()).unwrap_or(d)
    }

    /// Speed of the parameterization at `t`, `|dP/dt|`
    fn velocity(&self, t: T) -> T {
        let (index, w) = self.locate(t);
        let scale = T::from_usize(self.segment_count()).unwrap();
        self.segment(index).derivative(w).norm() * scale
    }

    /// Total arc length from the cached table
    pub fn length(&self) -> T {
        debug_assert!(!self.dirty, "arc length table queried while dirty");
        *self.arc_lengths.last().unwrap()
    }

    /// Cumulative arc lengths at uniformly spaced parameters
    pub fn arc_lengths(&self) -> &[T] {
        debug_assert!(!self.dirty, "arc length table queried while dirty");
        &self.arc_lengths
    }

    /// Parameter at a normalized arc length fraction `u` in `[0, 1]`,
    /// resolved by binary search over the cached table with linear
    /// interpolation inside the containing span
    pub fn parameter_at_norm_length(&self, u: T) -> T {
        debug_assert!(!self.dirty, "arc length table queried while dirty");
        let target = u.max(T::zero()).min(T::one()) * self.length();
        let i = self.arc_lengths.partition_point(|l| *l < target);
        if i == 0 {
            return T::zero();
        }
        let i = i.min(self.arc_lengths.len() - 1);
        let l0 = self.arc_lengths[i - 1];
        let l1 = self.arc_lengths[i];
        let span = l1 - l0;
        let frac = if span > T::zero() {
            (target - l0) / span
        } else {
            T::zero()
        };
        let spans = self.arc_lengths.len() - 1;
        (T::from_usize(i - 1).unwrap() + frac) / T::from_usize(spans).unwrap()
    }

    /// Evaluate at a normalized arc length fraction, giving samples that are
    /// equally spaced along the curve rather than in the parameter
    pub fn point_at_norm_length(&self, u: T) -> Point3<T> {
        self.point_at(self.parameter_at_norm_length(u))
    }

    /// Rebuild the cumulative arc length table by Gauss-Legendre quadrature
    /// of the parameterization speed over every span, then clear the dirty flag
    fn rebuild_arc_lengths(&mut self) -> anyhow::Result<()> {
        let gauss = GaussLegendre::new(GAUSS_DEGREE)?;
        let spans = self.segment_count() * LENGTH_SPANS_PER_SEGMENT;
        let dt = T::one() / T::from_usize(spans).unwrap();

        let mut table = Vec::with_capacity(spans + 1);
        table.push(T::zero());
        for i in 0..spans {
            let t0 = dt * T::from_usize(i).unwrap();
            let t1 = dt * T::from_usize(i + 1).unwrap();
            let length = gauss.integrate(t0.to_f64().unwrap(), t1.to_f64().unwrap(), |t| {
                self.velocity(T::from_f64(t).unwrap()).to_f64().unwrap()
            });
            let last = *table.last().unwrap();
            table.push(last + T::from_f64(length).unwrap());
        }

        self.arc_lengths = table;
        self.dirty = false;
        Ok(())
    }
}
