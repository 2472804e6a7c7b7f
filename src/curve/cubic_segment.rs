use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// One vector-valued cubic polynomial segment in its local weight `w` in `[0, 1]`
#[derive(Clone, Debug)]
pub struct CubicSegment<T: FloatingPoint> {
    c0: Vector3<T>,
    c1: Vector3<T>,
    c2: Vector3<T>,
    c3: Vector3<T>,
}

impl<T: FloatingPoint> CubicSegment<T> {
    /// Hermite form: endpoints `p1`, `p2` with tangents `t1`, `t2`
    pub fn hermite(p1: &Point3<T>, p2: &Point3<T>, t1: Vector3<T>, t2: Vector3<T>) -> Self {
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();
        let d = p2 - p1;
        Self {
            c0: p1.coords,
            c2: d * three - t1 * two - t2,
            c3: t1 + t2 - d * two,
            c1: t1,
        }
    }

    /// Uniform Catmull-Rom segment through `p1`..`p2` with surrounding
    /// points `p0`, `p3` and tangent scaling `tension`
    pub fn uniform(
        p0: &Point3<T>,
        p1: &Point3<T>,
        p2: &Point3<T>,
        p3: &Point3<T>,
        tension: T,
    ) -> Self {
        Self::hermite(p1, p2, (p2 - p0) * tension, (p3 - p1) * tension)
    }

    /// Non-uniform Catmull-Rom segment with knot intervals `dt0`, `dt1`, `dt2`
    /// (chord lengths raised to the parameterization exponent)
    pub fn non_uniform(
        p0: &Point3<T>,
        p1: &Point3<T>,
        p2: &Point3<T>,
        p3: &Point3<T>,
        dt0: T,
        dt1: T,
        dt2: T,
    ) -> Self {
        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
        Self::hermite(p1, p2, t1, t2)
    }

    pub fn point(&self, w: T) -> Point3<T> {
        Point3::from(self.c0 + self.c1 * w + self.c2 * (w * w) + self.c3 * (w * w * w))
    }

    /// Derivative with respect to the local weight
    pub fn derivative(&self, w: T) -> Vector3<T> {
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();
        self.c1 + self.c2 * (two * w) + self.c3 * (three * w * w)
    }
}
