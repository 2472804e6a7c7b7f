use nalgebra::Point2;
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// An ordered sequence of `(r, h)` profile points:
/// radial distance from the axis of revolution and height along it.
/// Produced fresh by every solve call; a new shape parameter means a full re-solve.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile<T: FloatingPoint> {
    points: Vec<Point2<T>>,
}

impl<T: FloatingPoint> Profile<T> {
    pub fn new(points: Vec<Point2<T>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<T>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total accumulated height of the profile
    pub fn total_height(&self) -> T {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.y - first.y,
            _ => T::zero(),
        }
    }

    /// Shift all heights so the profile is vertically centered about `h = 0`
    pub fn recentered(mut self) -> Self {
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            let offset = (first.y + last.y) * T::from_f64(0.5).unwrap();
            for p in self.points.iter_mut() {
                p.y -= offset;
            }
        }
        self
    }

    /// Reverse the traversal order, e.g. to move a cusp to a fixed end
    /// of the interpolated curve parameter
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Cast the profile to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> Profile<F> {
        Profile {
            points: self.points.iter().map(|p| p.clone().cast()).collect(),
        }
    }
}
