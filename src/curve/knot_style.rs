use crate::misc::FloatingPoint;

/// Parameterization for Catmull-Rom interpolation between points
/// https://en.wikipedia.org/wiki/Centripetal_Catmull%E2%80%93Rom_spline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnotStyle {
    /// Equal knot spacing; segment tangents are scaled by the curve tension
    Uniform,
    Chordal,
    Centripetal,
}

impl KnotStyle {
    /// Exponent applied to chord lengths when spacing knots
    pub fn alpha<T: FloatingPoint>(&self) -> T {
        match self {
            KnotStyle::Uniform => T::zero(),
            KnotStyle::Chordal => T::one(),
            KnotStyle::Centripetal => T::from_f64(0.5).unwrap(),
        }
    }
}

impl Default for KnotStyle {
    fn default() -> Self {
        KnotStyle::Centripetal
    }
}
