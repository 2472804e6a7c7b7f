use crate::misc::FloatingPoint;

/// Profile families of surfaces of revolution with constant Gaussian curvature.
/// The radius function of every family satisfies `r'' = -K * r`,
/// which gives closed-form radii per case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvatureCase {
    /// `K = +1`, shape parameter `a <= 1`.
    /// A sphere at `a = 1`, a spindle shape below.
    Spindle,
    /// `K = +1`, shape parameter `a > 1`.
    /// The profile is cut where the height derivative vanishes.
    Barrel,
    /// `K = -1`, cosh-type radius, symmetric about the waist at `s = 0`
    Trumpet,
    /// `K = -1`, sinh-type radius, shape parameter `a < 1`.
    /// Cusp at one end, flared edge at the other.
    Pseudosphere,
}

impl CurvatureCase {
    /// Sign of the Gaussian curvature of the revolved surface
    pub fn gaussian_curvature<T: FloatingPoint>(&self) -> T {
        match self {
            CurvatureCase::Spindle | CurvatureCase::Barrel => T::one(),
            CurvatureCase::Trumpet | CurvatureCase::Pseudosphere => -T::one(),
        }
    }

    /// The trumpet case is solved on the positive half of its domain
    /// and mirrored about `s = 0` afterwards
    pub(crate) fn is_mirrored(&self) -> bool {
        matches!(self, CurvatureCase::Trumpet)
    }
}
