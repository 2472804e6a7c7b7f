use crate::misc::FloatingPoint;

/// Options for the regular-grid surface tessellation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceTessellationOptions<T: FloatingPoint> {
    /// Number of grid cells in the `u` direction
    pub u_segments: usize,
    /// Number of grid cells in the `v` direction
    pub v_segments: usize,
    /// Squared-norm threshold below which an accumulated vertex normal is
    /// considered degenerate and left unnormalized
    pub normal_tolerance: T,
}

impl<T: FloatingPoint> Default for SurfaceTessellationOptions<T> {
    fn default() -> Self {
        Self {
            u_segments: 32,
            v_segments: 32,
            normal_tolerance: T::from_f64(1e-10).unwrap(),
        }
    }
}

impl<T: FloatingPoint> SurfaceTessellationOptions<T> {
    pub fn with_u_segments(mut self, u_segments: usize) -> Self {
        self.u_segments = u_segments;
        self
    }

    pub fn with_v_segments(mut self, v_segments: usize) -> Self {
        self.v_segments = v_segments;
        self
    }

    pub fn with_normal_tolerance(mut self, normal_tolerance: T) -> Self {
        self.normal_tolerance = normal_tolerance;
        self
    }
}
