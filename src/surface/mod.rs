pub mod parametric_surface;
pub mod surface_of_revolution;

pub use parametric_surface::*;
pub use surface_of_revolution::*;
