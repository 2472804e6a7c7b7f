mod curve;
mod misc;
mod ode;
mod profile;
mod quadrature;
mod surface;
mod tessellation;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::misc::*;
    pub use crate::ode::*;
    pub use crate::profile::*;
    pub use crate::quadrature::*;
    pub use crate::surface::*;
    pub use crate::tessellation::*;
}
