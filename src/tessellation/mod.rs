pub mod surface;
pub mod surface_mesh;
pub mod surface_tessellation_option;

pub use surface_mesh::*;
pub use surface_tessellation_option::*;

/// A trait for tessellating a shape
pub trait Tessellation<Opt> {
    type Output;
    fn tessellate(&self, options: Opt) -> Self::Output;
}

#[cfg(test)]
mod tests;
