pub mod curvature_case;
pub mod profile;
pub mod solver;

pub use curvature_case::*;
pub use profile::*;
pub use solver::*;
