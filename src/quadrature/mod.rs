pub mod cumulative_integral;

pub use cumulative_integral::*;
