pub mod cubic_segment;
pub mod knot_style;
pub mod spline_curve;

pub use cubic_segment::*;
pub use knot_style::*;
pub use spline_curve::*;

#[cfg(test)]
mod tests;
