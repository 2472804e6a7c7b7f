pub mod integration;
pub mod stepper;

pub use integration::*;
pub use stepper::*;

#[cfg(test)]
mod tests;
