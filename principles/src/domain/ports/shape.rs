//! Shape contract

pub trait Shape {
    fn name(&self) -> &str;

    fn area(&self) -> u64;

    /// Grow the shape by one unit along its own notion of size.
    /// Sides saturate at `u32::MAX`.
    fn increase_size(&mut self);
}
