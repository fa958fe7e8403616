//! Shape variants
//!
//! `Square` is deliberately not a `Rectangle`: growing a rectangle widens one
//! side, growing a square widens both.

use crate::domain::ports::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    length: u32,
    breadth: u32,
}

impl Rectangle {
    pub fn new(length: u32, breadth: u32) -> Self {
        Self { length, breadth }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn breadth(&self) -> u32 {
        self.breadth
    }

    pub fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    pub fn set_breadth(&mut self, breadth: u32) {
        self.breadth = breadth;
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn area(&self) -> u64 {
        u64::from(self.length) * u64::from(self.breadth)
    }

    fn increase_size(&mut self) {
        self.set_breadth(self.breadth.saturating_add(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn set_side(&mut self, side: u32) {
        self.side = side;
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }

    fn increase_size(&mut self) {
        self.set_side(self.side.saturating_add(1));
    }
}
