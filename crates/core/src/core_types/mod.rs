//! Core types and utilities

pub mod input;
pub mod units;

pub use input::*;
pub use units::*;
