//! Schedule computation: the hydraulic calculator and cycle selection

pub mod calculator;
pub mod cycles;

pub use calculator::*;
pub use cycles::*;
