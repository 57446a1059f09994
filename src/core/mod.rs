//! Tuning constants and shared rate math.

pub mod constants;
pub mod curve;
pub mod rolls;

pub use constants::*;
pub use curve::*;
pub use rolls::*;
