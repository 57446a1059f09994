//! Per-item enhancement levels (+1 to +10).

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
