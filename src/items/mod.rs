//! Item system: equipment types, the catalog, and material stacks.

pub mod catalog;
pub mod data;
pub mod materials;
pub mod types;

pub use catalog::*;
pub use materials::*;
pub use types::*;
