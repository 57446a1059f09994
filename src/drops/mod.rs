//! Enemy drop tables and the resolver that rolls them.

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
