//! Gearforge - equipment progression and drop economy for a roguelike.
//!
//! Enemies drop catalog equipment, equipment is salvaged into materials, and
//! materials plus gold feed enhancement, enchanting, ascension upgrades and
//! the shops.

pub mod config;
pub mod core;
pub mod disassembly;
pub mod drops;
pub mod enchant;
pub mod enhancement;
pub mod error;
pub mod items;
pub mod logging;
pub mod shop;
pub mod simulator;
pub mod upgrade;
pub mod utils;
