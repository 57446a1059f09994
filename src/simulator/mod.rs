//! Balance simulator for Monte Carlo analysis of the drop economy.
//!
//! Each run farms one enemy, breaks down everything it cannot use and spends
//! the proceeds pushing its best weapon through enhance, enchant and upgrade.
//! The engines are the same ones the game uses, so the numbers line up with
//! real play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
