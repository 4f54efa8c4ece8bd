//! Command implementations

pub mod session;
pub mod simple;
pub mod simulate;

pub use session::SessionStats;
pub use simple::run_simple;
pub use simulate::{RoundReport, SimulationResult, play_out, run_simulation};
