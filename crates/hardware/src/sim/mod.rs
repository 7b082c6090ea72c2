//! Simulation driver and stimulus loading.
//!
//! Provides the tick-level simulator wrapped around the datapath and the
//! JSON stimulus script format that drives it.

/// Stimulus script parsing and expansion.
pub mod loader;

/// Tick-level simulator.
pub mod simulator;

pub use loader::{Script, StimulusEntry, load_script, parse_script};
pub use simulator::{Simulator, TickRecord};
