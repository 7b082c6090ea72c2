//! Core datapath implementation.
//!
//! This module contains the compute unit, the pipeline register chain behind
//! it, and the [`Datapath`] that sequences the two on every tick.

/// Tick sequencing: compute, then advance the register chain.
pub mod datapath;

/// Pipeline register chain (slots, latches, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::datapath::{Datapath, TickOutcome};
