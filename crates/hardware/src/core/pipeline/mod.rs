//! Pipeline register chain implementation.
//!
//! This module contains the fixed-depth pipeline that sits behind the compute unit.
//! It includes the following components:
//! 1. **Chain:** The three-slot shift register with reset/enable control.
//! 2. **Latches:** The result-plus-flags entry held by each slot.
//! 3. **Signals:** Operation decoding, control lines, and per-tick inputs.

/// Three-slot shift register with synchronous reset and stall.
pub mod chain;

/// Slot contents (result value and its flag bundle).
pub mod latches;

/// Operation codes, control signals and tick inputs.
pub mod signals;

pub use chain::RegisterChain;
pub use latches::PipelineSlot;
pub use signals::{AluOp, ControlSignals, TickInputs};
