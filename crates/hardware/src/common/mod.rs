//! Common utilities and types used throughout the datapath model.
//!
//! This module provides building blocks shared by the core and its adapters:
//! 1. **Constants:** Word width, pipeline depth, flag and serial-bus bit positions.
//! 2. **Error Handling:** Host-side error type for loaders and adapters.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for the host-side adapters.
pub mod error;

pub use constants::{PIPELINE_DEPTH, WORD_BITS};
pub use error::SimError;
