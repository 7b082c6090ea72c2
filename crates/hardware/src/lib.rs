//! Pipelined ALU datapath model.
//!
//! This crate implements a tick-accurate model of a small ALU datapath with the following:
//! 1. **Compute:** A stateless 32-bit ALU (ADD, SUB, MUL, DIV, SHL, SHR, AND, OR) with Z/N/C/V flags.
//! 2. **Pipeline:** A three-slot register chain with synchronous reset and enable-gated advance.
//! 3. **I/O:** Bit-packing pin adapter and a byte-serial operand loader for 8-bit buses.
//! 4. **Simulation:** Stimulus scripts, a tick-level simulator, configuration, and statistics.

/// Common constants and error types.
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Datapath core (compute unit, register chain, tick sequencing).
pub mod core;
/// Pin adapter and byte-serial loader.
pub mod io;
/// Simulator and stimulus script loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Compute unit plus register chain; advance with `Datapath::tick`.
pub use crate::core::Datapath;
/// Operation selected for one tick.
pub use crate::core::pipeline::AluOp;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
