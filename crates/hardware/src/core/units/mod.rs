//! Execution units.
//!
//! The datapath has a single functional unit: the combinational ALU that
//! produces one result and flag bundle per tick.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
