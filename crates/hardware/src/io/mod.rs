//! External bus adapters.
//!
//! Thin sequencing logic between the 8-bit pins and the 32-bit datapath:
//! 1. **Pins:** Bit-packing of operand/opcode fields and output readout.
//! 2. **Serial:** Byte-serial loading of full-width operands (extended variant).

/// Bit-packing pin adapter.
pub mod pins;

/// Byte-serial operand loader.
pub mod serial;

pub use pins::{PinAdapter, PinInputs, PinOutputs};
pub use serial::{Operand, SerialLoader};
