//! Global Datapath Constants.
//!
//! This module defines constants shared across the model. It includes:
//! 1. **Word Constants:** Internal width, sign bit, and shift-amount mask.
//! 2. **Pipeline Constants:** Fixed depth of the register chain.
//! 3. **Flag Constants:** Bit positions of the packed flag nibble.
//! 4. **Serial Loader Constants:** Field positions on the bidirectional bus.

/// Internal datapath width in bits.
pub const WORD_BITS: u32 = 32;

/// Two's-complement sign bit of a 32-bit word.
pub const SIGN_BIT: u32 = 1 << (WORD_BITS - 1);

/// Mask for the meaningful bits of a shift amount (0-31).
pub const SHAMT_MASK: u32 = WORD_BITS - 1;

/// Number of slots in the pipeline register chain.
pub const PIPELINE_DEPTH: usize = 3;

/// Index of the slot that receives this tick's compute result.
pub const NEWEST_SLOT: usize = 0;

/// Index of the slot driven onto the output.
pub const RETIRING_SLOT: usize = PIPELINE_DEPTH - 1;

/// Flag nibble bit: result is zero.
pub const FLAG_ZERO_BIT: u8 = 0;

/// Flag nibble bit: result bit 31 set.
pub const FLAG_NEGATIVE_BIT: u8 = 1;

/// Flag nibble bit: unsigned carry out of ADD or borrow of SUB.
pub const FLAG_CARRY_BIT: u8 = 2;

/// Flag nibble bit: signed overflow.
pub const FLAG_OVERFLOW_BIT: u8 = 3;

/// Mask of the four defined flag bits.
pub const FLAG_MASK: u8 = 0x0F;

/// `uio_in` mask of the byte-select field (serial loader).
pub const SERIAL_LANE_MASK: u8 = 0x03;

/// `uio_in` bit selecting operand B instead of A (serial loader).
pub const SERIAL_OPERAND_SELECT_BIT: u8 = 2;

/// `uio_in` bit position of the opcode field (serial loader).
pub const SERIAL_OPCODE_SHIFT: u8 = 3;

/// `uio_in` mask of the opcode field after shifting (serial loader).
pub const SERIAL_OPCODE_MASK: u8 = 0x07;

/// `uio_in` bit strobing a byte load (serial loader).
pub const SERIAL_LOAD_BIT: u8 = 6;

/// `uio_in` bit strobing a core tick (serial loader).
pub const SERIAL_EXECUTE_BIT: u8 = 7;

/// Number of byte lanes in a 32-bit operand register.
pub const BYTE_LANES: u8 = 4;

/// Largest number of ticks a stimulus script may unroll to.
pub const MAX_SCRIPT_TICKS: u64 = 1 << 24;
