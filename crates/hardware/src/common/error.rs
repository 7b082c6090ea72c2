//! Host-side error definitions.
//!
//! The datapath itself is total and has no error path. Errors only arise in
//! the adapters around it:
//! 1. **I/O:** Reading stimulus scripts from disk.
//! 2. **Parsing:** Malformed JSON scripts and configuration blocks.
//! 3. **Validation:** Unknown mnemonics and values that do not fit a bus field.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the stimulus loader, pin adapter and CLI plumbing.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON text could not be parsed into the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A stimulus entry named an operation that does not exist.
    #[error("unknown operation mnemonic {0:?}")]
    UnknownMnemonic(String),

    /// A value does not fit in the bus field it was packed into.
    #[error("{field} value {value:#x} does not fit in {bits} bits")]
    OperandOutOfRange {
        /// Bus field name (`operand_a`, `operand_b`, `opcode`).
        field: &'static str,
        /// Offending value.
        value: u32,
        /// Field width.
        bits: u32,
    },

    /// Bus field widths that do not fit the 8-bit pins.
    #[error(
        "bus layout does not fit the 8-bit pins \
         (operand_a_bits {operand_a_bits}, operand_b_bits {operand_b_bits}, opcode_bits {opcode_bits})"
    )]
    BusLayout {
        /// Operand A field width.
        operand_a_bits: u32,
        /// Operand B field width.
        operand_b_bits: u32,
        /// Opcode field width.
        opcode_bits: u32,
    },

    /// A stimulus script unrolls to more ticks than a run accepts.
    #[error("script expands to {ticks} ticks (limit {limit})")]
    ScriptTooLong {
        /// Ticks the script asked for.
        ticks: u64,
        /// Largest accepted tick count.
        limit: u64,
    },

    /// A byte lane index outside 0..=3 was selected.
    #[error("byte lane {0} out of range (0-3)")]
    ByteLane(u8),
}

/// Convenience alias for adapter results.
pub type Result<T> = std::result::Result<T, SimError>;
