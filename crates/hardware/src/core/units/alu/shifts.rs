//! ALU shift operations.
//!
//! Implements shift-left logical (SHL) and shift-right logical (SHR). Both
//! are logical: SHR fills with zeros, never with the sign bit.
//!
//! Shift amounts are masked to 5 bits (0-31), so the amount wraps modulo 32.

use super::ComputeResult;
use crate::common::constants::SHAMT_MASK;
use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value with carry/overflow clear. Returns
/// [`ComputeResult::ZERO`] for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> ComputeResult {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Shl => ComputeResult::plain(a << shamt),
        AluOp::Shr => ComputeResult::plain(a >> shamt),
        _ => ComputeResult::ZERO,
    }
}
