//! ALU bitwise operations.
//!
//! AND and OR on full 32-bit operands. Only decoded in the extended variant;
//! carry and overflow are always false.

use super::ComputeResult;
use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise operation.
///
/// Returns [`ComputeResult::ZERO`] for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> ComputeResult {
    match op {
        AluOp::And => ComputeResult::plain(a & b),
        AluOp::Or => ComputeResult::plain(a | b),
        _ => ComputeResult::ZERO,
    }
}
