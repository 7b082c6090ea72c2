//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, and division in 32-bit
//! unsigned space with wraparound. ADD and SUB additionally report carry
//! (borrow for SUB) and signed overflow.
//!
//! MUL keeps the low 32 bits of the full product. Its overflow is not
//! detected: carry and overflow are always false for MUL. Operands are used
//! at full width; there is no 16-bit pre-truncation.
//!
//! DIV by zero yields the zero sentinel: value 0 with every flag clear,
//! including Z.

use super::ComputeResult;
use crate::common::constants::SIGN_BIT;
use crate::config::OverflowPolicy;
use crate::core::pipeline::signals::AluOp;

/// Signed overflow of `a + b = r`: operands agree in sign, result does not.
#[inline]
const fn add_overflows(a: u32, b: u32, r: u32) -> bool {
    ((a ^ r) & (b ^ r) & SIGN_BIT) != 0
}

/// Signed overflow of `a - b = r`: operands differ in sign and the result's
/// sign differs from `a`.
#[inline]
const fn sub_overflows(a: u32, b: u32, r: u32) -> bool {
    ((a ^ b) & (a ^ r) & SIGN_BIT) != 0
}

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`     - The ALU operation to perform (must be an arithmetic variant).
/// * `a`      - First operand.
/// * `b`      - Second operand (divisor for DIV).
/// * `policy` - Whether SUB reports overflow.
///
/// # Returns
///
/// The result with carry/overflow populated for ADD and SUB. Returns
/// [`ComputeResult::ZERO`] for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32, policy: OverflowPolicy) -> ComputeResult {
    match op {
        AluOp::Add => {
            let (value, carry) = a.overflowing_add(b);
            ComputeResult {
                value,
                carry,
                overflow: add_overflows(a, b, value),
                sentinel: false,
            }
        }
        AluOp::Sub => {
            let value = a.wrapping_sub(b);
            let overflow = match policy {
                OverflowPolicy::AddAndSub => sub_overflows(a, b, value),
                OverflowPolicy::AddOnly => false,
            };
            ComputeResult {
                value,
                carry: a < b,
                overflow,
                sentinel: false,
            }
        }
        AluOp::Mul => ComputeResult::plain(a.wrapping_mul(b)),
        AluOp::Div => {
            if b == 0 {
                ComputeResult::ZERO
            } else {
                ComputeResult::plain(a / b)
            }
        }
        _ => ComputeResult::ZERO,
    }
}
