//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the compute unit evaluated once per tick, before
//! the pipeline register chain advances. It is a pure, total function of
//! `(op, a, b)`: it owns no state and never fails. Division by zero and
//! unrecognized opcodes resolve to a zero result with every flag clear.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or
//! - [`shifts`]:     Shl, Shr
//!
//! Status flags are derived from the result in [`flags`].

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Status flag derivation and packing.
pub mod flags;

/// Bitwise logical operations (and, or).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use serde::Serialize;

use crate::config::OverflowPolicy;
use crate::core::pipeline::signals::AluOp;

pub use flags::FlagBundle;

/// Raw output of one compute unit evaluation.
///
/// `carry` and `overflow` are only ever set by ADD and SUB. `sentinel` marks
/// the defined default of division by zero and invalid opcodes, whose zero
/// value carries no flags at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ComputeResult {
    /// 32-bit result, modulo 2^32.
    pub value: u32,
    /// Unsigned carry out (ADD) or borrow (SUB).
    pub carry: bool,
    /// Signed two's-complement overflow.
    pub overflow: bool,
    /// Divide-by-zero or invalid-opcode default; every flag reads clear.
    pub sentinel: bool,
}

impl ComputeResult {
    /// The sentinel result for division by zero and invalid opcodes.
    pub const ZERO: Self = Self {
        value: 0,
        carry: false,
        overflow: false,
        sentinel: true,
    };

    /// A result with no carry or overflow.
    pub const fn plain(value: u32) -> Self {
        Self {
            value,
            carry: false,
            overflow: false,
            sentinel: false,
        }
    }

    /// Derives the flag bundle that accompanies this result.
    pub const fn flags(&self) -> FlagBundle {
        FlagBundle::from_result(self)
    }
}

/// Arithmetic Logic Unit for the datapath.
///
/// Stateless; every call is independent of every other call.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Evaluates one operation with the default overflow policy
    /// (overflow computed for both ADD and SUB).
    ///
    /// # Examples
    ///
    /// ```
    /// use alupipe_core::core::units::alu::Alu;
    /// use alupipe_core::core::pipeline::signals::AluOp;
    ///
    /// let r = Alu::evaluate(AluOp::Add, 20, 30);
    /// assert_eq!(r.value, 50);
    /// assert!(!r.carry && !r.overflow);
    ///
    /// // Division by zero is defined, not a fault, and sets no flags.
    /// let r = Alu::evaluate(AluOp::Div, 5, 0);
    /// assert_eq!(r.value, 0);
    /// assert!(r.flags().is_clear());
    ///
    /// // Shift amounts wrap modulo 32.
    /// assert_eq!(Alu::evaluate(AluOp::Shl, 1, 37).value, 1 << 5);
    ///
    /// // Multiply keeps only the low 32 bits and never flags overflow.
    /// let r = Alu::evaluate(AluOp::Mul, 0x1_0000, 0x1_0000);
    /// assert_eq!(r.value, 0);
    /// assert!(!r.overflow);
    /// ```
    pub fn evaluate(op: AluOp, a: u32, b: u32) -> ComputeResult {
        Self::evaluate_with_policy(op, a, b, OverflowPolicy::default())
    }

    /// Evaluates one operation under an explicit overflow policy.
    pub fn evaluate_with_policy(op: AluOp, a: u32, b: u32, policy: OverflowPolicy) -> ComputeResult {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => {
                arithmetic::execute(op, a, b, policy)
            }

            AluOp::And | AluOp::Or => logic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),

            AluOp::Invalid => ComputeResult::ZERO,
        }
    }
}
