//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control one tick of the datapath. It performs:
//! 1. **Operation Classification:** Decodes raw opcode fields into [`AluOp`].
//! 2. **Chain Control:** Carries the `enable` and `reset` lines of the register chain.
//! 3. **Tick Inputs:** Bundles operands, operation and control for a single tick.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::IsaVariant;

/// ALU operation selected for one tick.
///
/// `Invalid` is the decode result for every encoding outside the variant's
/// operation set. It evaluates to a zero result with all flags clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AluOp {
    /// Integer addition (encoding 0).
    #[default]
    Add,

    /// Integer subtraction (encoding 1).
    Sub,

    /// Truncating multiply, low 32 bits (encoding 2).
    Mul,

    /// Unsigned divide with zero-divisor guard (encoding 3).
    Div,

    /// Shift left logical (encoding 4).
    Shl,

    /// Shift right logical (encoding 5).
    Shr,

    /// Bitwise AND, extended variant only (encoding 6).
    And,

    /// Bitwise OR, extended variant only (encoding 7).
    Or,

    /// Unrecognized encoding.
    Invalid,
}

impl AluOp {
    /// Every defined operation, in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Shl,
        Self::Shr,
        Self::And,
        Self::Or,
    ];

    /// Decodes a raw opcode field for the given datapath variant.
    ///
    /// Codes 6 and 7 are only defined for [`IsaVariant::Extended`]; every
    /// other unknown code decodes to [`AluOp::Invalid`] in both variants.
    pub const fn decode(code: u8, variant: IsaVariant) -> Self {
        match (code, variant) {
            (0, _) => Self::Add,
            (1, _) => Self::Sub,
            (2, _) => Self::Mul,
            (3, _) => Self::Div,
            (4, _) => Self::Shl,
            (5, _) => Self::Shr,
            (6, IsaVariant::Extended) => Self::And,
            (7, IsaVariant::Extended) => Self::Or,
            _ => Self::Invalid,
        }
    }

    /// Returns the raw encoding, or `None` for [`AluOp::Invalid`].
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::Add => Some(0),
            Self::Sub => Some(1),
            Self::Mul => Some(2),
            Self::Div => Some(3),
            Self::Shl => Some(4),
            Self::Shr => Some(5),
            Self::And => Some(6),
            Self::Or => Some(7),
            Self::Invalid => None,
        }
    }

    /// Parses a lowercase or uppercase mnemonic (`add`, `SUB`, ...).
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mul" => Some(Self::Mul),
            "div" => Some(Self::Div),
            "shl" | "sll" => Some(Self::Shl),
            "shr" | "srl" => Some(Self::Shr),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns the assembler-style mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::And => "and",
            Self::Or => "or",
            Self::Invalid => "invalid",
        }
    }

    /// Returns `self` if the variant implements it, otherwise [`AluOp::Invalid`].
    pub const fn restrict(self, variant: IsaVariant) -> Self {
        match (self, variant) {
            (Self::And | Self::Or, IsaVariant::Primary) => Self::Invalid,
            (op, _) => op,
        }
    }

    /// True for the two operations that produce carry and overflow.
    pub const fn sets_arith_flags(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// Control lines of the pipeline register chain for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSignals {
    /// Advance the chain and accept this tick's operation.
    pub enable: bool,
    /// Synchronous clear; takes priority over `enable`.
    pub reset: bool,
}

impl ControlSignals {
    /// Enabled, not in reset.
    pub const RUN: Self = Self {
        enable: true,
        reset: false,
    };

    /// Disabled, not in reset (chain holds).
    pub const STALL: Self = Self {
        enable: false,
        reset: false,
    };

    /// Reset asserted. `enable` is ignored while reset is high.
    pub const RESET: Self = Self {
        enable: true,
        reset: true,
    };
}

impl Default for ControlSignals {
    fn default() -> Self {
        Self::RUN
    }
}

/// Everything the datapath samples on one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInputs {
    /// Operand A, already zero-extended to 32 bits.
    pub a: u32,
    /// Operand B, already zero-extended to 32 bits.
    pub b: u32,
    /// Decoded operation.
    pub op: AluOp,
    /// Chain control lines.
    pub ctrl: ControlSignals,
}

impl TickInputs {
    /// An enabled tick carrying `op` on `a` and `b`.
    pub const fn op(op: AluOp, a: u32, b: u32) -> Self {
        Self {
            a,
            b,
            op,
            ctrl: ControlSignals::RUN,
        }
    }

    /// A disabled tick; operands are don't-care.
    pub const fn stall() -> Self {
        Self {
            a: 0,
            b: 0,
            op: AluOp::Add,
            ctrl: ControlSignals::STALL,
        }
    }

    /// A reset tick; operands are don't-care.
    pub const fn reset() -> Self {
        Self {
            a: 0,
            b: 0,
            op: AluOp::Add,
            ctrl: ControlSignals::RESET,
        }
    }

    /// Replaces the control lines.
    #[must_use]
    pub const fn with_ctrl(mut self, ctrl: ControlSignals) -> Self {
        self.ctrl = ctrl;
        self
    }
}
