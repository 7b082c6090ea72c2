//! Status flag bundle.
//!
//! The four flags travel with their result through the pipeline and are
//! never updated on their own:
//!
//! | Bit | Flag | Meaning                               |
//! |-----|------|---------------------------------------|
//! |  3  | V    | Signed overflow (ADD, SUB)            |
//! |  2  | C    | Carry out (ADD) / borrow (SUB)        |
//! |  1  | N    | Result bit 31                         |
//! |  0  | Z    | Result is zero                        |
//!
//! The bit layout is the one driven onto the status port by the pin adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ComputeResult;
use crate::common::constants::{
    FLAG_CARRY_BIT, FLAG_MASK, FLAG_NEGATIVE_BIT, FLAG_OVERFLOW_BIT, FLAG_ZERO_BIT, SIGN_BIT,
};

/// Zero/negative/carry/overflow flags derived from one result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagBundle {
    /// Result equals zero.
    pub zero: bool,
    /// Result bit 31 is set.
    pub negative: bool,
    /// Carry/borrow from ADD/SUB.
    pub carry: bool,
    /// Signed overflow from ADD/SUB.
    pub overflow: bool,
}

impl FlagBundle {
    /// All flags clear. This is the reset state of a pipeline slot.
    pub const CLEAR: Self = Self {
        zero: false,
        negative: false,
        carry: false,
        overflow: false,
    };

    /// Derives the flags for a compute result.
    ///
    /// Sentinel results (division by zero, invalid opcode) have every flag
    /// clear even though their value is zero.
    pub const fn from_result(result: &ComputeResult) -> Self {
        if result.sentinel {
            return Self::CLEAR;
        }
        Self {
            zero: result.value == 0,
            negative: (result.value & SIGN_BIT) != 0,
            carry: result.carry,
            overflow: result.overflow,
        }
    }

    /// Packs the flags into a nibble (`V C N Z`, bit 3 down to bit 0).
    pub const fn bits(self) -> u8 {
        ((self.zero as u8) << FLAG_ZERO_BIT)
            | ((self.negative as u8) << FLAG_NEGATIVE_BIT)
            | ((self.carry as u8) << FLAG_CARRY_BIT)
            | ((self.overflow as u8) << FLAG_OVERFLOW_BIT)
    }

    /// Unpacks a nibble produced by [`FlagBundle::bits`]. Upper bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        let bits = bits & FLAG_MASK;
        Self {
            zero: bits & (1 << FLAG_ZERO_BIT) != 0,
            negative: bits & (1 << FLAG_NEGATIVE_BIT) != 0,
            carry: bits & (1 << FLAG_CARRY_BIT) != 0,
            overflow: bits & (1 << FLAG_OVERFLOW_BIT) != 0,
        }
    }

    /// Returns true if no flag is set.
    pub const fn is_clear(self) -> bool {
        self.bits() == 0
    }
}

impl fmt::Display for FlagBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |set: bool, ch: char| if set { ch } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            c(self.overflow, 'V'),
            c(self.carry, 'C'),
            c(self.negative, 'N'),
            c(self.zero, 'Z')
        )
    }
}
