//! Pipeline latch structures.
//!
//! This module defines the entry type held by each stage of the register
//! chain. A slot carries one result together with the flags derived from
//! that same result; the two are written together and never separately.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::units::alu::{ComputeResult, FlagBundle};

/// One stage of the pipeline register chain.
///
/// The default value is the reset state: zero result, all flags clear.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineSlot {
    /// 32-bit result value.
    pub value: u32,
    /// Flags derived from `value` and its carry/overflow.
    pub flags: FlagBundle,
}

impl PipelineSlot {
    /// Reset contents of a slot.
    pub const ZERO: Self = Self {
        value: 0,
        flags: FlagBundle::CLEAR,
    };

    /// Latches a compute result together with its derived flags.
    pub const fn from_result(result: &ComputeResult) -> Self {
        Self {
            value: result.value,
            flags: FlagBundle::from_result(result),
        }
    }

    /// Low byte of the result, as driven onto an 8-bit output bus.
    pub const fn low_byte(&self) -> u8 {
        self.value as u8
    }
}

impl From<ComputeResult> for PipelineSlot {
    fn from(result: ComputeResult) -> Self {
        Self::from_result(&result)
    }
}

impl fmt::Display for PipelineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x} [{}]", self.value, self.flags)
    }
}
