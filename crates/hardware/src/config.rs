//! Configuration system for the datapath model.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (bus field widths, variant, flag policy).
//! 2. **Structures:** Hierarchical config for general, ALU, and bus settings.
//! 3. **Enums:** Datapath variant and overflow flag policy.
//!
//! Configuration is supplied via JSON (a stimulus script's `config` block) or
//! use `Config::default()` for the CLI.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Width of the operand A field on the input bus (one full byte).
    pub const OPERAND_A_BITS: u32 = 8;

    /// Width of the operand B field on the bidirectional bus (`uio_in[7:3]`).
    pub const OPERAND_B_BITS: u32 = 5;

    /// Width of the opcode field on the bidirectional bus (`uio_in[2:0]`).
    pub const OPCODE_BITS: u32 = 3;
}

/// Width of each external pin bus.
const PIN_BUS_BITS: u32 = 8;

/// Datapath variant.
///
/// The primary variant implements the six arithmetic/shift operations and
/// takes narrow operands straight off the pins. The extended variant adds
/// AND/OR and loads full-width operands through the byte-serial loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IsaVariant {
    /// ADD, SUB, MUL, DIV, SHL, SHR.
    #[default]
    Primary,
    /// Primary set plus AND and OR.
    Extended,
}

/// Which operations report signed overflow.
///
/// Carry/borrow is always reported for both ADD and SUB; only the overflow
/// flag is affected by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OverflowPolicy {
    /// Overflow computed for ADD and SUB.
    #[default]
    AddAndSub,
    /// Overflow computed for ADD only; SUB never sets it.
    AddOnly,
}

impl OverflowPolicy {
    /// Parses a CLI-style name (`add-and-sub`, `add-only`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "add-and-sub" | "addandsub" => Some(Self::AddAndSub),
            "add-only" | "addonly" => Some(Self::AddOnly),
            _ => None,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use alupipe_core::config::{Config, IsaVariant, OverflowPolicy};
///
/// let json = r#"{ "alu": { "variant": "Extended", "overflow_policy": "AddOnly" } }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.alu.variant, IsaVariant::Extended);
/// assert_eq!(config.alu.overflow_policy, OverflowPolicy::AddOnly);
/// assert_eq!(config.bus.operand_a_bits, 8);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Compute unit settings.
    #[serde(default)]
    pub alu: AluConfig,
    /// Pin bus field widths.
    #[serde(default)]
    pub bus: BusConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Keep a per-tick record log in the simulator.
    #[serde(default)]
    pub trace_ticks: bool,
}

/// Compute unit settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AluConfig {
    /// Operation set.
    #[serde(default)]
    pub variant: IsaVariant,
    /// Overflow flag policy.
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

/// Field widths of the 8-bit pin bus, used to validate packed operands.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BusConfig {
    /// Operand A field width in bits.
    #[serde(default = "BusConfig::default_operand_a_bits")]
    pub operand_a_bits: u32,

    /// Operand B field width in bits.
    #[serde(default = "BusConfig::default_operand_b_bits")]
    pub operand_b_bits: u32,

    /// Opcode field width in bits.
    #[serde(default = "BusConfig::default_opcode_bits")]
    pub opcode_bits: u32,
}

impl BusConfig {
    /// Returns the default operand A field width.
    const fn default_operand_a_bits() -> u32 {
        defaults::OPERAND_A_BITS
    }

    /// Returns the default operand B field width.
    const fn default_operand_b_bits() -> u32 {
        defaults::OPERAND_B_BITS
    }

    /// Returns the default opcode field width.
    const fn default_opcode_bits() -> u32 {
        defaults::OPCODE_BITS
    }

    /// Largest value that fits in a field of `bits` bits.
    pub const fn field_max(bits: u32) -> u32 {
        if bits >= 32 { u32::MAX } else { (1 << bits) - 1 }
    }

    /// Rejects values wider than `bits`.
    ///
    /// # Errors
    ///
    /// [`SimError::OperandOutOfRange`] naming `field` if `value` does not fit.
    pub const fn check_field(field: &'static str, value: u32, bits: u32) -> Result<(), SimError> {
        if value > Self::field_max(bits) {
            return Err(SimError::OperandOutOfRange { field, value, bits });
        }
        Ok(())
    }

    /// Checks that operand A fits `ui_in` and that operand B plus the opcode
    /// fit `uio_in` together.
    ///
    /// # Errors
    ///
    /// [`SimError::BusLayout`] if either bus is overcommitted.
    pub const fn validate(&self) -> Result<(), SimError> {
        let uio_fits = match self.operand_b_bits.checked_add(self.opcode_bits) {
            Some(bits) => bits <= PIN_BUS_BITS,
            None => false,
        };
        if self.operand_a_bits > PIN_BUS_BITS || !uio_fits {
            return Err(SimError::BusLayout {
                operand_a_bits: self.operand_a_bits,
                operand_b_bits: self.operand_b_bits,
                opcode_bits: self.opcode_bits,
            });
        }
        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            operand_a_bits: defaults::OPERAND_A_BITS,
            operand_b_bits: defaults::OPERAND_B_BITS,
            opcode_bits: defaults::OPCODE_BITS,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// [`SimError::Json`] if the text is
    /// not valid JSON or a field has the wrong type, and
    /// [`SimError::BusLayout`] if the bus widths do not fit the pins.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the parts of the configuration serde cannot.
    ///
    /// # Errors
    ///
    /// [`SimError::BusLayout`] from [`BusConfig::validate`].
    pub const fn validate(&self) -> Result<(), SimError> {
        self.bus.validate()
    }
}
