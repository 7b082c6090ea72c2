//! Stimulus Script Loader.
//!
//! This module turns JSON stimulus scripts into per-tick datapath inputs. It performs:
//! 1. **Loading:** Reads the script file from disk.
//! 2. **Parsing:** Deserializes the optional `config` block and the `ticks` list.
//! 3. **Expansion:** Resolves mnemonics, checks operand widths, and unrolls `repeat`.
//!
//! A script looks like:
//!
//! ```json
//! {
//!   "config": { "alu": { "variant": "Primary" } },
//!   "ticks": [
//!     { "reset": true, "repeat": 2 },
//!     { "op": "add", "a": 20, "b": 30 },
//!     { "enable": false, "repeat": 3 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::MAX_SCRIPT_TICKS;
use crate::common::error::{Result, SimError};
use crate::config::{BusConfig, Config, IsaVariant};
use crate::core::pipeline::{AluOp, ControlSignals, TickInputs};

/// A parsed stimulus script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Configuration the script expects. Absent blocks use defaults.
    #[serde(default)]
    pub config: Config,
    /// Tick entries in order.
    #[serde(default)]
    pub ticks: Vec<StimulusEntry>,
}

/// One entry of the `ticks` list, possibly covering several ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct StimulusEntry {
    /// Operation mnemonic, case-insensitive. Ignored when `code` is set.
    #[serde(default)]
    pub op: Option<String>,
    /// Raw opcode field, decoded for the configured variant.
    #[serde(default)]
    pub code: Option<u8>,
    /// Operand A.
    #[serde(default)]
    pub a: u32,
    /// Operand B.
    #[serde(default)]
    pub b: u32,
    /// Enable line.
    #[serde(default = "StimulusEntry::default_enable")]
    pub enable: bool,
    /// Reset line.
    #[serde(default)]
    pub reset: bool,
    /// Number of consecutive ticks this entry is held for.
    #[serde(default = "StimulusEntry::default_repeat")]
    pub repeat: u32,
}

impl StimulusEntry {
    const fn default_enable() -> bool {
        true
    }

    const fn default_repeat() -> u32 {
        1
    }

    /// Resolves the operation for `variant`.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownMnemonic`] if `op` names no operation.
    pub fn resolve_op(&self, variant: IsaVariant) -> Result<AluOp> {
        if let Some(code) = self.code {
            return Ok(AluOp::decode(code, variant));
        }
        match self.op.as_deref() {
            None => Ok(AluOp::Add),
            Some(name) => AluOp::from_mnemonic(name)
                .map(|op| op.restrict(variant))
                .ok_or_else(|| SimError::UnknownMnemonic(name.to_string())),
        }
    }

    /// The tick inputs this entry drives.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownMnemonic`] for an unknown `op`, and
    /// [`SimError::OperandOutOfRange`] if the primary variant is configured
    /// and an operand is wider than its bus field.
    pub fn to_inputs(&self, config: &Config) -> Result<TickInputs> {
        let op = self.resolve_op(config.alu.variant)?;

        if config.alu.variant == IsaVariant::Primary {
            BusConfig::check_field("operand_a", self.a, config.bus.operand_a_bits)?;
            BusConfig::check_field("operand_b", self.b, config.bus.operand_b_bits)?;
        }

        Ok(TickInputs {
            a: self.a,
            b: self.b,
            op,
            ctrl: ControlSignals {
                enable: self.enable,
                reset: self.reset,
            },
        })
    }
}

impl Script {
    /// Unrolls the script into one [`TickInputs`] per tick, resolved against
    /// the script's own `config` block.
    ///
    /// # Errors
    ///
    /// As [`Script::expand_for`].
    pub fn expand(&self) -> Result<Vec<TickInputs>> {
        self.expand_for(&self.config)
    }

    /// Unrolls the script against `config` instead of its own block.
    ///
    /// # Errors
    ///
    /// [`SimError::ScriptTooLong`] if the repeats add up to more than
    /// [`MAX_SCRIPT_TICKS`], otherwise the first error of
    /// [`StimulusEntry::to_inputs`] over all entries.
    pub fn expand_for(&self, config: &Config) -> Result<Vec<TickInputs>> {
        let total: u64 = self.ticks.iter().map(|e| u64::from(e.repeat)).sum();
        if total > MAX_SCRIPT_TICKS {
            return Err(SimError::ScriptTooLong {
                ticks: total,
                limit: MAX_SCRIPT_TICKS,
            });
        }

        let mut ticks = Vec::with_capacity(total as usize);
        for entry in &self.ticks {
            let inputs = entry.to_inputs(config)?;
            ticks.extend(std::iter::repeat_n(inputs, entry.repeat as usize));
        }
        Ok(ticks)
    }
}

/// Parses a script from JSON text.
///
/// # Errors
///
/// [`SimError::Json`] on malformed JSON or mistyped fields, and
/// [`SimError::BusLayout`] if the `config` block's bus widths do not fit the pins.
pub fn parse_script(json: &str) -> Result<Script> {
    let script: Script = serde_json::from_str(json)?;
    script.config.validate()?;
    Ok(script)
}

/// Reads and parses a script file.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read, otherwise as [`parse_script`].
pub fn load_script(path: impl AsRef<Path>) -> Result<Script> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let script = parse_script(&text)?;
    tracing::debug!(path = %path.display(), entries = script.ticks.len(), "loaded stimulus script");
    Ok(script)
}
