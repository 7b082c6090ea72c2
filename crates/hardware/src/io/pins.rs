//! Bit-packing pin adapter.
//!
//! Maps the 8-bit external buses onto the datapath each tick:
//!
//! | Pin            | Bits                               | Core signal          |
//! |----------------|------------------------------------|----------------------|
//! | `ui_in`        | `[7:0]`                            | operand A            |
//! | `uio_in`       | `[opcode_bits-1:0]`                | opcode               |
//! | `uio_in`       | `[opcode_bits+b_bits-1:opcode_bits]` | operand B          |
//! | `ena`          |                                    | enable               |
//! | `rst_n`        | active low                         | reset                |
//!
//! With the default bus widths operand B sits in `uio_in[7:3]` and the opcode
//! in `uio_in[2:0]`. All fields are zero-extended, never sign-extended.
//!
//! On the way out, `uo_out` carries the low byte of the retiring result and a
//! separate 4-bit status port carries the flag nibble.

use serde::{Deserialize, Serialize};

use crate::common::error::Result;
use crate::config::{BusConfig, IsaVariant};
use crate::core::pipeline::{AluOp, ControlSignals, PipelineSlot, TickInputs};

/// Input pins sampled on one clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinInputs {
    /// Dedicated input bus.
    pub ui_in: u8,
    /// Bidirectional bus, used as input.
    pub uio_in: u8,
    /// Design enable.
    pub ena: bool,
    /// Active-low reset.
    pub rst_n: bool,
}

impl Default for PinInputs {
    /// Enabled, out of reset, all buses low.
    fn default() -> Self {
        Self {
            ui_in: 0,
            uio_in: 0,
            ena: true,
            rst_n: true,
        }
    }
}

impl PinInputs {
    /// Returns a copy with `rst_n` driven low.
    #[must_use]
    pub const fn in_reset(mut self) -> Self {
        self.rst_n = false;
        self
    }
}

/// Output pins after a clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinOutputs {
    /// Low byte of the retiring result.
    pub uo_out: u8,
    /// Flag nibble (`V C N Z`), upper bits zero.
    pub status: u8,
}

/// Packs and unpacks the pin buses for a given bus layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinAdapter {
    bus: BusConfig,
    variant: IsaVariant,
}

impl PinAdapter {
    /// Creates an adapter for a bus layout and operation set.
    pub const fn new(bus: BusConfig, variant: IsaVariant) -> Self {
        Self { bus, variant }
    }

    /// Bit position of operand B within `uio_in`.
    const fn operand_b_shift(&self) -> u32 {
        self.bus.opcode_bits
    }

    /// Unpacks the input pins into core tick inputs.
    ///
    /// Fields that lie past the top of a bus read as zero.
    pub fn decode(&self, pins: &PinInputs) -> TickInputs {
        let uio = pins.uio_in as u32;
        let code = uio & BusConfig::field_max(self.bus.opcode_bits);
        let b = uio.checked_shr(self.operand_b_shift()).unwrap_or(0)
            & BusConfig::field_max(self.bus.operand_b_bits);
        let a = pins.ui_in as u32 & BusConfig::field_max(self.bus.operand_a_bits);

        TickInputs {
            a,
            b,
            op: AluOp::decode(code as u8, self.variant),
            ctrl: ControlSignals {
                enable: pins.ena,
                reset: !pins.rst_n,
            },
        }
    }

    /// Drives the output pins from the retiring slot.
    pub const fn drive(&self, slot: &PipelineSlot) -> PinOutputs {
        PinOutputs {
            uo_out: slot.low_byte(),
            status: slot.flags.bits(),
        }
    }

    /// Packs operands and a raw opcode into input pins (enabled, out of reset).
    ///
    /// # Errors
    ///
    /// [`SimError::OperandOutOfRange`](crate::common::error::SimError::OperandOutOfRange)
    /// if a value does not fit its field, or
    /// [`SimError::BusLayout`](crate::common::error::SimError::BusLayout) if the
    /// layout itself overcommits a bus.
    pub fn pack(&self, a: u32, b: u32, code: u32) -> Result<PinInputs> {
        self.bus.validate()?;
        BusConfig::check_field("operand_a", a, self.bus.operand_a_bits)?;
        BusConfig::check_field("operand_b", b, self.bus.operand_b_bits)?;
        BusConfig::check_field("opcode", code, self.bus.opcode_bits)?;

        Ok(PinInputs {
            ui_in: a as u8,
            uio_in: ((b << self.operand_b_shift()) | code) as u8,
            ..PinInputs::default()
        })
    }

    /// Packs a decoded operation. [`AluOp::Invalid`] has no encoding and is
    /// packed as the first code outside the variant's operation set.
    ///
    /// # Errors
    ///
    /// [`SimError::OperandOutOfRange`](crate::common::error::SimError::OperandOutOfRange)
    /// if a value does not fit its field. In
    /// the extended variant every 3-bit code is defined, so packing
    /// [`AluOp::Invalid`] fails on the default bus layout.
    pub fn pack_op(&self, op: AluOp, a: u32, b: u32) -> Result<PinInputs> {
        let code = match (op.restrict(self.variant).code(), self.variant) {
            (Some(code), _) => code as u32,
            (None, IsaVariant::Primary) => 6,
            (None, IsaVariant::Extended) => 8,
        };
        self.pack(a, b, code)
    }
}
