//! Byte-serial operand loader.
//!
//! Extended-variant front end that assembles full 32-bit operands one byte
//! per tick and then fires a single core tick. `uio_in` layout:
//!
//! | Bits    | Field                                   |
//! |---------|-----------------------------------------|
//! | `[1:0]` | byte lane (0 = least significant)       |
//! | `[2]`   | operand select (0 = A, 1 = B)           |
//! | `[5:3]` | opcode                                  |
//! | `[6]`   | load strobe: write `ui_in` to the lane  |
//! | `[7]`   | execute strobe: tick the core           |
//!
//! Ticks without the execute strobe drive the core with `enable` low, so the
//! pipeline holds while operands are being loaded. A load and an execute on
//! the same tick see the freshly loaded byte.

use crate::common::constants::{
    BYTE_LANES, SERIAL_EXECUTE_BIT, SERIAL_LANE_MASK, SERIAL_LOAD_BIT, SERIAL_OPCODE_MASK,
    SERIAL_OPCODE_SHIFT, SERIAL_OPERAND_SELECT_BIT,
};
use crate::common::error::{Result, SimError};
use crate::config::IsaVariant;
use crate::core::pipeline::{AluOp, ControlSignals, TickInputs};

use super::pins::PinInputs;

/// Target operand register of a byte load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Operand A.
    A,
    /// Operand B.
    B,
}

/// Operand accumulation registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerialLoader {
    a: u32,
    b: u32,
}

impl SerialLoader {
    /// Creates a loader with both operand registers cleared.
    pub const fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    /// Writes `byte` into lane `lane` (0-3) of the selected operand.
    ///
    /// # Errors
    ///
    /// [`SimError::ByteLane`] if `lane` is not in `0..=3`.
    pub fn load_byte(&mut self, operand: Operand, lane: u8, byte: u8) -> Result<()> {
        if lane >= BYTE_LANES {
            return Err(SimError::ByteLane(lane));
        }
        let shift = u32::from(lane) * 8;
        let reg = match operand {
            Operand::A => &mut self.a,
            Operand::B => &mut self.b,
        };
        *reg = (*reg & !(0xFF << shift)) | (u32::from(byte) << shift);
        Ok(())
    }

    /// Current operand registers `(a, b)`.
    pub const fn operands(&self) -> (u32, u32) {
        (self.a, self.b)
    }

    /// Clears both operand registers.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Processes one tick of pin input and returns what the core sees.
    pub fn step(&mut self, pins: &PinInputs) -> TickInputs {
        let uio = pins.uio_in;
        let reset = !pins.rst_n;

        if reset {
            self.reset();
        } else if bit(uio, SERIAL_LOAD_BIT) {
            let operand = if bit(uio, SERIAL_OPERAND_SELECT_BIT) {
                Operand::B
            } else {
                Operand::A
            };
            let lane = uio & SERIAL_LANE_MASK;
            // The lane mask keeps `lane` in 0..=3.
            if let Err(e) = self.load_byte(operand, lane, pins.ui_in) {
                tracing::warn!(%e, "serial load dropped");
            }
        }

        let code = (uio >> SERIAL_OPCODE_SHIFT) & SERIAL_OPCODE_MASK;
        TickInputs {
            a: self.a,
            b: self.b,
            op: AluOp::decode(code, IsaVariant::Extended),
            ctrl: ControlSignals {
                enable: pins.ena && bit(uio, SERIAL_EXECUTE_BIT),
                reset,
            },
        }
    }

    /// Builds the pin sequence that loads `a` and `b` byte by byte and then
    /// executes `op`. Loads take eight ticks; the final tick carries the
    /// execute strobe. Every 3-bit code is defined in the extended variant,
    /// so [`AluOp::Invalid`] has no encoding and is sent as ADD.
    pub fn program(op: AluOp, a: u32, b: u32) -> Vec<PinInputs> {
        let code = op.code().unwrap_or(0);
        let opcode_bits = (code & SERIAL_OPCODE_MASK) << SERIAL_OPCODE_SHIFT;
        let mut seq = Vec::with_capacity(usize::from(BYTE_LANES) * 2 + 1);

        for (select, value) in [(0u8, a), (1u8, b)] {
            for lane in 0..BYTE_LANES {
                let byte = (value >> (u32::from(lane) * 8)) as u8;
                seq.push(PinInputs {
                    ui_in: byte,
                    uio_in: lane
                        | (select << SERIAL_OPERAND_SELECT_BIT)
                        | opcode_bits
                        | (1 << SERIAL_LOAD_BIT),
                    ..PinInputs::default()
                });
            }
        }

        seq.push(PinInputs {
            ui_in: 0,
            uio_in: opcode_bits | (1 << SERIAL_EXECUTE_BIT),
            ..PinInputs::default()
        });
        seq
    }
}

/// Tests bit `n` of `byte`.
#[inline]
const fn bit(byte: u8, n: u8) -> bool {
    byte & (1 << n) != 0
}
