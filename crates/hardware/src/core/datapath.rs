//! Datapath tick sequencing.
//!
//! One call to [`Datapath::tick`] is one clock edge:
//! 1. **Decode:** Restrict the requested operation to the configured variant.
//! 2. **Compute:** Evaluate the ALU on this tick's operands.
//! 3. **Advance:** Offer the result to the register chain under reset/enable control.
//!
//! Compute always happens before the chain advances, and the chain only ever
//! sees the result computed in the same tick.

use tracing::{debug, trace};

use crate::config::{AluConfig, IsaVariant, OverflowPolicy};
use crate::core::pipeline::{AluOp, PipelineSlot, RegisterChain, TickInputs};
use crate::core::units::alu::{Alu, ComputeResult};

/// What one clock edge applied and computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// The tick's inputs with the operation restricted to the variant.
    pub applied: TickInputs,
    /// Result computed this tick.
    pub result: ComputeResult,
}

/// Compute unit plus register chain.
#[derive(Clone, Debug, Default)]
pub struct Datapath {
    chain: RegisterChain,
    variant: IsaVariant,
    policy: OverflowPolicy,
}

impl Datapath {
    /// Creates a datapath with a zeroed pipeline.
    pub const fn new(config: AluConfig) -> Self {
        Self {
            chain: RegisterChain::new(),
            variant: config.variant,
            policy: config.overflow_policy,
        }
    }

    /// Decodes a raw opcode field for this datapath's variant.
    pub const fn decode(&self, code: u8) -> AluOp {
        AluOp::decode(code, self.variant)
    }

    /// Evaluates one operation combinationally, without touching the pipeline.
    pub fn evaluate(&self, op: AluOp, a: u32, b: u32) -> ComputeResult {
        Alu::evaluate_with_policy(op.restrict(self.variant), a, b, self.policy)
    }

    /// Applies one clock edge.
    ///
    /// Returns the inputs as decoded and the result computed this tick. The
    /// result is latched into slot 0 only when the tick is enabled and not in
    /// reset.
    pub fn tick(&mut self, inputs: &TickInputs) -> TickOutcome {
        let op = inputs.op.restrict(self.variant);
        let result = Alu::evaluate_with_policy(op, inputs.a, inputs.b, self.policy);
        let candidate = PipelineSlot::from_result(&result);

        if inputs.ctrl.reset {
            debug!(enable = inputs.ctrl.enable, "reset asserted");
        } else if inputs.ctrl.enable {
            trace!(
                %op,
                a = inputs.a,
                b = inputs.b,
                value = result.value,
                flags = %candidate.flags,
                next_out = self.chain.stage(1).map_or(0, |s| s.value),
                "accept"
            );
        } else {
            debug!("stall");
        }

        self.chain.tick(candidate, inputs.ctrl);
        TickOutcome {
            applied: TickInputs { op, ..*inputs },
            result,
        }
    }

    /// Clears the pipeline immediately, outside of the tick sequence.
    pub fn reset(&mut self) {
        self.chain.clear();
    }

    /// The slot currently driving the output.
    pub const fn output(&self) -> PipelineSlot {
        self.chain.output()
    }

    /// The register chain.
    pub const fn chain(&self) -> &RegisterChain {
        &self.chain
    }

    /// The configured operation set.
    pub const fn variant(&self) -> IsaVariant {
        self.variant
    }

    /// The configured overflow policy.
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}
