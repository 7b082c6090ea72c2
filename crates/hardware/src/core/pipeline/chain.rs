//! Pipeline register chain.
//!
//! A fixed-depth shift register of [`PipelineSlot`]s. Slot 0 receives the
//! compute result of the current tick, slot `PIPELINE_DEPTH - 1` drives the
//! output. Per tick, in priority order:
//!
//! 1. **Reset:** every slot is cleared, regardless of `enable`.
//! 2. **Enable:** every slot shifts one stage older and slot 0 latches the candidate.
//! 3. **Hold:** nothing changes.
//!
//! The next state is built in full before it replaces the current one, so no
//! caller can observe a mix of pre- and post-tick slots.

use tracing::debug;

use super::latches::PipelineSlot;
use super::signals::ControlSignals;
use crate::common::constants::{NEWEST_SLOT, PIPELINE_DEPTH, RETIRING_SLOT};

/// The register chain. Owns all slot storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterChain {
    slots: [PipelineSlot; PIPELINE_DEPTH],
}

impl RegisterChain {
    /// Creates a chain with every slot zeroed.
    pub const fn new() -> Self {
        Self {
            slots: [PipelineSlot::ZERO; PIPELINE_DEPTH],
        }
    }

    /// Applies one clock edge.
    ///
    /// `candidate` is this tick's compute result; it is only latched when
    /// `ctrl.enable` is set and `ctrl.reset` is not.
    pub fn tick(&mut self, candidate: PipelineSlot, ctrl: ControlSignals) {
        self.slots = self.next_state(candidate, ctrl);
    }

    /// Computes the state after one clock edge without applying it.
    pub fn next_state(
        &self,
        candidate: PipelineSlot,
        ctrl: ControlSignals,
    ) -> [PipelineSlot; PIPELINE_DEPTH] {
        if ctrl.reset {
            debug!("pipeline reset");
            return [PipelineSlot::ZERO; PIPELINE_DEPTH];
        }
        if !ctrl.enable {
            return self.slots;
        }

        let mut next = [PipelineSlot::ZERO; PIPELINE_DEPTH];
        next[NEWEST_SLOT + 1..].copy_from_slice(&self.slots[..RETIRING_SLOT]);
        next[NEWEST_SLOT] = candidate;
        next
    }

    /// Clears every slot immediately.
    pub fn clear(&mut self) {
        self.slots = [PipelineSlot::ZERO; PIPELINE_DEPTH];
    }

    /// The slot currently driving the output.
    pub const fn output(&self) -> PipelineSlot {
        self.slots[RETIRING_SLOT]
    }

    /// All slots, newest first.
    pub const fn slots(&self) -> &[PipelineSlot; PIPELINE_DEPTH] {
        &self.slots
    }

    /// Returns the slot at `stage` (0 = newest), or `None` past the end.
    pub fn stage(&self, stage: usize) -> Option<PipelineSlot> {
        self.slots.get(stage).copied()
    }

    /// Pipeline depth (fixed latency in enabled ticks).
    pub const fn depth(&self) -> usize {
        PIPELINE_DEPTH
    }
}
