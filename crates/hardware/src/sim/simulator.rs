//! Simulator: owns the datapath, the pin adapter, and the statistics side by side.
//!
//! The simulator numbers clock edges. After `k` calls to [`Simulator::step`]
//! the tick count is `k` and [`Simulator::output`] is the retiring slot as it
//! stands after edge `k`. An operation accepted on the edge that takes the
//! count from `t` to `t + 1` is therefore visible at tick `t + PIPELINE_DEPTH`
//! when every edge in between is enabled.

use serde::Serialize;

use crate::config::Config;
use crate::core::Datapath;
use crate::core::pipeline::{PipelineSlot, TickInputs};
use crate::io::{PinAdapter, PinInputs, PinOutputs};
use crate::stats::SimStats;

use super::loader::Script;

/// Observable outcome of one clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TickRecord {
    /// Tick count after this edge (first edge is tick 1).
    pub tick: u64,
    /// Inputs sampled on this edge, with the operation as the datapath saw it.
    pub inputs: TickInputs,
    /// Retiring slot after this edge.
    pub retired: PipelineSlot,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    datapath: Datapath,
    pins: PinAdapter,
    stats: SimStats,
    tick: u64,
    trace: Option<Vec<TickRecord>>,
}

impl Simulator {
    /// Creates a simulator with a zeroed pipeline.
    pub fn new(config: &Config) -> Self {
        tracing::debug!(
            variant = ?config.alu.variant,
            policy = ?config.alu.overflow_policy,
            "simulator created"
        );
        Self {
            config: config.clone(),
            datapath: Datapath::new(config.alu),
            pins: PinAdapter::new(config.bus, config.alu.variant),
            stats: SimStats::default(),
            tick: 0,
            trace: config.general.trace_ticks.then(Vec::new),
        }
    }

    /// Applies one clock edge and returns what it produced.
    pub fn step(&mut self, inputs: &TickInputs) -> TickRecord {
        let outcome = self.datapath.tick(inputs);
        self.stats.record(&outcome.applied, &outcome.result);
        self.tick += 1;

        let record = TickRecord {
            tick: self.tick,
            inputs: outcome.applied,
            retired: self.datapath.output(),
        };
        if let Some(trace) = self.trace.as_mut() {
            trace.push(record);
        }
        record
    }

    /// Applies one clock edge from raw pin values and returns the output pins.
    pub fn step_pins(&mut self, pins: &PinInputs) -> PinOutputs {
        let inputs = self.pins.decode(pins);
        let record = self.step(&inputs);
        self.pins.drive(&record.retired)
    }

    /// Applies a sequence of ticks.
    pub fn run_ticks(&mut self, ticks: &[TickInputs]) -> Vec<TickRecord> {
        ticks.iter().map(|inputs| self.step(inputs)).collect()
    }

    /// Runs every tick of a stimulus script.
    ///
    /// Mnemonics and operand widths are resolved against this simulator's
    /// configuration, not the script's `config` block.
    ///
    /// # Errors
    ///
    /// Any expansion error of [`Script::expand_for`]; no tick is applied in that case.
    pub fn run(&mut self, script: &Script) -> crate::common::error::Result<Vec<TickRecord>> {
        let ticks = script.expand_for(&self.config)?;
        Ok(self.run_ticks(&ticks))
    }

    /// The slot currently driving the output.
    pub const fn output(&self) -> PipelineSlot {
        self.datapath.output()
    }

    /// Output pins for the current retiring slot.
    pub const fn output_pins(&self) -> PinOutputs {
        self.pins.drive(&self.datapath.output())
    }

    /// Clears the pipeline and the tick count. Statistics are kept.
    pub fn reset(&mut self) {
        self.datapath.reset();
        self.tick = 0;
    }

    /// Number of edges applied since creation or the last [`Simulator::reset`].
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// The configuration this simulator was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The datapath.
    pub const fn datapath(&self) -> &Datapath {
        &self.datapath
    }

    /// The pin adapter for this configuration.
    pub const fn pins(&self) -> &PinAdapter {
        &self.pins
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Recorded ticks, if `general.trace_ticks` was set.
    pub fn records(&self) -> Option<&[TickRecord]> {
        self.trace.as_deref()
    }
}
