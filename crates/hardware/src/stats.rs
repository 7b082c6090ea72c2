//! Simulation statistics collection and reporting.
//!
//! This module tracks activity counters for the datapath simulator. It provides:
//! 1. **Ticks:** Total edges applied, split into accepted, stalled, and reset ticks.
//! 2. **Operation mix:** Accepted operations by kind, including invalid encodings.
//! 3. **Events:** Divide-by-zero guards taken and ADD/SUB carry and overflow results.

use std::time::Instant;

use crate::core::pipeline::{AluOp, TickInputs};
use crate::core::units::alu::ComputeResult;

/// Simulation statistics structure tracking all activity counters.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total clock edges applied.
    pub ticks: u64,
    /// Ticks that latched a new result (enabled, not in reset).
    pub ops_accepted: u64,
    /// Ticks with enable low and reset low (chain held).
    pub stall_ticks: u64,
    /// Ticks with reset asserted.
    pub reset_ticks: u64,

    /// Accepted ADD operations.
    pub op_add: u64,
    /// Accepted SUB operations.
    pub op_sub: u64,
    /// Accepted MUL operations.
    pub op_mul: u64,
    /// Accepted DIV operations.
    pub op_div: u64,
    /// Accepted SHL operations.
    pub op_shl: u64,
    /// Accepted SHR operations.
    pub op_shr: u64,
    /// Accepted AND operations.
    pub op_and: u64,
    /// Accepted OR operations.
    pub op_or: u64,
    /// Accepted ticks carrying an undefined encoding.
    pub op_invalid: u64,

    /// Accepted DIV operations with a zero divisor.
    pub div_by_zero: u64,
    /// Accepted ADD/SUB results with carry or borrow set.
    pub carry_events: u64,
    /// Accepted ADD/SUB results with signed overflow set.
    pub overflow_events: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            ops_accepted: 0,
            stall_ticks: 0,
            reset_ticks: 0,
            op_add: 0,
            op_sub: 0,
            op_mul: 0,
            op_div: 0,
            op_shl: 0,
            op_shr: 0,
            op_and: 0,
            op_or: 0,
            op_invalid: 0,
            div_by_zero: 0,
            carry_events: 0,
            overflow_events: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"op_mix"`, `"events"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "op_mix", "events"];

impl SimStats {
    /// Records one tick.
    ///
    /// `inputs.op` must already be restricted to the datapath variant, and
    /// `result` is the value the compute unit produced for it this tick.
    pub fn record(&mut self, inputs: &TickInputs, result: &ComputeResult) {
        self.ticks += 1;

        if inputs.ctrl.reset {
            self.reset_ticks += 1;
            return;
        }
        if !inputs.ctrl.enable {
            self.stall_ticks += 1;
            return;
        }

        self.ops_accepted += 1;
        *self.op_counter(inputs.op) += 1;

        if inputs.op == AluOp::Div && inputs.b == 0 {
            self.div_by_zero += 1;
        }
        if result.carry {
            self.carry_events += 1;
        }
        if result.overflow {
            self.overflow_events += 1;
        }
    }

    /// Accepted count for one operation kind.
    pub const fn op_count(&self, op: AluOp) -> u64 {
        match op {
            AluOp::Add => self.op_add,
            AluOp::Sub => self.op_sub,
            AluOp::Mul => self.op_mul,
            AluOp::Div => self.op_div,
            AluOp::Shl => self.op_shl,
            AluOp::Shr => self.op_shr,
            AluOp::And => self.op_and,
            AluOp::Or => self.op_or,
            AluOp::Invalid => self.op_invalid,
        }
    }

    fn op_counter(&mut self, op: AluOp) -> &mut u64 {
        match op {
            AluOp::Add => &mut self.op_add,
            AluOp::Sub => &mut self.op_sub,
            AluOp::Mul => &mut self.op_mul,
            AluOp::Div => &mut self.op_div,
            AluOp::Shl => &mut self.op_shl,
            AluOp::Shr => &mut self.op_shr,
            AluOp::And => &mut self.op_and,
            AluOp::Or => &mut self.op_or,
            AluOp::Invalid => &mut self.op_invalid,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"op_mix"`,
    /// or `"events"`. Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ticks = self.ticks.max(1) as f64;
        let accepted = self.ops_accepted.max(1) as f64;

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.ticks as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("ALU DATAPATH SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_ticks                {}", self.ticks);
            println!("sim_freq                 {khz:.2} kHz");
            println!(
                "ticks.accepted           {} ({:.2}%)",
                self.ops_accepted,
                (self.ops_accepted as f64 / ticks) * 100.0
            );
            println!(
                "ticks.stalled            {} ({:.2}%)",
                self.stall_ticks,
                (self.stall_ticks as f64 / ticks) * 100.0
            );
            println!(
                "ticks.reset              {} ({:.2}%)",
                self.reset_ticks,
                (self.reset_ticks as f64 / ticks) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("op_mix") {
            println!("OPERATION MIX");
            for op in AluOp::ALL.into_iter().chain([AluOp::Invalid]) {
                let count = self.op_count(op);
                println!(
                    "  op.{:<20} {} ({:.2}%)",
                    op.mnemonic(),
                    count,
                    (count as f64 / accepted) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("events") {
            println!("EVENTS");
            println!("  div.by_zero            {}", self.div_by_zero);
            println!("  flags.carry            {}", self.carry_events);
            println!("  flags.overflow         {}", self.overflow_events);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
