//! SimStats unit tests.
//!
//! Verifies default initialization and that each tick lands in exactly one
//! of the accepted/stalled/reset buckets with the right event counters.

use alupipe_core::config::{Config, IsaVariant};
use alupipe_core::core::pipeline::{AluOp, ControlSignals, TickInputs};
use alupipe_core::core::units::alu::Alu;
use alupipe_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::TestContext;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.ticks, 0);
    assert_eq!(stats.ops_accepted, 0);
    assert_eq!(stats.stall_ticks, 0);
    assert_eq!(stats.reset_ticks, 0);
    for op in AluOp::ALL {
        assert_eq!(stats.op_count(op), 0);
    }
    assert_eq!(stats.op_invalid, 0);
    assert_eq!(stats.div_by_zero, 0);
    assert_eq!(stats.carry_events, 0);
    assert_eq!(stats.overflow_events, 0);
}

#[test]
fn record_buckets_ticks() {
    let mut stats = SimStats::default();
    let add = TickInputs::op(AluOp::Add, 1, 2);
    let r = Alu::evaluate(add.op, add.a, add.b);

    stats.record(&add, &r);
    stats.record(&add.with_ctrl(ControlSignals::STALL), &r);
    stats.record(&add.with_ctrl(ControlSignals::RESET), &r);
    stats.record(
        &add.with_ctrl(ControlSignals {
            enable: false,
            reset: true,
        }),
        &r,
    );

    assert_eq!(stats.ticks, 4);
    assert_eq!(stats.ops_accepted, 1);
    assert_eq!(stats.stall_ticks, 1);
    assert_eq!(stats.reset_ticks, 2);
    assert_eq!(stats.op_add, 1);
}

#[test]
fn stalled_events_are_not_counted() {
    let mut stats = SimStats::default();
    let div = TickInputs::op(AluOp::Div, 1, 0).with_ctrl(ControlSignals::STALL);
    stats.record(&div, &Alu::evaluate(AluOp::Div, 1, 0));
    assert_eq!(stats.div_by_zero, 0);
    assert_eq!(stats.op_div, 0);
}

#[test]
fn simulator_counts_events() {
    let mut ctx = TestContext::new();
    let _ = ctx.issue(AluOp::Add, u32::MAX, 1); // carry
    let _ = ctx.issue(AluOp::Add, i32::MAX as u32, 1); // overflow
    let _ = ctx.issue(AluOp::Sub, 0, 1); // borrow
    let _ = ctx.issue(AluOp::Div, 9, 0);
    let _ = ctx.issue(AluOp::Or, 1, 1); // invalid in the primary variant
    let _ = ctx.stall();
    let _ = ctx.reset();

    let stats = ctx.sim.stats();
    assert_eq!(stats.ticks, 7);
    assert_eq!(stats.ops_accepted, 5);
    assert_eq!(stats.op_add, 2);
    assert_eq!(stats.op_sub, 1);
    assert_eq!(stats.op_div, 1);
    assert_eq!(stats.op_or, 0);
    assert_eq!(stats.op_invalid, 1);
    assert_eq!(stats.carry_events, 2);
    assert_eq!(stats.overflow_events, 1);
    assert_eq!(stats.div_by_zero, 1);
    assert_eq!(stats.stall_ticks, 1);
    assert_eq!(stats.reset_ticks, 1);
}

#[test]
fn extended_variant_counts_logic_ops() {
    let mut config = Config::default();
    config.alu.variant = IsaVariant::Extended;
    let mut ctx = TestContext::with_config(&config);
    let _ = ctx.issue(AluOp::And, 3, 1);
    let _ = ctx.issue(AluOp::Or, 3, 1);
    assert_eq!(ctx.sim.stats().op_and, 1);
    assert_eq!(ctx.sim.stats().op_or, 1);
}

#[test]
fn print_sections_accepts_every_section() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_one(AluOp::Mul, 6, 7);
    let sections: Vec<String> = STATS_SECTIONS.iter().map(ToString::to_string).collect();
    ctx.sim.stats().print_sections(&sections);
    ctx.sim.stats().print();
}
