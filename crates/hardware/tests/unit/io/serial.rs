//! Byte-Serial Loader Tests.
//!
//! Full-width operands assembled a byte per tick, the execute strobe as the
//! only tick that advances the core, and end-to-end runs through the
//! extended-variant simulator.

use alupipe_core::common::SimError;
use alupipe_core::core::pipeline::AluOp;
use alupipe_core::io::{Operand, PinInputs, SerialLoader};
use pretty_assertions::assert_eq;

use crate::common::TestContext;

const LOAD: u8 = 1 << 6;
const EXECUTE: u8 = 1 << 7;
const SELECT_B: u8 = 1 << 2;

fn load_pins(select: u8, lane: u8, byte: u8) -> PinInputs {
    PinInputs {
        ui_in: byte,
        uio_in: LOAD | select | lane,
        ..PinInputs::default()
    }
}

/// Runs a serial program through an extended-variant simulator and drains it.
fn run_serial(ctx: &mut TestContext, loader: &mut SerialLoader, op: AluOp, a: u32, b: u32) -> u32 {
    for pins in SerialLoader::program(op, a, b) {
        let _ = ctx.tick(loader.step(&pins));
    }
    ctx.idle(2).value
}

// ─── Register loading ────────────────────────────────────────────────────────

#[test]
fn load_byte_fills_lanes_little_endian() {
    let mut loader = SerialLoader::new();
    for (lane, byte) in [0xEF, 0xBE, 0xAD, 0xDE].into_iter().enumerate() {
        loader.load_byte(Operand::A, lane as u8, byte).unwrap();
    }
    assert_eq!(loader.operands(), (0xDEAD_BEEF, 0));
}

#[test]
fn load_byte_overwrites_only_its_lane() {
    let mut loader = SerialLoader::new();
    loader.load_byte(Operand::B, 0, 0xFF).unwrap();
    loader.load_byte(Operand::B, 2, 0x11).unwrap();
    loader.load_byte(Operand::B, 0, 0x22).unwrap();
    assert_eq!(loader.operands().1, 0x0011_0022);
}

#[test]
fn load_byte_rejects_lane_four() {
    let mut loader = SerialLoader::new();
    let err = loader.load_byte(Operand::A, 4, 1).unwrap_err();
    assert!(matches!(err, SimError::ByteLane(4)));
    assert_eq!(loader.operands(), (0, 0));
}

// ─── Pin stepping ────────────────────────────────────────────────────────────

#[test]
fn load_ticks_keep_the_core_disabled() {
    let mut loader = SerialLoader::new();
    let t = loader.step(&load_pins(0, 1, 0x12));
    assert!(!t.ctrl.enable);
    assert_eq!(t.a, 0x1200);
}

#[test]
fn operand_select_targets_b() {
    let mut loader = SerialLoader::new();
    let _ = loader.step(&load_pins(SELECT_B, 3, 0x80));
    assert_eq!(loader.operands(), (0, 0x8000_0000));
}

#[test]
fn execute_tick_enables_core_with_opcode() {
    let mut loader = SerialLoader::new();
    let t = loader.step(&PinInputs {
        uio_in: EXECUTE | (7 << 3),
        ..PinInputs::default()
    });
    assert!(t.ctrl.enable);
    assert_eq!(t.op, AluOp::Or);
}

#[test]
fn execute_needs_ena() {
    let mut loader = SerialLoader::new();
    let t = loader.step(&PinInputs {
        uio_in: EXECUTE,
        ena: false,
        ..PinInputs::default()
    });
    assert!(!t.ctrl.enable);
}

#[test]
fn reset_clears_operand_registers() {
    let mut loader = SerialLoader::new();
    let _ = loader.step(&load_pins(0, 0, 0x55));
    let t = loader.step(&load_pins(0, 1, 0x66).in_reset());
    assert!(t.ctrl.reset);
    assert_eq!(loader.operands(), (0, 0), "the load during reset is ignored");
}

#[test]
fn program_is_eight_loads_and_one_execute() {
    let seq = SerialLoader::program(AluOp::Add, 1, 2);
    assert_eq!(seq.len(), 9);
    assert!(seq[..8].iter().all(|p| p.uio_in & LOAD != 0 && p.uio_in & EXECUTE == 0));
    assert_eq!(seq[8].uio_in & EXECUTE, EXECUTE);
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[test]
fn serial_add_uses_full_width_operands() {
    let mut ctx = TestContext::extended();
    let mut loader = SerialLoader::new();
    let out = run_serial(&mut ctx, &mut loader, AluOp::Add, 0x1234_5678, 0x1111_1111);
    assert_eq!(out, 0x2345_6789);
}

#[test]
fn serial_and_or_in_extended_variant() {
    let mut ctx = TestContext::extended();
    let mut loader = SerialLoader::new();
    assert_eq!(
        run_serial(&mut ctx, &mut loader, AluOp::And, 0xFFFF_0000, 0x0F0F_0F0F),
        0x0F0F_0000
    );
    assert_eq!(
        run_serial(&mut ctx, &mut loader, AluOp::Or, 0xFFFF_0000, 0x0000_00FF),
        0xFFFF_00FF
    );
}

#[test]
fn load_ticks_do_not_advance_the_pipeline() {
    let mut ctx = TestContext::extended();
    let mut loader = SerialLoader::new();
    let _ = run_serial(&mut ctx, &mut loader, AluOp::Mul, 6, 7);
    let before = ctx.values();
    for pins in &SerialLoader::program(AluOp::Add, 1, 1)[..8] {
        let _ = ctx.tick(loader.step(pins));
    }
    assert_eq!(ctx.values(), before);
    assert_eq!(ctx.sim.stats().stall_ticks, 16);
}
