//! Stimulus Script Loader Tests.
//!
//! Verifies JSON parsing defaults, mnemonic resolution, operand width
//! checks, `repeat` expansion, and file loading errors.

use std::io::Write;

use alupipe_core::common::SimError;
use alupipe_core::common::constants::MAX_SCRIPT_TICKS;
use alupipe_core::config::{Config, IsaVariant};
use alupipe_core::core::pipeline::{AluOp, ControlSignals, TickInputs};
use alupipe_core::sim::{load_script, parse_script};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

// ─── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn empty_object_is_an_empty_script() {
    let script = parse_script("{}").unwrap();
    assert!(script.ticks.is_empty());
    assert_eq!(script.config.alu.variant, IsaVariant::Primary);
    assert!(script.expand().unwrap().is_empty());
}

#[test]
fn entry_defaults() {
    let script = parse_script(r#"{ "ticks": [ {} ] }"#).unwrap();
    let entry = &script.ticks[0];
    assert_eq!(entry.op, None);
    assert_eq!(entry.code, None);
    assert_eq!((entry.a, entry.b), (0, 0));
    assert!(entry.enable);
    assert!(!entry.reset);
    assert_eq!(entry.repeat, 1);
    assert_eq!(script.expand().unwrap(), vec![TickInputs::op(AluOp::Add, 0, 0)]);
}

#[test]
fn mnemonics_and_controls_expand() {
    let script = parse_script(
        r#"{
            "ticks": [
                { "reset": true, "repeat": 2 },
                { "op": "ADD", "a": 20, "b": 30 },
                { "op": "mul", "a": 6, "b": 7, "enable": false }
            ]
        }"#,
    )
    .unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks[0].ctrl, ControlSignals::RESET);
    assert_eq!(ticks[1], ticks[0]);
    assert_eq!(ticks[2], TickInputs::op(AluOp::Add, 20, 30));
    assert_eq!(ticks[3].op, AluOp::Mul);
    assert_eq!(ticks[3].ctrl, ControlSignals::STALL);
}

#[test]
fn repeat_zero_drops_the_entry() {
    let script = parse_script(r#"{ "ticks": [ { "repeat": 0 }, { "op": "sub" } ] }"#).unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].op, AluOp::Sub);
}

#[test]
fn raw_code_wins_over_mnemonic() {
    let script = parse_script(r#"{ "ticks": [ { "op": "add", "code": 3 }, { "code": 9 } ] }"#).unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks[0].op, AluOp::Div);
    assert_eq!(ticks[1].op, AluOp::Invalid);
}

#[test]
fn logic_mnemonic_in_primary_variant_is_invalid() {
    let script = parse_script(r#"{ "ticks": [ { "op": "and" }, { "code": 7 } ] }"#).unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks[0].op, AluOp::Invalid);
    assert_eq!(ticks[1].op, AluOp::Invalid);
}

#[test]
fn config_block_selects_extended_variant() {
    let script = parse_script(
        r#"{
            "config": { "alu": { "variant": "Extended" } },
            "ticks": [ { "op": "or", "a": 4096, "b": 1 } ]
        }"#,
    )
    .unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks[0].op, AluOp::Or);
    assert_eq!(ticks[0].a, 4096);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_mnemonic_is_reported() {
    let script = parse_script(r#"{ "ticks": [ { "op": "xor" } ] }"#).unwrap();
    let err = script.expand().unwrap_err();
    assert!(matches!(err, SimError::UnknownMnemonic(ref name) if name == "xor"));
}

#[test]
fn primary_variant_checks_bus_widths() {
    let script = parse_script(r#"{ "ticks": [ { "a": 20, "b": 32 } ] }"#).unwrap();
    let err = script.expand().unwrap_err();
    assert!(matches!(
        err,
        SimError::OperandOutOfRange {
            field: "operand_b",
            ..
        }
    ));

    let script = parse_script(r#"{ "ticks": [ { "a": 256 } ] }"#).unwrap();
    assert!(script.expand().is_err());
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(parse_script("{ ticks: "), Err(SimError::Json(_))));
    assert!(matches!(
        parse_script(r#"{ "ticks": [ { "a": -1 } ] }"#),
        Err(SimError::Json(_))
    ));
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[test]
fn load_script_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "ticks": [ {{ "op": "shl", "a": 1, "b": 4, "repeat": 3 }} ] }}"#).unwrap();

    let script = load_script(file.path()).unwrap();
    let ticks = script.expand().unwrap();
    assert_eq!(ticks, vec![TickInputs::op(AluOp::Shl, 1, 4); 3]);
}

#[test]
fn load_script_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = load_script(&path).unwrap_err();
    match err {
        SimError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

// ─── Limits ──────────────────────────────────────────────────────────────────

#[test]
fn huge_repeat_is_rejected_before_allocating() {
    let script = parse_script(r#"{ "ticks": [ { "repeat": 4294967295 } ] }"#).unwrap();
    let err = script.expand().unwrap_err();
    assert!(matches!(
        err,
        SimError::ScriptTooLong {
            ticks: 4_294_967_295,
            limit: MAX_SCRIPT_TICKS
        }
    ));
}

#[test]
fn repeats_are_summed_across_entries() {
    let half = MAX_SCRIPT_TICKS / 2 + 1;
    let json = format!(r#"{{ "ticks": [ {{ "repeat": {half} }}, {{ "repeat": {half} }} ] }}"#);
    let script = parse_script(&json).unwrap();
    assert!(matches!(script.expand(), Err(SimError::ScriptTooLong { .. })));
}

#[test]
fn script_with_bad_bus_layout_is_rejected() {
    let err = parse_script(r#"{ "config": { "bus": { "opcode_bits": 32 } }, "ticks": [] }"#).unwrap_err();
    assert!(matches!(err, SimError::BusLayout { .. }));
}

// ─── Expansion against another config ────────────────────────────────────────

#[test]
fn expand_for_uses_the_given_variant() {
    let script = parse_script(
        r#"{
            "config": { "alu": { "variant": "Extended" } },
            "ticks": [ { "op": "and", "a": 6, "b": 3 } ]
        }"#,
    )
    .unwrap();
    assert_eq!(script.expand().unwrap()[0].op, AluOp::And);

    let primary = Config::default();
    assert_eq!(script.expand_for(&primary).unwrap()[0].op, AluOp::Invalid);
}
