//! Pipelined ALU datapath simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Eval:** Evaluate one operation combinationally and print the value and flags.
//! 2. **Run:** Drive a JSON stimulus script through the simulator, one line per tick.
//! 3. **Bench:** Replay the reference pin-level test bench and report each check.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use alupipe_core::common::PIPELINE_DEPTH;
use alupipe_core::config::{AluConfig, Config, IsaVariant, OverflowPolicy};
use alupipe_core::io::PinInputs;
use alupipe_core::sim::{Simulator, TickRecord, load_script};
use alupipe_core::{AluOp, Datapath};

#[derive(Parser, Debug)]
#[command(
    name = "alu-sim",
    author,
    version,
    about = "Pipelined ALU datapath simulator",
    long_about = "Evaluate single operations, run JSON stimulus scripts, or replay the pin-level test bench.\n\nExamples:\n  alu-sim eval add 20 30\n  alu-sim eval sub 0x80000000 1 --policy add-only\n  alu-sim run stimulus.json --stats\n  alu-sim bench"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one operation combinationally (no pipeline).
    Eval {
        /// Operation mnemonic (add, sub, mul, div, shl, shr, and, or).
        #[arg(value_parser = parse_op)]
        op: AluOp,

        /// Operand A (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_word)]
        a: u32,

        /// Operand B (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_word)]
        b: u32,

        /// Which operations report signed overflow.
        #[arg(long, value_enum, default_value_t = PolicyArg::AddAndSub)]
        policy: PolicyArg,

        /// Operation set; AND and OR need `extended`.
        #[arg(long, value_enum, default_value_t = VariantArg::Extended)]
        variant: VariantArg,
    },

    /// Run a JSON stimulus script through the simulator.
    Run {
        /// Script path.
        script: PathBuf,

        /// Print one JSON object per tick instead of text.
        #[arg(long)]
        json: bool,

        /// Log every accepted tick (same as `RUST_LOG=alupipe_core=trace`).
        #[arg(long)]
        trace: bool,

        /// Print statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Replay the reference test bench through the pin adapter.
    Bench,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    AddAndSub,
    AddOnly,
}

impl From<PolicyArg> for OverflowPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AddAndSub => Self::AddAndSub,
            PolicyArg::AddOnly => Self::AddOnly,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Primary,
    Extended,
}

impl From<VariantArg> for IsaVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Primary => Self::Primary,
            VariantArg::Extended => Self::Extended,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    match cli.command {
        Commands::Eval {
            op,
            a,
            b,
            policy,
            variant,
        } => cmd_eval(op, a, b, policy.into(), variant.into()),
        Commands::Run {
            script,
            json,
            stats,
            ..
        } => cmd_run(&script, json, stats),
        Commands::Bench => cmd_bench(),
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`), or at
/// `trace` for the core crate when requested.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("alupipe_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_op(s: &str) -> Result<AluOp, String> {
    AluOp::from_mnemonic(s).ok_or_else(|| format!("unknown operation {s:?}"))
}

fn parse_word(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid 32-bit operand {s:?}: {e}"))
}

/// Evaluates one operation and prints the result with its flags.
fn cmd_eval(op: AluOp, a: u32, b: u32, policy: OverflowPolicy, variant: IsaVariant) {
    let datapath = Datapath::new(AluConfig {
        variant,
        overflow_policy: policy,
    });
    let op = op.restrict(variant);
    let result = datapath.evaluate(op, a, b);
    let flags = result.flags();

    println!(
        "{op} {a:#x}, {b:#x} -> {:#010x} ({}) [{flags}]",
        result.value, result.value
    );
    if op == AluOp::Invalid {
        println!("  (operation not in the {variant:?} set; result forced to zero)");
    }
    if op == AluOp::Div && b == 0 {
        println!("  (division by zero; result forced to zero)");
    }
}

/// Loads a stimulus script and runs it to completion.
fn cmd_run(path: &Path, json: bool, show_stats: bool) {
    let script = load_script(path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    tracing::info!(path = %path.display(), entries = script.ticks.len(), "running script");
    let mut sim = Simulator::new(&script.config);
    let records = sim.run(&script).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    for record in &records {
        if json {
            match serde_json::to_string(record) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        } else {
            println!("{}", format_record(record));
        }
    }

    if show_stats {
        sim.stats().print();
    }
}

fn format_record(record: &TickRecord) -> String {
    let inputs = &record.inputs;
    let ctrl = if inputs.ctrl.reset {
        "RST"
    } else if inputs.ctrl.enable {
        "   "
    } else {
        "STL"
    };
    format!(
        "tick {:>5} {ctrl} {:<7} a={:#010x} b={:#010x} | out {}",
        record.tick, inputs.op, inputs.a, inputs.b, record.retired
    )
}

/// Reference pin-level sequence: reset, idle, then three held operations.
fn cmd_bench() {
    const RESET_TICKS: usize = 10;
    const IDLE_TICKS: usize = 5;
    const HOLD_TICKS: usize = 5;
    const CHECKS: [(AluOp, u32, u32, u8); 3] = [
        (AluOp::Add, 20, 30, 50),
        (AluOp::Sub, 30, 10, 20),
        (AluOp::Mul, 6, 7, 42),
    ];

    let mut sim = Simulator::new(&Config::default());
    let idle = PinInputs::default();

    for _ in 0..RESET_TICKS {
        let _ = sim.step_pins(&idle.in_reset());
    }
    for _ in 0..IDLE_TICKS {
        let _ = sim.step_pins(&idle);
    }

    let mut failures = 0;
    for (op, a, b, expected) in CHECKS {
        let pins = match sim.pins().pack_op(op, a, b) {
            Ok(pins) => pins,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };
        let mut out = sim.output_pins();
        for _ in 0..HOLD_TICKS {
            out = sim.step_pins(&pins);
        }
        let pass = out.uo_out == expected;
        if !pass {
            failures += 1;
        }
        println!(
            "[{}] {op} {a}, {b}: uo_out={} expected={expected} (held {HOLD_TICKS} ticks, latency {PIPELINE_DEPTH})",
            if pass { "PASS" } else { "FAIL" },
            out.uo_out
        );
    }

    if failures > 0 {
        eprintln!("{failures} check(s) failed");
        process::exit(1);
    }
    println!("All checks passed");
}
