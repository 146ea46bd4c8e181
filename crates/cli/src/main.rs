//! Reduced MIPS32 simulator CLI.
//!
//! This binary loads a plain-text instruction listing and runs it. It performs:
//! 1. **Setup:** Builds the engine from the default or a JSON configuration; applies register presets.
//! 2. **Run:** Executes to completion, or for at most `--max-steps` instructions.
//! 3. **Report:** Prints the machine state dump and, on request, execution statistics.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::Cpu;
use mipsim_core::common::BitVector;
use mipsim_core::config::Config;
use mipsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Reduced MIPS32 instruction-level simulator",
    long_about = "Load a listing of 32-digit binary instructions (one per line, whitespace ignored, \
                  '#' or '//' comments) and execute it.\n\nExamples:\n  mipsim run program.txt\n  \
                  mipsim run program.txt --set-reg 1=32 --set-reg 2=32 --stats\n  \
                  mipsim run mars_dump.txt --mars --max-steps 10000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a listing and execute it.
    Run {
        /// Instruction listing to load.
        listing: PathBuf,

        /// JSON configuration file (memory sizes, trace and compatibility flags).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat J-type targets as MARS absolute addresses based at 0x00400000.
        #[arg(long)]
        mars: bool,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Preset a register before the run, as INDEX=VALUE (VALUE may be negative).
        #[arg(long = "set-reg", value_parser = parse_preset)]
        presets: Vec<(usize, i64)>,

        /// Print execution statistics after the dump.
        #[arg(long)]
        stats: bool,

        /// Print execution statistics as JSON instead of text.
        #[arg(long, requires = "stats")]
        json: bool,
    },
}

/// Parses an `INDEX=VALUE` register preset.
fn parse_preset(arg: &str) -> Result<(usize, i64), String> {
    let (idx, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got '{arg}'"))?;
    let idx = idx
        .trim()
        .parse()
        .map_err(|e| format!("bad register index '{idx}': {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("bad register value '{value}': {e}"))?;
    Ok((idx, value))
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let parsed = fs::read_to_string(path)
        .map_err(mipsim_core::common::SimError::from)
        .and_then(|text| Config::from_json(&text));
    parsed.unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            listing,
            config,
            mars,
            trace,
            max_steps,
            presets,
            stats,
            json,
        } => {
            init_tracing(trace);
            let mut config = load_config(config.as_deref());
            config.general.compat_jump_offset |= mars;
            config.general.trace_instructions |= trace;
            cmd_run(&listing, &config, max_steps, &presets, stats, json);
        }
    }
}

/// Loads the listing, applies presets, runs, and prints the dump.
///
/// Exits with code 1 if the listing cannot be read or the PC becomes misaligned.
fn cmd_run(
    listing: &Path,
    config: &Config,
    max_steps: Option<u64>,
    presets: &[(usize, i64)],
    stats: bool,
    json: bool,
) {
    tracing::debug!(?config, "configuration");
    let mut cpu = Cpu::new(config);

    let report = loader::load_file(&mut cpu, listing).unwrap_or_else(|e| {
        eprintln!("Error reading listing {}: {}", listing.display(), e);
        process::exit(1);
    });
    println!(
        "[*] Loaded {} instruction(s) from {}",
        report.loaded,
        listing.display()
    );
    for err in &report.skipped {
        eprintln!("    skipped {err}");
    }
    if report.rejected > 0 {
        eprintln!(
            "    {} instruction(s) rejected: instruction memory full",
            report.rejected
        );
    }

    for &(idx, value) in presets {
        if let Err(e) = cpu.set_register(idx, &BitVector::from_value(32, value)) {
            eprintln!("Error presetting register: {e}");
            process::exit(1);
        }
    }

    let result = match max_steps {
        Some(limit) => cpu.run_bounded(limit),
        None => cpu.execute(),
    };

    print!("{}", cpu.dump_state());
    let code = match result {
        Ok(reason) => {
            println!("\n[*] Halted: {reason}");
            0
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            1
        }
    };
    if !cpu.diagnostics().is_empty() {
        eprintln!("[!] {} condition(s) reported during the run", cpu.diagnostics().len());
    }
    if stats {
        if json {
            match cpu.stats().to_json() {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error serializing statistics: {e}");
                    process::exit(1);
                }
            }
        } else {
            cpu.stats().print();
        }
    }
    process::exit(code);
}
