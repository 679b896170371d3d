//! OpenRISC simulator CLI.
//!
//! This binary boots a raw image on the simulator and attaches the host terminal to the
//! guest UART. It performs:
//! 1. **Setup:** Parses arguments, reads an optional JSON config and loads the image at
//!    physical address 0.
//! 2. **Console loop:** Runs fixed-size slices, forwarding pending stdin bytes as keypresses
//!    and writing guest output to stderr, until the guest halts or the cycle limit is hit.
//! 3. **Report:** Restores the terminal and optionally prints statistics and registers.

mod terminal;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use orsim_core::{Config, Simulator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::terminal::{RawTerminal, poll_byte};

#[derive(Parser, Debug)]
#[command(
    name = "orsim",
    author,
    version,
    about = "OpenRISC 1000 (ORBIS32) system simulator",
    long_about = "Boot a raw big-endian image and attach the terminal to the guest UART.\n\nThe image is copied to physical address 0 and execution starts at the boot PC \
                  (0x100, the reset vector, unless overridden).\n\nExamples:\n  orsim vmlinux.bin\n  orsim hello.bin --boot-pc 0 --max-cycles 1000000 --stats\n  RUST_LOG=orsim_core=debug orsim vmlinux.bin"
)]
struct Cli {
    /// Raw image to load at physical address 0.
    #[arg(default_value = "vmlinux.bin")]
    image: PathBuf,

    /// Entry PC; overrides `system.boot_pc` from the config.
    #[arg(long, value_parser = parse_address)]
    boot_pc: Option<u32>,

    /// JSON configuration file with `general` and `system` sections.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many simulated cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print statistics and a register dump on exit.
    #[arg(long)]
    stats: bool,

    /// Trace every executed instruction (at `trace` level; set RUST_LOG to see it).
    #[arg(long)]
    trace: bool,
}

/// Accepts decimal or `0x`-prefixed hexadecimal addresses.
fn parse_address(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
            Config::from_json(&text).map_err(|e| e.to_string())?
        }
        None => Config::default(),
    };
    if let Some(pc) = cli.boot_pc {
        config.system.boot_pc = pc;
    }
    config.general.trace_instructions |= cli.trace;
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs slices until the guest halts or `max_cycles` elapse.
///
/// # Returns
///
/// `true` when the guest halted.
fn console_loop(sim: &mut Simulator, max_cycles: Option<u64>) -> io::Result<bool> {
    let mut stderr = io::stderr().lock();
    let slice = sim.config().system.cycles_per_slice.max(1);
    loop {
        let budget = match max_cycles {
            Some(limit) => {
                let elapsed = sim.stats().cycles;
                if elapsed >= limit {
                    return Ok(false);
                }
                slice.min(limit - elapsed)
            }
            None => slice,
        };
        let halted = sim.run(budget).is_halted();

        while let Some(key) = poll_byte() {
            sim.keypress(key);
        }

        let output = sim.drain_output();
        if !output.is_empty() {
            stderr.write_all(&output)?;
            stderr.flush()?;
        }

        if halted {
            return Ok(true);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("orsim: {e}");
            return ExitCode::FAILURE;
        }
    };

    let boot_pc = config.system.boot_pc;
    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load_image_file(&cli.image, boot_pc) {
        eprintln!("orsim: unable to load image: {e}");
        return ExitCode::FAILURE;
    }

    let result = {
        let _raw = match RawTerminal::enable() {
            Ok(guard) => guard,
            Err(e) => {
                warn!(error = %e, "could not switch the terminal to raw mode");
                None
            }
        };
        console_loop(&mut sim, cli.max_cycles)
    };

    let code = match result {
        Ok(true) => {
            info!(pc = format_args!("{:#010x}", sim.pc()), "guest halted");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            info!(cycles = sim.stats().cycles, "cycle limit reached");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("orsim: console output failed: {e}");
            ExitCode::FAILURE
        }
    };

    if cli.stats {
        sim.stats().print();
        println!("pc  =0x{:08x}  sr  =0x{:08x}", sim.pc(), sim.cpu.sr());
        print!("{}", sim.cpu.regs().dump());
    }
    code
}
