//! TLB simulator CLI.
//!
//! This binary is the command-line front end for `tlbsim-core`. It performs:
//! 1. **Option parsing:** Cycle budget, block size, block offset, TLB size and latencies,
//!    optionally layered over a JSON config file.
//! 2. **Trace loading:** Reads the positional input trace (`<R|W> <hex address> [<hex data>]`).
//! 3. **Reporting:** Prints the cycle, hit, miss and gate counts, as text or JSON.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tlbsim_core::SimulationConfig;
use tlbsim_core::sim::{loader, run_simulation};

#[derive(Parser, Debug)]
#[command(
    name = "tlbsim",
    author,
    version,
    about = "Trace-driven direct-mapped TLB simulator",
    long_about = "Replay a memory access trace against a direct-mapped TLB and report cycles, hits, misses and an estimated primitive gate count.\n\nEvery parameter must be given, either as a flag or in a --config JSON file.\n\nExamples:\n  tlbsim -c 1000 -b 16 -o 1 -t 4 -l 2 -m 20 trace.txt\n  tlbsim --config sim.json -f hits.log trace.txt"
)]
struct Cli {
    /// Number of cycles to simulate.
    #[arg(short = 'c', long = "cycles", value_name = "NUMBER")]
    cycles: Option<u64>,

    /// Size of memory blocks in bytes.
    #[arg(short = 'b', long = "blocksize", value_name = "NUMBER")]
    block_size: Option<u32>,

    /// Offset (in blocks) to translate virtual to physical addresses.
    #[arg(short = 'o', long = "v2b-block-offset", value_name = "NUMBER")]
    v2b_block_offset: Option<u32>,

    /// Size of the TLB in entries.
    #[arg(short = 't', long = "tlb-size", value_name = "NUMBER")]
    tlb_size: Option<u32>,

    /// TLB latency in cycles.
    #[arg(short = 'l', long = "tlb-latency", value_name = "NUMBER")]
    tlb_latency: Option<u32>,

    /// Memory latency in cycles.
    #[arg(short = 'm', long = "memory-latency", value_name = "NUMBER")]
    memory_latency: Option<u32>,

    /// Tracefile to write hit/miss records to.
    #[arg(short = 'f', long = "tf", value_name = "FILE")]
    trace_file: Option<PathBuf>,

    /// JSON config file supplying defaults for the flags above.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Input trace file.
    input: PathBuf,
}

impl Cli {
    /// Builds the run configuration: the `--config` file (or an all-unset
    /// base) with every flag given on the command line layered on top.
    fn to_config(&self) -> Result<SimulationConfig, tlbsim_core::SimError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::unset(),
        };

        if let Some(v) = self.cycles {
            config.cycles = v;
        }
        if let Some(v) = self.block_size {
            config.block_size = v;
        }
        if let Some(v) = self.v2b_block_offset {
            config.v2b_block_offset = v;
        }
        if let Some(v) = self.tlb_size {
            config.tlb_size = v;
        }
        if let Some(v) = self.tlb_latency {
            config.tlb_latency = v;
        }
        if let Some(v) = self.memory_latency {
            config.memory_latency = v;
        }
        if self.trace_file.is_some() {
            config.trace_file.clone_from(&self.trace_file);
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Validates the configuration, loads the trace, runs it and prints the result.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.to_config()?;
    let _ = config.validate()?;
    tracing::debug!(?config, "resolved configuration");

    let requests = loader::load_trace_file(&cli.input)?;
    let result = run_simulation(&config, &requests)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        result.print();
    }
    Ok(())
}
