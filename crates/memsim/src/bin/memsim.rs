use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use memsim::runner::{RunConfig, Verbosity, run};
use paging::PolicyKind;

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    about = "Demand-paging simulator over memory reference traces"
)]
struct Args {
    /// Trace file of `<hex-address> <R|W>` lines
    trace: PathBuf,

    /// Number of physical memory frames
    frames: usize,

    /// Replacement policy: rand, fifo, lru or clock
    policy: PolicyKind,

    /// Output mode: quiet or debug
    verbosity: Verbosity,

    /// Fixed seed for the rand policy
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = RunConfig {
        trace_path: args.trace,
        num_frames: args.frames,
        policy: args.policy,
        verbosity: args.verbosity,
        seed: args.seed,
    };
    run(&config, &mut io::stdout().lock())
}
