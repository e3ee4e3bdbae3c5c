use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{debug, info};

use paging::{PolicyKind, Simulation};

use crate::report::{event_notices, format_summary};
use crate::trace::TraceReader;

/// How much the run narrates while events stream through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Summary only.
    Quiet,
    /// Per-event notices, then the summary.
    Debug,
}

impl FromStr for Verbosity {
    type Err = String;

    /// Parses the exact lowercase verbosity token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiet" => Ok(Verbosity::Quiet),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!("verbosity must be quiet or debug, got {other:?}")),
        }
    }
}

/// One full simulation run, as configured from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub trace_path: PathBuf,
    pub num_frames: usize,
    pub policy: PolicyKind,
    pub verbosity: Verbosity,
    pub seed: Option<u64>,
}

/// Streams the trace through a fresh simulation, writing debug notices
/// and the closing summary to `out`.
///
/// Any failure aborts before the summary: a run that cannot finish
/// reports nothing rather than partial counters.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<()> {
    let file = File::open(&config.trace_path)
        .with_context(|| format!("cannot open trace file {}", config.trace_path.display()))?;
    info!(
        "simulating {} with {} frames, {} replacement",
        config.trace_path.display(),
        config.num_frames,
        config.policy
    );

    let mut sim = match config.seed {
        Some(seed) => Simulation::with_seed(config.num_frames, config.policy, seed)?,
        None => Simulation::new(config.num_frames, config.policy)?,
    };

    for record in TraceReader::new(BufReader::new(file)) {
        let record = record?;
        let outcome = sim.step(record.page_id, record.kind)?;
        if config.verbosity == Verbosity::Debug {
            for line in event_notices(record.page_id, record.kind, outcome) {
                writeln!(out, "{line}")?;
            }
        }
    }

    let stats = sim.stats();
    debug!(
        "run complete: {} events, {} faults, {} writebacks",
        stats.events, stats.disk_reads, stats.disk_writes
    );
    write!(out, "{}", format_summary(sim.num_frames(), &stats))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbosity_tokens() {
        assert_eq!("quiet".parse::<Verbosity>().unwrap(), Verbosity::Quiet);
        assert_eq!("debug".parse::<Verbosity>().unwrap(), Verbosity::Debug);
    }

    #[test]
    fn test_parse_verbosity_rejects_other_tokens() {
        assert!("Quiet".parse::<Verbosity>().is_err());
        assert!("verbose".parse::<Verbosity>().is_err());
        assert!("".parse::<Verbosity>().is_err());
    }
}
