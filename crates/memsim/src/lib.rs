//! Trace-driven front end for the paging simulator: trace decoding, run
//! orchestration, and report formatting.

pub mod report;
pub mod runner;
pub mod trace;
