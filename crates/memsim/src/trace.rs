use std::io::BufRead;

use thiserror::Error;

use paging::{AccessKind, PAGE_OFFSET_BITS, PageId};

/// Errors raised while decoding a trace stream.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("trace read failed: {0}")]
    Io(#[from] std::io::Error),
    /// A line did not match `<hex-address> <R|W>`.
    #[error("malformed trace line {line}: {found:?}")]
    Malformed { line: usize, found: String },
}

/// Convenience alias for trace results.
pub type TraceResult<T> = Result<T, TraceError>;

/// One decoded trace reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub page_id: PageId,
    pub kind: AccessKind,
}

/// Streaming reader over `<hex-address> <R|W>` lines.
///
/// Lines are numbered from 1 and blank lines are skipped but still
/// counted, so a `Malformed` error names the physical line in the file.
/// The address may carry a `0x` prefix; its low offset bits are dropped
/// to produce the page id.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader positioned at the start of a trace.
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = TraceResult<TraceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(TraceError::Io(err))),
            }
            self.line += 1;
            let text = buf.trim();
            if text.is_empty() {
                continue;
            }
            return Some(parse_line(self.line, text));
        }
    }
}

fn malformed(line: usize, text: &str) -> TraceError {
    TraceError::Malformed {
        line,
        found: text.to_string(),
    }
}

fn parse_line(line: usize, text: &str) -> TraceResult<TraceRecord> {
    let mut parts = text.split_whitespace();
    let addr_token = parts.next().ok_or_else(|| malformed(line, text))?;
    let mode_token = parts.next().ok_or_else(|| malformed(line, text))?;
    if parts.next().is_some() {
        return Err(malformed(line, text));
    }

    let digits = addr_token
        .strip_prefix("0x")
        .or_else(|| addr_token.strip_prefix("0X"))
        .unwrap_or(addr_token);
    let address = u64::from_str_radix(digits, 16).map_err(|_| malformed(line, text))?;

    let kind = match mode_token {
        "R" => AccessKind::Read,
        "W" => AccessKind::Write,
        _ => return Err(malformed(line, text)),
    };

    Ok(TraceRecord {
        page_id: address >> PAGE_OFFSET_BITS,
        kind,
    })
}
