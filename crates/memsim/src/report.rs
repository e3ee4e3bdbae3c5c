use paging::{AccessKind, AccessOutcome, PageId, SimStats};

/// Formats the five-line closing summary, values aligned in one column.
pub fn format_summary(num_frames: usize, stats: &SimStats) -> String {
    format!(
        "total memory frames:  {}\n\
         events in trace:      {}\n\
         total disk reads:     {}\n\
         total disk writes:    {}\n\
         page fault rate:      {:.4}\n",
        num_frames,
        stats.events,
        stats.disk_reads,
        stats.disk_writes,
        stats.fault_rate()
    )
}

/// Formats the debug notices for one processed event, in emission order:
/// the fault first, then the eviction's disk write or discard, then the
/// read or write that was applied. Hits produce only the last line.
pub fn event_notices(page_id: PageId, kind: AccessKind, outcome: AccessOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if let AccessOutcome::Fault { victim } = outcome {
        lines.push(format!("page fault {page_id:8}"));
        if let Some(victim) = victim {
            if victim.was_dirty {
                lines.push(format!("disk write {:8}", victim.page_id));
            } else {
                lines.push(format!("discard    {:8}", victim.page_id));
            }
        }
    }
    match kind {
        AccessKind::Read => lines.push(format!("reading    {page_id:8}")),
        AccessKind::Write => lines.push(format!("writing    {page_id:8}")),
    }
    lines
}
