/*!
 * Free Run Scanning
 * Contiguous free-run discovery and strategy-based selection
 */

use super::types::Strategy;
use crate::core::types::{Address, ProcessId, Size};

/// A maximal contiguous run of free unit slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FreeRun {
    pub start: Address,
    pub len: Size,
}

/// Collect maximal free runs in left-to-right address order.
pub(super) fn free_runs(memory: &[Option<ProcessId>]) -> Vec<FreeRun> {
    let mut runs = Vec::new();
    let mut current: Option<FreeRun> = None;

    for (addr, slot) in memory.iter().enumerate() {
        if slot.is_none() {
            match current.as_mut() {
                Some(run) => run.len += 1,
                None => current = Some(FreeRun { start: addr, len: 1 }),
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

/// Pick the free run a request of `size` units should occupy, or `None`
/// when no run qualifies.
///
/// Ties in best-fit/worst-fit resolve to the first occurrence in
/// left-to-right address order, matching the scan order of `free_runs`.
pub(super) fn pick_run(strategy: Strategy, runs: &[FreeRun], size: Size) -> Option<FreeRun> {
    let mut candidates = runs.iter().copied().filter(|run| run.len >= size);

    match strategy {
        Strategy::FirstFit => candidates.next(),
        Strategy::BestFit => {
            let mut best: Option<FreeRun> = None;
            for run in candidates {
                match best {
                    Some(b) if run.len >= b.len => {}
                    _ => best = Some(run),
                }
            }
            best
        }
        Strategy::WorstFit => {
            let mut worst: Option<FreeRun> = None;
            for run in candidates {
                match worst {
                    Some(w) if run.len <= w.len => {}
                    _ => worst = Some(run),
                }
            }
            worst
        }
    }
}
