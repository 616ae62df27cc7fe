/*!
 * Non-Preemptive Selection Scheduling
 * Shared control flow for SJF and Priority
 */

use super::types::{GanttSegment, ProcessMetrics};
use crate::core::types::Tick;
use crate::workload::ProcessSpec;

/// Shortest job first: among arrived processes, run the one with the
/// smallest burst time to completion.
pub(super) fn sjf(processes: &[ProcessSpec]) -> (Vec<GanttSegment>, Vec<ProcessMetrics>) {
    run_by_key(processes, |p| i128::from(p.burst_time))
}

/// Priority (non-preemptive): among arrived processes, run the one with the
/// smallest priority value to completion. Presence of `priority` on every
/// process is validated upstream.
pub(super) fn priority(processes: &[ProcessSpec]) -> (Vec<GanttSegment>, Vec<ProcessMetrics>) {
    run_by_key(processes, |p| i128::from(p.priority.unwrap_or(i64::MAX)))
}

/// Repeatedly select the arrived, not-yet-run process minimizing `key` and
/// run it to completion.
///
/// Tie-break: the first match in remaining-list iteration order wins, which
/// is the original input order minus already-scheduled entries. When no
/// remaining process has arrived, the clock jumps to the earliest remaining
/// arrival; that idle gap is not recorded in the gantt chart.
fn run_by_key<K>(
    processes: &[ProcessSpec],
    key: K,
) -> (Vec<GanttSegment>, Vec<ProcessMetrics>)
where
    K: Fn(&ProcessSpec) -> i128,
{
    let n = processes.len();
    let mut done = vec![false; n];
    let mut gantt = Vec::with_capacity(n);
    let mut results = Vec::with_capacity(n);
    let mut clock: Tick = 0;
    let mut completed = 0;

    while completed < n {
        let mut picked: Option<usize> = None;
        for (i, process) in processes.iter().enumerate() {
            if done[i] || process.arrival_time > clock {
                continue;
            }
            match picked {
                Some(best) if key(process) >= key(&processes[best]) => {}
                _ => picked = Some(i),
            }
        }

        let i = match picked {
            Some(i) => i,
            None => {
                // Nothing has arrived yet: idle-advance to the earliest
                // remaining arrival and select again.
                if let Some(next_arrival) = processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !done[*i])
                    .map(|(_, p)| p.arrival_time)
                    .min()
                {
                    clock = next_arrival;
                }
                continue;
            }
        };

        let process = &processes[i];
        completed += 1;
        done[i] = true;
        let start = clock;
        let end = start + process.burst_time;
        clock = end;

        gantt.push(GanttSegment::new(process.id.clone(), start, end));
        results.push(ProcessMetrics {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time: start,
            end_time: end,
            waiting_time: start - process.arrival_time,
            turnaround_time: end - process.arrival_time,
        });
    }

    (gantt, results)
}
