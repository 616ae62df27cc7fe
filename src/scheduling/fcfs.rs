/*!
 * First-Come-First-Served Scheduling
 * Non-preemptive execution in arrival order
 */

use super::types::{GanttSegment, ProcessMetrics};
use crate::core::types::Tick;
use crate::workload::ProcessSpec;

/// Execute processes in arrival order.
///
/// The sort is stable: processes sharing an arrival time keep their original
/// relative order. A process starts at `max(clock, arrival)`, so gaps before
/// a late arrival are idle time and produce no gantt entry.
pub(super) fn run(processes: &[ProcessSpec]) -> (Vec<GanttSegment>, Vec<ProcessMetrics>) {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);

    let mut gantt = Vec::with_capacity(processes.len());
    let mut results = Vec::with_capacity(processes.len());
    let mut clock: Tick = 0;

    for i in order {
        let process = &processes[i];
        let start = clock.max(process.arrival_time);
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
