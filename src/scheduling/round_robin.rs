/*!
 * Round Robin Scheduling
 * Time-sliced execution with arrival-before-requeue fairness
 */

use super::types::{GanttSegment, ProcessMetrics};
use crate::core::types::Tick;
use crate::workload::ProcessSpec;
use std::collections::VecDeque;

/// Per-process working state; the input slice itself is never mutated.
struct Slot {
    remaining: Tick,
    first_run: Option<Tick>,
    queued: bool,
}

/// Run the ready queue with a fixed time quantum.
///
/// The queue is seeded with the earliest-arriving process (ties go to input
/// order) and the clock starts at its arrival. After each slice, processes
/// that arrived during it are enqueued in arrival order BEFORE the preempted
/// process is re-enqueued: an arrival at time T gets queue priority over the
/// process preempted at T.
pub(super) fn run(
    processes: &[ProcessSpec],
    quantum: Tick,
) -> (Vec<GanttSegment>, Vec<ProcessMetrics>) {
    let n = processes.len();
    let mut slots: Vec<Slot> = processes
        .iter()
        .map(|p| Slot {
            remaining: p.burst_time,
            first_run: None,
            queued: false,
        })
        .collect();

    let mut gantt = Vec::new();
    let mut results = Vec::with_capacity(n);
    let mut queue: VecDeque<usize> = VecDeque::new();

    // Seed with the single earliest arrival
    let first = match (0..n).min_by_key(|&i| processes[i].arrival_time) {
        Some(i) => i,
        None => return (gantt, results),
    };
    let mut clock: Tick = processes[first].arrival_time;
    queue.push_back(first);
    slots[first].queued = true;

    let mut completed = 0;
    while completed < n {
        let i = match queue.pop_front() {
            Some(i) => i,
            None => {
                // Idle gap: jump to the next arrival among unfinished processes
                if let Some(next) = (0..n)
                    .filter(|&i| !slots[i].queued && slots[i].remaining > 0)
                    .min_by_key(|&i| processes[i].arrival_time)
                {
                    clock = clock.max(processes[next].arrival_time);
                    queue.push_back(next);
                    slots[next].queued = true;
                }
                continue;
            }
        };

        let process = &processes[i];
        let slice = quantum.min(slots[i].remaining);
        let start = clock;
        let end = start + slice;
        if slots[i].first_run.is_none() {
            slots[i].first_run = Some(start);
        }
        slots[i].remaining -= slice;
        clock = end;
        gantt.push(GanttSegment::new(process.id.clone(), start, end));

        enqueue_arrivals(processes, &mut slots, &mut queue, clock);

        if slots[i].remaining > 0 {
            queue.push_back(i);
        } else {
            completed += 1;
            let turnaround = clock - process.arrival_time;
            results.push(ProcessMetrics {
                id: process.id.clone(),
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                priority: process.priority,
                start_time: slots[i].first_run.unwrap_or(start),
                end_time: clock,
                waiting_time: turnaround - process.burst_time,
                turnaround_time: turnaround,
            });
        }
    }

    (gantt, results)
}

/// Enqueue every not-yet-queued process with `arrival <= clock`, in arrival
/// order (stable by input order for equal arrivals).
fn enqueue_arrivals(
    processes: &[ProcessSpec],
    slots: &mut [Slot],
    queue: &mut VecDeque<usize>,
    clock: Tick,
) {
    let mut arrivals: Vec<usize> = (0..processes.len())
        .filter(|&i| !slots[i].queued && processes[i].arrival_time <= clock)
        .collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time);
    for i in arrivals {
        slots[i].queued = true;
        queue.push_back(i);
    }
}
