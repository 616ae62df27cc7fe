/*!
 * CPU Scheduling Engine
 * Deterministic single-core scheduling simulations
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::Tick;
use crate::workload::ProcessSpec;
use log::debug;

mod fcfs;
mod nonpreemptive;
mod round_robin;
mod types;

pub use types::{Algorithm, GanttSegment, ProcessMetrics, ScheduleReport};

/// Time quantum used by Round Robin when the request omits one
pub const DEFAULT_TIME_QUANTUM: Tick = 2;

/// Run one scheduling simulation over the given workload.
///
/// `time_quantum` is consulted only by Round Robin; `None` falls back to
/// [`DEFAULT_TIME_QUANTUM`]. The input slice is never mutated; every call
/// with identical input produces an identical report.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    time_quantum: Option<Tick>,
) -> Result<ScheduleReport> {
    validate(algorithm, processes)?;

    let (gantt_chart, process_results) = match algorithm {
        Algorithm::Fcfs => fcfs::run(processes),
        Algorithm::Sjf => nonpreemptive::sjf(processes),
        Algorithm::Priority => nonpreemptive::priority(processes),
        Algorithm::RoundRobin => {
            let quantum = time_quantum.unwrap_or(DEFAULT_TIME_QUANTUM);
            if quantum == 0 {
                return Err(SimulationError::InvalidInput(
                    "timeQuantum must be greater than zero".to_string(),
                ));
            }
            round_robin::run(processes, quantum)
        }
    };

    // Averages divide by the original process count; emptiness was rejected
    // upfront so the division is well-defined.
    let n = processes.len() as f64;
    let total_waiting: Tick = process_results.iter().map(|r| r.waiting_time).sum();
    let total_turnaround: Tick = process_results.iter().map(|r| r.turnaround_time).sum();

    debug!(
        "scheduling run complete: algorithm={} processes={} segments={}",
        algorithm.as_str(),
        processes.len(),
        gantt_chart.len()
    );

    Ok(ScheduleReport {
        gantt_chart,
        process_results,
        average_waiting_time: total_waiting as f64 / n,
        average_turnaround_time: total_turnaround as f64 / n,
    })
}

fn validate(algorithm: Algorithm, processes: &[ProcessSpec]) -> Result<()> {
    if processes.is_empty() {
        return Err(SimulationError::InvalidInput(
            "process list must not be empty".to_string(),
        ));
    }
    for process in processes {
        if process.burst_time == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {} has a non-positive burst time",
                process.id
            )));
        }
        if algorithm == Algorithm::Priority && process.priority.is_none() {
            return Err(SimulationError::InvalidInput(format!(
                "process {} is missing `priority`, required by the priority algorithm",
                process.id
            )));
        }
    }
    Ok(())
}
