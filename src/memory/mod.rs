/*!
 * Memory Allocation Engine
 * Contiguous allocation over a linear unit-addressed space
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{ProcessId, Size};
use crate::workload::MemoryRequest;
use log::debug;

mod fit;
mod types;

use fit::{free_runs, pick_run};
pub use types::{AllocationRecord, FreeBlock, MemoryReport, MemoryStatistics, Strategy};

/// Run one allocation simulation: consume requests strictly in input order
/// against `memory_size` initially-free unit slots.
///
/// A request either fully fits in one free run or fails entirely; failures
/// never mutate memory. The report lists successful records first, then
/// failures.
pub fn simulate(
    strategy: Strategy,
    memory_size: Size,
    requests: &[MemoryRequest],
) -> Result<MemoryReport> {
    validate(memory_size, requests)?;

    let mut memory: Vec<Option<ProcessId>> = vec![None; memory_size];
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for request in requests {
        let runs = free_runs(&memory);
        match pick_run(strategy, &runs, request.size) {
            Some(run) => {
                for slot in &mut memory[run.start..run.start + request.size] {
                    *slot = Some(request.id.clone());
                }
                successes.push(AllocationRecord::Allocated {
                    process_id: request.id.clone(),
                    size: request.size,
                    start_address: run.start,
                    end_address: run.start + request.size - 1,
                    allocated: true,
                    block_size: match strategy {
                        Strategy::FirstFit => None,
                        Strategy::BestFit | Strategy::WorstFit => Some(run.len),
                    },
                });
            }
            None => {
                let largest = runs.iter().map(|r| r.len).max().unwrap_or(0);
                failures.push(AllocationRecord::Failed {
                    process_id: request.id.clone(),
                    size: request.size,
                    allocated: false,
                    reason: format!(
                        "no contiguous free block of {} units (largest free block: {} units)",
                        request.size, largest
                    ),
                });
            }
        }
    }

    let final_runs = free_runs(&memory);
    let free_memory: Size = final_runs.iter().map(|r| r.len).sum();
    let largest_free = final_runs.iter().map(|r| r.len).max().unwrap_or(0);

    let statistics = MemoryStatistics {
        total_memory: memory_size,
        allocated_memory: memory_size - free_memory,
        free_memory,
        successful_allocations: successes.len(),
        failed_allocations: failures.len(),
        external_fragmentation: match strategy {
            Strategy::FirstFit => Some(free_memory - largest_free),
            Strategy::BestFit | Strategy::WorstFit => None,
        },
    };

    debug!(
        "memory run complete: strategy={} requests={} allocated={} failed={}",
        strategy.as_str(),
        requests.len(),
        statistics.successful_allocations,
        statistics.failed_allocations
    );

    let mut allocations = successes;
    allocations.append(&mut failures);

    Ok(MemoryReport {
        algorithm: strategy,
        free_blocks: final_runs
            .iter()
            .map(|r| FreeBlock {
                start_address: r.start,
                end_address: r.start + r.len - 1,
                size: r.len,
            })
            .collect(),
        memory_state: memory,
        allocations,
        statistics,
    })
}

fn validate(memory_size: Size, requests: &[MemoryRequest]) -> Result<()> {
    if memory_size == 0 {
        return Err(SimulationError::InvalidInput(
            "memorySize must be greater than zero".to_string(),
        ));
    }
    if requests.is_empty() {
        return Err(SimulationError::InvalidInput(
            "process list must not be empty".to_string(),
        ));
    }
    for request in requests {
        if request.size == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "request {} has a non-positive size",
                request.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests(specs: &[(&str, Size)]) -> Vec<MemoryRequest> {
        specs
            .iter()
            .map(|(id, size)| MemoryRequest::new(*id, *size))
            .collect()
    }

    #[test]
    fn test_first_fit_failure_leaves_memory_untouched() {
        let report = simulate(
            Strategy::FirstFit,
            10,
            &requests(&[("A", 4), ("B", 3), ("C", 5)]),
        )
        .unwrap();

        assert_eq!(report.statistics.successful_allocations, 2);
        assert_eq!(report.statistics.failed_allocations, 1);
        assert_eq!(report.statistics.allocated_memory, 7);
        assert_eq!(report.statistics.free_memory, 3);

        // A at [0-3], B at [4-6], C fails against the 3 units at [7-9]
        match &report.allocations[0] {
            AllocationRecord::Allocated {
                start_address,
                end_address,
                ..
            } => {
                assert_eq!(*start_address, 0);
                assert_eq!(*end_address, 3);
            }
            other => panic!("expected success record, got {:?}", other),
        }
        assert!(!report.allocations[2].is_allocated());

        assert_eq!(report.free_blocks.len(), 1);
        assert_eq!(report.free_blocks[0].start_address, 7);
        assert_eq!(report.free_blocks[0].size, 3);
    }

    #[test]
    fn test_first_fit_reports_external_fragmentation() {
        let report = simulate(
            Strategy::FirstFit,
            10,
            &requests(&[("A", 2), ("B", 3), ("C", 2), ("D", 4)]),
        )
        .unwrap();

        // A[0-1] B[2-4] C[5-6]; D(4) fails against the single free run
        // [7-9], so total free equals the largest block
        assert_eq!(report.statistics.failed_allocations, 1);
        assert_eq!(report.statistics.external_fragmentation, Some(0));
    }

    #[test]
    fn test_best_fit_reports_block_size() {
        let report = simulate(Strategy::BestFit, 10, &requests(&[("A", 4)])).unwrap();
        match &report.allocations[0] {
            AllocationRecord::Allocated { block_size, .. } => {
                assert_eq!(*block_size, Some(10));
            }
            other => panic!("expected success record, got {:?}", other),
        }
        assert_eq!(report.statistics.external_fragmentation, None);
    }

    #[test]
    fn test_failure_reason_names_largest_block() {
        let report = simulate(Strategy::WorstFit, 4, &requests(&[("A", 2), ("B", 3)])).unwrap();
        match &report.allocations[1] {
            AllocationRecord::Failed { reason, .. } => {
                assert!(reason.contains("3 units"));
                assert!(reason.contains("largest free block: 2 units"));
            }
            other => panic!("expected failure record, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_state_ownership() {
        let report = simulate(Strategy::FirstFit, 5, &requests(&[("A", 2)])).unwrap();
        assert_eq!(report.memory_state[0], Some("A".into()));
        assert_eq!(report.memory_state[1], Some("A".into()));
        assert_eq!(report.memory_state[2], None);
    }

    #[test]
    fn test_zero_memory_size_rejected() {
        let err = simulate(Strategy::FirstFit, 0, &requests(&[("A", 1)])).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_request_size_rejected() {
        let err = simulate(Strategy::FirstFit, 8, &requests(&[("A", 0)])).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_requests_rejected() {
        let err = simulate(Strategy::FirstFit, 8, &[]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }
}
