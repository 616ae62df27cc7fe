/*!
 * Property Tests
 * Algebraic invariants that must hold for every valid workload
 */

use os_sim_engine::{memory, paging, scheduling, MemoryRequest, PageRef, ProcessSpec};
use proptest::prelude::*;

fn arb_processes() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0u64..50, 1u64..20, 0i64..10), 1..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn arb_requests() -> impl Strategy<Value = Vec<MemoryRequest>> {
    prop::collection::vec(1usize..20, 1..12).prop_map(|sizes| {
        sizes
            .into_iter()
            .enumerate()
            .map(|(i, size)| MemoryRequest::new(format!("R{}", i + 1), size))
            .collect()
    })
}

fn arb_reference_string() -> impl Strategy<Value = Vec<PageRef>> {
    prop::collection::vec(0i64..10, 1..50)
        .prop_map(|pages| pages.into_iter().map(PageRef::from).collect())
}

proptest! {
    #[test]
    fn prop_averages_are_per_process_sums_over_n(processes in arb_processes(), quantum in 1u64..8) {
        for algorithm in [
            scheduling::Algorithm::Fcfs,
            scheduling::Algorithm::Sjf,
            scheduling::Algorithm::RoundRobin,
            scheduling::Algorithm::Priority,
        ] {
            let report = scheduling::simulate(algorithm, &processes, Some(quantum)).unwrap();
            let n = processes.len() as f64;
            let waiting: u64 = report.process_results.iter().map(|r| r.waiting_time).sum();
            let turnaround: u64 = report.process_results.iter().map(|r| r.turnaround_time).sum();

            prop_assert!((report.average_waiting_time - waiting as f64 / n).abs() < 1e-9);
            prop_assert!((report.average_turnaround_time - turnaround as f64 / n).abs() < 1e-9);
            prop_assert_eq!(report.process_results.len(), processes.len());
        }
    }

    #[test]
    fn prop_gantt_clock_is_monotone(processes in arb_processes(), quantum in 1u64..8) {
        for algorithm in [
            scheduling::Algorithm::Fcfs,
            scheduling::Algorithm::Sjf,
            scheduling::Algorithm::RoundRobin,
            scheduling::Algorithm::Priority,
        ] {
            let report = scheduling::simulate(algorithm, &processes, Some(quantum)).unwrap();
            let mut clock = 0;
            for segment in &report.gantt_chart {
                prop_assert!(segment.start_time >= clock);
                prop_assert!(segment.end_time > segment.start_time);
                clock = segment.end_time;
            }

            let executed: u64 = report.gantt_chart.iter().map(|s| s.duration).sum();
            let total_burst: u64 = processes.iter().map(|p| p.burst_time).sum();
            prop_assert_eq!(executed, total_burst);
        }
    }

    #[test]
    fn prop_memory_is_conserved(requests in arb_requests(), memory_size in 1usize..64) {
        for strategy in [
            memory::Strategy::FirstFit,
            memory::Strategy::BestFit,
            memory::Strategy::WorstFit,
        ] {
            let report = memory::simulate(strategy, memory_size, &requests).unwrap();
            let stats = &report.statistics;

            prop_assert_eq!(stats.allocated_memory + stats.free_memory, stats.total_memory);
            prop_assert_eq!(
                stats.successful_allocations + stats.failed_allocations,
                requests.len()
            );

            let owned = report.memory_state.iter().filter(|s| s.is_some()).count();
            prop_assert_eq!(owned, stats.allocated_memory);

            let free_listed: usize = report.free_blocks.iter().map(|b| b.size).sum();
            prop_assert_eq!(free_listed, stats.free_memory);
        }
    }

    #[test]
    fn prop_belady_is_a_lower_bound(reference in arb_reference_string(), frames in 1usize..8) {
        let optimal = paging::simulate(paging::Algorithm::Optimal, frames, &reference).unwrap();
        let lru = paging::simulate(paging::Algorithm::Lru, frames, &reference).unwrap();
        let fifo = paging::simulate(paging::Algorithm::Fifo, frames, &reference).unwrap();

        prop_assert!(optimal.statistics.page_faults <= lru.statistics.page_faults);
        prop_assert!(optimal.statistics.page_faults <= fifo.statistics.page_faults);
    }

    #[test]
    fn prop_hits_and_faults_partition(reference in arb_reference_string(), frames in 1usize..8) {
        for algorithm in [
            paging::Algorithm::Fifo,
            paging::Algorithm::Lru,
            paging::Algorithm::Optimal,
        ] {
            let report = paging::simulate(algorithm, frames, &reference).unwrap();
            prop_assert_eq!(
                report.statistics.page_hits + report.statistics.page_faults,
                report.statistics.total_references
            );
            prop_assert_eq!(report.steps.len(), reference.len());
        }
    }

    #[test]
    fn prop_engines_are_idempotent(
        processes in arb_processes(),
        reference in arb_reference_string(),
        frames in 1usize..8,
    ) {
        let a = scheduling::simulate(scheduling::Algorithm::RoundRobin, &processes, Some(3)).unwrap();
        let b = scheduling::simulate(scheduling::Algorithm::RoundRobin, &processes, Some(3)).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );

        let x = paging::simulate(paging::Algorithm::Lru, frames, &reference).unwrap();
        let y = paging::simulate(paging::Algorithm::Lru, frames, &reference).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&x).unwrap(),
            serde_json::to_string(&y).unwrap()
        );
    }
}
