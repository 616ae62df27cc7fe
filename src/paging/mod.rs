/*!
 * Page Replacement Engine
 * Step-by-step replacement simulation over a fixed frame count
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::PageRef;
use log::debug;

mod fifo;
mod lru;
mod optimal;
mod types;

pub use types::{Algorithm, PagingReport, PagingStatistics, Step};

/// Run one replacement simulation: process the reference string left to
/// right, one page at a time, against `page_frames` frames.
pub fn simulate(
    algorithm: Algorithm,
    page_frames: usize,
    reference_string: &[PageRef],
) -> Result<PagingReport> {
    validate(page_frames, reference_string)?;

    let steps = match algorithm {
        Algorithm::Fifo => fifo::run(page_frames, reference_string),
        Algorithm::Lru => lru::run(page_frames, reference_string),
        Algorithm::Optimal => optimal::run(page_frames, reference_string),
    };

    let total_references = reference_string.len();
    let page_faults = steps.iter().filter(|s| s.is_fault).count();
    let page_hits = total_references - page_faults;
    let hit_ratio = percentage(page_hits, total_references);
    let fault_ratio = percentage(page_faults, total_references);

    debug!(
        "paging run complete: algorithm={} references={} faults={}",
        algorithm.as_str(),
        total_references,
        page_faults
    );

    Ok(PagingReport {
        algorithm,
        page_frames,
        reference_string: reference_string.to_vec(),
        steps,
        statistics: PagingStatistics {
            total_references,
            page_faults,
            page_hits,
            hit_ratio,
            fault_ratio,
        },
    })
}

/// Two-decimal percentage string with a trailing `%`
fn percentage(count: usize, total: usize) -> String {
    format!("{:.2}%", (count as f64 / total as f64) * 100.0)
}

fn validate(page_frames: usize, reference_string: &[PageRef]) -> Result<()> {
    if page_frames == 0 {
        return Err(SimulationError::InvalidInput(
            "pageFrames must be greater than zero".to_string(),
        ));
    }
    if reference_string.is_empty() {
        return Err(SimulationError::InvalidInput(
            "reference string must not be empty".to_string(),
        ));
    }
    Ok(())
}
