/*!
 * FIFO Page Replacement
 * Circular replacement pointer advancing only on faults
 */

use super::types::Step;
use crate::core::types::PageRef;

/// The pointer walks the fixed-size frame array circularly. Early on it may
/// land on an empty slot, in which case nothing real is evicted and
/// `replaced_page` stays `None`.
pub(super) fn run(page_frames: usize, references: &[PageRef]) -> Vec<Step> {
    let mut frames: Vec<Option<PageRef>> = vec![None; page_frames];
    let mut pointer = 0;
    let mut steps = Vec::with_capacity(references.len());

    for (index, page) in references.iter().enumerate() {
        let is_hit = frames.iter().any(|slot| slot.as_ref() == Some(page));
        let mut replaced_page = None;

        if !is_hit {
            replaced_page = frames[pointer].replace(page.clone());
            pointer = (pointer + 1) % page_frames;
        }

        steps.push(Step {
            step: index + 1,
            page: page.clone(),
            frames: frames.clone(),
            is_hit,
            is_fault: !is_hit,
            replaced_page,
        });
    }

    steps
}
