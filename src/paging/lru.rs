/*!
 * LRU Page Replacement
 * Evicts the resident page with the oldest last use
 */

use super::types::Step;
use crate::core::types::PageRef;

/// Frames carry a per-slot last-used step index, refreshed on every hit.
/// A fault fills the first empty slot while capacity remains; once full it
/// evicts the slot with the smallest last-used index (ties go to the lowest
/// slot index, first found by linear scan).
pub(super) fn run(page_frames: usize, references: &[PageRef]) -> Vec<Step> {
    let mut frames: Vec<Option<PageRef>> = vec![None; page_frames];
    let mut last_used: Vec<usize> = vec![0; page_frames];
    let mut steps = Vec::with_capacity(references.len());

    for (index, page) in references.iter().enumerate() {
        let hit_slot = frames
            .iter()
            .position(|slot| slot.as_ref() == Some(page));
        let mut replaced_page = None;

        match hit_slot {
            Some(slot) => last_used[slot] = index,
            None => {
                let slot = match frames.iter().position(Option::is_none) {
                    Some(empty) => empty,
                    None => {
                        let mut oldest = 0;
                        for slot in 1..page_frames {
                            if last_used[slot] < last_used[oldest] {
                                oldest = slot;
                            }
                        }
                        oldest
                    }
                };
                replaced_page = frames[slot].replace(page.clone());
                last_used[slot] = index;
            }
        }

        steps.push(Step {
            step: index + 1,
            page: page.clone(),
            frames: frames.clone(),
            is_hit: hit_slot.is_some(),
            is_fault: hit_slot.is_none(),
            replaced_page,
        });
    }

    steps
}
