/*!
 * Optimal (Belady) Page Replacement
 * Evicts the resident page whose next use is farthest in the future
 */

use super::types::Step;
use crate::core::types::PageRef;

/// On a full-capacity fault, every resident page is scored by the index of
/// its next occurrence in the remaining reference string; a page that never
/// recurs scores as infinitely far. The page with the largest score is
/// evicted (ties go to the first frame slot achieving the maximum, scanning
/// in frame order).
pub(super) fn run(page_frames: usize, references: &[PageRef]) -> Vec<Step> {
    let mut frames: Vec<Option<PageRef>> = vec![None; page_frames];
    let mut steps = Vec::with_capacity(references.len());

    for (index, page) in references.iter().enumerate() {
        let is_hit = frames.iter().any(|slot| slot.as_ref() == Some(page));
        let mut replaced_page = None;

        if !is_hit {
            let slot = match frames.iter().position(Option::is_none) {
                Some(empty) => empty,
                None => farthest_next_use(&frames, references, index + 1),
            };
            replaced_page = frames[slot].replace(page.clone());
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

/// Index of the frame slot whose page recurs farthest ahead (or never).
fn farthest_next_use(frames: &[Option<PageRef>], references: &[PageRef], from: usize) -> usize {
    let mut victim = 0;
    let mut victim_distance = next_use(&frames[0], references, from);

    for slot in 1..frames.len() {
        let distance = next_use(&frames[slot], references, from);
        if distance > victim_distance {
            victim = slot;
            victim_distance = distance;
        }
    }
    victim
}

/// Next occurrence of `slot`'s page at or after `from`. A page that never
/// recurs (or an empty slot) scores `usize::MAX`, farther than any real
/// index.
fn next_use(slot: &Option<PageRef>, references: &[PageRef], from: usize) -> usize {
    match slot {
        Some(page) => references[from..]
            .iter()
            .position(|r| r == page)
            .map_or(usize::MAX, |offset| from + offset),
        None => usize::MAX,
    }
}
