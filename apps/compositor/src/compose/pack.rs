//! Page Packer — greedy first-fit partition of measured blocks into pages.
//!
//! # Packing rules
//! - Blocks keep their relative order; a block is never split across pages.
//! - A page accumulates blocks while `running + next <= max_content_height`;
//!   the first block that would exceed the budget starts a new page.
//! - Forced placement: an oversized block (taller than the budget) landing
//!   on an empty page is placed there alone, never dropped, so packing
//!   always makes forward progress.
//! - Empty input yields exactly one empty page, never zero pages.
//!
//! Greedy first-fit is deliberate: resume blocks have no weights or
//! priorities, so minimizing page count beyond greedy has no value, and the
//! single O(n) loop is trivial to reason about.

/// Partitions `blocks` into pages under `max_content_height`.
///
/// `heights` is the parallel measurement vector produced by the prober; the
/// two must have equal length.
pub fn pack_into_pages<T>(blocks: Vec<T>, heights: &[f32], max_content_height: f32) -> Vec<Vec<T>> {
    debug_assert_eq!(blocks.len(), heights.len(), "heights must parallel blocks");

    if blocks.is_empty() {
        return vec![Vec::new()];
    }

    let mut pages: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut running = 0.0_f32;

    for (block, &height) in blocks.into_iter().zip(heights.iter()) {
        if !current.is_empty() && running + height > max_content_height {
            pages.push(std::mem::take(&mut current));
            running = 0.0;
        }
        // On an empty page even an oversized block is placed (forced placement).
        current.push(block);
        running += height;
    }
    pages.push(current);

    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Packs heights as their own payload, so pages read as height lists.
    fn pack_heights(heights: &[f32], max: f32) -> Vec<Vec<f32>> {
        pack_into_pages(heights.to_vec(), heights, max)
    }

    // ── spec scenarios ──────────────────────────────────────────────────────

    #[test]
    fn test_scenario_a_greedy_first_fit() {
        let pages = pack_heights(&[100.0, 100.0, 100.0, 100.0, 100.0], 250.0);
        assert_eq!(
            pages,
            vec![vec![100.0, 100.0], vec![100.0, 100.0], vec![100.0]]
        );
    }

    #[test]
    fn test_scenario_b_forced_placement_single_oversized() {
        let pages = pack_heights(&[500.0], 250.0);
        assert_eq!(pages, vec![vec![500.0]]);
    }

    #[test]
    fn test_scenario_c_empty_input_single_empty_page() {
        let pages = pack_heights(&[], 250.0);
        assert_eq!(pages, vec![Vec::<f32>::new()]);
    }

    #[test]
    fn test_scenario_d_oversized_block_never_joins_a_page() {
        let pages = pack_heights(&[50.0, 260.0], 250.0);
        assert_eq!(pages, vec![vec![50.0], vec![260.0]]);
    }

    // ── properties ──────────────────────────────────────────────────────────

    #[test]
    fn test_order_preserved_no_drop_no_duplicate() {
        let heights: Vec<f32> = vec![
            120.0, 40.0, 300.0, 80.0, 80.0, 900.0, 10.0, 10.0, 10.0, 250.0, 199.0,
        ];
        let pages = pack_heights(&heights, 250.0);
        let rejoined: Vec<f32> = pages.into_iter().flatten().collect();
        assert_eq!(rejoined, heights);
    }

    #[test]
    fn test_no_page_overflows_except_forced_singletons() {
        let heights: Vec<f32> = vec![100.0, 200.0, 400.0, 30.0, 30.0, 30.0, 260.0, 100.0];
        let max = 250.0;
        for page in pack_heights(&heights, max) {
            let total: f32 = page.iter().sum();
            if total > max {
                assert_eq!(
                    page.len(),
                    1,
                    "an overflowing page must be a forced singleton"
                );
                assert!(page[0] > max);
            }
        }
    }

    #[test]
    fn test_exact_fit_stays_on_page() {
        // running + next == max is within budget
        let pages = pack_heights(&[150.0, 100.0], 250.0);
        assert_eq!(pages, vec![vec![150.0, 100.0]]);
    }

    #[test]
    fn test_repacking_is_idempotent() {
        let heights: Vec<f32> = vec![90.0, 90.0, 90.0, 500.0, 10.0, 240.0, 5.0];
        let max = 250.0;
        let first = pack_heights(&heights, max);
        let rejoined: Vec<f32> = first.iter().flatten().copied().collect();
        let second = pack_heights(&rejoined, max);
        assert_eq!(first, second);
    }

    #[test]
    fn test_never_zero_pages() {
        assert_eq!(pack_heights(&[], 1.0).len(), 1);
        assert_eq!(pack_heights(&[0.5], 1.0).len(), 1);
    }

    #[test]
    fn test_many_oversized_blocks_one_page_each() {
        let pages = pack_heights(&[300.0, 300.0, 300.0], 250.0);
        assert_eq!(pages, vec![vec![300.0], vec![300.0], vec![300.0]]);
    }

    #[test]
    fn test_payload_order_matches_height_order() {
        // Pack labeled payloads to check the generic path, not just heights
        let blocks = vec!["a", "b", "c", "d"];
        let heights = [100.0, 100.0, 100.0, 100.0];
        let pages = pack_into_pages(blocks, &heights, 250.0);
        assert_eq!(pages, vec![vec!["a", "b"], vec!["c", "d"]]);
    }
}
