//! Contiguous booth-run search within a segment.
//!
//! A run is a window over a segment's booths in vertical order. Segments hold
//! at most eight booths, so every search is a linear scan; these functions run
//! on every pointer move during a drag.

use std::collections::HashSet;

use crate::layout::{BoothDefinition, Segment, BOOTH_HEIGHT};
use crate::spatial::BoothIndex;

/// Every run of `count` free booths in the segment, topmost first.
pub fn find_valid_placements(
    index: &BoothIndex,
    row: char,
    segment: Segment,
    count: usize,
    occupied: &HashSet<String>,
) -> Vec<Vec<String>> {
    if count == 0 {
        return Vec::new();
    }

    index
        .segment_booths(row, segment)
        .windows(count)
        .filter(|window| window.iter().all(|b| !occupied.contains(&b.id)))
        .map(|window| window.iter().map(|b| b.id.clone()).collect())
        .collect()
}

/// The free run of `count` booths whose vertical centre is closest to
/// `target_y`. Ties go to the topmost run.
///
/// Returns `None` when the segment does not exist, holds fewer than `count`
/// booths, or has no free run of that length.
pub fn find_best_placement(
    index: &BoothIndex,
    row: char,
    segment: Segment,
    count: usize,
    target_y: f64,
    occupied: &HashSet<String>,
) -> Option<Vec<String>> {
    if count == 0 {
        return None;
    }

    let mut best: Option<(&[BoothDefinition], f64)> = None;

    for window in index.segment_booths(row, segment).windows(count) {
        if window.iter().any(|b| occupied.contains(&b.id)) {
            continue;
        }
        let first = &window[0];
        let last = &window[window.len() - 1];
        let center_y = f64::from(first.y + last.y + BOOTH_HEIGHT) / 2.0;
        let distance = (center_y - target_y).abs();

        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((window, distance));
        }
    }

    best.map(|(window, _)| window.iter().map(|b| b.id.clone()).collect())
}

/// A run of `count` booths centred on `booth_id` within its segment,
/// ignoring occupancy.
///
/// The window starts `(count - 1) / 2` booths above the anchor and is shifted
/// to stay inside the segment. Returns `None` for unknown booths, a zero
/// `count`, or a segment smaller than `count`.
pub fn contiguous_group_around(
    index: &BoothIndex,
    booth_id: &str,
    count: usize,
) -> Option<Vec<String>> {
    if count == 0 {
        return None;
    }

    let booth = index.get(booth_id)?;
    let booths = index.segment_booths(booth.row, booth.segment);
    if booths.len() < count {
        return None;
    }
    let idx = booths.iter().position(|b| b.id == booth_id)?;

    let half_before = (count - 1) / 2;
    let start = idx.saturating_sub(half_before).min(booths.len() - count);

    Some(booths[start..start + count].iter().map(|b| b.id.clone()).collect())
}
