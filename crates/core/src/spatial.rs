//! Read-only lookup structures over the generated layout.
//!
//! A [`BoothIndex`] is built once (usually at server start) and shared behind
//! an `Arc`. Nothing in it is mutated after construction.

use std::collections::HashMap;

use serde::Serialize;

use crate::layout::{
    aisle_midline, generate_layout, is_edge_row, BoothDefinition, Segment, BOOTH_WIDTH,
    CANVAS_PADDING, ROW_GAP,
};

/// Horizontal pixel extent of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowBounds {
    min_x: i32,
    max_x: i32,
}

/// Row and segment under a canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentLocation {
    pub row: char,
    pub segment: Segment,
}

/// Size of the drawing surface needed to show the whole layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasDimensions {
    pub width: i32,
    pub height: i32,
}

/// Lookup structures derived from a layout.
#[derive(Debug, Clone)]
pub struct BoothIndex {
    booths: Vec<BoothDefinition>,
    by_id: HashMap<String, usize>,
    /// Booths per `(row, segment)`, sorted top to bottom.
    segments: HashMap<(char, Segment), Vec<BoothDefinition>>,
    /// Row extents in layout order (leftmost first).
    row_bounds: Vec<(char, RowBounds)>,
    canvas: CanvasDimensions,
}

impl BoothIndex {
    /// Generate the venue layout and index it.
    pub fn build() -> Self {
        Self::new(generate_layout())
    }

    /// Index an already generated layout.
    pub fn new(booths: Vec<BoothDefinition>) -> Self {
        let by_id = booths
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();

        let mut segments: HashMap<(char, Segment), Vec<BoothDefinition>> = HashMap::new();
        let mut row_bounds: Vec<(char, RowBounds)> = Vec::new();
        let mut max_x = 0;
        let mut max_y = 0;

        for booth in &booths {
            segments
                .entry((booth.row, booth.segment))
                .or_default()
                .push(booth.clone());

            match row_bounds.iter_mut().find(|(row, _)| *row == booth.row) {
                Some((_, bounds)) => {
                    bounds.min_x = bounds.min_x.min(booth.x);
                    bounds.max_x = bounds.max_x.max(booth.right());
                }
                None => row_bounds.push((
                    booth.row,
                    RowBounds {
                        min_x: booth.x,
                        max_x: booth.right(),
                    },
                )),
            }

            max_x = max_x.max(booth.right());
            max_y = max_y.max(booth.bottom());
        }

        for list in segments.values_mut() {
            list.sort_by_key(|b| b.y);
        }

        Self {
            booths,
            by_id,
            segments,
            row_bounds,
            canvas: CanvasDimensions {
                width: max_x + CANVAS_PADDING,
                height: max_y + CANVAS_PADDING,
            },
        }
    }

    /// Every booth, in generation order.
    pub fn booths(&self) -> &[BoothDefinition] {
        &self.booths
    }

    pub fn len(&self) -> usize {
        self.booths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BoothDefinition> {
        self.by_id.get(id).map(|&i| &self.booths[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Booths of one segment ordered top to bottom. Empty for unknown segments.
    ///
    /// This vertical order defines contiguity for placement.
    pub fn segment_booths(&self, row: char, segment: Segment) -> &[BoothDefinition] {
        self.segments
            .get(&(row, segment))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn canvas_dimensions(&self) -> CanvasDimensions {
        self.canvas
    }

    /// Row whose horizontal extent (widened by half a row gap) contains `x`.
    pub fn row_at(&self, x: f64) -> Option<char> {
        let tolerance = f64::from(ROW_GAP) / 2.0;
        self.row_bounds
            .iter()
            .find(|(_, bounds)| {
                x >= f64::from(bounds.min_x) - tolerance && x <= f64::from(bounds.max_x) + tolerance
            })
            .map(|(row, _)| *row)
    }

    /// Row and segment under a canvas position.
    pub fn segment_at(&self, x: f64, y: f64) -> Option<SegmentLocation> {
        let row = self.row_at(x)?;
        let is_top_half = y < f64::from(aisle_midline());

        if is_edge_row(row) {
            let segment = if is_top_half { Segment::Two } else { Segment::One };
            return Some(SegmentLocation { row, segment });
        }

        let (_, bounds) = self.row_bounds.iter().find(|(r, _)| *r == row)?;
        // Midpoint between the left column's left edge and the right column's right edge.
        let right_col_x = bounds.max_x - BOOTH_WIDTH;
        let mid_x = f64::from(bounds.min_x + right_col_x + BOOTH_WIDTH) / 2.0;
        let is_right_col = x >= mid_x;

        let segment = match (is_top_half, is_right_col) {
            (true, true) => Segment::Two,
            (true, false) => Segment::Three,
            (false, true) => Segment::One,
            (false, false) => Segment::Four,
        };
        Some(SegmentLocation { row, segment })
    }
}
