//! Venue geometry and the booth layout generator.
//!
//! The venue is a fixed grid of 17 rows laid out left to right (`Q` .. `A`).
//! Each row is split by a horizontal aisle; middle rows also have a left and a
//! right booth column, edge rows only the right one. The generator is pure and
//! always yields the same 480 booths, so exported layouts stay comparable
//! across releases.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::booth_id::booth_id;

// ---------------------------------------------------------------------------
// Geometry constants (pixels)
// ---------------------------------------------------------------------------

pub const BOOTH_WIDTH: i32 = 48;
pub const BOOTH_HEIGHT: i32 = 48;
/// Vertical gap between two booths of the same segment.
pub const BOOTH_GAP: i32 = 2;
/// Gap between the top and bottom halves of a row.
pub const AISLE_GAP: i32 = 40;
/// Gap between the left and right columns of a middle row.
pub const SEGMENT_SIDE_GAP: i32 = 8;
/// Gap between two adjacent rows.
pub const ROW_GAP: i32 = 16;
pub const CANVAS_PADDING: i32 = 40;

/// Number of booth slots in the top half of a column.
pub const TOP_SLOTS: i32 = 8;
/// Number of booth slots in the bottom half of a column.
pub const BOTTOM_SLOTS: i32 = 7;

/// Row letters as rendered on screen, leftmost first.
pub const ALL_ROWS: [char; 17] = [
    'Q', 'P', 'O', 'N', 'M', 'L', 'K', 'J', 'I', 'H', 'G', 'F', 'E', 'D', 'C', 'B', 'A',
];

/// Rows that only have the right-hand column.
pub const EDGE_ROWS: [char; 2] = ['A', 'Q'];

/// Total number of booths in the venue.
pub const TOTAL_BOOTHS: usize = 480;

/// Returns `true` for the two outermost rows.
pub fn is_edge_row(row: char) -> bool {
    EDGE_ROWS.contains(&row)
}

/// Returns `true` if `row` is one of the 17 venue rows.
pub fn is_valid_row(row: char) -> bool {
    ALL_ROWS.contains(&row)
}

/// Highest booth number used by a row (15 for edge rows, 30 otherwise).
pub fn max_booth_number(row: char) -> u8 {
    if is_edge_row(row) {
        15
    } else {
        30
    }
}

/// Top of the first booth in the bottom half of every row.
pub const fn bottom_half_top() -> i32 {
    CANVAS_PADDING + TOP_SLOTS * (BOOTH_HEIGHT + BOOTH_GAP) + AISLE_GAP
}

/// Horizontal line through the middle of the aisle.
pub const fn aisle_midline() -> i32 {
    CANVAS_PADDING + TOP_SLOTS * (BOOTH_HEIGHT + BOOTH_GAP) + AISLE_GAP / 2
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One quadrant of a row.
///
/// ```text
///            left col   right col
/// top half   Three      Two
/// --------------- aisle ----------
/// bottom     Four       One
/// ```
///
/// Edge rows only have `Two` and `One`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Segment {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Segment {
    pub const ALL: [Segment; 4] = [Segment::One, Segment::Two, Segment::Three, Segment::Four];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Whether the segment exists in the given row.
    pub fn exists_in(self, row: char) -> bool {
        is_valid_row(row) && (!is_edge_row(row) || matches!(self, Segment::One | Segment::Two))
    }
}

impl From<Segment> for u8 {
    fn from(segment: Segment) -> u8 {
        segment.number()
    }
}

impl TryFrom<u8> for Segment {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Segment::One),
            2 => Ok(Segment::Two),
            3 => Ok(Segment::Three),
            4 => Ok(Segment::Four),
            other => Err(format!("Invalid segment '{other}'. Must be 1-4")),
        }
    }
}

// ---------------------------------------------------------------------------
// Booth definition
// ---------------------------------------------------------------------------

/// A single generated booth with its pixel rectangle on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoothDefinition {
    /// Internal identifier, e.g. `"G-14"`.
    pub id: String,
    pub row: char,
    pub number: u8,
    pub segment: Segment,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoothDefinition {
    fn new(row: char, number: u8, segment: Segment, x: i32, y: i32) -> Self {
        Self {
            id: booth_id(row, number),
            row,
            number,
            segment,
            x,
            y,
            width: BOOTH_WIDTH,
            height: BOOTH_HEIGHT,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether two rectangles share any interior pixel.
    pub fn overlaps(&self, other: &BoothDefinition) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Pushes one column of booths, top to bottom, with the given numbers.
fn push_column(
    booths: &mut Vec<BoothDefinition>,
    row: char,
    segment: Segment,
    x: i32,
    top: i32,
    numbers: impl Iterator<Item = u8>,
) {
    for (slot, number) in numbers.enumerate() {
        let y = top + slot as i32 * (BOOTH_HEIGHT + BOOTH_GAP);
        booths.push(BoothDefinition::new(row, number, segment, x, y));
    }
}

/// Booth numbers `first..first + len`, as `u8`.
fn numbers(first: i32, len: i32) -> RangeInclusive<u8> {
    first as u8..=(first + len - 1) as u8
}

/// Generate the complete venue layout.
///
/// Numbering per column, read top to bottom:
/// - segment 3: 16..=23 ascending
/// - segment 2: 15..=8 descending
/// - segment 4: 24..=30 ascending
/// - segment 1: 7..=1 descending
pub fn generate_layout() -> Vec<BoothDefinition> {
    let mut booths = Vec::with_capacity(TOTAL_BOOTHS);
    let (top, bottom) = (CANVAS_PADDING, bottom_half_top());
    let seg1 = numbers(1, BOTTOM_SLOTS);
    let seg2 = numbers(BOTTOM_SLOTS + 1, TOP_SLOTS);
    let seg3 = numbers(BOTTOM_SLOTS + TOP_SLOTS + 1, TOP_SLOTS);
    let seg4 = numbers(BOTTOM_SLOTS + 2 * TOP_SLOTS + 1, BOTTOM_SLOTS);
    let mut current_x = CANVAS_PADDING;

    for row in ALL_ROWS {
        if is_edge_row(row) {
            let x = current_x;
            push_column(&mut booths, row, Segment::Two, x, top, seg2.clone().rev());
            push_column(&mut booths, row, Segment::One, x, bottom, seg1.clone().rev());

            current_x += BOOTH_WIDTH + ROW_GAP;
        } else {
            let left_x = current_x;
            let right_x = current_x + BOOTH_WIDTH + SEGMENT_SIDE_GAP;

            push_column(&mut booths, row, Segment::Three, left_x, top, seg3.clone());
            push_column(&mut booths, row, Segment::Two, right_x, top, seg2.clone().rev());
            push_column(&mut booths, row, Segment::Four, left_x, bottom, seg4.clone());
            push_column(&mut booths, row, Segment::One, right_x, bottom, seg1.clone().rev());

            current_x += 2 * BOOTH_WIDTH + SEGMENT_SIDE_GAP + ROW_GAP;
        }
    }

    debug_assert_eq!(booths.len(), TOTAL_BOOTHS);
    booths
}
