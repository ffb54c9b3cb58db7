//! # Coordinate Labels
//!
//! Labels push the grid away from whichever edges carry them, by exactly one
//! stone width, so labels and intersections never overlap. The clamp
//! strategies keep the stones hugging the edge opposite the labels instead of
//! drifting back to the center when the margins are one-sided.

use serde::Serialize;

use super::chain::{ContainerStrategy, LayoutRect};
use super::BoardLayout;
use crate::geometry::{Edges, Point};
use crate::model::LabelPosition;

/// Wrap the stone region in a coordinate-label region for `position`.
///
/// | Position | Margins | Strategy |
/// |---|---|---|
/// | `None` | none, `stones` is returned unchanged | n/a |
/// | `TopAndLeft` | right, bottom | `ClampBottomRight` |
/// | `BottomAndRight` | top, left | `ClampTopLeft` |
/// | `AllSides` | all four | `Center` |
pub fn wrap_coordinate_labels(
    stones: LayoutRect,
    position: LabelPosition,
    stone_size: f64,
) -> LayoutRect {
    let s = stone_size;
    match position {
        LabelPosition::None => stones,
        LabelPosition::TopAndLeft => stones.with_margin(
            Edges::new(0.0, s, s, 0.0),
            ContainerStrategy::ClampBottomRight,
        ),
        LabelPosition::BottomAndRight => stones.with_margin(
            Edges::new(s, 0.0, 0.0, s),
            ContainerStrategy::ClampTopLeft,
        ),
        LabelPosition::AllSides => stones.with_uniform_margin(s, ContainerStrategy::Center),
    }
}

/// Which board edge a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// A coordinate label and the pixel point its text should be centered on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub text: String,
    pub side: LabelSide,
    pub position: Point,
}

const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Column label for a zero-based column: `A`..`Z` without `I`, then `AA`,
/// `AB`, … for boards wider than 25.
pub fn column_label(column: u32) -> String {
    let base = COLUMN_LETTERS.len() as u32;
    let mut n = column + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(COLUMN_LETTERS[(n % base) as usize] as char);
        n /= base;
    }
    letters.iter().rev().collect()
}

/// Row label for a zero-based row counted from the top. The bottom row is 1.
pub fn row_label(row: u32, rows: u32) -> String {
    (rows - row).to_string()
}

/// Anchor points for every label drawn by `layout`'s label position.
///
/// Labels are centered in the strip between the label region edge and the
/// stone region edge on their side, aligned with their column or row.
pub(crate) fn label_anchors(layout: &BoardLayout) -> Vec<LabelAnchor> {
    let position = layout.label_position();
    if position == LabelPosition::None {
        return vec![];
    }

    let labels = layout.coordinate_label_bounds();
    let stones = layout.stone_bounds();
    let board = layout.board_size();
    let mut anchors = Vec::new();

    let mut columns = |side: LabelSide, y: f64| {
        for column in 0..board.columns {
            anchors.push(LabelAnchor {
                text: column_label(column),
                side,
                position: Point::new(layout.intersection_center(column, 0).x, y),
            });
        }
    };
    if position.has_top() {
        columns(LabelSide::Top, (labels.y + stones.y) / 2.0);
    }
    if position.has_bottom() {
        columns(LabelSide::Bottom, (stones.bottom() + labels.bottom()) / 2.0);
    }

    let mut rows = |side: LabelSide, x: f64| {
        for row in 0..board.rows {
            anchors.push(LabelAnchor {
                text: row_label(row, board.rows),
                side,
                position: Point::new(x, layout.intersection_center(0, row).y),
            });
        }
    };
    if position.has_left() {
        rows(LabelSide::Left, (labels.x + stones.x) / 2.0);
    }
    if position.has_right() {
        rows(LabelSide::Right, (stones.right() + labels.right()) / 2.0);
    }

    anchors
}
