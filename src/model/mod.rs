//! # Layout Request Model
//!
//! The input side of the engine: how big the canvas is, how many
//! intersections the board has and where coordinate labels go. A
//! [`LayoutRequest`] bundles these into the JSON document the CLI and
//! [`crate::layout_json`] accept.
//!
//! The engine trusts whatever it is given. Validation happens here, at the
//! boundary, through the checked constructors and [`LayoutRequest::validate`].

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::Point;

/// Which sides of the board carry coordinate labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    #[default]
    None,
    TopAndLeft,
    BottomAndRight,
    AllSides,
}

impl LabelPosition {
    pub const ALL: [LabelPosition; 4] = [
        LabelPosition::None,
        LabelPosition::TopAndLeft,
        LabelPosition::BottomAndRight,
        LabelPosition::AllSides,
    ];

    pub fn has_top(self) -> bool {
        matches!(self, LabelPosition::TopAndLeft | LabelPosition::AllSides)
    }

    pub fn has_left(self) -> bool {
        self.has_top()
    }

    pub fn has_bottom(self) -> bool {
        matches!(self, LabelPosition::BottomAndRight | LabelPosition::AllSides)
    }

    pub fn has_right(self) -> bool {
        self.has_bottom()
    }
}

/// Drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// A canvas with finite, strictly positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Board dimensions in intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    #[serde(alias = "width")]
    pub columns: u32,
    #[serde(alias = "height")]
    pub rows: u32,
}

impl BoardSize {
    /// The standard 19×19 board.
    pub const STANDARD: BoardSize = BoardSize {
        columns: 19,
        rows: 19,
    };

    /// A board with at least one intersection on each axis.
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        let board = Self { columns, rows };
        board.validate()?;
        Ok(board)
    }

    /// A square board.
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns >= 1 && self.rows >= 1 {
            Ok(())
        } else {
            Err(LayoutError::InvalidBoard {
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Number of grid units spanned horizontally: `columns - 1`, but at
    /// least one so a single-column board still has a unit to measure.
    pub fn column_span(&self) -> u32 {
        self.columns.saturating_sub(1).max(1)
    }

    /// Vertical counterpart of [`column_span`](Self::column_span).
    pub fn row_span(&self) -> u32 {
        self.rows.saturating_sub(1).max(1)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A complete layout request, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub canvas: Canvas,

    #[serde(default)]
    pub board: BoardSize,

    #[serde(default)]
    pub labels: LabelPosition,

    /// Overrides for the layout constants.
    #[serde(default)]
    pub config: LayoutConfig,

    /// Pixel positions to hit-test against the finished layout.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<Point>,
}

impl LayoutRequest {
    pub fn new(canvas: Canvas, board: BoardSize, labels: LabelPosition) -> Self {
        Self {
            canvas,
            board,
            labels,
            config: LayoutConfig::default(),
            probes: vec![],
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.board.validate()?;
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_non_positive_and_non_finite() {
        assert!(Canvas::new(100.0, 50.0).is_ok());
        assert!(matches!(
            Canvas::new(0.0, 50.0),
            Err(LayoutError::InvalidCanvas { .. })
        ));
        assert!(Canvas::new(10.0, -1.0).is_err());
        assert!(Canvas::new(f64::NAN, 10.0).is_err());
        assert!(Canvas::new(f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn board_rejects_zero_dimension() {
        assert!(BoardSize::new(1, 1).is_ok());
        assert!(matches!(
            BoardSize::new(0, 19),
            Err(LayoutError::InvalidBoard { columns: 0, rows: 19 })
        ));
    }

    #[test]
    fn spans_never_drop_below_one() {
        let board = BoardSize { columns: 1, rows: 19 };
        assert_eq!(board.column_span(), 1);
        assert_eq!(board.row_span(), 18);
        assert_eq!(BoardSize { columns: 2, rows: 2 }.column_span(), 1);
    }

    #[test]
    fn label_position_sides() {
        assert!(!LabelPosition::None.has_top());
        assert!(LabelPosition::TopAndLeft.has_left() && !LabelPosition::TopAndLeft.has_bottom());
        assert!(LabelPosition::BottomAndRight.has_right() && !LabelPosition::BottomAndRight.has_top());
        assert!(LabelPosition::AllSides.has_top() && LabelPosition::AllSides.has_bottom());
    }

    #[test]
    fn request_defaults_from_minimal_json() {
        let req: LayoutRequest =
            serde_json::from_str(r#"{ "canvas": { "width": 640, "height": 480 } }"#).unwrap();
        assert_eq!(req.board, BoardSize::STANDARD);
        assert_eq!(req.labels, LabelPosition::None);
        assert!(req.probes.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn request_reads_camel_case_labels() {
        let req: LayoutRequest = serde_json::from_str(
            r#"{
                "canvas": { "width": 640, "height": 480 },
                "board": { "columns": 9, "rows": 9 },
                "labels": "bottomAndRight",
                "probes": [{ "x": 1.0, "y": 2.0 }]
            }"#,
        )
        .unwrap();
        assert_eq!(req.labels, LabelPosition::BottomAndRight);
        assert_eq!(req.board, BoardSize { columns: 9, rows: 9 });
        assert_eq!(req.probes, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn request_validate_reports_bad_board() {
        let req = LayoutRequest::new(
            Canvas { width: 100.0, height: 100.0 },
            BoardSize { columns: 0, rows: 0 },
            LabelPosition::None,
        );
        assert!(matches!(req.validate(), Err(LayoutError::InvalidBoard { .. })));
    }
}
