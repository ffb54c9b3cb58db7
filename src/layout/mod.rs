//! # Board Layout Engine
//!
//! Turns a canvas size, a board size and a label position into every pixel
//! measurement a board renderer needs, and maps pointer positions back onto
//! intersections.
//!
//! ## How a layout is computed
//!
//! The absolute size of anything is unknown until the very end, so the
//! regions are first described *proportionally* and only then fitted into
//! the canvas:
//!
//! 1. Fit a rectangle with the board's aspect ratio into the stage. Only its
//!    proportions matter; it becomes the grid region.
//! 2. Estimate a provisional stone size from it.
//! 3. Build the region chain outward: grid → stones (one stone of margin) →
//!    coordinate labels → board image (a thin border).
//! 4. Fit the chain into the real stage, keeping a stage margin free.
//! 5. Recompute the grid unit from the now-pixel grid so intersections are
//!    square, then trim the grid symmetrically to an exact number of units.
//!
//! The result is an immutable [`BoardLayout`]. [`BoardLayoutEngine`] keeps
//! the last one around together with its inputs so that toggling the label
//! position can [`recompute`](BoardLayoutEngine::recompute) without the
//! caller re-supplying sizes.

pub mod chain;
pub mod labels;
pub mod star_points;

use log::{debug, warn};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{center_fit, Edges, Point, Rect};
use crate::model::{BoardSize, Canvas, LabelPosition};
use chain::{ContainerStrategy, LayoutChain, LayoutRect};
use labels::LabelAnchor;

/// A board intersection, `(0, 0)` at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Intersection {
    pub x: u32,
    pub y: u32,
}

impl Intersection {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Everything a renderer needs to draw one board at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    board: BoardSize,
    label_position: LabelPosition,
    stage: Rect,
    chain: LayoutChain,
    board_bounds: Rect,
    coordinate_label_bounds: Rect,
    stone_bounds: Rect,
    grid_bounds: Rect,
    grid_unit: f64,
    stone_size: f64,
    stone_gap: f64,
    shadow_radius: f64,
    stone_shadow_offset: f64,
    grid_line_thickness: f64,
    board_shadow_offset: f64,
}

/// Compute a layout from scratch. No input validation happens here; zero
/// board dimensions or a degenerate canvas give NaN-filled results.
pub fn compute_layout(
    canvas: Canvas,
    board: BoardSize,
    label_position: LabelPosition,
    config: &LayoutConfig,
) -> BoardLayout {
    let stage = Rect::from_size(canvas.width, canvas.height);
    let columns = f64::from(board.columns);
    let rows = f64::from(board.rows);

    let proportional = center_fit(&stage, columns / rows, 0.0);
    let provisional_stone =
        (proportional.width / columns + proportional.height / rows) / 2.0;

    let grid = LayoutRect::new(proportional.width, proportional.height);
    let stones = grid.with_uniform_margin(provisional_stone, ContainerStrategy::Center);
    let label_region = labels::wrap_coordinate_labels(stones, label_position, provisional_stone);
    let border = label_region.bounds().min_side() * config.board_image_margin_fraction;
    let board_image = label_region.with_uniform_margin(border, ContainerStrategy::Center);

    let chain = board_image.finalize(stage, stage.min_side() * config.stage_margin_fraction);

    // [board image, coordinate labels (absent for None), stones, grid]
    let board_bounds = chain.root();
    let coordinate_label_bounds = chain.levels()[1];
    let stone_bounds = chain.levels()[chain.len() - 2];
    let scaled_grid = chain.leaf();

    let column_span = f64::from(board.column_span());
    let row_span = f64::from(board.row_span());
    let grid_unit = (scaled_grid.width / column_span).min(scaled_grid.height / row_span);
    let stone_gap = grid_unit * config.stone_gap_fraction;
    let stone_size = grid_unit - stone_gap;

    let excess_width = scaled_grid.width - grid_unit * column_span;
    let excess_height = scaled_grid.height - grid_unit * row_span;
    let grid_bounds = scaled_grid.clip(Edges::symmetric(excess_height / 2.0, excess_width / 2.0));

    debug!(
        "computed {}x{} board on {}x{} canvas ({:?}): grid unit {:.3}, stone {:.3}",
        board.columns, board.rows, canvas.width, canvas.height, label_position, grid_unit, stone_size
    );

    BoardLayout {
        board,
        label_position,
        stage,
        board_bounds,
        coordinate_label_bounds,
        stone_bounds,
        grid_bounds,
        grid_unit,
        stone_size,
        stone_gap,
        shadow_radius: stone_size / config.shadow_radius_divisor,
        stone_shadow_offset: stone_size / config.shadow_offset_divisor,
        grid_line_thickness: (grid_unit * config.grid_line_thickness_fraction)
            .max(config.min_grid_line_thickness),
        board_shadow_offset: stage.min_side() * config.board_shadow_offset_fraction,
        chain,
    }
}

impl BoardLayout {
    pub fn board_size(&self) -> BoardSize {
        self.board
    }

    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    /// The whole canvas.
    pub fn stage_bounds(&self) -> Rect {
        self.stage
    }

    /// The board image, including its border.
    pub fn board_bounds(&self) -> Rect {
        self.board_bounds
    }

    /// The region holding the labels and the stones. Same as
    /// [`stone_bounds`](Self::stone_bounds) when labels are off.
    pub fn coordinate_label_bounds(&self) -> Rect {
        self.coordinate_label_bounds
    }

    /// The region edge stones may reach.
    pub fn stone_bounds(&self) -> Rect {
        self.stone_bounds
    }

    /// The rectangle spanned by the outermost grid lines.
    pub fn grid_bounds(&self) -> Rect {
        self.grid_bounds
    }

    /// The finalized region chain, board image first, grid region (before
    /// trimming to whole units) last.
    pub fn chain(&self) -> &LayoutChain {
        &self.chain
    }

    /// Distance between neighbouring intersections.
    pub fn grid_unit(&self) -> f64 {
        self.grid_unit
    }

    pub fn stone_size(&self) -> f64 {
        self.stone_size
    }

    pub fn stone_gap(&self) -> f64 {
        self.stone_gap
    }

    pub fn shadow_radius(&self) -> f64 {
        self.shadow_radius
    }

    pub fn stone_shadow_offset(&self) -> f64 {
        self.stone_shadow_offset
    }

    pub fn grid_line_thickness(&self) -> f64 {
        self.grid_line_thickness
    }

    pub fn board_border_shadow_offset(&self) -> f64 {
        self.board_shadow_offset
    }

    /// Pixel center of intersection `(x, y)`.
    pub fn intersection_center(&self, x: u32, y: u32) -> Point {
        Point::new(
            self.grid_bounds.x + self.grid_unit * f64::from(x),
            self.grid_bounds.y + self.grid_unit * f64::from(y),
        )
    }

    /// Top-left draw position for an object of the given size centered on
    /// intersection `(x, y)`.
    pub fn grid_render_position(&self, x: u32, y: u32, width: f64, height: f64) -> Point {
        let center = self.intersection_center(x, y);
        Point::new(center.x - width / 2.0, center.y - height / 2.0)
    }

    /// Top-left draw position for a stone on intersection `(x, y)`.
    pub fn stone_render_position(&self, x: u32, y: u32) -> Point {
        self.grid_render_position(x, y, self.stone_size, self.stone_size)
    }

    /// The intersection nearest to pixel `(x, y)`, or `None` if the point is
    /// more than half a grid unit outside the grid on any side.
    pub fn grid_position(&self, x: f64, y: f64) -> Option<Intersection> {
        let grid = self.grid_bounds;
        let half = self.grid_unit / 2.0;
        let inside = x >= grid.x - half
            && x <= grid.right() + half
            && y >= grid.y - half
            && y <= grid.bottom() + half;
        if !inside {
            return None;
        }

        let snap = |offset: f64, count: u32| {
            let index = (offset / self.grid_unit).round().max(0.0) as u32;
            index.min(count - 1)
        };
        Some(Intersection::new(
            snap(x - grid.x, self.board.columns),
            snap(y - grid.y, self.board.rows),
        ))
    }

    pub fn star_points(&self) -> Vec<Intersection> {
        star_points::star_points(self.board.columns, self.board.rows)
    }

    /// Pixel centers of the board's star points.
    pub fn star_point_positions(&self) -> Vec<Point> {
        self.star_points()
            .into_iter()
            .map(|p| self.intersection_center(p.x, p.y))
            .collect()
    }

    /// Where to draw each coordinate label. Empty when labels are off.
    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        labels::label_anchors(self)
    }
}

/// Owns the layout for one board view and recomputes it on demand.
#[derive(Debug, Clone, Default)]
pub struct BoardLayoutEngine {
    config: LayoutConfig,
    inputs: Option<(Canvas, BoardSize)>,
    layout: Option<BoardLayout>,
}

impl BoardLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `board` on `canvas`, replacing any previous layout.
    pub fn compute(
        &mut self,
        canvas: Canvas,
        board: BoardSize,
        label_position: LabelPosition,
    ) -> &BoardLayout {
        self.inputs = Some((canvas, board));
        self.layout
            .insert(compute_layout(canvas, board, label_position, &self.config))
    }

    /// Lay out again with the last canvas and board but a new label position.
    pub fn recompute(&mut self, label_position: LabelPosition) -> Result<&BoardLayout> {
        let Some((canvas, board)) = self.inputs else {
            warn!("recompute({label_position:?}) requested before any compute");
            return Err(LayoutError::NotComputed);
        };
        let layout: &BoardLayout = self
            .layout
            .insert(compute_layout(canvas, board, label_position, &self.config));
        Ok(layout)
    }

    pub fn has_computed_once(&self) -> bool {
        self.layout.is_some()
    }

    /// The most recent layout, if any.
    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }
}

// ── Serializable snapshot (for the CLI and debugging) ───────────────

/// A flat, serializable view of a [`BoardLayout`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    pub board: BoardSize,
    pub labels: LabelPosition,
    pub stage_bounds: Rect,
    pub board_bounds: Rect,
    pub coordinate_label_bounds: Rect,
    pub stone_bounds: Rect,
    pub grid_bounds: Rect,
    pub grid_unit: f64,
    pub stone_size: f64,
    pub stone_gap: f64,
    pub shadow_radius: f64,
    pub stone_shadow_offset: f64,
    pub grid_line_thickness: f64,
    pub board_border_shadow_offset: f64,
    pub star_points: Vec<Point>,
    pub label_anchors: Vec<LabelAnchor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<ProbeResult>,
}

/// The outcome of hit-testing one pixel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub point: Point,
    pub intersection: Option<Intersection>,
}

impl LayoutInfo {
    pub fn from_layout(layout: &BoardLayout, probes: &[Point]) -> Self {
        Self {
            board: layout.board_size(),
            labels: layout.label_position(),
            stage_bounds: layout.stage_bounds(),
            board_bounds: layout.board_bounds(),
            coordinate_label_bounds: layout.coordinate_label_bounds(),
            stone_bounds: layout.stone_bounds(),
            grid_bounds: layout.grid_bounds(),
            grid_unit: layout.grid_unit(),
            stone_size: layout.stone_size(),
            stone_gap: layout.stone_gap(),
            shadow_radius: layout.shadow_radius(),
            stone_shadow_offset: layout.stone_shadow_offset(),
            grid_line_thickness: layout.grid_line_thickness(),
            board_border_shadow_offset: layout.board_border_shadow_offset(),
            star_points: layout.star_point_positions(),
            label_anchors: layout.label_anchors(),
            probes: probes
                .iter()
                .map(|&point| ProbeResult {
                    point,
                    intersection: layout.grid_position(point.x, point.y),
                })
                .collect(),
        }
    }
}
