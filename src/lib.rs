//! # Goban Layout
//!
//! Board geometry for Go game record viewers and editors.
//!
//! A board view has to answer two questions over and over: *where do I draw
//! everything* for the current canvas size, and *which intersection did the
//! pointer hit*. This crate answers both without touching any graphics API.
//!
//! The board is fitted **into** the canvas. Grid, stone margin, coordinate
//! labels and the board border are described proportionally as a chain of
//! nested rectangles and scaled into real pixels in a single pass, so the
//! board keeps its aspect ratio at any size and intersections stay square.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     : Canvas, board size, label position
//!       ↓
//!   [layout]    : Region chain → fit into canvas → grid unit
//!       ↓
//!   BoardLayout : Bounds, stone metrics, grid ↔ pixel transforms
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;

use error::Result;
use layout::{compute_layout, LayoutInfo};
use model::LayoutRequest;

pub use error::LayoutError;

/// Compute the layout described by `request` and snapshot it, including
/// the hit-test results for any probes.
///
/// This is the primary entry point for one-shot callers. Views that resize
/// repeatedly should hold a [`layout::BoardLayoutEngine`] instead.
pub fn layout(request: &LayoutRequest) -> Result<LayoutInfo> {
    request.validate()?;
    let layout = compute_layout(request.canvas, request.board, request.labels, &request.config);
    Ok(LayoutInfo::from_layout(&layout, &request.probes))
}

/// Compute the layout for a JSON request and return the snapshot as
/// pretty-printed JSON.
pub fn layout_json(json: &str) -> Result<String> {
    let request: LayoutRequest = serde_json::from_str(json)?;
    let info = layout(&request)?;
    serde_json::to_string_pretty(&info).map_err(LayoutError::Serialize)
}
