//! Structured error types for the board layout engine.
//!
//! Layout itself cannot fail once its inputs are valid. Errors come from the
//! edges: parsing a request, rejecting impossible dimensions, and asking the
//! engine to recompute before it has computed anything.

use thiserror::Error;

/// The unified error type returned by the public API.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// JSON input failed to parse as a layout request.
    #[error("failed to parse layout request: {source}\n  hint: {hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    /// A layout snapshot could not be written as JSON.
    #[error("failed to serialize layout: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid canvas {width}x{height}: both sides must be finite and positive")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid board {columns}x{rows}: both sides need at least one intersection")]
    InvalidBoard { columns: u32, rows: u32 },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    /// `recompute` was called before any `compute`.
    #[error("layout has not been computed yet")]
    NotComputed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout request schema. Check field names and types."
            }
            serde_json::error::Category::Eof => "Unexpected end of input. Is the JSON truncated?",
            serde_json::error::Category::Io => "The input could not be read.",
        };
        LayoutError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}
