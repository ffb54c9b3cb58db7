//! # Layout Constants
//!
//! The margin, gap and shadow proportions used by the board layout. The
//! defaults reproduce the classic board look; callers that want a tighter or
//! looser board pass their own [`LayoutConfig`] to
//! [`BoardLayoutEngine::with_config`](crate::layout::BoardLayoutEngine::with_config).

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Free space around the board image, as a fraction of the shorter
    /// stage side.
    pub stage_margin_fraction: f64,
    /// Border between the coordinate-label region and the board image edge,
    /// as a fraction of the label region's shorter side.
    pub board_image_margin_fraction: f64,
    /// Gap between neighbouring stones, as a fraction of the grid unit.
    pub stone_gap_fraction: f64,
    /// Stone shadow blur radius is `stone_size / shadow_radius_divisor`.
    pub shadow_radius_divisor: f64,
    /// Stone shadow offset is `stone_size / shadow_offset_divisor`.
    pub shadow_offset_divisor: f64,
    /// Grid line thickness as a fraction of the grid unit.
    pub grid_line_thickness_fraction: f64,
    /// Grid lines never get thinner than this many pixels.
    pub min_grid_line_thickness: f64,
    /// Board image drop shadow offset, as a fraction of the shorter stage side.
    pub board_shadow_offset_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stage_margin_fraction: 0.02,
            board_image_margin_fraction: 0.01,
            stone_gap_fraction: 0.01,
            shadow_radius_divisor: 8.0,
            shadow_offset_divisor: 16.0,
            grid_line_thickness_fraction: 0.04,
            min_grid_line_thickness: 1.0,
            board_shadow_offset_fraction: 0.005,
        }
    }
}

impl LayoutConfig {
    /// Fractions must be finite and in `[0, 1)`, divisors finite and
    /// positive, the minimum line thickness finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("stageMarginFraction", self.stage_margin_fraction),
            ("boardImageMarginFraction", self.board_image_margin_fraction),
            ("stoneGapFraction", self.stone_gap_fraction),
            ("gridLineThicknessFraction", self.grid_line_thickness_fraction),
            ("boardShadowOffsetFraction", self.board_shadow_offset_fraction),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }

        let divisors = [
            ("shadowRadiusDivisor", self.shadow_radius_divisor),
            ("shadowOffsetDivisor", self.shadow_offset_divisor),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !self.min_grid_line_thickness.is_finite() || self.min_grid_line_thickness < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "minGridLineThickness must be non-negative, got {}",
                self.min_grid_line_thickness
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "stoneGapFraction": 0.05 }"#).unwrap();
        assert_eq!(config.stone_gap_fraction, 0.05);
        assert_eq!(config.stage_margin_fraction, 0.02);
        assert_eq!(config.shadow_radius_divisor, 8.0);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let config = LayoutConfig {
            stone_gap_fraction: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stoneGapFraction"));
    }

    #[test]
    fn rejects_zero_divisor() {
        let config = LayoutConfig {
            shadow_offset_divisor: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
    }
}
