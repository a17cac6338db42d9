//! Viewport rectangle
//!
//! The visible window onto model space. Pan/zoom presentation (aspect-ratio
//! fitting, screen mapping) is the renderer's concern; the model only tracks
//! the rectangle and derives the cursor-precision scale from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Margin applied when fitting extents, so shapes don't sit exactly on the
/// window edge
const FIT_MARGIN: f32 = 1.03;

/// Smallest fitted dimension, guarding degenerate (axis-aligned) extents
const MIN_FIT_SIZE: f32 = 1.0;

/// Default scale factor between viewport height and pick precision
pub const DEFAULT_PRECISION_FACTOR: f32 = 0.002;

/// Visible rectangle in model space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 400.0,
        }
    }
}

impl ViewBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the given extents with a small margin
    pub fn fit(min: Vec2, max: Vec2) -> Self {
        let size = (max - min).max(Vec2::splat(MIN_FIT_SIZE));
        let extra = size * (FIT_MARGIN - 1.0);
        Self {
            x: min.x - extra.x / 2.0,
            y: min.y - extra.y / 2.0,
            width: size.x * FIT_MARGIN,
            height: size.y * FIT_MARGIN,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Pick precision at the current zoom level
    pub fn cursor_precision(&self, factor: f32) -> f32 {
        factor * self.height
    }
}
