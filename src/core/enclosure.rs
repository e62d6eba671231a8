use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRAVITY, DEFAULT_WALL_BOTTOM, DEFAULT_WALL_LEFT, DEFAULT_WALL_RIGHT, DEFAULT_WALL_TOP,
};

/// Static axis-aligned rectangular boundary with an ambient gravity constant.
///
/// The enclosure never changes once built; the body embeds a copy at
/// construction and only ever reads it. Wall coordinates must satisfy
/// `left < right` and `bottom < top`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enclosure {
    /// Signed vertical acceleration in m/s² (negative = downward).
    pub gravity: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Default for Enclosure {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            left: DEFAULT_WALL_LEFT,
            bottom: DEFAULT_WALL_BOTTOM,
            right: DEFAULT_WALL_RIGHT,
            top: DEFAULT_WALL_TOP,
        }
    }
}

impl Enclosure {
    pub fn new(gravity: f64, left: f64, bottom: f64, right: f64, top: f64) -> Self {
        debug_assert!(left < right, "left wall must lie left of the right wall");
        debug_assert!(bottom < top, "bottom wall must lie below the top wall");
        Self {
            gravity,
            left,
            bottom,
            right,
            top,
        }
    }

    /// Horizontal extent of the interior.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent of the interior.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}
