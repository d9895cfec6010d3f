//! Canvas-space value types and the connection-curve helper.

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from canvas coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An explicit width/height override for a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a size from explicit dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pan/zoom state of the canvas view.
///
/// The core does not clamp the scale; the renderer decides its own zoom
/// limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

/// Builds the SVG path for a connection curve between two points.
///
/// The curve is a cubic Bezier whose control points sit at 0.4x the
/// horizontal distance from each endpoint, with control-point y pinned to
/// the endpoint's y. This gives a horizontal S-curve regardless of vertical
/// offset.
#[must_use]
pub fn curve_path(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    let dx = (x2 - x1).abs();
    let cx1 = x1 + dx * 0.4;
    let cx2 = x2 - dx * 0.4;
    format!("M {x1} {y1} C {cx1} {y1}, {cx2} {y2}, {x2} {y2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_path_horizontal() {
        let path = curve_path(0.0, 0.0, 100.0, 0.0);
        assert_eq!(path, "M 0 0 C 40 0, 60 0, 100 0");
    }

    #[test]
    fn curve_path_control_y_pinned_to_endpoints() {
        let path = curve_path(120.0, 160.0, 380.0, 240.0);
        // dx = 260, so control x offsets are 104 from each end
        assert_eq!(path, "M 120 160 C 224 160, 276 240, 380 240");
    }

    #[test]
    fn curve_path_right_to_left() {
        let path = curve_path(100.0, 50.0, 0.0, 150.0);
        assert_eq!(path, "M 100 50 C 140 50, -40 150, 0 150");
    }

    #[test]
    fn viewport_defaults_to_identity() {
        let vp = Viewport::default();
        assert_eq!(vp.x, 0.0);
        assert_eq!(vp.y, 0.0);
        assert_eq!(vp.scale, 1.0);
    }
}
