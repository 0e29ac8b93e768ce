//! Map camera state handed to the host's renderer.

use crate::draft::Coordinate;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 22.0;
pub const MAX_PITCH: f64 = 85.0;

/// Zoom used when focusing on a single picked location.
const FOCUS_ZOOM: f64 = 15.0;

/// Camera over the map.
///
/// Constructors and setters keep the camera in range: bearing wraps into
/// `[0, 360)`, pitch clamps to `[0, MAX_PITCH]` and zoom to
/// `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: Coordinate,
    zoom: f64,
    bearing: f64,
    pitch: f64,
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: f64, bearing: f64, pitch: f64) -> Self {
        Self {
            center,
            zoom: clamp_or(zoom, MIN_ZOOM, MAX_ZOOM, MIN_ZOOM),
            bearing: normalize_bearing(bearing),
            pitch: clamp_or(pitch, 0.0, MAX_PITCH, 0.0),
        }
    }

    /// Flat, north-up camera over `center`.
    pub fn centered_on(center: Coordinate, zoom: f64) -> Self {
        Self::new(center, zoom, 0.0, 0.0)
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Move to `target`, zooming in at least to street level.
    pub fn focus(&self, target: Coordinate) -> Self {
        Self::new(target, self.zoom.max(FOCUS_ZOOM), self.bearing, self.pitch)
    }

    pub fn rotated(&self, degrees: f64) -> Self {
        Self::new(self.center, self.zoom, self.bearing + degrees, self.pitch)
    }

    pub fn tilted(&self, pitch: f64) -> Self {
        Self::new(self.center, self.zoom, self.bearing, pitch)
    }
}

fn normalize_bearing(bearing: f64) -> f64 {
    if !bearing.is_finite() {
        return 0.0;
    }
    let wrapped = bearing.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negatives
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Draws a viewport. Rendering is a side effect with no result.
pub trait MapRenderer {
    fn render(&self, viewport: &Viewport);
}
