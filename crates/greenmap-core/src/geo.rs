use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parses a pair of free-text coordinate fields.
    ///
    /// Returns `None` when either field is blank or not a finite number;
    /// callers treat that as "no selection" rather than an error.
    #[must_use]
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lon = lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self { lat, lon })
    }

    /// Formats one axis the way the coordinate inputs display it.
    #[must_use]
    pub fn format_axis(value: f64) -> String {
        format!("{value:.6}")
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// Absolute pixel coordinate in the projected plane at some zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Size of the map container in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
