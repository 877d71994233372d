//! Spherical (Web) Mercator projection and offset-aware recentering.
//!
//! Pixel space follows the slippy-map convention: at zoom `z` the world is a
//! square of `256 * 2^z` pixels with the origin in the north-west corner and
//! `y` growing southwards.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::geo::{LatLng, PixelPoint, ViewportSize};

const TILE_SIZE: f64 = 256.0;
const EARTH_RADIUS_M: f64 = 6_378_137.0;
const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Portion of the map container covered by an opaque panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelLayout {
    /// Nothing covers the map.
    Unobscured,
    /// A panel along the left edge covering `width_pct` percent of the width.
    Sidebar { width_pct: f64 },
    /// A panel along the bottom edge covering `height_pct` percent of the height.
    BottomPanel { height_pct: f64 },
}

impl PanelLayout {
    /// Pixel shift, in projected space, that moves the view center so a
    /// point at that center lands in the middle of the uncovered area.
    #[must_use]
    pub fn compensation(self, viewport: ViewportSize) -> PixelPoint {
        match self {
            Self::Unobscured => PixelPoint { x: 0.0, y: 0.0 },
            Self::Sidebar { width_pct } => PixelPoint {
                x: -(viewport.width * width_pct / 100.0) / 2.0,
                y: 0.0,
            },
            Self::BottomPanel { height_pct } => PixelPoint {
                x: 0.0,
                y: (viewport.height * height_pct / 100.0) / 2.0,
            },
        }
    }
}

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Projects a coordinate to absolute pixel space at `zoom`.
///
/// Latitudes beyond the Mercator limit are clamped.
#[must_use]
pub fn project(point: LatLng, zoom: f64) -> PixelPoint {
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let mx = EARTH_RADIUS_M * point.lon.to_radians();
    let my = EARTH_RADIUS_M * (FRAC_PI_4 + lat / 2.0).tan().ln();

    let k = 0.5 / (PI * EARTH_RADIUS_M);
    let size = world_size(zoom);
    PixelPoint {
        x: size * (k * mx + 0.5),
        y: size * (-k * my + 0.5),
    }
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(pixel: PixelPoint, zoom: f64) -> LatLng {
    let k = 0.5 / (PI * EARTH_RADIUS_M);
    let size = world_size(zoom);
    let mx = (pixel.x / size - 0.5) / k;
    let my = (pixel.y / size - 0.5) / -k;

    LatLng {
        lat: (2.0 * (my / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees(),
        lon: (mx / EARTH_RADIUS_M).to_degrees(),
    }
}

/// Returns the view center that keeps `point` centered in the visible part
/// of a map partially covered by `layout`.
///
/// The point is projected at `zoom`, shifted by half the covered extent and
/// unprojected again. With nothing covered this is the plain
/// project/unproject round trip.
#[must_use]
pub fn offset_center(
    point: LatLng,
    zoom: f64,
    viewport: ViewportSize,
    layout: PanelLayout,
) -> LatLng {
    let projected = project(point, zoom);
    let shift = layout.compensation(viewport);
    unproject(
        PixelPoint {
            x: projected.x + shift.x,
            y: projected.y + shift.y,
        },
        zoom,
    )
}
