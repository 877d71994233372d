//! The rendering seam between the controller and a concrete map widget.

use greenmap_client::Geometry;
use greenmap_core::{ControlLayout, LatLng, ShapeStyle, ViewportSize};

/// Handle for a layer added to a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// One park polygon with its popup text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkShape {
    pub geometry: Geometry,
    pub style: ShapeStyle,
    pub popup: String,
}

/// A transient overlay tied to the current selection or result.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker {
        at: LatLng,
    },
    Circle {
        center: LatLng,
        radius_m: f64,
        style: ShapeStyle,
    },
    Parks(Vec<ParkShape>),
    /// Drawn above every other overlay.
    Route {
        geometry: Geometry,
        style: ShapeStyle,
    },
}

/// What the controller needs from an interactive map.
pub trait MapSurface {
    /// Current container size in pixels.
    fn viewport(&self) -> ViewportSize;

    /// Current zoom level.
    fn zoom(&self) -> f64;

    fn set_base_layer(&mut self, tile_url_template: &str);

    /// Moves the scale, zoom and recenter controls to their corners.
    fn place_controls(&mut self, controls: ControlLayout);

    fn set_view(&mut self, center: LatLng, zoom: f64);

    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Removing an id that is no longer present is a no-op.
    fn remove_layer(&mut self, id: LayerId);

    fn restyle_layer(&mut self, id: LayerId, style: ShapeStyle);

    /// Blocking, user-facing notice.
    fn alert(&mut self, message: &str);
}
