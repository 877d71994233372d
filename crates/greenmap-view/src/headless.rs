//! In-memory [`MapSurface`] that records what a real map would display.
//!
//! Used by the CLI to drive the controller without a browser, and by tests
//! to inspect overlays.

use std::collections::BTreeMap;

use greenmap_core::{ControlLayout, LatLng, ShapeStyle, ViewportSize};

use crate::surface::{Layer, LayerId, MapSurface};

#[derive(Debug)]
pub struct HeadlessSurface {
    viewport: ViewportSize,
    center: LatLng,
    zoom: f64,
    base_layer: Option<String>,
    controls: Option<ControlLayout>,
    layers: BTreeMap<LayerId, Layer>,
    next_id: u64,
    alerts: Vec<String>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            center: LatLng::new(0.0, 0.0),
            zoom: 0.0,
            base_layer: None,
            controls: None,
            layers: BTreeMap::new(),
            next_id: 1,
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn base_layer(&self) -> Option<&str> {
        self.base_layer.as_deref()
    }

    #[must_use]
    pub fn controls(&self) -> Option<ControlLayout> {
        self.controls
    }

    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Simulates the user zooming without moving the center.
    pub fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Number of layers of each kind: `(markers, circles, park groups, routes)`.
    #[must_use]
    pub fn layer_counts(&self) -> (usize, usize, usize, usize) {
        self.layers
            .values()
            .fold((0, 0, 0, 0), |(m, c, p, r), layer| match layer {
                Layer::Marker { .. } => (m + 1, c, p, r),
                Layer::Circle { .. } => (m, c + 1, p, r),
                Layer::Parks(_) => (m, c, p + 1, r),
                Layer::Route { .. } => (m, c, p, r + 1),
            })
    }
}

impl MapSurface for HeadlessSurface {
    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_base_layer(&mut self, tile_url_template: &str) {
        self.base_layer = Some(tile_url_template.to_owned());
    }

    fn place_controls(&mut self, controls: ControlLayout) {
        self.controls = Some(controls);
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        tracing::trace!(lat = center.lat, lon = center.lon, zoom, "set view");
        self.center = center;
        self.zoom = zoom;
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.remove(&id);
    }

    fn restyle_layer(&mut self, id: LayerId, style: ShapeStyle) {
        match self.layers.get_mut(&id) {
            Some(Layer::Route { style: current, .. } | Layer::Circle { style: current, .. }) => {
                *current = style;
            }
            Some(Layer::Parks(shapes)) => {
                for shape in shapes {
                    shape.style = style.clone();
                }
            }
            Some(Layer::Marker { .. }) | None => {}
        }
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!(message, "alert");
        self.alerts.push(message.to_owned());
    }
}
