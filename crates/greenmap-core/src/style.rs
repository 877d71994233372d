//! Overlay styling: zoom-responsive route weight and the fixed shape styles
//! used for the buffer circle, park polygons and the nearest-park route.

/// Linear stroke-weight scale between two zoom bounds.
///
/// Zoom values outside `[min_zoom, max_zoom]` are clamped first, so the
/// weight never leaves `[weight_at_max_zoom, weight_at_min_zoom]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteWeightScale {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub weight_at_min_zoom: f64,
    pub weight_at_max_zoom: f64,
}

impl Default for RouteWeightScale {
    fn default() -> Self {
        Self {
            min_zoom: 12.0,
            max_zoom: 18.0,
            weight_at_min_zoom: 8.0,
            weight_at_max_zoom: 2.0,
        }
    }
}

impl RouteWeightScale {
    /// Stroke weight for the route at `zoom`.
    #[must_use]
    pub fn weight(&self, zoom: f64) -> f64 {
        let span = self.max_zoom - self.min_zoom;
        if span <= 0.0 {
            return self.weight_at_min_zoom;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        self.weight_at_min_zoom
            + ((clamped - self.min_zoom) / span) * (self.weight_at_max_zoom - self.weight_at_min_zoom)
    }
}

/// Stroke and fill parameters handed to the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
}

impl ShapeStyle {
    /// Search-radius circle drawn around the selected location.
    #[must_use]
    pub fn buffer_circle() -> Self {
        Self {
            color: "#0ee071".to_owned(),
            weight: 3.0,
            opacity: 1.0,
            fill_color: Some("#0ee071".to_owned()),
            fill_opacity: 0.07,
        }
    }

    /// Park polygon outline and fill.
    #[must_use]
    pub fn park() -> Self {
        Self {
            color: "#4ade80".to_owned(),
            weight: 1.0,
            opacity: 1.0,
            fill_color: None,
            fill_opacity: 0.4,
        }
    }

    /// Nearest-park route line at the given zoom.
    #[must_use]
    pub fn route(scale: &RouteWeightScale, zoom: f64) -> Self {
        Self {
            color: "#f92672".to_owned(),
            weight: scale.weight(zoom),
            opacity: 0.95,
            fill_color: None,
            fill_opacity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn weight_hits_both_bounds_and_midpoint() {
        let s = RouteWeightScale::default();
        assert!(approx(s.weight(12.0), 8.0));
        assert!(approx(s.weight(18.0), 2.0));
        assert!(approx(s.weight(15.0), 5.0));
    }

    #[test]
    fn weight_clamps_out_of_range_zoom() {
        let s = RouteWeightScale::default();
        assert!(approx(s.weight(5.0), s.weight(12.0)));
        assert!(approx(s.weight(30.0), s.weight(18.0)));
    }

    #[test]
    fn weight_is_monotonic_non_increasing() {
        let s = RouteWeightScale::default();
        let mut previous = f64::INFINITY;
        let mut zoom = 0.0;
        while zoom <= 22.0 {
            let w = s.weight(zoom);
            assert!(w <= previous, "weight rose at zoom {zoom}: {w} > {previous}");
            previous = w;
            zoom += 0.25;
        }
    }

    #[test]
    fn degenerate_scale_returns_min_zoom_weight() {
        let s = RouteWeightScale {
            min_zoom: 14.0,
            max_zoom: 14.0,
            weight_at_min_zoom: 6.0,
            weight_at_max_zoom: 1.0,
        };
        assert!(approx(s.weight(20.0), 6.0));
    }

    #[test]
    fn route_style_carries_zoom_weight() {
        let style = ShapeStyle::route(&RouteWeightScale::default(), 16.5);
        assert!(approx(style.weight, 2.0 + 1.5));
        assert!(style.fill_color.is_none());
    }
}
