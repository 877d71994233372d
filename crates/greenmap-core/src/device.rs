//! Device-responsive view parameters.
//!
//! Desktop and mobile layouts differ only in zoom defaults, which edge the
//! info panel occupies, and where the map controls sit.

use regex::Regex;

use crate::geo::LatLng;
use crate::projection::PanelLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Desktop,
    Mobile,
}

impl DeviceKind {
    /// Classifies a browser `User-Agent` string.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        let re = Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
            .expect("valid mobile user-agent regex");
        if re.is_match(user_agent) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Desktop => write!(f, "desktop"),
            DeviceKind::Mobile => write!(f, "mobile"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl std::fmt::Display for ControlCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlCorner::TopLeft => write!(f, "top-left"),
            ControlCorner::TopRight => write!(f, "top-right"),
            ControlCorner::BottomLeft => write!(f, "bottom-left"),
            ControlCorner::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// Where the map's scale bar, zoom buttons and recenter button sit. Kept on
/// the edge opposite the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    pub scale: ControlCorner,
    pub zoom: ControlCorner,
    pub recenter: ControlCorner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub kind: DeviceKind,
    /// Where the map opens and where "recenter" goes with no selection.
    pub default_location: LatLng,
    pub default_zoom: f64,
    /// Zoom used when focusing a selected location.
    pub focus_zoom: f64,
    pub panel: PanelLayout,
    pub controls: ControlLayout,
}

impl DeviceProfile {
    pub const DEFAULT_LOCATION: LatLng = LatLng::new(38.7369, -9.1427);

    #[must_use]
    pub fn desktop() -> Self {
        Self {
            kind: DeviceKind::Desktop,
            default_location: Self::DEFAULT_LOCATION,
            default_zoom: 13.0,
            focus_zoom: 16.0,
            panel: PanelLayout::Sidebar { width_pct: 30.0 },
            controls: ControlLayout {
                scale: ControlCorner::BottomLeft,
                zoom: ControlCorner::BottomRight,
                recenter: ControlCorner::BottomRight,
            },
        }
    }

    #[must_use]
    pub fn mobile() -> Self {
        Self {
            kind: DeviceKind::Mobile,
            default_location: Self::DEFAULT_LOCATION,
            default_zoom: 12.0,
            focus_zoom: 15.0,
            panel: PanelLayout::BottomPanel { height_pct: 8.0 },
            controls: ControlLayout {
                scale: ControlCorner::TopLeft,
                zoom: ControlCorner::TopRight,
                recenter: ControlCorner::TopRight,
            },
        }
    }

    #[must_use]
    pub fn for_kind(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Desktop => Self::desktop(),
            DeviceKind::Mobile => Self::mobile(),
        }
    }
}
