pub mod app_config;
pub mod config;
pub mod device;
pub mod geo;
pub mod projection;
pub mod style;

pub use app_config::{AppConfig, Environment, SearchBounds};
pub use config::{load_app_config, load_app_config_from_env};
pub use device::{ControlCorner, ControlLayout, DeviceKind, DeviceProfile};
pub use geo::{LatLng, PixelPoint, ViewportSize};
pub use projection::{offset_center, project, unproject, PanelLayout};
pub use style::{RouteWeightScale, ShapeStyle};

use thiserror::Error;

/// Errors raised while assembling [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
