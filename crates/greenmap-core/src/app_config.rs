use crate::device::DeviceProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Geographic restriction applied to geocoding queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBounds {
    /// Comma-separated ISO 3166-1 alpha-2 codes, e.g. `"pt"`.
    pub country_codes: String,
    /// `west,north,east,south` in decimal degrees.
    pub viewbox: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub device: DeviceProfile,
    pub search_url: String,
    pub search_bounds: SearchBounds,
    pub search_limit: u32,
    pub api_base_url: String,
    pub buffer_m: f64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub tile_url: String,
}
