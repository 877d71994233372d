use crate::app_config::{AppConfig, Environment, SearchBounds};
use crate::device::{DeviceKind, DeviceProfile};
use crate::ConfigError;

const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("GREENMAP_ENV", "development"))?;
    let log_level = or_default("GREENMAP_LOG_LEVEL", "info");
    let browser_user_agent = lookup("GREENMAP_BROWSER_USER_AGENT").ok();
    let device = DeviceProfile::for_kind(parse_device(
        &or_default("GREENMAP_DEVICE", "auto"),
        browser_user_agent.as_deref(),
    )?);

    let search_url = or_default("GREENMAP_SEARCH_URL", DEFAULT_SEARCH_URL);
    let country_codes = or_default("GREENMAP_SEARCH_COUNTRY_CODES", "pt");
    let viewbox = parse_viewbox(&or_default(
        "GREENMAP_SEARCH_VIEWBOX",
        "-9.25,38.85,-9.05,38.65",
    ))?;
    let search_limit = parse_u32("GREENMAP_SEARCH_LIMIT", "10")?;

    let api_base_url = or_default("GREENMAP_API_BASE_URL", "http://localhost:8000");
    let buffer_raw = or_default("GREENMAP_BUFFER_M", "500");
    let buffer_m = buffer_raw
        .parse::<f64>()
        .map_err(|e| invalid("GREENMAP_BUFFER_M", e.to_string()))?;
    if !buffer_m.is_finite() || buffer_m <= 0.0 {
        return Err(invalid(
            "GREENMAP_BUFFER_M",
            format!("must be a positive number of meters, got {buffer_raw}"),
        ));
    }

    let request_timeout_secs = parse_u64("GREENMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "GREENMAP_USER_AGENT",
        "greenmap/0.1 (green-space-accessibility)",
    );
    let tile_url = or_default("GREENMAP_TILE_URL", DEFAULT_TILE_URL);

    Ok(AppConfig {
        env,
        log_level,
        device,
        search_url,
        search_bounds: SearchBounds {
            country_codes,
            viewbox,
        },
        search_limit,
        api_base_url,
        buffer_m,
        request_timeout_secs,
        user_agent,
        tile_url,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GREENMAP_ENV".to_string(),
            reason: format!("expected development, test or production, got {other}"),
        }),
    }
}

/// `auto` classifies the browser user agent, falling back to desktop when
/// none is configured.
fn parse_device(s: &str, browser_user_agent: Option<&str>) -> Result<DeviceKind, ConfigError> {
    match s {
        "desktop" => Ok(DeviceKind::Desktop),
        "mobile" => Ok(DeviceKind::Mobile),
        "auto" => Ok(browser_user_agent.map_or(DeviceKind::Desktop, DeviceKind::from_user_agent)),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GREENMAP_DEVICE".to_string(),
            reason: format!("expected desktop, mobile or auto, got {other}"),
        }),
    }
}

/// An empty viewbox disables bounding; otherwise four comma-separated
/// degrees are required.
fn parse_viewbox(s: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    let all_numeric = parts.iter().all(|p| p.parse::<f64>().is_ok());
    if parts.len() != 4 || !all_numeric {
        return Err(ConfigError::InvalidEnvVar {
            var: "GREENMAP_SEARCH_VIEWBOX".to_string(),
            reason: format!("expected west,north,east,south degrees, got {trimmed}"),
        });
    }
    Ok(Some(parts.join(",")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
