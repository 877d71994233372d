mod report;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use greenmap_client::{AccessibilityClient, SearchClient};
use greenmap_core::{
    offset_center, AppConfig, Environment, LatLng, RouteWeightScale, ViewportSize,
};
use greenmap_view::{FeedbackChoice, HeadlessSurface, MapController, ViewSettings};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "greenmap-cli")]
#[command(about = "Green-space accessibility lookups from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct PointArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, value_parser = finite_f64)]
    lat: f64,
    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, value_parser = finite_f64)]
    lon: f64,
}

/// Rejects `NaN` and infinities, which `f64::from_str` accepts.
fn finite_f64(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number {raw:?}: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got {raw}"))
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up places matching a free-text query
    Search {
        /// Address or place name (at least 3 characters)
        query: String,
    },
    /// Fetch and display the accessibility score for a point
    Score {
        #[command(flatten)]
        point: PointArgs,
        /// Search radius in meters (defaults to GREENMAP_BUFFER_M)
        #[arg(long)]
        buffer: Option<f64>,
    },
    /// Score a point, then record whether the result matched your experience
    Feedback {
        #[command(flatten)]
        point: PointArgs,
        /// Record a thumbs-up
        #[arg(long, conflicts_with = "dislike", required_unless_present = "dislike")]
        like: bool,
        /// Record a thumbs-down
        #[arg(long)]
        dislike: bool,
    },
    /// Print the map center that keeps a point visible beside the panel
    Center {
        #[command(flatten)]
        point: PointArgs,
        /// Zoom level (defaults to the device focus zoom)
        #[arg(long, value_parser = finite_f64)]
        zoom: Option<f64>,
        /// Map width in pixels
        #[arg(long, default_value = "1280")]
        width: f64,
        /// Map height in pixels
        #[arg(long, default_value = "720")]
        height: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = greenmap_core::load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!matches!(config.env, Environment::Production))
        .init();
    tracing::debug!(env = %config.env, device = %config.device.kind, "configuration loaded");

    match cli.command {
        Commands::Search { query } => run_search(&config, &query).await,
        Commands::Score { point, buffer } => run_score(&config, &point, buffer).await,
        Commands::Feedback {
            point,
            like,
            dislike: _,
        } => {
            let choice = if like {
                FeedbackChoice::Liked
            } else {
                FeedbackChoice::Disliked
            };
            run_feedback(&config, &point, choice).await
        }
        Commands::Center {
            point,
            zoom,
            width,
            height,
        } => {
            run_center(&config, &point, zoom, ViewportSize::new(width, height));
            Ok(())
        }
    }
}

async fn run_search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    if query.chars().count() < greenmap_view::MIN_QUERY_CHARS {
        anyhow::bail!(
            "query must be at least {} characters",
            greenmap_view::MIN_QUERY_CHARS
        );
    }
    let client = SearchClient::new(
        &config.search_url,
        config.search_bounds.clone(),
        config.search_limit,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let places = client.search(query).await?;
    print!("{}", report::places(&places));
    Ok(())
}

fn headless_controller(
    config: &AppConfig,
    buffer: Option<f64>,
) -> MapController<HeadlessSurface> {
    let mut settings = ViewSettings::from_config(config);
    if let Some(buffer_m) = buffer {
        settings.buffer_m = buffer_m;
    }
    MapController::new(HeadlessSurface::new(ViewportSize::new(1280.0, 720.0)), settings)
}

fn accessibility_client(config: &AppConfig) -> anyhow::Result<AccessibilityClient> {
    Ok(AccessibilityClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}

async fn run_score(
    config: &AppConfig,
    point: &PointArgs,
    buffer: Option<f64>,
) -> anyhow::Result<()> {
    if buffer.is_some_and(|b| !b.is_finite() || b <= 0.0) {
        anyhow::bail!("--buffer must be a positive number of meters");
    }
    let api = accessibility_client(config)?;
    let mut controller = headless_controller(config, buffer);

    controller.select_location(LatLng::new(point.lat, point.lon));
    controller.request_score(&api).await?;
    print!("{}", report::score(&controller));
    Ok(())
}

async fn run_feedback(
    config: &AppConfig,
    point: &PointArgs,
    choice: FeedbackChoice,
) -> anyhow::Result<()> {
    let api = accessibility_client(config)?;
    let mut controller = headless_controller(config, None);

    controller.select_location(LatLng::new(point.lat, point.lon));
    controller.request_score(&api).await?;
    print!("{}", report::score(&controller));

    if controller.send_feedback(&api, choice).await {
        println!("Feedback saved.");
    } else {
        println!("Feedback could not be saved.");
    }
    Ok(())
}

fn run_center(config: &AppConfig, point: &PointArgs, zoom: Option<f64>, viewport: ViewportSize) {
    let profile = &config.device;
    let zoom = zoom.unwrap_or(profile.focus_zoom);
    let target = LatLng::new(point.lat, point.lon);
    let center = offset_center(target, zoom, viewport, profile.panel);
    let weight = RouteWeightScale::default().weight(zoom);

    println!("device:       {}", profile.kind);
    println!("target:       {target}");
    println!("view center:  {center}");
    println!("zoom:         {zoom}");
    println!("route weight: {weight:.2}");
    println!(
        "controls:     scale {}, zoom {}, recenter {}",
        profile.controls.scale, profile.controls.zoom, profile.controls.recenter
    );
}

#[cfg(test)]
mod tests;
