//! Wire types for the geocoder and the accessibility API.
//!
//! ## Observed shapes
//!
//! ### Geocoder (`/search?format=json`)
//! A JSON array of places. `lat` and `lon` arrive as **decimal strings**
//! (`"38.7369"`), not numbers; both forms are accepted.
//!
//! ### Accessibility score
//! When at least one park lies inside the buffer the response carries
//! `scores.parks`, `buffer_m` and optionally `nearest_park_route`. When none
//! does, the API returns only the zeroed scores and `parks_found: 0`, so
//! those fields default. Park `geometry` is produced by `ST_AsGeoJSON` and
//! may be serialized either as a GeoJSON object or as a string holding one.
//! Park `type` and `name` can be `null` for unclassified green areas.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use geojson::{Geometry, Value};
use greenmap_core::LatLng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One geocoder suggestion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub display_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub lon: f64,
}

impl Place {
    #[must_use]
    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Ok(n),
        NumOrString::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid coordinate {s:?}: {e}"))),
    }
}

/// Park polygons and routes arrive either as a GeoJSON geometry object or
/// as a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum GeometryRepr {
    Object(Geometry),
    Text(String),
}

impl GeometryRepr {
    fn into_geometry<E: de::Error>(self) -> Result<Geometry, E> {
        match self {
            Self::Object(geometry) => Ok(geometry),
            Self::Text(text) => Geometry::from_str(&text)
                .map_err(|e| de::Error::custom(format!("invalid GeoJSON geometry string: {e}"))),
        }
    }
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Geometry, D::Error>
where
    D: Deserializer<'de>,
{
    GeometryRepr::deserialize(deserializer)?.into_geometry()
}

fn lenient_optional_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<GeometryRepr>::deserialize(deserializer)?
        .map(GeometryRepr::into_geometry)
        .transpose()
}

/// The GeoJSON `type` name of a geometry, e.g. `"MultiPolygon"`.
#[must_use]
pub fn geometry_kind(geometry: &Geometry) -> &'static str {
    match geometry.value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// A green area inside the search buffer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Park {
    #[serde(default)]
    pub gid: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Square meters.
    pub area: f64,
    /// Meters from the selected location.
    pub distance: f64,
    #[serde(deserialize_with = "lenient_geometry")]
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubScores {
    pub proximity: f64,
    pub quantity: f64,
    pub area: f64,
    pub diversity: f64,
    #[serde(default)]
    pub parks: Vec<Park>,
}

/// Server-computed accessibility result for one location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreResult {
    pub accessibility_score: f64,
    pub scores: SubScores,
    pub parks_found: u32,
    #[serde(default)]
    pub buffer_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_geometry")]
    pub nearest_park_route: Option<Geometry>,
}

/// Body of `POST /api/v1/feedback/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub lat: f64,
    pub lon: f64,
    pub liked: bool,
    pub accessibility_score: f64,
    pub proximity_score: f64,
    pub quantity_score: f64,
    pub area_score: f64,
    pub diversity_score: f64,
    pub timestamp: DateTime<Utc>,
}
