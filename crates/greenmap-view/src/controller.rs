//! Selection state machine for the map view.
//!
//! ```text
//!   Empty ──select──▶ Selected ──score ok──▶ ScoredDisplayed
//!     ▲                  ▲  │                      │
//!     │                  │  └──────select──────────┤
//!     └──────reset───────┴─────────────────────────┘
//! ```
//!
//! Every transition bumps a generation counter. Async work is split into a
//! `begin_*` call that returns a ticket and a completion call that ignores
//! the ticket if its generation is no longer current.

use chrono::Utc;
use greenmap_client::{ClientError, FeedbackPayload, Place, ScoreResult};
use greenmap_core::{
    offset_center, AppConfig, DeviceProfile, LatLng, RouteWeightScale, ShapeStyle,
};

use crate::debounce::{SuggestionBatch, MIN_QUERY_CHARS};
use crate::error::ViewError;
use crate::panel::{park_popup, FeedbackChoice, PanelState, ScoreCard, SuggestionInput};
use crate::services::{FeedbackService, ScoreService};
use crate::surface::{Layer, LayerId, MapSurface, ParkShape};

const SCORE_FAILED_ALERT: &str = "Error fetching accessibility data.";
const NO_LOCATION_ALERT: &str = "Select a location first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    Selected,
    ScoredDisplayed,
}

/// Static parameters of one map view.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub profile: DeviceProfile,
    pub buffer_m: f64,
    pub route_scale: RouteWeightScale,
    pub tile_url: String,
}

impl ViewSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            profile: config.device.clone(),
            buffer_m: config.buffer_m,
            route_scale: RouteWeightScale::default(),
            tile_url: config.tile_url.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Overlays {
    marker: Option<LayerId>,
    circle: Option<LayerId>,
    parks: Option<LayerId>,
    route: Option<LayerId>,
}

/// Issued by [`MapController::begin_score_request`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTicket {
    pub generation: u64,
    pub point: LatLng,
    pub buffer_m: f64,
}

/// Issued by [`MapController::begin_feedback`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackTicket {
    pub generation: u64,
    pub choice: FeedbackChoice,
    pub payload: FeedbackPayload,
}

pub struct MapController<M: MapSurface> {
    surface: M,
    settings: ViewSettings,
    location: Option<LatLng>,
    result: Option<ScoreResult>,
    overlays: Overlays,
    panel: PanelState,
    generation: u64,
}

impl<M: MapSurface> MapController<M> {
    /// Attaches to `surface`, installs the base layer and opens on the
    /// profile's default view.
    pub fn new(mut surface: M, settings: ViewSettings) -> Self {
        surface.set_base_layer(&settings.tile_url);
        surface.place_controls(settings.profile.controls);
        surface.set_view(
            settings.profile.default_location,
            settings.profile.default_zoom,
        );
        Self {
            surface,
            settings,
            location: None,
            result: None,
            overlays: Overlays::default(),
            panel: PanelState::default(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        match (self.location, &self.panel.score_card) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::Selected,
            (Some(_), Some(_)) => SelectionState::ScoredDisplayed,
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<LatLng> {
        self.location
    }

    #[must_use]
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    #[must_use]
    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Makes `point` the current location (map click or any other source).
    pub fn select_location(&mut self, point: LatLng) {
        self.generation += 1;
        tracing::debug!(
            lat = point.lat,
            lon = point.lon,
            generation = self.generation,
            "location selected"
        );

        self.panel.score_card = None;
        self.panel.feedback = None;
        self.result = None;
        self.location = Some(point);
        self.panel.reset_visible = true;
        self.panel.lat_input = LatLng::format_axis(point.lat);
        self.panel.lon_input = LatLng::format_axis(point.lon);

        self.clear_overlays();
        self.overlays.marker = Some(self.surface.add_layer(Layer::Marker { at: point }));
        self.recenter();
    }

    /// Accepts a geocoder suggestion.
    pub fn select_suggestion(&mut self, place: &Place) {
        self.select_location(place.location());
        self.panel.hide_suggestions();
        self.panel.address_input.clone_from(&place.display_name);
    }

    /// Applies the manual coordinate inputs. Blank or non-numeric text
    /// leaves the selection untouched and returns `false`.
    pub fn enter_coordinates(&mut self, lat: &str, lon: &str) -> bool {
        self.panel.lat_input = lat.to_owned();
        self.panel.lon_input = lon.to_owned();
        match LatLng::parse(lat, lon) {
            Some(point) => {
                self.select_location(point);
                true
            }
            None => false,
        }
    }

    /// Centers the visible area on the location, or on the default view
    /// when nothing is selected.
    pub fn recenter(&mut self) {
        let profile = &self.settings.profile;
        let (target, zoom) = match self.location {
            Some(point) => (point, profile.focus_zoom),
            None => (profile.default_location, profile.default_zoom),
        };
        let center = offset_center(target, zoom, self.surface.viewport(), profile.panel);
        self.surface.set_view(center, zoom);
    }

    /// Returns to the initial, empty view.
    pub fn reset(&mut self) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "view reset");

        self.panel = PanelState::default();
        self.location = None;
        self.result = None;
        self.clear_overlays();
        self.recenter();
    }

    /// Records a keystroke in the address box.
    ///
    /// Short queries clear the suggestion list immediately; longer ones are
    /// returned for the debouncer to look up.
    pub fn address_input_changed(&mut self, text: &str) -> SuggestionInput {
        text.clone_into(&mut self.panel.address_input);
        if text.chars().count() < MIN_QUERY_CHARS {
            self.panel.hide_suggestions();
            self.panel.clear_search_visible = false;
            return SuggestionInput::Cleared;
        }
        self.panel.clear_search_visible = true;
        SuggestionInput::Ready(text.to_owned())
    }

    /// Shows a batch of suggestions if it still matches the address box.
    pub fn show_suggestions(&mut self, batch: SuggestionBatch) -> bool {
        if batch.query != self.panel.address_input {
            tracing::debug!(query = %batch.query, "discarding suggestions for superseded query");
            return false;
        }
        self.panel.suggestions_visible = !batch.places.is_empty();
        self.panel.suggestions = batch.places;
        true
    }

    /// The "×" button in the search box.
    pub fn clear_search(&mut self) {
        self.panel.address_input.clear();
        self.panel.hide_suggestions();
        self.panel.clear_search_visible = false;
    }

    /// Draws the search-radius circle, recenters and hands back the ticket
    /// for the score fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NoLocation`] (after alerting the user) when no
    /// location is selected; nothing is drawn in that case.
    pub fn begin_score_request(&mut self) -> Result<ScoreTicket, ViewError> {
        let Some(point) = self.location else {
            self.surface.alert(NO_LOCATION_ALERT);
            return Err(ViewError::NoLocation);
        };

        self.generation += 1;
        self.remove_overlay(|o| &mut o.circle);
        self.remove_overlay(|o| &mut o.parks);
        self.remove_overlay(|o| &mut o.route);

        let buffer_m = self.settings.buffer_m;
        self.overlays.circle = Some(self.surface.add_layer(Layer::Circle {
            center: point,
            radius_m: buffer_m,
            style: ShapeStyle::buffer_circle(),
        }));
        self.recenter();

        Ok(ScoreTicket {
            generation: self.generation,
            point,
            buffer_m,
        })
    }

    /// Renders a successful score response. Returns `false` if the ticket
    /// was superseded and nothing changed.
    pub fn apply_score(&mut self, ticket: ScoreTicket, result: ScoreResult) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale score response"
            );
            return false;
        }

        let card = ScoreCard::from_result(&result, ticket.buffer_m);
        tracing::info!(
            lat = ticket.point.lat,
            lon = ticket.point.lon,
            score = card.scores.accessibility,
            parks = result.parks_found,
            "accessibility score displayed"
        );

        self.remove_overlay(|o| &mut o.parks);
        let shapes = result
            .scores
            .parks
            .iter()
            .map(|park| ParkShape {
                geometry: park.geometry.clone(),
                style: ShapeStyle::park(),
                popup: park_popup(park),
            })
            .collect();
        self.overlays.parks = Some(self.surface.add_layer(Layer::Parks(shapes)));

        self.remove_overlay(|o| &mut o.route);
        if let Some(route) = &result.nearest_park_route {
            let style = ShapeStyle::route(&self.settings.route_scale, self.surface.zoom());
            self.overlays.route = Some(self.surface.add_layer(Layer::Route {
                geometry: route.clone(),
                style,
            }));
        }

        self.panel.score_card = Some(card);
        self.panel.feedback = None;
        self.result = Some(result);
        true
    }

    /// Reports a failed score fetch to the user, unless superseded. The
    /// buffer circle stays drawn.
    pub fn fail_score(&mut self, ticket: ScoreTicket, err: &ClientError) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(error = %err, "ignoring failure of stale score request");
            return false;
        }
        tracing::error!(
            lat = ticket.point.lat,
            lon = ticket.point.lon,
            error = %err,
            "score request failed"
        );
        self.surface.alert(SCORE_FAILED_ALERT);
        true
    }

    /// Full score round trip against `service`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::NoLocation`] when nothing is selected.
    /// - [`ViewError::Client`] when the fetch fails; the user has already
    ///   been alerted.
    pub async fn request_score<S: ScoreService>(
        &mut self,
        service: &S,
    ) -> Result<bool, ViewError> {
        let ticket = self.begin_score_request()?;
        match service.accessibility_score(ticket.point, ticket.buffer_m).await {
            Ok(result) => Ok(self.apply_score(ticket, result)),
            Err(err) => {
                self.fail_score(ticket, &err);
                Err(err.into())
            }
        }
    }

    /// Re-weights the route for the surface's current zoom.
    pub fn zoom_changed(&mut self) {
        if let Some(id) = self.overlays.route {
            let style = ShapeStyle::route(&self.settings.route_scale, self.surface.zoom());
            self.surface.restyle_layer(id, style);
        }
    }

    /// Snapshot of the location and the values currently on the card.
    ///
    /// # Errors
    ///
    /// [`ViewError::NoLocation`] or [`ViewError::NoScores`].
    pub fn begin_feedback(&self, choice: FeedbackChoice) -> Result<FeedbackTicket, ViewError> {
        let point = self.location.ok_or(ViewError::NoLocation)?;
        let card = self.panel.score_card.as_ref().ok_or(ViewError::NoScores)?;
        let shown = card.scores;
        Ok(FeedbackTicket {
            generation: self.generation,
            choice,
            payload: FeedbackPayload {
                lat: point.lat,
                lon: point.lon,
                liked: choice.is_liked(),
                accessibility_score: shown.accessibility,
                proximity_score: shown.proximity,
                quantity_score: shown.quantity,
                area_score: shown.area,
                diversity_score: shown.diversity,
                timestamp: Utc::now(),
            },
        })
    }

    /// Highlights the chosen button after a successful submit. Failures are
    /// logged and leave the buttons as they were.
    pub fn complete_feedback(
        &mut self,
        ticket: &FeedbackTicket,
        outcome: Result<(), ClientError>,
    ) -> bool {
        match outcome {
            Ok(()) => {
                tracing::info!(liked = ticket.payload.liked, "feedback saved");
                if ticket.generation != self.generation {
                    return false;
                }
                self.panel.feedback = Some(ticket.choice);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to send feedback");
                false
            }
        }
    }

    /// Full feedback round trip. Does nothing without a location and a
    /// displayed score.
    pub async fn send_feedback<F: FeedbackService>(
        &mut self,
        service: &F,
        choice: FeedbackChoice,
    ) -> bool {
        let ticket = match self.begin_feedback(choice) {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::debug!(error = %err, "feedback ignored");
                return false;
            }
        };
        let outcome = service.submit_feedback(&ticket.payload).await;
        self.complete_feedback(&ticket, outcome)
    }

    fn remove_overlay(&mut self, slot: impl FnOnce(&mut Overlays) -> &mut Option<LayerId>) {
        if let Some(id) = slot(&mut self.overlays).take() {
            self.surface.remove_layer(id);
        }
    }

    fn clear_overlays(&mut self) {
        self.remove_overlay(|o| &mut o.marker);
        self.remove_overlay(|o| &mut o.circle);
        self.remove_overlay(|o| &mut o.parks);
        self.remove_overlay(|o| &mut o.route);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
