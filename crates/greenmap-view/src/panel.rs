//! Side-panel model: search box, coordinate inputs, score card and the
//! feedback buttons. The controller mutates it; a front end renders it.

use greenmap_client::{Park, Place, ScoreResult};

/// Outcome of a keystroke in the address box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionInput {
    /// Query too short; suggestions were cleared.
    Cleared,
    /// Query long enough to be looked up after the quiet period.
    Ready(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackChoice {
    Liked,
    Disliked,
}

impl FeedbackChoice {
    #[must_use]
    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}

/// The five values exactly as the score card shows them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayedScores {
    pub accessibility: f64,
    pub proximity: f64,
    pub quantity: f64,
    pub area: f64,
    pub diversity: f64,
}

/// Rendered contents of the score card.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub scores: DisplayedScores,
    pub proximity_desc: String,
    pub quantity_desc: String,
    pub area_desc: String,
    pub diversity_desc: String,
}

/// Rounds to the two decimals shown on the card. Going through the
/// formatted text keeps the stored value identical to the visible one.
fn displayed(value: f64) -> f64 {
    format!("{value:.2}").parse::<f64>().unwrap_or(value)
}

impl ScoreCard {
    /// Builds the card for `result`; `requested_buffer_m` stands in when the
    /// response omits its buffer.
    #[must_use]
    pub fn from_result(result: &ScoreResult, requested_buffer_m: f64) -> Self {
        let parks = &result.scores.parks;
        let buffer_m = result.buffer_m.unwrap_or(requested_buffer_m);

        let proximity_desc = match parks
            .iter()
            .map(|p| p.distance)
            .min_by(f64::total_cmp)
        {
            Some(nearest) => format!("Nearest park is {:.0}m away", nearest.round()),
            None => format!("No parks within {buffer_m}m"),
        };

        // `Sum` for f64 starts at -0.0, which would print as "-0".
        let total_area = parks.iter().fold(0.0, |acc, p| acc + p.area);

        let mut kinds: Vec<&str> = Vec::new();
        for kind in parks.iter().filter_map(|p| p.kind.as_deref()) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        let diversity_desc = if kinds.is_empty() {
            "Types: none".to_owned()
        } else {
            format!("Types: {}", kinds.join(", "))
        };

        Self {
            scores: DisplayedScores {
                accessibility: displayed(result.accessibility_score),
                proximity: displayed(result.scores.proximity),
                quantity: displayed(result.scores.quantity),
                area: displayed(result.scores.area),
                diversity: displayed(result.scores.diversity),
            },
            proximity_desc,
            quantity_desc: format!(
                "{} green areas found within {buffer_m}m",
                result.parks_found
            ),
            area_desc: format!("{:.0} m² total green space", total_area.round()),
            diversity_desc,
        }
    }

    /// Two-decimal label for a displayed value.
    #[must_use]
    pub fn label(value: f64) -> String {
        format!("{value:.2}")
    }
}

/// Popup text for one park overlay.
#[must_use]
pub fn park_popup(park: &Park) -> String {
    format!(
        "{}\nType: {}\nArea: {:.0} m²\nDistance: {:.0} m",
        park.name.as_deref().unwrap_or("Unnamed green area"),
        park.kind.as_deref().unwrap_or("unknown"),
        park.area.round(),
        park.distance.round(),
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub address_input: String,
    pub lat_input: String,
    pub lon_input: String,
    pub suggestions: Vec<Place>,
    pub suggestions_visible: bool,
    pub clear_search_visible: bool,
    pub reset_visible: bool,
    /// `Some` while the score card is shown.
    pub score_card: Option<ScoreCard>,
    /// Which feedback button is highlighted.
    pub feedback: Option<FeedbackChoice>,
}

impl PanelState {
    pub(crate) fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_with_parks() -> ScoreResult {
        serde_json::from_value(json!({
            "accessibility_score": 6.416,
            "scores": {
                "proximity": 7.125,
                "quantity": 4.5119,
                "area": 8.0,
                "diversity": 4.9999,
                "parks": [
                    {"name": "A", "type": "garden", "area": 1000.4, "distance": 310.2,
                     "geometry": {"type": "Point", "coordinates": [0, 0]}},
                    {"name": "B", "type": "park", "area": 2000.3, "distance": 120.6,
                     "geometry": {"type": "Point", "coordinates": [0, 0]}},
                    {"name": null, "type": "garden", "area": 50.0, "distance": 499.0,
                     "geometry": {"type": "Point", "coordinates": [0, 0]}}
                ]
            },
            "parks_found": 3,
            "buffer_m": 500
        }))
        .unwrap()
    }

    #[test]
    fn card_rounds_to_displayed_precision() {
        let card = ScoreCard::from_result(&result_with_parks(), 500.0);
        assert!((card.scores.accessibility - 6.42).abs() < 1e-12);
        assert!((card.scores.quantity - 4.51).abs() < 1e-12);
        assert!((card.scores.diversity - 5.0).abs() < 1e-12);
        assert_eq!(ScoreCard::label(card.scores.area), "8.00");
    }

    #[test]
    fn card_descriptions_summarize_parks() {
        let card = ScoreCard::from_result(&result_with_parks(), 500.0);
        assert_eq!(card.proximity_desc, "Nearest park is 121m away");
        assert_eq!(card.quantity_desc, "3 green areas found within 500m");
        assert_eq!(card.area_desc, "3051 m² total green space");
        assert_eq!(card.diversity_desc, "Types: garden, park");
    }

    #[test]
    fn card_handles_empty_park_list() {
        let result: ScoreResult = serde_json::from_value(json!({
            "accessibility_score": 0.0,
            "scores": {"proximity": 0.0, "quantity": 0.0, "area": 0.0, "diversity": 0.0},
            "parks_found": 0
        }))
        .unwrap();
        let card = ScoreCard::from_result(&result, 750.0);
        assert_eq!(card.proximity_desc, "No parks within 750m");
        assert_eq!(card.quantity_desc, "0 green areas found within 750m");
        assert_eq!(card.area_desc, "0 m² total green space");
        assert_eq!(card.diversity_desc, "Types: none");
    }

    #[test]
    fn explicit_empty_park_list_totals_positive_zero() {
        let result: ScoreResult = serde_json::from_value(json!({
            "accessibility_score": 0.0,
            "scores": {"proximity": 0.0, "quantity": 0.0, "area": 0.0, "diversity": 0.0,
                       "parks": []},
            "parks_found": 0,
            "buffer_m": 500
        }))
        .unwrap();
        let card = ScoreCard::from_result(&result, 500.0);
        assert_eq!(card.area_desc, "0 m² total green space");
        assert!(!card.area_desc.starts_with('-'));
    }

    #[test]
    fn popup_falls_back_for_missing_fields() {
        let result = result_with_parks();
        let popup = park_popup(&result.scores.parks[2]);
        assert_eq!(
            popup,
            "Unnamed green area\nType: garden\nArea: 50 m²\nDistance: 499 m"
        );
    }
}
