//! Plain-text rendering of search results and the score card.

use std::fmt::Write as _;

use greenmap_client::{geometry_kind, Place};
use greenmap_view::{HeadlessSurface, Layer, MapController, ScoreCard};

pub(crate) fn places(places: &[Place]) -> String {
    if places.is_empty() {
        return "No matches.\n".to_owned();
    }
    let mut out = String::new();
    for place in places {
        let _ = writeln!(
            out,
            "{:>10.6} {:>11.6}  {}",
            place.lat, place.lon, place.display_name
        );
    }
    out
}

pub(crate) fn score(controller: &MapController<HeadlessSurface>) -> String {
    let mut out = String::new();
    let Some(card) = &controller.panel().score_card else {
        return "No score displayed.\n".to_owned();
    };
    let s = card.scores;

    let _ = writeln!(out, "Accessibility score: {}", ScoreCard::label(s.accessibility));
    let _ = writeln!(out, "  Proximity  {:>6}  {}", ScoreCard::label(s.proximity), card.proximity_desc);
    let _ = writeln!(out, "  Quantity   {:>6}  {}", ScoreCard::label(s.quantity), card.quantity_desc);
    let _ = writeln!(out, "  Area       {:>6}  {}", ScoreCard::label(s.area), card.area_desc);
    let _ = writeln!(out, "  Diversity  {:>6}  {}", ScoreCard::label(s.diversity), card.diversity_desc);

    for (_, layer) in controller.surface().layers() {
        match layer {
            Layer::Parks(shapes) if !shapes.is_empty() => {
                let _ = writeln!(out, "\nParks:");
                for shape in shapes {
                    let _ = writeln!(out, "  - {}", shape.popup.replace('\n', " | "));
                }
            }
            Layer::Route { geometry, .. } => {
                let _ = writeln!(
                    out,
                    "\nRoute to nearest park: {}",
                    geometry_kind(geometry)
                );
            }
            _ => {}
        }
    }
    out
}
