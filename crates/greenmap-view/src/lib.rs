//! Map view controller for the green-space accessibility viewer.
//!
//! [`MapController`] owns every piece of view state (selection, overlays,
//! panel contents) and drives a [`MapSurface`] implementation. Remote calls
//! go through the service traits in [`services`]; each result is tagged with
//! the selection generation it was issued under and dropped if the user has
//! moved on in the meantime.

pub mod controller;
pub mod debounce;
pub mod error;
pub mod headless;
pub mod panel;
pub mod services;
pub mod surface;

pub use controller::{FeedbackTicket, MapController, ScoreTicket, SelectionState, ViewSettings};
pub use debounce::{SuggestionBatch, SuggestionDebouncer, MIN_QUERY_CHARS, QUIET_PERIOD};
pub use error::ViewError;
pub use headless::HeadlessSurface;
pub use panel::{DisplayedScores, FeedbackChoice, PanelState, ScoreCard, SuggestionInput};
pub use services::{FeedbackService, ScoreService, SearchService};
pub use surface::{Layer, LayerId, MapSurface, ParkShape};
