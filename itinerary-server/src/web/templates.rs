//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Itinerary, Segment, TransportKind};
use crate::render;

// ============================================================================
// Page Templates
// ============================================================================

/// Home page with the card input form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_cards: usize,
}

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Sorted trip fragment.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub itinerary: ItineraryView,
}

/// Error fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Itinerary view model for templates.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub legs: Vec<LegView>,
    pub closing: Option<String>,
}

impl ItineraryView {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            origin: itinerary.origin().map(|l| l.to_string()),
            destination: itinerary.destination().map(|l| l.to_string()),
            legs: itinerary
                .iter()
                .enumerate()
                .map(|(i, s)| LegView::from_segment(i + 1, s))
                .collect(),
            closing: render::summary(itinerary).map(str::to_string),
        }
    }
}

/// A single leg for display.
#[derive(Debug, Clone)]
pub struct LegView {
    pub number: usize,
    /// Stylesheet class suffix; never taken from card text.
    pub css_class: &'static str,
    pub text: String,
}

impl LegView {
    pub fn from_segment(number: usize, segment: &Segment) -> Self {
        Self {
            number,
            css_class: css_class(&segment.transport.kind),
            text: render::describe(segment),
        }
    }
}

fn css_class(kind: &TransportKind) -> &'static str {
    match kind {
        TransportKind::Plane => "plane",
        TransportKind::Train => "train",
        TransportKind::AirportBus => "airport_bus",
        TransportKind::Taxi => "taxi",
        TransportKind::Walking => "walking",
        TransportKind::Other(_) => "other",
        TransportKind::Unspecified => "unspecified",
    }
}
