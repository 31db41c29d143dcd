//! Itinerary error types.
//!
//! These errors describe input that cannot be turned into a single trip.
//! They are deterministic data problems; retrying the same input fails the
//! same way.

use super::Location;

/// Errors from importing cards or reconstructing an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// A card is missing a required field
    #[error("invalid card at position {index}: {reason}")]
    InvalidSegment { index: usize, reason: &'static str },

    /// The card document could not be decoded at all
    #[error("malformed card data: {0}")]
    MalformedInput(String),

    /// Two cards leave from the same place
    #[error("cards {first} and {second} both depart from {location}")]
    DuplicateOrigin {
        location: Location,
        first: usize,
        second: usize,
    },

    /// Every origin is also some card's destination
    #[error("no starting card: every origin is also a destination")]
    NoStartFound,

    /// More than one card could begin the trip
    #[error("cards form more than one route, starting at {}", join(.starts))]
    MultipleStarts { starts: Vec<Location> },

    /// A card leads back to where it started
    #[error("card from {location} to itself")]
    SelfLoop { location: Location },

    /// The walk stopped before every card was used
    #[error("broken path after {location}: reached {reached} of {expected} cards")]
    BrokenPath {
        location: Location,
        reached: usize,
        expected: usize,
    },

    /// The walk came back to a card it had already used
    #[error("route loops back on itself at {location}")]
    CycleDetected { location: Location },

    /// The origin index was built from different cards
    #[error("origin index covers {indexed} cards but {segments} were given")]
    IndexMismatch { indexed: usize, segments: usize },
}

impl ItineraryError {
    /// Stable machine-readable tag for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            ItineraryError::InvalidSegment { .. } => "invalid_segment",
            ItineraryError::MalformedInput(_) => "malformed_input",
            ItineraryError::DuplicateOrigin { .. } => "duplicate_origin",
            ItineraryError::NoStartFound => "no_start_found",
            ItineraryError::MultipleStarts { .. } => "multiple_starts",
            ItineraryError::SelfLoop { .. } => "self_loop",
            ItineraryError::BrokenPath { .. } => "broken_path",
            ItineraryError::CycleDetected { .. } => "cycle_detected",
            ItineraryError::IndexMismatch { .. } => "index_mismatch",
        }
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
