//! Data transfer objects for web responses.
//!
//! Requests are not modelled here: the sort endpoint decodes its body with
//! [`crate::import::decode_cards`].

use serde::Serialize;

use crate::domain::{Itinerary, ItineraryError, Segment};
use crate::render;

/// A leg of the sorted trip.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Where the leg starts
    pub origin: String,

    /// Where the leg ends
    pub destination: String,

    /// Transport details
    pub transport: TransportResult,
}

/// Transport details of a leg.
#[derive(Debug, Serialize)]
pub struct TransportResult {
    /// Transport type (e.g., "plane", "train")
    #[serde(rename = "type")]
    pub kind: String,

    /// Flight or train number
    pub route: Option<String>,

    /// Seat assignment
    pub seat: Option<String>,

    /// Boarding gate
    pub gate: Option<String>,

    /// Baggage drop counter
    pub baggage_drop: Option<String>,

    /// Notes
    pub notes: Option<String>,
}

/// Response for a sorted trip.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    /// Where the trip starts (absent for an empty trip)
    pub origin: Option<String>,

    /// Where the trip ends (absent for an empty trip)
    pub destination: Option<String>,

    /// Legs in travel order
    pub segments: Vec<SegmentResult>,

    /// One sentence per leg, followed by the arrival line
    pub directions: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error tag, when the error came from the sorter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

// Conversion implementations

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        let t = &segment.transport;
        Self {
            origin: segment.origin.to_string(),
            destination: segment.destination.to_string(),
            transport: TransportResult {
                kind: t.kind.to_string(),
                route: t.route.clone(),
                seat: t.seat.clone(),
                gate: t.gate.clone(),
                baggage_drop: t.baggage_drop.clone(),
                notes: t.notes.clone(),
            },
        }
    }
}

impl ItineraryResponse {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let mut directions = render::directions(itinerary);
        if let Some(line) = render::summary(itinerary) {
            directions.push(line.to_string());
        }

        Self {
            origin: itinerary.origin().map(|l| l.to_string()),
            destination: itinerary.destination().map(|l| l.to_string()),
            segments: itinerary
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            directions,
        }
    }
}

impl ErrorResponse {
    /// Create from a sorter error.
    pub fn from_itinerary_error(e: &ItineraryError) -> Self {
        Self {
            error: e.to_string(),
            kind: Some(e.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{RawCard, RawTransport, TextOrNumber};
    use crate::sorter::sort_cards;

    #[test]
    fn itinerary_response_shape() {
        let itinerary = sort_cards(vec![
            RawCard::between("B", "C").with_transport(RawTransport {
                kind: Some("train".into()),
                route: Some("78A".into()),
                seat: Some(TextOrNumber::from("45B")),
                ..RawTransport::default()
            }),
            RawCard::between("A", "B"),
        ])
        .unwrap();

        let response = ItineraryResponse::from_itinerary(&itinerary);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["origin"], "A");
        assert_eq!(json["destination"], "C");
        assert_eq!(json["segments"][0]["origin"], "A");
        assert_eq!(json["segments"][0]["transport"]["type"], "unspecified");
        assert_eq!(json["segments"][1]["transport"]["type"], "train");
        assert_eq!(json["segments"][1]["transport"]["seat"], "45B");
        assert_eq!(json["directions"][0], "Go from A to B.");
        assert_eq!(
            json["directions"][1],
            "Take train 78A from B to C. Seat 45B."
        );
        assert_eq!(json["directions"][2], render::ARRIVAL_LINE);
    }

    #[test]
    fn empty_itinerary_response() {
        let response = ItineraryResponse::from_itinerary(&Itinerary::default());

        assert!(response.origin.is_none());
        assert!(response.segments.is_empty());
        assert!(response.directions.is_empty());
    }

    #[test]
    fn error_response_carries_kind() {
        let err = ItineraryError::NoStartFound;
        let json = serde_json::to_value(ErrorResponse::from_itinerary_error(&err)).unwrap();

        assert_eq!(json["kind"], "no_start_found");
        assert_eq!(json["error"], err.to_string());
    }

    #[test]
    fn error_response_omits_missing_kind() {
        let response = ErrorResponse {
            error: "too many cards".into(),
            kind: None,
        };
        let json = serde_json::to_value(response).unwrap();

        assert!(json.get("kind").is_none());
    }
}
