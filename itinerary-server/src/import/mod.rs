//! Card import.
//!
//! Raw cards arrive as loosely-typed records (usually JSON) in the shape
//!
//! ```json
//! { "origin": { "name": "Madrid" },
//!   "destination": { "name": "Barcelona" },
//!   "transport": { "type": "train", "route": "78A", "seat": "45B" } }
//! ```
//!
//! and are validated here into [`Segment`]s. Import is all-or-nothing: one
//! bad card rejects the whole batch.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ItineraryError, Location, Segment, SegmentCollection, Transport, TransportKind,
};

/// A place as written on a raw card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPlace {
    pub name: Option<String>,
}

/// A transport field that may be written as text or as a bare number
/// (`"seat": 12` as well as `"seat": "12A"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    /// The value as text, or `None` if it is blank.
    fn into_text(self) -> Option<String> {
        let text = match self {
            TextOrNumber::Text(s) => s.trim().to_string(),
            TextOrNumber::Number(n) => n.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl From<&str> for TextOrNumber {
    fn from(s: &str) -> Self {
        TextOrNumber::Text(s.to_string())
    }
}

/// Transport details as written on a raw card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawTransport {
    /// Transport type, e.g. "plane", "train", "airport_bus"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub route: Option<TextOrNumber>,
    pub seat: Option<TextOrNumber>,
    pub gate: Option<TextOrNumber>,
    pub baggage_drop: Option<TextOrNumber>,
    pub notes: Option<String>,
}

/// A travel card before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawCard {
    pub origin: Option<RawPlace>,
    pub destination: Option<RawPlace>,
    pub transport: Option<RawTransport>,
}

impl RawCard {
    /// A card between two named places with no transport details.
    pub fn between(origin: &str, destination: &str) -> Self {
        Self {
            origin: Some(RawPlace {
                name: Some(origin.to_string()),
            }),
            destination: Some(RawPlace {
                name: Some(destination.to_string()),
            }),
            transport: None,
        }
    }

    /// Attach transport details.
    pub fn with_transport(mut self, transport: RawTransport) -> Self {
        self.transport = Some(transport);
        self
    }
}

/// Accepted top-level shapes of a card document.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardDocument {
    List(Vec<RawCard>),
    Wrapped { cards: Vec<RawCard> },
}

/// Validate raw cards into a collection.
///
/// # Errors
///
/// Returns [`ItineraryError::InvalidSegment`] for the first card without a
/// usable origin or destination name. No partial collection is returned.
pub fn import_segments<I>(raw: I) -> Result<SegmentCollection, ItineraryError>
where
    I: IntoIterator<Item = RawCard>,
{
    raw.into_iter()
        .enumerate()
        .map(|(index, card)| convert_card(index, card))
        .collect::<Result<Vec<_>, _>>()
        .map(SegmentCollection::new)
}

/// Decode a JSON card document and validate its cards.
///
/// The document is either an array of cards or an object with a `cards`
/// array.
///
/// # Examples
///
/// ```
/// use itinerary_server::import::parse_cards;
///
/// let json = r#"[
///     {"origin": {"name": "Madrid"}, "destination": {"name": "Barcelona"},
///      "transport": {"type": "train", "route": "78A", "seat": "45B"}}
/// ]"#;
///
/// let cards = parse_cards(json).unwrap();
/// assert_eq!(cards.len(), 1);
/// ```
pub fn parse_cards(json: &str) -> Result<SegmentCollection, ItineraryError> {
    import_segments(decode_cards(json.as_bytes())?)
}

/// Decode a JSON card document without validating the cards.
///
/// Accepts the same shapes as [`parse_cards`]. Useful when the number of
/// cards must be checked before doing any further work.
///
/// # Errors
///
/// Returns [`ItineraryError::MalformedInput`] if the bytes are not JSON or
/// do not have the shape of a card document.
pub fn decode_cards(json: &[u8]) -> Result<Vec<RawCard>, ItineraryError> {
    let document: CardDocument = serde_json::from_slice(json)
        .map_err(|e| ItineraryError::MalformedInput(e.to_string()))?;

    Ok(match document {
        CardDocument::List(cards) => cards,
        CardDocument::Wrapped { cards } => cards,
    })
}

fn convert_card(index: usize, card: RawCard) -> Result<Segment, ItineraryError> {
    let origin = place(card.origin).ok_or(ItineraryError::InvalidSegment {
        index,
        reason: "missing origin name",
    })?;
    let destination = place(card.destination).ok_or(ItineraryError::InvalidSegment {
        index,
        reason: "missing destination name",
    })?;

    let transport = card.transport.map(convert_transport).unwrap_or_default();

    Ok(Segment::new(origin, destination, transport))
}

fn place(raw: Option<RawPlace>) -> Option<Location> {
    raw.and_then(|p| p.name)
        .and_then(|name| Location::parse(&name).ok())
}

fn convert_transport(raw: RawTransport) -> Transport {
    Transport {
        kind: raw
            .kind
            .as_deref()
            .map(TransportKind::from_name)
            .unwrap_or_default(),
        route: raw.route.and_then(TextOrNumber::into_text),
        seat: raw.seat.and_then(TextOrNumber::into_text),
        gate: raw.gate.and_then(TextOrNumber::into_text),
        baggage_drop: raw.baggage_drop.and_then(TextOrNumber::into_text),
        notes: raw
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    }
}
