//! Transport metadata carried on each card.
//!
//! The sorter never inspects any of this; it is passed through unchanged so
//! that a renderer can describe how each leg is travelled.

use std::fmt;

/// How a segment is travelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TransportKind {
    Plane,
    Train,
    AirportBus,
    Taxi,
    Walking,
    /// A method the renderer has no dedicated wording for.
    Other(String),
    /// The card did not say.
    #[default]
    Unspecified,
}

impl TransportKind {
    /// Interpret a transport type name as found on a card.
    ///
    /// Matching is case-insensitive and accepts a few common aliases.
    /// Unrecognised names are kept as [`TransportKind::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::TransportKind;
    ///
    /// assert_eq!(TransportKind::from_name("Plane"), TransportKind::Plane);
    /// assert_eq!(TransportKind::from_name("airport_bus"), TransportKind::AirportBus);
    /// assert_eq!(TransportKind::from_name(""), TransportKind::Unspecified);
    /// assert_eq!(
    ///     TransportKind::from_name("ferry"),
    ///     TransportKind::Other("ferry".to_string())
    /// );
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "" => TransportKind::Unspecified,
            "plane" | "flight" => TransportKind::Plane,
            "train" => TransportKind::Train,
            "airport_bus" | "airport bus" | "bus" => TransportKind::AirportBus,
            "taxi" => TransportKind::Taxi,
            "walking" | "walk" => TransportKind::Walking,
            _ => TransportKind::Other(name.to_string()),
        }
    }

    /// Canonical name of this kind, as used in API responses.
    pub fn as_str(&self) -> &str {
        match self {
            TransportKind::Plane => "plane",
            TransportKind::Train => "train",
            TransportKind::AirportBus => "airport_bus",
            TransportKind::Taxi => "taxi",
            TransportKind::Walking => "walking",
            TransportKind::Other(name) => name,
            TransportKind::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a card says about how its leg is travelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Transport {
    /// Method of travel
    pub kind: TransportKind,
    /// Flight or train number
    pub route: Option<String>,
    /// Seat assignment
    pub seat: Option<String>,
    /// Boarding gate
    pub gate: Option<String>,
    /// Ticket counter where baggage is dropped
    pub baggage_drop: Option<String>,
    /// Free-form notes printed after the directions
    pub notes: Option<String>,
}

impl Transport {
    /// Transport of the given kind with no further details.
    pub fn new(kind: TransportKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the route (flight or train number).
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the seat assignment.
    pub fn with_seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = Some(seat.into());
        self
    }

    /// Set the boarding gate.
    pub fn with_gate(mut self, gate: impl Into<String>) -> Self {
        self.gate = Some(gate.into());
        self
    }

    /// Set the baggage drop counter.
    pub fn with_baggage_drop(mut self, counter: impl Into<String>) -> Self {
        self.baggage_drop = Some(counter.into());
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
