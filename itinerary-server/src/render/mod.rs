//! Human-readable directions for an itinerary.
//!
//! Rendering is a pure function of the itinerary. Callers decide where the
//! text goes (JSON, an HTML template, a terminal).

use crate::domain::{Itinerary, Segment, Transport, TransportKind};

/// Closing line after the last leg.
pub const ARRIVAL_LINE: &str = "You have arrived at your final destination.";

/// One sentence per leg, in travel order.
///
/// # Examples
///
/// ```
/// use itinerary_server::import::RawCard;
/// use itinerary_server::render::directions;
/// use itinerary_server::sorter::sort_cards;
///
/// let itinerary = sort_cards(vec![RawCard::between("Madrid", "Barcelona")]).unwrap();
/// assert_eq!(directions(&itinerary), vec!["Go from Madrid to Barcelona."]);
/// ```
pub fn directions(itinerary: &Itinerary) -> Vec<String> {
    itinerary.iter().map(describe).collect()
}

/// The closing line for a trip, if it goes anywhere.
pub fn summary(itinerary: &Itinerary) -> Option<&'static str> {
    (!itinerary.is_empty()).then_some(ARRIVAL_LINE)
}

/// Describe how to travel a single leg.
pub fn describe(segment: &Segment) -> String {
    let from = segment.origin.as_str();
    let to = segment.destination.as_str();
    let t = &segment.transport;

    let mut parts: Vec<String> = Vec::new();

    match &t.kind {
        TransportKind::Plane => {
            parts.push(match &t.route {
                Some(route) => format!("From {from}, take flight {route} to {to}."),
                None => format!("From {from}, take a flight to {to}."),
            });
            if let Some(gate) = &t.gate {
                parts.push(format!("Gate {gate}."));
            }
            parts.push(seat(t));
            if let Some(counter) = &t.baggage_drop {
                parts.push(format!("Baggage drop at ticket counter {counter}."));
            }
        }
        TransportKind::Train => {
            parts.push(match &t.route {
                Some(route) => format!("Take train {route} from {from} to {to}."),
                None => format!("Take the train from {from} to {to}."),
            });
            parts.push(seat(t));
        }
        TransportKind::AirportBus => {
            parts.push(format!("Take the airport bus from {from} to {to}."));
            parts.push(seat(t));
        }
        TransportKind::Taxi => parts.push(format!("Take a taxi from {from} to {to}.")),
        TransportKind::Walking => parts.push(format!("Walk from {from} to {to}.")),
        TransportKind::Other(_) | TransportKind::Unspecified => {
            parts.push(format!("Go from {from} to {to}."))
        }
    }

    if let Some(notes) = &t.notes {
        parts.push(notes.clone());
    }

    parts.join(" ")
}

fn seat(t: &Transport) -> String {
    match &t.seat {
        Some(seat) => format!("Seat {seat}."),
        None => "No seat assigned.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn leg(from: &str, to: &str, transport: Transport) -> Segment {
        Segment::new(
            Location::parse(from).unwrap(),
            Location::parse(to).unwrap(),
            transport,
        )
    }

    #[test]
    fn train_with_seat() {
        let s = leg(
            "Madrid",
            "Barcelona",
            Transport::new(TransportKind::Train)
                .with_route("78A")
                .with_seat("45B"),
        );
        assert_eq!(
            describe(&s),
            "Take train 78A from Madrid to Barcelona. Seat 45B."
        );
    }

    #[test]
    fn airport_bus_without_seat() {
        let s = leg(
            "Barcelona",
            "Gerona Airport",
            Transport::new(TransportKind::AirportBus),
        );
        assert_eq!(
            describe(&s),
            "Take the airport bus from Barcelona to Gerona Airport. No seat assigned."
        );
    }

    #[test]
    fn flight_with_everything() {
        let s = leg(
            "Gerona Airport",
            "Stockholm",
            Transport::new(TransportKind::Plane)
                .with_route("SK455")
                .with_gate("45B")
                .with_seat("3A")
                .with_baggage_drop("344"),
        );
        assert_eq!(
            describe(&s),
            "From Gerona Airport, take flight SK455 to Stockholm. Gate 45B. Seat 3A. \
             Baggage drop at ticket counter 344."
        );
    }

    #[test]
    fn flight_with_notes() {
        let s = leg(
            "Stockholm",
            "New York JFK",
            Transport::new(TransportKind::Plane)
                .with_route("SK22")
                .with_gate("22")
                .with_seat("7B")
                .with_notes("Baggage will be automatically transferred from your last leg."),
        );
        assert_eq!(
            describe(&s),
            "From Stockholm, take flight SK22 to New York JFK. Gate 22. Seat 7B. \
             Baggage will be automatically transferred from your last leg."
        );
    }

    #[test]
    fn flight_without_route_or_gate() {
        let s = leg("A", "B", Transport::new(TransportKind::Plane));
        assert_eq!(
            describe(&s),
            "From A, take a flight to B. No seat assigned."
        );
    }

    #[test]
    fn taxi_walk_and_other() {
        let taxi = leg("A", "B", Transport::new(TransportKind::Taxi));
        assert_eq!(describe(&taxi), "Take a taxi from A to B.");

        let walk = leg("B", "C", Transport::new(TransportKind::Walking).with_notes("5 minutes."));
        assert_eq!(describe(&walk), "Walk from B to C. 5 minutes.");

        let ferry = leg("C", "D", Transport::new(TransportKind::Other("ferry".into())));
        assert_eq!(describe(&ferry), "Go from C to D.");
    }

    #[test]
    fn directions_follow_itinerary_order() {
        let itinerary = Itinerary::new(vec![
            leg("A", "B", Transport::new(TransportKind::Taxi)),
            leg("B", "C", Transport::new(TransportKind::Walking)),
        ])
        .unwrap();

        assert_eq!(
            directions(&itinerary),
            vec!["Take a taxi from A to B.", "Walk from B to C."]
        );
        assert_eq!(summary(&itinerary), Some(ARRIVAL_LINE));
    }

    #[test]
    fn empty_itinerary() {
        let itinerary = Itinerary::default();
        assert!(directions(&itinerary).is_empty());
        assert!(summary(&itinerary).is_none());
    }
}
