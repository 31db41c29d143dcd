//! Path reconstruction.
//!
//! Cards form a single chain A→B→C→…, given in any order. The first card is
//! the only one whose origin is nobody's destination. From there each card's
//! destination names the origin of the next one, which the [`OriginIndex`]
//! finds in O(1). Both passes are linear in the number of cards.

use std::collections::HashSet;

use tracing::debug;

use super::origin_index::OriginIndex;
use crate::domain::{Itinerary, ItineraryError, Location, Segment, SegmentCollection};

/// Find the card the trip starts with.
///
/// Returns its position in `segments` together with the card.
///
/// # Errors
///
/// - [`ItineraryError::NoStartFound`] if every origin is also a destination
///   (including an empty collection)
/// - [`ItineraryError::MultipleStarts`] if more than one card qualifies,
///   listing the candidate origins in input order
pub fn find_start(segments: &SegmentCollection) -> Result<(usize, &Segment), ItineraryError> {
    let destinations: HashSet<&Location> = segments.iter().map(|s| &s.destination).collect();

    let mut starts = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| !destinations.contains(&s.origin));

    let first = starts.next().ok_or(ItineraryError::NoStartFound)?;

    let others: Vec<Location> = starts.map(|(_, s)| s.origin.clone()).collect();
    if !others.is_empty() {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(first.1.origin.clone());
        all.extend(others);
        return Err(ItineraryError::MultipleStarts { starts: all });
    }

    Ok(first)
}

/// Put the cards in travel order.
///
/// `index` must have been built from `segments` with
/// [`build_index`](super::build_index).
///
/// # Errors
///
/// - [`ItineraryError::IndexMismatch`] if `index` belongs to other cards
/// - [`ItineraryError::SelfLoop`] if a card leads back to its own origin
/// - [`ItineraryError::NoStartFound`] / [`ItineraryError::MultipleStarts`]
///   as for [`find_start`]
/// - [`ItineraryError::BrokenPath`] if no card continues from some place
///   before every card has been used
/// - [`ItineraryError::CycleDetected`] if the chain leads back to a card
///   already used
///
/// No partial itinerary is returned on failure.
pub fn reconstruct_path(
    segments: &SegmentCollection,
    index: &OriginIndex,
) -> Result<Itinerary, ItineraryError> {
    let expected = segments.len();

    if index.len() != expected {
        return Err(ItineraryError::IndexMismatch {
            indexed: index.len(),
            segments: expected,
        });
    }

    if segments.is_empty() {
        return Ok(Itinerary::default());
    }

    if let Some(looped) = segments.iter().find(|s| s.is_self_loop()) {
        return Err(ItineraryError::SelfLoop {
            location: looped.origin.clone(),
        });
    }

    let (start_position, start) = find_start(segments)?;
    debug!(start = %start.origin, cards = expected, "found starting card");

    let mut used = vec![false; expected];
    used[start_position] = true;

    let mut ordered = Vec::with_capacity(expected);
    ordered.push(start.clone());
    let mut current = start;

    while ordered.len() < expected {
        let here = &current.destination;

        let Some((position, next)) = index.next_from(segments, here) else {
            if index.contains(here) {
                return Err(ItineraryError::IndexMismatch {
                    indexed: index.len(),
                    segments: expected,
                });
            }
            debug!(
                location = %here,
                reached = ordered.len(),
                expected,
                "no card continues the route"
            );
            return Err(ItineraryError::BrokenPath {
                location: here.clone(),
                reached: ordered.len(),
                expected,
            });
        };

        if used[position] {
            return Err(ItineraryError::CycleDetected {
                location: here.clone(),
            });
        }
        used[position] = true;

        ordered.push(next.clone());
        current = next;
    }

    Ok(Itinerary::from_walk(ordered))
}
