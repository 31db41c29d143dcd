//! Origin index for successor lookup.
//!
//! Each location is the origin of at most one card, so knowing where a leg
//! ends is enough to find the leg that follows it. The index makes that a
//! single hash lookup instead of a scan over every card.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::trace;

use crate::domain::{ItineraryError, Location, Segment, SegmentCollection};

/// Map from origin location to the position of the card leaving from it.
///
/// Positions refer to the [`SegmentCollection`] the index was built from.
/// The index is read-only once built; a new collection needs a new index.
#[derive(Debug, Clone, Default)]
pub struct OriginIndex {
    positions: HashMap<Location, usize>,
}

impl OriginIndex {
    /// Position of the card departing from `origin`.
    pub fn position_of(&self, origin: &Location) -> Option<usize> {
        self.positions.get(origin).copied()
    }

    /// The card departing from `origin`, looked up in `segments`.
    ///
    /// Returns `None` if no card departs from `origin`, or if `segments` is
    /// not the collection this index was built from and the stored position
    /// holds some other card.
    pub fn next_from<'a>(
        &self,
        segments: &'a SegmentCollection,
        origin: &Location,
    ) -> Option<(usize, &'a Segment)> {
        let position = self.position_of(origin)?;
        segments
            .get(position)
            .filter(|s| &s.origin == origin)
            .map(|s| (position, s))
    }

    /// Returns true if some card departs from `origin`.
    pub fn contains(&self, origin: &Location) -> bool {
        self.positions.contains_key(origin)
    }

    /// Iterates over all indexed origins.
    pub fn origins(&self) -> impl Iterator<Item = &Location> {
        self.positions.keys()
    }

    /// Number of indexed cards.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build the origin index for a collection of cards.
///
/// # Errors
///
/// Returns [`ItineraryError::DuplicateOrigin`] if two cards depart from the
/// same location. Such input has no single ordering.
pub fn build_index(segments: &SegmentCollection) -> Result<OriginIndex, ItineraryError> {
    let mut positions = HashMap::with_capacity(segments.len());

    for (position, segment) in segments.iter().enumerate() {
        match positions.entry(segment.origin.clone()) {
            Entry::Occupied(existing) => {
                return Err(ItineraryError::DuplicateOrigin {
                    location: segment.origin.clone(),
                    first: *existing.get(),
                    second: position,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
        }
    }

    trace!(cards = positions.len(), "built origin index");

    Ok(OriginIndex { positions })
}
