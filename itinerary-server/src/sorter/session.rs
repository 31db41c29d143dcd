//! A set of cards bundled with its origin index.

use crate::domain::{Itinerary, ItineraryError, SegmentCollection};
use crate::import::{RawCard, import_segments};

use super::origin_index::{OriginIndex, build_index};
use super::reconstruct::reconstruct_path;

/// The cards of one trip together with the index built from them.
///
/// A session is plain data: the collection and index are created together
/// and never change. Replacing the cards yields a new session with a freshly
/// built index.
#[derive(Debug, Clone, Default)]
pub struct TripSession {
    segments: SegmentCollection,
    index: OriginIndex,
}

impl TripSession {
    /// Validate raw cards and index them.
    pub fn import<I>(raw: I) -> Result<Self, ItineraryError>
    where
        I: IntoIterator<Item = RawCard>,
    {
        Self::from_segments(import_segments(raw)?)
    }

    /// Index an already-validated collection.
    pub fn from_segments(segments: SegmentCollection) -> Result<Self, ItineraryError> {
        let index = build_index(&segments)?;
        Ok(Self { segments, index })
    }

    /// Start over with a different set of cards.
    pub fn replace<I>(self, raw: I) -> Result<Self, ItineraryError>
    where
        I: IntoIterator<Item = RawCard>,
    {
        Self::import(raw)
    }

    /// Put this session's cards in travel order.
    pub fn reconstruct(&self) -> Result<Itinerary, ItineraryError> {
        reconstruct_path(&self.segments, &self.index)
    }

    /// The cards in input order.
    pub fn segments(&self) -> &SegmentCollection {
        &self.segments
    }

    /// The origin index for these cards.
    pub fn index(&self) -> &OriginIndex {
        &self.index
    }
}

/// Import, index and order raw cards in one call.
///
/// # Examples
///
/// ```
/// use itinerary_server::import::RawCard;
/// use itinerary_server::sorter::sort_cards;
///
/// let itinerary = sort_cards(vec![
///     RawCard::between("Barcelona", "Gerona Airport"),
///     RawCard::between("Madrid", "Barcelona"),
/// ])
/// .unwrap();
///
/// assert_eq!(itinerary.origin().unwrap().as_str(), "Madrid");
/// assert_eq!(itinerary.destination().unwrap().as_str(), "Gerona Airport");
/// ```
pub fn sort_cards<I>(raw: I) -> Result<Itinerary, ItineraryError>
where
    I: IntoIterator<Item = RawCard>,
{
    TripSession::import(raw)?.reconstruct()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    #[test]
    fn import_and_reconstruct() {
        let session = TripSession::import(vec![
            RawCard::between("B", "C"),
            RawCard::between("A", "B"),
        ])
        .unwrap();

        assert_eq!(session.segments().len(), 2);
        assert_eq!(session.index().len(), 2);

        let itinerary = session.reconstruct().unwrap();
        assert_eq!(itinerary.origin(), Some(&loc("A")));
        assert_eq!(itinerary.destination(), Some(&loc("C")));
    }

    #[test]
    fn replace_rebuilds_index() {
        let session = TripSession::import(vec![RawCard::between("A", "B")]).unwrap();
        let session = session
            .replace(vec![
                RawCard::between("Y", "Z"),
                RawCard::between("X", "Y"),
            ])
            .unwrap();

        assert_eq!(session.index().len(), 2);
        assert!(!session.index().contains(&loc("A")));
        assert!(session.index().contains(&loc("X")));

        let itinerary = session.reconstruct().unwrap();
        assert_eq!(itinerary.origin(), Some(&loc("X")));
    }

    #[test]
    fn duplicate_origin_fails_at_import() {
        let result = TripSession::import(vec![
            RawCard::between("A", "B"),
            RawCard::between("A", "C"),
        ]);

        assert!(matches!(
            result,
            Err(ItineraryError::DuplicateOrigin { .. })
        ));
    }

    #[test]
    fn default_session_is_empty() {
        let session = TripSession::default();
        assert!(session.reconstruct().unwrap().is_empty());
    }

    #[test]
    fn sort_cards_reports_graph_errors() {
        let result = sort_cards(vec![RawCard::between("A", "B"), RawCard::between("C", "D")]);
        assert!(matches!(
            result,
            Err(ItineraryError::MultipleStarts { .. })
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let first = TripSession::import(vec![RawCard::between("A", "B")]).unwrap();
        let second = TripSession::import(vec![RawCard::between("C", "D")]).unwrap();

        assert_eq!(first.reconstruct().unwrap().origin(), Some(&loc("A")));
        assert_eq!(second.reconstruct().unwrap().origin(), Some(&loc("C")));
    }
}
