//! Itinerary type.
//!
//! An `Itinerary` is the ordered trip produced from a pile of cards. It is
//! built once and never edited; sorting the cards again yields a new one.

use super::{ItineraryError, Location, Segment};

/// An ordered trip.
///
/// # Invariants
///
/// - Consecutive segments connect (destination of one = origin of next)
///
/// An empty itinerary is valid: sorting zero cards yields zero legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    segments: Vec<Segment>,
}

impl Itinerary {
    /// Constructs an itinerary from segments already in travel order.
    ///
    /// # Errors
    ///
    /// Returns [`ItineraryError::BrokenPath`] at the first place where a
    /// segment's destination is not the next segment's origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::{Itinerary, Location, Segment, Transport};
    ///
    /// let loc = |s: &str| Location::parse(s).unwrap();
    /// let legs = vec![
    ///     Segment::new(loc("Madrid"), loc("Barcelona"), Transport::default()),
    ///     Segment::new(loc("Barcelona"), loc("Gerona Airport"), Transport::default()),
    /// ];
    ///
    /// let itinerary = Itinerary::new(legs).unwrap();
    /// assert_eq!(itinerary.len(), 2);
    /// assert_eq!(itinerary.origin(), Some(&loc("Madrid")));
    /// assert_eq!(itinerary.destination(), Some(&loc("Gerona Airport")));
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<Self, ItineraryError> {
        for (i, window) in segments.windows(2).enumerate() {
            if window[0].destination != window[1].origin {
                return Err(ItineraryError::BrokenPath {
                    location: window[0].destination.clone(),
                    reached: i + 1,
                    expected: segments.len(),
                });
            }
        }

        Ok(Itinerary { segments })
    }

    /// Wraps segments the caller has already walked in order.
    pub(crate) fn from_walk(segments: Vec<Segment>) -> Self {
        debug_assert!(
            segments
                .windows(2)
                .all(|w| w[0].destination == w[1].origin)
        );
        Itinerary { segments }
    }

    /// Returns all segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over segments in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the trip has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns where the trip starts, if it has any segments.
    pub fn origin(&self) -> Option<&Location> {
        self.segments.first().map(|s| &s.origin)
    }

    /// Returns where the trip ends, if it has any segments.
    pub fn destination(&self) -> Option<&Location> {
        self.segments.last().map(|s| &s.destination)
    }

    /// Returns every place visited, in order, including both ends.
    pub fn stops(&self) -> Vec<&Location> {
        let mut stops = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            stops.push(&first.origin);
        }
        stops.extend(self.segments.iter().map(|s| &s.destination));
        stops
    }

    /// Consumes the itinerary and returns its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transport;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn seg(from: &str, to: &str) -> Segment {
        Segment::new(loc(from), loc(to), Transport::default())
    }

    #[test]
    fn empty_itinerary() {
        let itinerary = Itinerary::new(vec![]).unwrap();

        assert!(itinerary.is_empty());
        assert_eq!(itinerary.len(), 0);
        assert!(itinerary.origin().is_none());
        assert!(itinerary.destination().is_none());
        assert!(itinerary.stops().is_empty());
    }

    #[test]
    fn single_segment() {
        let itinerary = Itinerary::new(vec![seg("A", "B")]).unwrap();

        assert_eq!(itinerary.len(), 1);
        assert_eq!(itinerary.origin(), Some(&loc("A")));
        assert_eq!(itinerary.destination(), Some(&loc("B")));
        assert_eq!(itinerary.stops(), vec![&loc("A"), &loc("B")]);
    }

    #[test]
    fn connected_segments() {
        let itinerary = Itinerary::new(vec![seg("A", "B"), seg("B", "C"), seg("C", "D")]).unwrap();

        assert_eq!(itinerary.len(), 3);
        assert_eq!(itinerary.origin(), Some(&loc("A")));
        assert_eq!(itinerary.destination(), Some(&loc("D")));
        assert_eq!(
            itinerary.stops(),
            vec![&loc("A"), &loc("B"), &loc("C"), &loc("D")]
        );
    }

    #[test]
    fn disconnected_segments() {
        let result = Itinerary::new(vec![seg("A", "B"), seg("B", "C"), seg("D", "E")]);

        assert_eq!(
            result,
            Err(ItineraryError::BrokenPath {
                location: loc("C"),
                reached: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn into_segments_preserves_order() {
        let itinerary = Itinerary::new(vec![seg("A", "B"), seg("B", "C")]).unwrap();
        let names: Vec<_> = itinerary
            .into_segments()
            .into_iter()
            .map(|s| s.origin.into_inner())
            .collect();

        assert_eq!(names, vec!["A", "B"]);
    }
}
