//! Segment (travel card) types.

use super::{Location, Transport};

/// One leg of a trip, as printed on a single travel card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Where the leg starts
    pub origin: Location,
    /// Where the leg ends
    pub destination: Location,
    /// How the leg is travelled
    pub transport: Transport,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(origin: Location, destination: Location, transport: Transport) -> Self {
        Self {
            origin,
            destination,
            transport,
        }
    }

    /// Returns true if the segment starts and ends at the same place.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

/// The unordered cards of one trip.
///
/// Order carries no meaning here; it is only used to report positions in
/// error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
}

impl SegmentCollection {
    /// Wraps already-validated segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the segment at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Segment> {
        self.segments.get(position)
    }

    /// Returns all segments in input order.
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over segments in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for SegmentCollection {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl<'a> IntoIterator for &'a SegmentCollection {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
