//! Domain types for the itinerary sorter.
//!
//! This module contains the validated representation of travel cards and of
//! the trip reconstructed from them. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod itinerary;
mod location;
mod segment;
mod transport;

pub use error::ItineraryError;
pub use itinerary::Itinerary;
pub use location::{InvalidLocation, Location};
pub use segment::{Segment, SegmentCollection};
pub use transport::{Transport, TransportKind};
