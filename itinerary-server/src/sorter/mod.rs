//! Card sorting.
//!
//! Turns an unordered pile of travel cards into the trip they describe.
//! Building the origin index and walking the chain are both linear in the
//! number of cards.

mod origin_index;
mod reconstruct;
mod session;

pub use origin_index::{OriginIndex, build_index};
pub use reconstruct::{find_start, reconstruct_path};
pub use session::{TripSession, sort_cards};
