//! Travel card itinerary sorter.
//!
//! Takes a pile of travel cards (each naming an origin, a destination and
//! how to get there) in any order and puts them back in travel order.

pub mod config;
pub mod domain;
pub mod import;
pub mod render;
pub mod sorter;
pub mod web;
