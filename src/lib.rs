//! Groundmap - builds a GeoJSON map of English league football grounds.
//!
//! Scrapes team/stadium listings from Wikipedia season pages, resolves
//! stadiums to coordinates through a cached, rate-limited Nominatim
//! lookup, and merges in a curated capacity table.

pub mod cache;
pub mod geocode;
pub mod leagues;
pub mod models;
pub mod pipeline;
pub mod tables;

pub use models::{Feature, FeatureCollection};
