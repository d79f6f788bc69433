//! wayfare - Terminal travel planner
//!
//! Sends a trip query to a planning backend, renders the returned itinerary
//! into a page with collapsible day sections, lays out destination photos
//! and hotel recommendations around it, and exports the page as HTML.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use error::WayfareError;
