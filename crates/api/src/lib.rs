//! HTTP server for deckforge.
//!
//! Exposes the form page, the deck-creation endpoint, and a health
//! check. The library crate exists so integration tests can build the
//! exact router and middleware stack the binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;
