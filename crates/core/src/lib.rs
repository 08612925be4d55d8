//! Domain types and pure planning primitives for deckforge.
//!
//! Everything in this crate is synchronous and side-effect free:
//! request validation, inch/point conversion, and the deck-plan data
//! model. I/O (the remote slides service, asset loading, HTTP) lives
//! in the other workspace crates.

pub mod error;
pub mod geometry;
pub mod plan;
pub mod request;
