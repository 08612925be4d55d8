//! REST client and execution driver for the remote slides service.
//!
//! [`api::SlidesApi`] wraps the cloud presentation API behind the
//! [`service::SlidesService`] capability trait; [`executor`] walks a
//! [`DeckPlan`](deckforge_core::plan::DeckPlan) through that trait in
//! strict order, resolving shape handles as creations complete.

pub mod api;
pub mod config;
pub mod executor;
pub mod service;
pub mod wire;
