//! Deck plan builder.
//!
//! Turns a validated [`DeckRequest`](deckforge_core::request::DeckRequest)
//! plus a layout policy and an asset bundle into a fully ordered
//! [`DeckPlan`](deckforge_core::plan::DeckPlan). Plan construction is
//! deterministic and performs no I/O; the asset catalog (which reads
//! static files from disk) is the one exception and runs before
//! planning starts.

pub mod animation;
pub mod assets;
pub mod builder;
pub mod layout;

pub use assets::{AssetBundle, AssetCatalog, ThemeSource};
pub use builder::{build_plan, LayoutPolicy};
