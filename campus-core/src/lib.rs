//! Campus Core - Entity and Wire Types
//!
//! Pure data structures with no behavior. Both the TUI client and any
//! future tooling depend on this. This crate contains ONLY data types -
//! no business logic.

pub mod identity;
pub mod types;

pub use identity::*;
pub use types::*;
