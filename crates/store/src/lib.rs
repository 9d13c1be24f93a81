//! `campusfind-store` — the item collection boundary.
//!
//! The [`ItemStore`] trait is the seam between the domain and whatever holds
//! the records; [`InMemoryItemStore`] is the tests/dev implementation. A real
//! persistence backend substitutes here without changing callers.

pub mod filter;
pub mod memory;
pub mod seed;
pub mod store;

pub use filter::{DateRange, ItemFilter};
pub use memory::InMemoryItemStore;
pub use store::{ItemStore, StoreError, UserItems};
