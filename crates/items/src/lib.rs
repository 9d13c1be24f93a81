//! `campusfind-items` — the lost-and-found Item domain.
//!
//! Holds the Item entity, its status/category vocabulary, the validated
//! report-form input, and the claim lifecycle rule.

pub mod item;
pub mod report;

pub use item::{Category, Item, ItemStatus};
pub use report::ItemReport;
