//! Catalog Module
//!
//! Book records and the values used to validate and query them.
//!
//! ## Responsibilities
//! - Fixed genre enumeration used by add/update validation
//! - Book record with capacity and availability counters
//! - Partial updates applied by `Library::update_book`
//! - Search field selection with title fallback
//!
//! ## Copy Accounting
//! ```text
//! ┌──────────────────────── total_copies ────────────────────────┐
//! ┌──────── available_copies ────────┬──────── on loan ──────────┐
//! │        lendable right now        │  held by members' loans   │
//! └──────────────────────────────────┴───────────────────────────┘
//! ```

mod book;
mod genre;
mod search;

pub use book::{Book, BookUpdate};
pub use genre::Genre;
pub use search::SearchField;
