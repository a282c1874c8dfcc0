//! # ShelfDB
//!
//! An in-memory catalog and circulation store for a small library:
//! - Book records with capacity and availability counters
//! - Member records with a bounded set of open loans
//! - Borrow/return that keeps both sides in step
//! - Operations as data (`Command`) for drivers and shared access
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Caller / Demo Driver                      │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │ method calls                │ Command
//!                 │                             ▼
//!                 │                   ┌───────────────────┐
//!                 │                   │   SharedLibrary   │
//!                 │                   │      (Mutex)      │
//!                 │                   └─────────┬─────────┘
//!                 ▼                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Library                             │
//! │             (validate everything, then mutate)               │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │                             │
//!                 ▼                             ▼
//!          ┌─────────────┐   borrowed_books ┌─────────────┐
//!          │   Catalog   │◄─────────────────│   Members   │
//!          │  (IndexMap) │                  │  (IndexMap) │
//!          └─────────────┘                  └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod catalog;
pub mod members;
pub mod protocol;
pub mod library;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, ShelfError};
pub use catalog::{Book, BookUpdate, Genre, SearchField};
pub use members::{Member, MemberUpdate};
pub use library::{Library, MAX_LOANS_PER_MEMBER};
pub use shared::SharedLibrary;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
