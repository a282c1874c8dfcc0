//! Protocol Module
//!
//! The store's operation surface expressed as data, so a driver can queue,
//! log or forward operations without calling each method by hand.
//!
//! ## Operations
//! ```text
//! ┌──────────────┬───────────────────────────────┬──────────────────┐
//! │ Command      │ Parameters                    │ Response         │
//! ├──────────────┼───────────────────────────────┼──────────────────┤
//! │ AddBook      │ id, title, author, genre, n   │ Done             │
//! │ AddMember    │ id, name, email               │ Done             │
//! │ SearchBooks  │ query, by                     │ Books            │
//! │ UpdateBook   │ id, BookUpdate                │ Done             │
//! │ UpdateMember │ id, MemberUpdate              │ Done             │
//! │ DeleteBook   │ id                            │ Done             │
//! │ DeleteMember │ id                            │ Done             │
//! │ BorrowBook   │ book_id, member_id            │ Done             │
//! │ ReturnBook   │ book_id, member_id            │ Done             │
//! │ GetBook      │ id                            │ Book             │
//! │ GetMember    │ id                            │ Member           │
//! └──────────────┴───────────────────────────────┴──────────────────┘
//! ```
//!
//! A rejected command surfaces as `Err(ShelfError)` from `execute`, never as
//! a `Response` variant.

mod command;
mod response;

pub use command::{Command, CommandType};
pub use response::Response;
