//! Response definitions
//!
//! Results of successfully executed commands.

use crate::catalog::Book;
use crate::members::Member;

/// Result payload of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Mutation applied
    Done,

    /// Search results, in catalog order
    Books(Vec<Book>),

    /// Book lookup (None = not found)
    Book(Option<Book>),

    /// Member lookup (None = not found)
    Member(Option<Member>),
}

impl Response {
    /// Check if this is a successful mutation acknowledgement
    pub fn is_done(&self) -> bool {
        matches!(self, Response::Done)
    }

    /// Take the search results, if this is a search response
    pub fn into_books(self) -> Option<Vec<Book>> {
        match self {
            Response::Books(books) => Some(books),
            _ => None,
        }
    }
}
