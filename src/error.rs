//! Error types for ShelfDB
//!
//! Every failed operation maps to exactly one variant. A failure never leaves
//! a partial mutation behind, so callers can always retry with corrected input.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for ShelfDB operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // Identity Conflicts
    // -------------------------------------------------------------------------
    #[error("Book already exists: {0}")]
    DuplicateBook(String),

    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    // -------------------------------------------------------------------------
    // Unknown Identity
    // -------------------------------------------------------------------------
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    // -------------------------------------------------------------------------
    // Domain Validation
    // -------------------------------------------------------------------------
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("Unknown genre: {0}")]
    InvalidGenre(String),

    #[error("Invalid copy count: {0}")]
    InvalidCopies(i64),

    // -------------------------------------------------------------------------
    // Invariant Guards
    // -------------------------------------------------------------------------
    #[error("Cannot set total copies of {id} to {requested}: {on_loan} on loan")]
    CapacityBelowLoans { id: String, requested: i64, on_loan: u32 },

    #[error("No copies of {0} available")]
    NoCopiesAvailable(String),

    #[error("Member {member_id} has reached the loan limit of {limit}")]
    LoanLimitReached { member_id: String, limit: usize },

    #[error("Member {member_id} already holds {book_id}")]
    AlreadyBorrowed { book_id: String, member_id: String },

    #[error("Member {member_id} does not hold {book_id}")]
    NotBorrowed { book_id: String, member_id: String },

    #[error("Book {id} has {on_loan} copies on loan")]
    BookOnLoan { id: String, on_loan: u32 },

    #[error("Member {id} still holds {count} books")]
    MemberHasLoans { id: String, count: usize },

    // -------------------------------------------------------------------------
    // Internal Consistency
    // -------------------------------------------------------------------------
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

/// Coarse failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Identifier already in use
    Conflict,

    /// Identifier does not exist
    NotFound,

    /// Input rejected before looking at circulation state
    Validation,

    /// Input valid, but applying it would break a store invariant
    Guard,

    /// Store state is inconsistent
    Internal,
}

impl ShelfError {
    /// Get the failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShelfError::DuplicateBook(_) | ShelfError::DuplicateMember(_) => ErrorKind::Conflict,
            ShelfError::BookNotFound(_) | ShelfError::MemberNotFound(_) => ErrorKind::NotFound,
            ShelfError::InvalidId(_)
            | ShelfError::InvalidGenre(_)
            | ShelfError::InvalidCopies(_) => ErrorKind::Validation,
            ShelfError::CapacityBelowLoans { .. }
            | ShelfError::NoCopiesAvailable(_)
            | ShelfError::LoanLimitReached { .. }
            | ShelfError::AlreadyBorrowed { .. }
            | ShelfError::NotBorrowed { .. }
            | ShelfError::BookOnLoan { .. }
            | ShelfError::MemberHasLoans { .. } => ErrorKind::Guard,
            ShelfError::InvariantViolation(_) => ErrorKind::Internal,
        }
    }
}
