//! Command definitions
//!
//! One variant per store operation.

use crate::catalog::{BookUpdate, SearchField};
use crate::members::MemberUpdate;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    AddBook,
    AddMember,
    SearchBooks,
    UpdateBook,
    UpdateMember,
    DeleteBook,
    DeleteMember,
    BorrowBook,
    ReturnBook,
    GetBook,
    GetMember,
}

impl CommandType {
    /// Stable operation name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::AddBook => "add_book",
            CommandType::AddMember => "add_member",
            CommandType::SearchBooks => "search_books",
            CommandType::UpdateBook => "update_book",
            CommandType::UpdateMember => "update_member",
            CommandType::DeleteBook => "delete_book",
            CommandType::DeleteMember => "delete_member",
            CommandType::BorrowBook => "borrow_book",
            CommandType::ReturnBook => "return_book",
            CommandType::GetBook => "get_book",
            CommandType::GetMember => "get_member",
        }
    }

    /// True for commands that may change store state
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            CommandType::SearchBooks | CommandType::GetBook | CommandType::GetMember
        )
    }
}

/// A store operation with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a book with every copy available
    AddBook {
        id: String,
        title: String,
        author: String,
        genre: String,
        total_copies: i64,
    },

    /// Register a member with no loans
    AddMember {
        id: String,
        name: String,
        email: String,
    },

    /// Case-insensitive substring search
    SearchBooks { query: String, by: SearchField },

    /// Apply a partial book update
    UpdateBook { id: String, update: BookUpdate },

    /// Apply a partial member update
    UpdateMember { id: String, update: MemberUpdate },

    /// Remove a book with no copies on loan
    DeleteBook { id: String },

    /// Remove a member with no open loans
    DeleteMember { id: String },

    /// Lend one copy of a book to a member
    BorrowBook { book_id: String, member_id: String },

    /// Take back a copy held by a member
    ReturnBook { book_id: String, member_id: String },

    /// Look up a book by id
    GetBook { id: String },

    /// Look up a member by id
    GetMember { id: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::AddBook { .. } => CommandType::AddBook,
            Command::AddMember { .. } => CommandType::AddMember,
            Command::SearchBooks { .. } => CommandType::SearchBooks,
            Command::UpdateBook { .. } => CommandType::UpdateBook,
            Command::UpdateMember { .. } => CommandType::UpdateMember,
            Command::DeleteBook { .. } => CommandType::DeleteBook,
            Command::DeleteMember { .. } => CommandType::DeleteMember,
            Command::BorrowBook { .. } => CommandType::BorrowBook,
            Command::ReturnBook { .. } => CommandType::ReturnBook,
            Command::GetBook { .. } => CommandType::GetBook,
            Command::GetMember { .. } => CommandType::GetMember,
        }
    }

    /// Stable operation name, used in logs
    pub fn name(&self) -> &'static str {
        self.command_type().name()
    }

    pub fn borrow(book_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Command::BorrowBook {
            book_id: book_id.into(),
            member_id: member_id.into(),
        }
    }

    pub fn return_book(book_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Command::ReturnBook {
            book_id: book_id.into(),
            member_id: member_id.into(),
        }
    }
}
