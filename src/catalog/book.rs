//! Book record
//!
//! Counters are only mutated by `Library`; callers receive owned clones.

use super::Genre;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genre: Genre,
    pub(crate) total_copies: u32,
    pub(crate) available_copies: u32,
}

impl Book {
    /// Create a record with every copy available
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        total_copies: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre,
            total_copies,
            available_copies: total_copies,
        }
    }

    /// ISBN-like identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author name
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Catalog genre
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// All-time provisioned copies
    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    /// Copies currently lendable
    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Copies currently out on loan
    pub fn on_loan(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }

    /// True when no copy is out on loan
    pub fn is_fully_available(&self) -> bool {
        self.available_copies == self.total_copies
    }
}

/// Partial update for a book
///
/// Fields left as `None` are not touched. Genre and copy count are validated
/// by `Library::update_book` before anything is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub total_copies: Option<i64>,
}

impl BookUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn total_copies(mut self, total: i64) -> Self {
        self.total_copies = Some(total);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.total_copies.is_none()
    }
}
