//! Search field selection

/// Which book field `search_books` matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl From<&str> for SearchField {
    /// Unknown field names fall back to title matching.
    fn from(name: &str) -> Self {
        match name {
            "author" => SearchField::Author,
            _ => SearchField::Title,
        }
    }
}
