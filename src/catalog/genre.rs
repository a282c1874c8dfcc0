//! Genre enumeration
//!
//! The closed set of category labels a book may carry.

use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;

/// Allowed book categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Fiction,
    NonFiction,
    SciFi,
    Fantasy,
    Biography,
    History,
    Romance,
}

impl Genre {
    /// Every genre, in display order
    pub const ALL: [Genre; 7] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Biography,
        Genre::History,
        Genre::Romance,
    ];

    /// The label callers use to name this genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Romance => "Romance",
        }
    }
}

impl FromStr for Genre {
    type Err = ShelfError;

    /// Labels match exactly; "fiction" or "SciFi" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| ShelfError::InvalidGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
