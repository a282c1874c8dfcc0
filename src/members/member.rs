//! Member record

/// A registered borrower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) borrowed_books: Vec<String>,
}

impl Member {
    /// Create a member with no open loans
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Member identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Book ids currently on loan to this member, oldest first
    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    /// Number of open loans
    pub fn loan_count(&self) -> usize {
        self.borrowed_books.len()
    }

    /// Check whether this member currently holds `book_id`
    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }
}

/// Partial update for a member; the loan set is never touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl MemberUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
