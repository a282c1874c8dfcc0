//! Library Module
//!
//! The catalog-and-circulation store: books, members, and the loans between
//! them.
//!
//! ## Responsibilities
//! - Validate every operation against current state before mutating
//! - Keep `total_copies - available_copies` equal to the number of members
//!   holding each book
//! - Enforce the per-member loan limit and one loan per (book, member)
//! - Hand out owned copies of records, never references into the maps

use indexmap::IndexMap;

use crate::catalog::{Book, BookUpdate, Genre, SearchField};
use crate::error::{Result, ShelfError};
use crate::members::{Member, MemberUpdate};
use crate::protocol::{Command, Response};

/// Max number of books a member may hold at once
pub const MAX_LOANS_PER_MEMBER: usize = 3;

/// The catalog-and-circulation store
///
/// ## Concurrency Model: Exclusive Access
///
/// Every mutation takes `&mut self` and runs to completion, so the borrow
/// checker provides the single-writer discipline. Wrap in
/// [`SharedLibrary`](crate::SharedLibrary) to share across threads.
///
/// ## Atomicity
///
/// Each operation runs all of its checks first and only then mutates. A
/// returned `Err` means nothing changed.
#[derive(Debug, Default)]
pub struct Library {
    /// Catalog keyed by book id, in insertion order
    books: IndexMap<String, Book>,

    /// Members keyed by member id, in insertion order
    members: IndexMap<String, Member>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            books: IndexMap::new(),
            members: IndexMap::new(),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let op = command.name();
        let result = match command {
            Command::AddBook {
                id,
                title,
                author,
                genre,
                total_copies,
            } => self
                .add_book(&id, &title, &author, &genre, total_copies)
                .map(|_| Response::Done),
            Command::AddMember { id, name, email } => {
                self.add_member(&id, &name, &email).map(|_| Response::Done)
            }
            Command::SearchBooks { query, by } => {
                Ok(Response::Books(self.search_books(&query, by)))
            }
            Command::UpdateBook { id, update } => {
                self.update_book(&id, update).map(|_| Response::Done)
            }
            Command::UpdateMember { id, update } => {
                self.update_member(&id, update).map(|_| Response::Done)
            }
            Command::DeleteBook { id } => self.delete_book(&id).map(|_| Response::Done),
            Command::DeleteMember { id } => self.delete_member(&id).map(|_| Response::Done),
            Command::BorrowBook { book_id, member_id } => {
                self.borrow_book(&book_id, &member_id).map(|_| Response::Done)
            }
            Command::ReturnBook { book_id, member_id } => {
                self.return_book(&book_id, &member_id).map(|_| Response::Done)
            }
            Command::GetBook { id } => Ok(Response::Book(self.get_book(&id))),
            Command::GetMember { id } => Ok(Response::Member(self.get_member(&id))),
        };

        if let Err(e) = &result {
            tracing::debug!(op, error = %e, "command rejected");
        }
        result
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Add a book with all of its copies available
    ///
    /// Checks, in order: well-formed id, id not taken, known genre,
    /// `1 <= total_copies <= u32::MAX`.
    pub fn add_book(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: i64,
    ) -> Result<()> {
        Self::check_id(id)?;
        if self.books.contains_key(id) {
            return Err(ShelfError::DuplicateBook(id.to_string()));
        }
        let genre: Genre = genre.parse()?;
        let total = match u32::try_from(total_copies) {
            Ok(n) if n >= 1 => n,
            _ => return Err(ShelfError::InvalidCopies(total_copies)),
        };

        self.books
            .insert(id.to_string(), Book::new(id, title, author, genre, total));
        tracing::debug!(book_id = id, %genre, total, "book added");
        Ok(())
    }

    /// Register a member with an empty loan set
    pub fn add_member(&mut self, id: &str, name: &str, email: &str) -> Result<()> {
        Self::check_id(id)?;
        if self.members.contains_key(id) {
            return Err(ShelfError::DuplicateMember(id.to_string()));
        }

        self.members
            .insert(id.to_string(), Member::new(id, name, email));
        tracing::debug!(member_id = id, "member added");
        Ok(())
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// Search books by title or author
    ///
    /// Case-insensitive substring match. A blank query matches nothing.
    /// Results come back in catalog order.
    pub fn search_books(&self, query: &str, by: impl Into<SearchField>) -> Vec<Book> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let by = by.into();

        self.books
            .values()
            .filter(|book| {
                let field = match by {
                    SearchField::Title => &book.title,
                    SearchField::Author => &book.author,
                };
                field.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Get a copy of a book record
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.books.get(id).cloned()
    }

    /// Get a copy of a member record
    pub fn get_member(&self, id: &str) -> Option<Member> {
        self.members.get(id).cloned()
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Apply a partial update to a book
    ///
    /// When the capacity changes, availability becomes
    /// `new_total - on_loan` so outstanding loans are untouched. The new
    /// total may not drop below the number of copies on loan.
    pub fn update_book(&mut self, id: &str, update: BookUpdate) -> Result<()> {
        let book = self
            .books
            .get(id)
            .ok_or_else(|| ShelfError::BookNotFound(id.to_string()))?;
        if update.is_empty() {
            return Ok(());
        }

        let genre = update.genre.as_deref().map(str::parse::<Genre>).transpose()?;

        let on_loan = book.on_loan();
        let total = match update.total_copies {
            Some(requested) => {
                let total = u32::try_from(requested)
                    .map_err(|_| ShelfError::InvalidCopies(requested))?;
                if total < on_loan {
                    return Err(ShelfError::CapacityBelowLoans {
                        id: id.to_string(),
                        requested,
                        on_loan,
                    });
                }
                Some(total)
            }
            None => None,
        };

        // All checks passed; apply.
        let book = self
            .books
            .get_mut(id)
            .ok_or_else(|| ShelfError::BookNotFound(id.to_string()))?;
        if let Some(title) = update.title {
            book.title = title;
        }
        if let Some(author) = update.author {
            book.author = author;
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        if let Some(total) = total {
            book.total_copies = total;
            book.available_copies = total - on_loan;
        }

        tracing::debug!(
            book_id = id,
            total = book.total_copies,
            available = book.available_copies,
            "book updated"
        );
        Ok(())
    }

    /// Apply a partial update to a member's contact details
    pub fn update_member(&mut self, id: &str, update: MemberUpdate) -> Result<()> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| ShelfError::MemberNotFound(id.to_string()))?;

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(email) = update.email {
            member.email = email;
        }

        tracing::debug!(member_id = id, "member updated");
        Ok(())
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Remove a book that has no copies on loan
    pub fn delete_book(&mut self, id: &str) -> Result<()> {
        let book = self
            .books
            .get(id)
            .ok_or_else(|| ShelfError::BookNotFound(id.to_string()))?;
        if !book.is_fully_available() {
            return Err(ShelfError::BookOnLoan {
                id: id.to_string(),
                on_loan: book.on_loan(),
            });
        }

        self.books.shift_remove(id);
        tracing::debug!(book_id = id, "book deleted");
        Ok(())
    }

    /// Remove a member that holds no books
    pub fn delete_member(&mut self, id: &str) -> Result<()> {
        let member = self
            .members
            .get(id)
            .ok_or_else(|| ShelfError::MemberNotFound(id.to_string()))?;
        if member.loan_count() > 0 {
            return Err(ShelfError::MemberHasLoans {
                id: id.to_string(),
                count: member.loan_count(),
            });
        }

        self.members.shift_remove(id);
        tracing::debug!(member_id = id, "member deleted");
        Ok(())
    }

    // =========================================================================
    // Circulation
    // =========================================================================

    /// Lend one copy of `book_id` to `member_id`
    ///
    /// Checks, in order: book exists, a copy is available, member exists,
    /// member is under the loan limit, member does not already hold it.
    pub fn borrow_book(&mut self, book_id: &str, member_id: &str) -> Result<()> {
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| ShelfError::BookNotFound(book_id.to_string()))?;
        if book.available_copies == 0 {
            return Err(ShelfError::NoCopiesAvailable(book_id.to_string()));
        }

        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| ShelfError::MemberNotFound(member_id.to_string()))?;
        if member.loan_count() >= MAX_LOANS_PER_MEMBER {
            return Err(ShelfError::LoanLimitReached {
                member_id: member_id.to_string(),
                limit: MAX_LOANS_PER_MEMBER,
            });
        }
        if member.holds(book_id) {
            return Err(ShelfError::AlreadyBorrowed {
                book_id: book_id.to_string(),
                member_id: member_id.to_string(),
            });
        }

        member.borrowed_books.push(book_id.to_string());
        book.available_copies -= 1;

        tracing::debug!(
            book_id,
            member_id,
            available = book.available_copies,
            "book borrowed"
        );
        Ok(())
    }

    /// Take back the copy of `book_id` held by `member_id`
    pub fn return_book(&mut self, book_id: &str, member_id: &str) -> Result<()> {
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| ShelfError::BookNotFound(book_id.to_string()))?;
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| ShelfError::MemberNotFound(member_id.to_string()))?;
        let position = member
            .borrowed_books
            .iter()
            .position(|id| id == book_id)
            .ok_or_else(|| ShelfError::NotBorrowed {
                book_id: book_id.to_string(),
                member_id: member_id.to_string(),
            })?;

        member.borrowed_books.remove(position);
        if book.available_copies < book.total_copies {
            book.available_copies += 1;
        } else {
            // Unreachable while the conservation invariant holds.
            tracing::warn!(
                book_id,
                member_id,
                total = book.total_copies,
                "return with every copy already shelved; clamping availability"
            );
            book.available_copies = book.total_copies;
        }

        tracing::debug!(
            book_id,
            member_id,
            available = book.available_copies,
            "book returned"
        );
        Ok(())
    }

    // =========================================================================
    // Consistency
    // =========================================================================

    /// Verify every store invariant
    ///
    /// Checks counter bounds, the loan limit, duplicate and dangling loans,
    /// and that each book's on-loan count equals the number of members
    /// holding it. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        for member in self.members.values() {
            if member.loan_count() > MAX_LOANS_PER_MEMBER {
                return Err(ShelfError::InvariantViolation(format!(
                    "member {} holds {} books, limit is {}",
                    member.id,
                    member.loan_count(),
                    MAX_LOANS_PER_MEMBER
                )));
            }
            for (i, book_id) in member.borrowed_books.iter().enumerate() {
                if member.borrowed_books[..i].contains(book_id) {
                    return Err(ShelfError::InvariantViolation(format!(
                        "member {} holds {} twice",
                        member.id, book_id
                    )));
                }
                if !self.books.contains_key(book_id) {
                    return Err(ShelfError::InvariantViolation(format!(
                        "member {} holds unknown book {}",
                        member.id, book_id
                    )));
                }
            }
        }

        for book in self.books.values() {
            if book.available_copies > book.total_copies {
                return Err(ShelfError::InvariantViolation(format!(
                    "book {} has {} available of {} total",
                    book.id, book.available_copies, book.total_copies
                )));
            }
            let holders = self.holder_count(&book.id);
            if holders != book.on_loan() as usize {
                return Err(ShelfError::InvariantViolation(format!(
                    "book {} has {} copies on loan but {} holders",
                    book.id,
                    book.on_loan(),
                    holders
                )));
            }
        }

        Ok(())
    }

    fn holder_count(&self, book_id: &str) -> usize {
        self.members
            .values()
            .filter(|member| member.holds(book_id))
            .count()
    }

    fn check_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(ShelfError::InvalidId(id.to_string()));
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for drivers and debugging)
    // =========================================================================

    /// Iterate books in insertion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Iterate members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Get the number of books in the catalog
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Get the number of registered members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Copies of `book_id` currently on loan
    pub fn outstanding_loans(&self, book_id: &str) -> Option<u32> {
        self.books.get(book_id).map(Book::on_loan)
    }

    /// Ids of members currently holding `book_id`, in member order
    pub fn holders(&self, book_id: &str) -> Vec<String> {
        self.members
            .values()
            .filter(|member| member.holds(book_id))
            .map(|member| member.id.clone())
            .collect()
    }
}
