//! Tests for command execution
//!
//! These tests verify:
//! - Every command routes to its operation
//! - Responses carry the operation's result
//! - Rejections surface as errors, not responses

use shelfdb::protocol::{Command, CommandType, Response};
use shelfdb::{BookUpdate, Library, MemberUpdate, SearchField, ShelfError};

// =============================================================================
// Helper Functions
// =============================================================================

fn add_book(id: &str, title: &str, copies: i64) -> Command {
    Command::AddBook {
        id: id.to_string(),
        title: title.to_string(),
        author: "John Doe".to_string(),
        genre: "Non-Fiction".to_string(),
        total_copies: copies,
    }
}

fn add_member(id: &str) -> Command {
    Command::AddMember {
        id: id.to_string(),
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
    }
}

fn setup_library() -> Library {
    let mut library = Library::new();
    library.execute(add_book("B001", "Python Basics", 2)).unwrap();
    library.execute(add_member("M001")).unwrap();
    library
}

// =============================================================================
// Command Type Tests
// =============================================================================

#[test]
fn test_command_names() {
    assert_eq!(add_book("B", "T", 1).name(), "add_book");
    assert_eq!(Command::borrow("B", "M").name(), "borrow_book");
    assert_eq!(Command::return_book("B", "M").name(), "return_book");
    assert_eq!(
        Command::GetMember { id: "M".to_string() }.command_type(),
        CommandType::GetMember
    );
}

#[test]
fn test_command_mutation_flag() {
    assert!(CommandType::AddBook.is_mutation());
    assert!(CommandType::BorrowBook.is_mutation());
    assert!(CommandType::DeleteMember.is_mutation());
    assert!(!CommandType::SearchBooks.is_mutation());
    assert!(!CommandType::GetBook.is_mutation());
    assert!(!CommandType::GetMember.is_mutation());
}

// =============================================================================
// Execution Tests
// =============================================================================

#[test]
fn test_execute_add_and_get() {
    let mut library = setup_library();

    let response = library
        .execute(Command::GetBook { id: "B001".to_string() })
        .unwrap();

    match response {
        Response::Book(Some(book)) => {
            assert_eq!(book.title(), "Python Basics");
            assert_eq!(book.available_copies(), 2);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn test_execute_get_missing() {
    let mut library = setup_library();

    assert_eq!(
        library.execute(Command::GetBook { id: "nope".to_string() }).unwrap(),
        Response::Book(None)
    );
    assert_eq!(
        library.execute(Command::GetMember { id: "nope".to_string() }).unwrap(),
        Response::Member(None)
    );
}

#[test]
fn test_execute_search() {
    let mut library = setup_library();
    library.execute(add_book("B002", "Data Structures", 1)).unwrap();

    let books = library
        .execute(Command::SearchBooks {
            query: "data".to_string(),
            by: SearchField::Title,
        })
        .unwrap()
        .into_books()
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id(), "B002");
}

#[test]
fn test_execute_borrow_and_return() {
    let mut library = setup_library();

    assert!(library.execute(Command::borrow("B001", "M001")).unwrap().is_done());
    assert_eq!(library.get_book("B001").unwrap().available_copies(), 1);

    assert!(library
        .execute(Command::return_book("B001", "M001"))
        .unwrap()
        .is_done());
    assert_eq!(library.get_book("B001").unwrap().available_copies(), 2);
}

#[test]
fn test_execute_updates() {
    let mut library = setup_library();

    library
        .execute(Command::UpdateBook {
            id: "B001".to_string(),
            update: BookUpdate::new().total_copies(5),
        })
        .unwrap();
    library
        .execute(Command::UpdateMember {
            id: "M001".to_string(),
            update: MemberUpdate::new().email("a.smith@example.com"),
        })
        .unwrap();

    assert_eq!(library.get_book("B001").unwrap().total_copies(), 5);
    match library
        .execute(Command::GetMember { id: "M001".to_string() })
        .unwrap()
    {
        Response::Member(Some(member)) => assert_eq!(member.email(), "a.smith@example.com"),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn test_execute_deletes() {
    let mut library = setup_library();

    library
        .execute(Command::DeleteBook { id: "B001".to_string() })
        .unwrap();
    library
        .execute(Command::DeleteMember { id: "M001".to_string() })
        .unwrap();

    assert_eq!(library.book_count(), 0);
    assert_eq!(library.member_count(), 0);
}

#[test]
fn test_execute_rejection_is_error() {
    let mut library = setup_library();

    let err = library.execute(add_book("B001", "Again", 1)).unwrap_err();
    assert_eq!(err, ShelfError::DuplicateBook("B001".to_string()));

    let err = library
        .execute(Command::return_book("B001", "M001"))
        .unwrap_err();
    assert!(matches!(err, ShelfError::NotBorrowed { .. }));
}
