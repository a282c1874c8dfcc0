//! Property tests for store invariants
//!
//! Random operation sequences over a small id pool, checking after every
//! step that:
//! - `0 <= available_copies <= total_copies`
//! - no member holds more than three books
//! - on-loan counts equal the number of holders
//! - rejected operations leave the store untouched

use proptest::prelude::*;
use shelfdb::{Book, BookUpdate, Genre, Library, Member, MemberUpdate};

// =============================================================================
// Operation Model
// =============================================================================

const BOOK_IDS: [&str; 4] = ["B0", "B1", "B2", "B3"];
const MEMBER_IDS: [&str; 4] = ["M0", "M1", "M2", "M3"];

#[derive(Debug, Clone)]
enum Op {
    AddBook { book: usize, genre: usize, copies: i64 },
    AddMember { member: usize },
    UpdateCopies { book: usize, copies: i64 },
    UpdateMember { member: usize },
    DeleteBook { book: usize },
    DeleteMember { member: usize },
    Borrow { book: usize, member: usize },
    Return { book: usize, member: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0..4usize, 0..7usize, -1..4i64)
            .prop_map(|(book, genre, copies)| Op::AddBook { book, genre, copies }),
        1 => (0..4usize).prop_map(|member| Op::AddMember { member }),
        1 => (0..4usize, -1..5i64).prop_map(|(book, copies)| Op::UpdateCopies { book, copies }),
        1 => (0..4usize).prop_map(|member| Op::UpdateMember { member }),
        1 => (0..4usize).prop_map(|book| Op::DeleteBook { book }),
        1 => (0..4usize).prop_map(|member| Op::DeleteMember { member }),
        3 => (0..4usize, 0..4usize).prop_map(|(book, member)| Op::Borrow { book, member }),
        3 => (0..4usize, 0..4usize).prop_map(|(book, member)| Op::Return { book, member }),
    ]
}

fn apply(library: &mut Library, op: &Op) -> shelfdb::Result<()> {
    match *op {
        Op::AddBook { book, genre, copies } => library.add_book(
            BOOK_IDS[book],
            "Title",
            "Author",
            Genre::ALL[genre].as_str(),
            copies,
        ),
        Op::AddMember { member } => {
            library.add_member(MEMBER_IDS[member], "Name", "name@example.com")
        }
        Op::UpdateCopies { book, copies } => {
            library.update_book(BOOK_IDS[book], BookUpdate::new().total_copies(copies))
        }
        Op::UpdateMember { member } => {
            library.update_member(MEMBER_IDS[member], MemberUpdate::new().name("Renamed"))
        }
        Op::DeleteBook { book } => library.delete_book(BOOK_IDS[book]),
        Op::DeleteMember { member } => library.delete_member(MEMBER_IDS[member]),
        Op::Borrow { book, member } => library.borrow_book(BOOK_IDS[book], MEMBER_IDS[member]),
        Op::Return { book, member } => library.return_book(BOOK_IDS[book], MEMBER_IDS[member]),
    }
}

fn snapshot(library: &Library) -> (Vec<Book>, Vec<Member>) {
    (
        library.books().cloned().collect(),
        library.members().cloned().collect(),
    )
}

fn assert_invariants(library: &Library) {
    library.check_invariants().unwrap();

    for book in library.books() {
        assert!(book.available_copies() <= book.total_copies());
        assert_eq!(
            library.holders(book.id()).len(),
            book.on_loan() as usize,
            "conservation broken for {}",
            book.id()
        );
    }
    for member in library.members() {
        assert!(
            member.loan_count() <= 3,
            "{} holds {} books",
            member.id(),
            member.loan_count()
        );
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn test_invariants_hold_after_any_sequence(
        ops in prop::collection::vec(op_strategy(), 1..120)
    ) {
        let mut library = Library::new();

        for op in &ops {
            let before = snapshot(&library);
            let result = apply(&mut library, op);
            if result.is_err() {
                prop_assert_eq!(snapshot(&library), before, "rejected {:?} mutated the store", op);
            }
            assert_invariants(&library);
        }
    }

    #[test]
    fn test_single_member_never_exceeds_three_loans(
        picks in prop::collection::vec(0..6usize, 1..40)
    ) {
        let mut library = Library::new();
        library.add_member("M0", "Name", "name@example.com").unwrap();
        for i in 0..6 {
            library.add_book(&format!("S{}", i), "Title", "Author", "Fiction", 5).unwrap();
        }

        for (step, pick) in picks.iter().enumerate() {
            let book_id = format!("S{}", pick);
            if step % 3 == 2 {
                let _ = library.return_book(&book_id, "M0");
            } else {
                let _ = library.borrow_book(&book_id, "M0");
            }
            prop_assert!(library.get_member("M0").unwrap().loan_count() <= 3);
            assert_invariants(&library);
        }
    }

    #[test]
    fn test_duplicate_add_never_changes_record(copies in 1..10i64, retry in -3..10i64) {
        let mut library = Library::new();
        library.add_book("B0", "Original", "First", "Fiction", copies).unwrap();
        let before = library.get_book("B0");

        prop_assert!(library.add_book("B0", "Other", "Second", "History", retry).is_err());
        prop_assert_eq!(library.get_book("B0"), before);
    }

    #[test]
    fn test_borrow_return_round_trip(copies in 1..5i64, member in 0..4usize) {
        let mut library = Library::new();
        library.add_book("B0", "Title", "Author", "Fantasy", copies).unwrap();
        for id in MEMBER_IDS {
            library.add_member(id, "Name", "name@example.com").unwrap();
        }
        let before = snapshot(&library);

        library.borrow_book("B0", MEMBER_IDS[member]).unwrap();
        library.return_book("B0", MEMBER_IDS[member]).unwrap();

        prop_assert_eq!(snapshot(&library), before);
    }
}
