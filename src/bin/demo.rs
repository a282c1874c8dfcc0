//! ShelfDB Demo Binary
//!
//! Seeds a small library and walks through the catalog and circulation
//! operations, printing state between stages.

use clap::Parser;
use shelfdb::{BookUpdate, Genre, Library, MemberUpdate, Result, MAX_LOANS_PER_MEMBER};
use tracing_subscriber::{fmt, EnvFilter};

/// ShelfDB Demo
#[derive(Parser, Debug)]
#[command(name = "shelfdb-demo")]
#[command(about = "Walk through the ShelfDB catalog and circulation operations")]
#[command(version)]
struct Args {
    /// Only print the final state
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shelfdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("ShelfDB Demo v{}", shelfdb::VERSION);
    tracing::info!("Loan limit: {}", MAX_LOANS_PER_MEMBER);

    let mut library = Library::new();

    if let Err(e) = run(&mut library, args.quiet) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = library.check_invariants() {
        tracing::error!("Store inconsistent after demo: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Demo complete");
}

fn run(library: &mut Library, quiet: bool) -> Result<()> {
    let genres: Vec<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
    println!("Genres available: {}", genres.join(", "));

    library.add_book("B001", "Python Basics", "John Doe", "Non-Fiction", 3)?;
    library.add_book("B002", "Data Structures", "Jane Roe", "Non-Fiction", 2)?;
    library.add_book("B003", "Space Odyssey", "Arthur C", "Sci-Fi", 1)?;
    let rejected = library.add_book("B004", "Love in Py", "Rom Com", "Romcom", 2);
    println!("Add B004 with genre 'Romcom' -> {}", outcome(&rejected));
    library.add_book("B004", "Love in Py", "Rom Com", "Romance", 2)?;
    library.add_book("B005", "History of Time", "S. Hawking", "History", 1)?;

    library.add_member("M001", "Alice Smith", "alice@example.com")?;
    library.add_member("M002", "Bob Brown", "bob@example.com")?;
    library.add_member("M003", "Carol King", "carol@example.com")?;
    print_state(library, "Initial data", quiet);

    println!("Search 'python' by title:");
    for book in library.search_books("python", "title") {
        println!("  {} | {} | {}", book.id(), book.title(), book.author());
    }

    library.update_book("B002", BookUpdate::new().total_copies(4))?;
    print_state(library, "After raising B002 to 4 copies", quiet);

    library.borrow_book("B001", "M001")?;
    library.borrow_book("B003", "M001")?;
    print_state(library, "After M001 borrows B001 and B003", quiet);

    let rejected = library.borrow_book("B003", "M002");
    println!("M002 borrows B003 (single copy out) -> {}", outcome(&rejected));

    library.return_book("B003", "M001")?;
    print_state(library, "After M001 returns B003", quiet);

    let rejected = library.delete_book("B001");
    println!("Delete B001 while on loan -> {}", outcome(&rejected));

    library.return_book("B001", "M001")?;
    library.delete_book("B001")?;
    print_state(library, "After returning and deleting B001", quiet);

    library.update_member(
        "M003",
        MemberUpdate::new()
            .name("Caroline King")
            .email("caroline@example.com"),
    )?;
    print_state(library, "Final state", false);

    Ok(())
}

fn outcome(result: &Result<()>) -> String {
    match result {
        Ok(()) => "ok".to_string(),
        Err(e) => format!("rejected ({})", e),
    }
}

fn print_state(library: &Library, stage: &str, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n========== {} ==========", stage);
    println!("Books:");
    for book in library.books() {
        println!(
            "  {:<5} {:<18} {:<12} {:<12} {}/{} available",
            book.id(),
            book.title(),
            book.author(),
            book.genre(),
            book.available_copies(),
            book.total_copies()
        );
    }
    println!("Members:");
    for member in library.members() {
        println!(
            "  {:<5} {:<14} {:<22} holds [{}]",
            member.id(),
            member.name(),
            member.email(),
            member.borrowed_books().join(", ")
        );
    }
    println!("========================================\n");
}
