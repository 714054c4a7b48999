//! circulation: library circulation model
//!
//! Goals:
//! - Members, publications (book, music, video) and a per-copy lending ledger
//! - Check-out / check-in rules that can never leave a copy half-updated
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: lend and return a copy
//! ```
//! use circulation::library::Library;
//! use circulation::member::MemberRegistry;
//! use circulation::publication::{BookFormat, Publication, PublicationType};
//!
//! let mut members = MemberRegistry::new();
//! let ada = members.register("Ada Lovelace", "ada@example.org").unwrap();
//! let mut lib = Library::new(members);
//! let dune = lib.add_publication(
//!     Publication::book("Dune", "Frank Herbert", 412, BookFormat::Paperback, 3).unwrap(),
//! );
//!
//! let copy = lib.first_available_copy(PublicationType::Book, dune).unwrap().unwrap();
//! lib.check_out(PublicationType::Book, dune, copy, ada).unwrap();
//! let status = lib.shelf(PublicationType::Book)[dune].checked_out_status();
//! assert_eq!(status, vec![true, false, false]);
//!
//! assert_eq!(lib.check_in(PublicationType::Book, dune, copy), Ok(ada));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin circulation
//! ```

pub mod circulation;
pub mod config;
pub mod display;
pub mod edit;
pub mod engine;
pub mod library;
pub mod member;
pub mod publication;
pub mod seed;
pub mod selection;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
