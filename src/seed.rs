//! Demo data loaded when the TUI starts.

use crate::library::Library;
use crate::member::MemberRegistry;
use crate::publication::{BookFormat, MusicFormat, Publication, Resolution};

const MEMBERS: [(&str, &str); 4] = [
    ("Grace Hopper", "grace.hopper@example.org"),
    ("Alan Turing", "alan.turing@example.org"),
    ("Barbara Liskov", "barbara.liskov@example.org"),
    ("Dennis Ritchie", "dennis.ritchie@example.org"),
];

const BOOKS: [(&str, &str, u32, BookFormat, usize); 6] = [
    ("The C Programming Language", "Kernighan & Ritchie", 272, BookFormat::Paperback, 3),
    (
        "Structure and Interpretation of Computer Programs",
        "Abelson & Sussman",
        657,
        BookFormat::Hardcover,
        2,
    ),
    ("The Art of Computer Programming", "Donald Knuth", 672, BookFormat::Hardcover, 1),
    ("Dune", "Frank Herbert", 412, BookFormat::Paperback, 4),
    ("Neuromancer", "William Gibson", 271, BookFormat::Ebook, 2),
    ("Godel, Escher, Bach", "Douglas Hofstadter", 777, BookFormat::Paperback, 1),
];

const MUSIC: [(&str, &str, u32, MusicFormat, usize); 3] = [
    ("Kind of Blue", "Miles Davis", 2764, MusicFormat::Vinyl, 2),
    ("OK Computer", "Radiohead", 3215, MusicFormat::Cd, 3),
    ("Discovery", "Daft Punk", 3660, MusicFormat::Digital, 1),
];

const VIDEOS: [(&str, &str, &str, Resolution, usize); 3] = [
    ("Hackers", "Iain Softley", "United Artists", Resolution::Sd, 1),
    ("The Matrix", "The Wachowskis", "Joel Silver", Resolution::Hd, 2),
    ("Blade Runner 2049", "Denis Villeneuve", "Alcon Entertainment", Resolution::Uhd, 2),
];

/// Four members, six books, three albums and three videos, all copies on the shelf.
pub fn demo_library() -> Library {
    let mut members = MemberRegistry::new();
    for (name, email) in MEMBERS {
        if let Err(err) = members.register(name, email) {
            tracing::error!(%err, name, "seed member rejected");
        }
    }
    let mut lib = Library::new(members);
    let books = BOOKS.iter().map(|&(t, a, pages, f, n)| Publication::book(t, a, pages, f, n));
    let music = MUSIC.iter().map(|&(t, a, secs, f, n)| Publication::music(t, a, secs, f, n));
    let videos = VIDEOS.iter().map(|&(t, a, p, r, n)| Publication::video(t, a, p, r, n));
    for publication in books.chain(music).chain(videos) {
        match publication {
            Ok(p) => {
                lib.add_publication(p);
            }
            Err(err) => tracing::error!(%err, "seed publication rejected"),
        }
    }
    tracing::debug!(members = lib.members().len(), "demo library loaded");
    lib
}
