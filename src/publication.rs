use std::fmt;
use std::str::FromStr;

use crate::edit::{at_least, required, EditError};
use crate::member::MemberId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelParseError {
    #[error("invalid label: '{0}'")]
    Invalid(String),
}

/// Declares a field-less label enum with `ALL`, `LABELS`, `label()`,
/// `Display` and a case-insensitive `FromStr`.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Index of this variant inside `ALL`.
            pub fn ordinal(self) -> usize {
                Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = LabelParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let t = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(t))
                    .ok_or_else(|| LabelParseError::Invalid(s.to_string()))
            }
        }
    };
}

label_enum! {
    /// Which shelf a publication lives on.
    PublicationType { Book => "Book", Music => "Music", Video => "Video" }
}

label_enum! {
    BookFormat { Hardcover => "Hardcover", Paperback => "Paperback", Ebook => "E-book" }
}

label_enum! {
    MusicFormat { Cd => "CD", Vinyl => "Vinyl", Digital => "Digital" }
}

label_enum! {
    Resolution { Sd => "SD", Hd => "HD", Uhd => "UHD" }
}

/// Type-specific attributes of a publication.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicationKind {
    Book { pages: u32, format: BookFormat },
    Music { duration_secs: u32, format: MusicFormat },
    Video { producer: String, resolution: Resolution },
}

impl PublicationKind {
    pub fn publication_type(&self) -> PublicationType {
        match self {
            PublicationKind::Book { .. } => PublicationType::Book,
            PublicationKind::Music { .. } => PublicationType::Music,
            PublicationKind::Video { .. } => PublicationType::Video,
        }
    }

    fn validated(self) -> Result<Self, EditError> {
        match self {
            PublicationKind::Book { pages, format } => {
                Ok(PublicationKind::Book { pages: at_least("pages", 1, pages)?, format })
            }
            PublicationKind::Music { duration_secs, format } => Ok(PublicationKind::Music {
                duration_secs: at_least("duration", 1, duration_secs)?,
                format,
            }),
            PublicationKind::Video { producer, resolution } => {
                let producer = required("producer", &producer)?;
                Ok(PublicationKind::Video { producer, resolution })
            }
        }
    }
}

/// State of one physical copy. A copy is checked out exactly when it has a
/// borrower, so status and borrower cannot disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyRecord {
    pub(crate) borrower: Option<MemberId>,
}

impl CopyRecord {
    pub fn borrower(&self) -> Option<MemberId> {
        self.borrower
    }

    pub fn is_checked_out(&self) -> bool {
        self.borrower.is_some()
    }

    pub fn is_available(&self) -> bool {
        self.borrower.is_none()
    }
}

/// Per-copy lending state of one publication. The number of copies is fixed
/// at construction.
///
/// ```
/// use circulation::member::MemberId;
/// use circulation::publication::CopyLedger;
///
/// let mut ledger = CopyLedger::new(3);
/// ledger.check_out(0, MemberId::new(7)).unwrap();
/// assert_eq!(ledger.checked_out_status(), vec![true, false, false]);
/// assert_eq!(ledger.first_available(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLedger {
    pub(crate) copies: Vec<CopyRecord>,
}

impl CopyLedger {
    /// A ledger of `num_copies` copies, all available.
    pub fn new(num_copies: usize) -> Self {
        Self { copies: vec![CopyRecord::default(); num_copies] }
    }

    pub fn num_copies(&self) -> usize {
        self.copies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    /// Snapshot of which copies are checked out, index-aligned with the copies.
    pub fn checked_out_status(&self) -> Vec<bool> {
        self.copies.iter().map(CopyRecord::is_checked_out).collect()
    }

    /// Current holder of copy `index`, or `None` if it is available or out of range.
    pub fn borrower_at(&self, index: usize) -> Option<MemberId> {
        self.copies.get(index).and_then(|c| c.borrower)
    }

    pub fn copies(&self) -> &[CopyRecord] {
        &self.copies
    }

    /// Lowest-indexed available copy.
    pub fn first_available(&self) -> Option<usize> {
        self.copies.iter().position(CopyRecord::is_available)
    }

    pub fn available_count(&self) -> usize {
        self.copies.iter().filter(|c| c.is_available()).count()
    }

    pub fn is_fully_checked_out(&self) -> bool {
        self.first_available().is_none()
    }
}

/// Replacement values for an edit of a publication's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationEdit {
    pub title: String,
    pub author: String,
    pub kind: PublicationKind,
}

/// A catalog item: bibliographic attributes plus its copy ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Publication {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) kind: PublicationKind,
    pub(crate) ledger: CopyLedger,
}

impl Publication {
    pub fn try_new(
        title: &str,
        author: &str,
        kind: PublicationKind,
        num_copies: usize,
    ) -> Result<Self, EditError> {
        Ok(Self {
            title: required("title", title)?,
            author: required("author", author)?,
            kind: kind.validated()?,
            ledger: CopyLedger::new(num_copies),
        })
    }

    pub fn book(
        title: &str,
        author: &str,
        pages: u32,
        format: BookFormat,
        num_copies: usize,
    ) -> Result<Self, EditError> {
        Self::try_new(title, author, PublicationKind::Book { pages, format }, num_copies)
    }

    pub fn music(
        title: &str,
        author: &str,
        duration_secs: u32,
        format: MusicFormat,
        num_copies: usize,
    ) -> Result<Self, EditError> {
        Self::try_new(title, author, PublicationKind::Music { duration_secs, format }, num_copies)
    }

    pub fn video(
        title: &str,
        author: &str,
        producer: &str,
        resolution: Resolution,
        num_copies: usize,
    ) -> Result<Self, EditError> {
        let kind = PublicationKind::Video { producer: producer.to_string(), resolution };
        Self::try_new(title, author, kind, num_copies)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &PublicationKind {
        &self.kind
    }

    pub fn publication_type(&self) -> PublicationType {
        self.kind.publication_type()
    }

    pub fn ledger(&self) -> &CopyLedger {
        &self.ledger
    }

    pub fn num_copies(&self) -> usize {
        self.ledger.num_copies()
    }

    pub fn checked_out_status(&self) -> Vec<bool> {
        self.ledger.checked_out_status()
    }

    pub fn borrower_at(&self, index: usize) -> Option<MemberId> {
        self.ledger.borrower_at(index)
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), EditError> {
        self.title = required("title", title)?;
        Ok(())
    }

    pub fn set_author(&mut self, author: &str) -> Result<(), EditError> {
        self.author = required("author", author)?;
        Ok(())
    }

    /// Replace title, author and variant fields together. The copy ledger is
    /// untouched, and nothing changes if any field is rejected.
    pub fn edit_details(&mut self, edit: PublicationEdit) -> Result<(), EditError> {
        let expected = self.publication_type();
        let got = edit.kind.publication_type();
        if expected != got {
            return Err(EditError::KindMismatch { expected, got });
        }
        let title = required("title", &edit.title)?;
        let author = required("author", &edit.author)?;
        let kind = edit.kind.validated()?;
        self.title = title;
        self.author = author;
        self.kind = kind;
        Ok(())
    }
}
