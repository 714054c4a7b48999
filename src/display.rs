//! Read-only views used by front ends to list members and copies.

use crate::member::MemberRegistry;
use crate::publication::{Publication, PublicationKind};

/// Placeholder shown for a copy with no borrower.
pub const NO_BORROWER: &str = "N/A";

/// One line of a publication's copy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRow {
    /// 1-based copy number as shown to users.
    pub number: usize,
    pub checked_out: bool,
    pub borrower: String,
}

impl CopyRow {
    pub fn checked_out_label(&self) -> &'static str {
        if self.checked_out {
            "Yes"
        } else {
            "No"
        }
    }
}

/// ```
/// use circulation::display::copy_rows;
/// use circulation::member::MemberRegistry;
/// use circulation::publication::{BookFormat, Publication};
///
/// let mut members = MemberRegistry::new();
/// let ada = members.register("Ada", "ada@example.org").unwrap();
/// let mut book = Publication::book("Dune", "Herbert", 412, BookFormat::Paperback, 2).unwrap();
/// book.check_out(1, ada).unwrap();
///
/// let rows = copy_rows(&book, &members);
/// assert_eq!(rows[0].borrower, "N/A");
/// assert_eq!(rows[1].borrower, "Ada");
/// assert_eq!(rows[1].checked_out_label(), "Yes");
/// ```
pub fn copy_rows(publication: &Publication, members: &MemberRegistry) -> Vec<CopyRow> {
    publication
        .ledger()
        .copies()
        .iter()
        .enumerate()
        .map(|(i, copy)| CopyRow {
            number: i + 1,
            checked_out: copy.is_checked_out(),
            borrower: copy
                .borrower()
                .and_then(|id| members.get(id))
                .map_or_else(|| NO_BORROWER.to_string(), |p| p.name().to_string()),
        })
        .collect()
}

/// Label/value pairs for the variant-specific attributes.
pub fn detail_lines(kind: &PublicationKind) -> Vec<(&'static str, String)> {
    match kind {
        PublicationKind::Book { pages, format } => {
            vec![("Pages", pages.to_string()), ("Format", format.to_string())]
        }
        PublicationKind::Music { duration_secs, format } => vec![
            ("Duration", format!("{duration_secs} seconds")),
            ("Format", format.to_string()),
        ],
        PublicationKind::Video { producer, resolution } => {
            vec![("Producer", producer.clone()), ("Resolution", resolution.to_string())]
        }
    }
}

/// Short "2/3 available" summary.
pub fn availability(publication: &Publication) -> String {
    let ledger = publication.ledger();
    format!("{}/{} available", ledger.available_count(), ledger.num_copies())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberId;
    use crate::publication::{MusicFormat, Resolution};

    #[test]
    fn unknown_borrower_id_shows_placeholder() {
        let members = MemberRegistry::new();
        let mut p = Publication::video("Heat", "Mann", "Regency", Resolution::Uhd, 1).unwrap();
        p.check_out(0, MemberId::new(42)).unwrap();
        let rows = copy_rows(&p, &members);
        assert!(rows[0].checked_out);
        assert_eq!(rows[0].borrower, NO_BORROWER);
    }

    #[test]
    fn music_details_show_seconds() {
        let p = Publication::music("Blue", "Mitchell", 2150, MusicFormat::Cd, 3).unwrap();
        assert_eq!(
            detail_lines(p.kind()),
            vec![("Duration", "2150 seconds".to_string()), ("Format", "CD".to_string())]
        );
        assert_eq!(availability(&p), "3/3 available");
    }
}
