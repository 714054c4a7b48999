use crate::circulation::{check_range, CirculationError, SelectionTarget};
use crate::edit::EditError;
use crate::member::{MemberId, MemberRegistry};
use crate::publication::{Publication, PublicationEdit, PublicationType};

/// Result of a successful check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Loan {
    pub kind: PublicationType,
    pub publication: usize,
    pub copy: usize,
    pub member: MemberId,
}

/// One interactive session: the members and the three publication shelves.
///
/// Shelves are positional; indices are stable because publications are never
/// removed.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Library {
    pub(crate) members: MemberRegistry,
    pub(crate) books: Vec<Publication>,
    pub(crate) music: Vec<Publication>,
    pub(crate) videos: Vec<Publication>,
}

impl Library {
    pub fn new(members: MemberRegistry) -> Self {
        Self { members, ..Self::default() }
    }

    pub fn members(&self) -> &MemberRegistry {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut MemberRegistry {
        &mut self.members
    }

    /// Put `publication` on the shelf matching its variant; returns its position there.
    pub fn add_publication(&mut self, publication: Publication) -> usize {
        let shelf = self.shelf_vec_mut(publication.publication_type());
        shelf.push(publication);
        shelf.len() - 1
    }

    pub fn shelf(&self, kind: PublicationType) -> &[Publication] {
        match kind {
            PublicationType::Book => &self.books,
            PublicationType::Music => &self.music,
            PublicationType::Video => &self.videos,
        }
    }

    fn shelf_vec_mut(&mut self, kind: PublicationType) -> &mut Vec<Publication> {
        match kind {
            PublicationType::Book => &mut self.books,
            PublicationType::Music => &mut self.music,
            PublicationType::Video => &mut self.videos,
        }
    }

    pub fn is_empty(&self) -> bool {
        PublicationType::ALL.iter().all(|&k| self.shelf(k).is_empty())
    }

    pub fn publication(&self, kind: PublicationType, index: usize) -> Option<&Publication> {
        self.shelf(kind).get(index)
    }

    fn publication_mut(
        &mut self,
        kind: PublicationType,
        index: usize,
    ) -> Result<&mut Publication, CirculationError> {
        let shelf = self.shelf_vec_mut(kind);
        check_range(SelectionTarget::Publication, index, shelf.len())?;
        Ok(&mut shelf[index])
    }

    pub fn edit_publication(
        &mut self,
        kind: PublicationType,
        index: usize,
        edit: PublicationEdit,
    ) -> Result<(), EditError> {
        let shelf = self.shelf_vec_mut(kind);
        let len = shelf.len();
        let publication =
            shelf.get_mut(index).ok_or(EditError::NoSuchPublication { kind, index, len })?;
        publication.edit_details(edit)?;
        tracing::info!(%kind, publication = index, "publication edited");
        Ok(())
    }

    /// Lowest-indexed free copy of the given publication.
    pub fn first_available_copy(
        &self,
        kind: PublicationType,
        index: usize,
    ) -> Result<Option<usize>, CirculationError> {
        let shelf = self.shelf(kind);
        check_range(SelectionTarget::Publication, index, shelf.len())?;
        Ok(shelf[index].first_available())
    }

    pub fn check_out(
        &mut self,
        kind: PublicationType,
        index: usize,
        copy: usize,
        member: MemberId,
    ) -> Result<Loan, CirculationError> {
        if !self.members.contains(member) {
            tracing::warn!(
                %kind,
                publication = index,
                copy,
                member = %member,
                "check out refused: unknown member"
            );
            return Err(CirculationError::UnknownMember(member));
        }
        let publication = self.publication_mut(kind, index)?;
        match publication.check_out(copy, member) {
            Ok(()) => {
                tracing::info!(
                    %kind,
                    publication = index,
                    copy,
                    member = %member,
                    "copy checked out"
                );
                Ok(Loan { kind, publication: index, copy, member })
            }
            Err(err) => {
                tracing::warn!(%kind, publication = index, copy, error = %err, "check out refused");
                Err(err)
            }
        }
    }

    /// Return a copy; yields the member who held it.
    pub fn check_in(
        &mut self,
        kind: PublicationType,
        index: usize,
        copy: usize,
    ) -> Result<MemberId, CirculationError> {
        let publication = self.publication_mut(kind, index)?;
        match publication.check_in(copy) {
            Ok(member) => {
                tracing::info!(
                    %kind,
                    publication = index,
                    copy,
                    member = %member,
                    "copy checked in"
                );
                Ok(member)
            }
            Err(err) => {
                tracing::warn!(%kind, publication = index, copy, error = %err, "check in refused");
                Err(err)
            }
        }
    }

    /// All copies currently held by `member`, as (kind, publication, copy).
    pub fn loans_of(&self, member: MemberId) -> Vec<(PublicationType, usize, usize)> {
        let mut out = Vec::new();
        for &kind in PublicationType::ALL {
            for (p, publication) in self.shelf(kind).iter().enumerate() {
                for (c, record) in publication.ledger().copies().iter().enumerate() {
                    if record.borrower() == Some(member) {
                        out.push((kind, p, c));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publication::{BookFormat, Resolution};

    fn small_library() -> (Library, MemberId) {
        let mut members = MemberRegistry::new();
        let ada = members.register("Ada", "ada@x").unwrap();
        let mut lib = Library::new(members);
        let dune = Publication::book("Dune", "Herbert", 412, BookFormat::Paperback, 2).unwrap();
        let heat = Publication::video("Heat", "Mann", "Regency", Resolution::Hd, 1).unwrap();
        lib.add_publication(dune);
        lib.add_publication(heat);
        (lib, ada)
    }

    #[test]
    fn publications_land_on_their_shelf() {
        let (lib, _) = small_library();
        assert_eq!(lib.shelf(PublicationType::Book).len(), 1);
        assert_eq!(lib.shelf(PublicationType::Music).len(), 0);
        assert_eq!(lib.shelf(PublicationType::Video)[0].title(), "Heat");
    }

    #[test]
    fn unknown_member_cannot_borrow() {
        let (mut lib, _) = small_library();
        let ghost = MemberId::new(99);
        assert_eq!(
            lib.check_out(PublicationType::Book, 0, 0, ghost),
            Err(CirculationError::UnknownMember(ghost))
        );
        assert_eq!(lib.shelf(PublicationType::Book)[0].checked_out_status(), vec![false, false]);
    }

    #[test]
    fn loans_of_lists_held_copies() {
        let (mut lib, ada) = small_library();
        lib.check_out(PublicationType::Book, 0, 1, ada).unwrap();
        lib.check_out(PublicationType::Video, 0, 0, ada).unwrap();
        assert_eq!(
            lib.loans_of(ada),
            vec![(PublicationType::Book, 0, 1), (PublicationType::Video, 0, 0)]
        );
    }

    #[test]
    fn publication_index_is_range_checked() {
        let (mut lib, _) = small_library();
        assert!(matches!(
            lib.check_in(PublicationType::Music, 0, 0),
            Err(CirculationError::InvalidSelection { target: SelectionTarget::Publication, .. })
        ));
    }
}
