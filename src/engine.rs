// Circulation API boundary. The selection flow and the TUI drive lending
// through this trait so they do not depend on how a session stores its
// members and shelves. It is implemented for the core `Library` type.

use crate::circulation::CirculationError;
use crate::library::{Library, Loan};
use crate::member::{MemberId, Person};
use crate::publication::{Publication, PublicationType};

pub trait CirculationEngine {
    // Mutations
    fn check_out(
        &mut self,
        kind: PublicationType,
        publication: usize,
        copy: usize,
        member: MemberId,
    ) -> Result<Loan, CirculationError>;
    fn check_in(
        &mut self,
        kind: PublicationType,
        publication: usize,
        copy: usize,
    ) -> Result<MemberId, CirculationError>;

    // Queries
    fn shelf_len(&self, kind: PublicationType) -> usize;
    fn publication(&self, kind: PublicationType, index: usize) -> Option<&Publication>;
    fn member_count(&self) -> usize;
    fn member_at(&self, index: usize) -> Option<&Person>;
}

impl CirculationEngine for Library {
    fn check_out(
        &mut self,
        kind: PublicationType,
        publication: usize,
        copy: usize,
        member: MemberId,
    ) -> Result<Loan, CirculationError> {
        Library::check_out(self, kind, publication, copy, member)
    }
    fn check_in(
        &mut self,
        kind: PublicationType,
        publication: usize,
        copy: usize,
    ) -> Result<MemberId, CirculationError> {
        Library::check_in(self, kind, publication, copy)
    }

    fn shelf_len(&self, kind: PublicationType) -> usize {
        self.shelf(kind).len()
    }
    fn publication(&self, kind: PublicationType, index: usize) -> Option<&Publication> {
        Library::publication(self, kind, index)
    }
    fn member_count(&self) -> usize {
        self.members.len()
    }
    fn member_at(&self, index: usize) -> Option<&Person> {
        self.members.at(index)
    }
}
