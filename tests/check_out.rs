use circulation::circulation::{CirculationError, SelectionTarget};
use circulation::library::Library;
use circulation::member::{MemberId, MemberRegistry};
use circulation::publication::{BookFormat, Publication, PublicationType};

fn mk_library(copies: usize) -> (Library, MemberId, MemberId) {
    let mut members = MemberRegistry::new();
    let a = members.register("Ada", "ada@example.org").unwrap();
    let b = members.register("Bob", "bob@example.org").unwrap();
    let mut lib = Library::new(members);
    let dune = Publication::book("Dune", "Frank Herbert", 412, BookFormat::Paperback, copies);
    lib.add_publication(dune.unwrap());
    (lib, a, b)
}

#[test]
fn check_out_sets_status_and_borrower() {
    let (mut lib, a, _) = mk_library(3);
    let loan = lib.check_out(PublicationType::Book, 0, 0, a).unwrap();
    assert_eq!(loan.copy, 0);
    assert_eq!(loan.member, a);
    let book = &lib.shelf(PublicationType::Book)[0];
    assert_eq!(book.checked_out_status(), vec![true, false, false]);
    assert_eq!(book.borrower_at(0), Some(a));
}

#[test]
fn second_check_out_of_same_copy_fails_unchanged() {
    let (mut lib, a, b) = mk_library(2);
    lib.check_out(PublicationType::Book, 0, 0, a).unwrap();
    let before = lib.shelf(PublicationType::Book)[0].clone();
    let err = lib.check_out(PublicationType::Book, 0, 0, b).unwrap_err();
    assert_eq!(err, CirculationError::CopyUnavailable);
    assert_eq!(lib.shelf(PublicationType::Book)[0], before);
}

#[test]
fn auto_selection_skips_lent_copies() {
    let (mut lib, a, _) = mk_library(3);
    lib.check_out(PublicationType::Book, 0, 0, a).unwrap();
    assert_eq!(lib.first_available_copy(PublicationType::Book, 0), Ok(Some(1)));
}

#[test]
fn one_member_may_hold_many_copies() {
    let (mut lib, a, _) = mk_library(3);
    for copy in 0..3 {
        lib.check_out(PublicationType::Book, 0, copy, a).unwrap();
    }
    assert_eq!(lib.loans_of(a).len(), 3);
    assert_eq!(lib.first_available_copy(PublicationType::Book, 0), Ok(None));
}

#[test]
fn copy_index_out_of_range_is_invalid_selection() {
    let (mut lib, a, _) = mk_library(1);
    assert_eq!(
        lib.check_out(PublicationType::Book, 0, 5, a),
        Err(CirculationError::InvalidSelection { target: SelectionTarget::Copy, index: 5, len: 1 })
    );
}
