use circulation::circulation::{CirculationError, SelectionTarget};
use circulation::library::Library;
use circulation::member::{MemberId, MemberRegistry};
use circulation::publication::{BookFormat, Publication, PublicationType};
use circulation::selection::{Flow, Outcome, Selection, Step};

fn setup(copies: usize) -> (Library, MemberId, MemberId) {
    let mut members = MemberRegistry::new();
    let a = members.register("Ada", "ada@example.org").unwrap();
    let b = members.register("Bob", "bob@example.org").unwrap();
    let mut lib = Library::new(members);
    let dune = Publication::book("Dune", "Frank Herbert", 412, BookFormat::Paperback, copies);
    lib.add_publication(dune.unwrap());
    (lib, a, b)
}

fn check_out(lib: &mut Library, member_index: usize) -> Selection {
    let mut sel = Selection::check_out();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&*lib, 0).unwrap();
    if matches!(sel.step(), Step::ChooseMember { .. }) {
        sel.choose_member(lib, member_index).unwrap();
    }
    sel
}

#[test]
fn three_copy_scenario() {
    let (mut lib, a, b) = setup(3);

    let sel = check_out(&mut lib, 0);
    assert_eq!(sel.report().unwrap().message(), "Publication checked out");
    assert_eq!(lib.shelf(PublicationType::Book)[0].checked_out_status(), vec![true, false, false]);
    assert_eq!(lib.shelf(PublicationType::Book)[0].borrower_at(0), Some(a));

    let sel = check_out(&mut lib, 1);
    match &sel.report().unwrap().outcome {
        Outcome::CheckedOut(loan) => {
            assert_eq!(loan.copy, 1);
            assert_eq!(loan.member, b);
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    let mut sel = Selection::check_in();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&lib, 0).unwrap();
    sel.choose_copy(&mut lib, 0).unwrap();
    let report = sel.report().unwrap();
    assert_eq!(report.flow, Flow::CheckIn);
    assert_eq!(report.outcome, Outcome::CheckedIn { copy: 0, member: a });
    assert_eq!(report.message(), "Publication checked in");
    let dune = &lib.shelf(PublicationType::Book)[0];
    assert_eq!(dune.checked_out_status(), vec![false, true, false]);
    assert_eq!((0..3).map(|i| dune.borrower_at(i)).collect::<Vec<_>>(), vec![None, Some(b), None]);
    assert_eq!(lib.check_in(PublicationType::Book, 0, 0), Err(CirculationError::CopyNotCheckedOut));
}

#[test]
fn single_copy_refusal_never_asks_for_member() {
    let (mut lib, _, _) = setup(1);
    check_out(&mut lib, 0);

    let mut sel = Selection::check_out();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&lib, 0).unwrap();
    assert!(sel.is_finished());
    let report = sel.report().unwrap();
    assert!(!report.succeeded());
    assert_eq!(report.outcome, Outcome::Refused(CirculationError::CopyUnavailable));
    assert_eq!(
        report.message(),
        "Publication not currently available for check out. Please try again later."
    );
    assert_eq!(
        sel.choose_member(&mut lib, 0),
        Err(CirculationError::OutOfSequence { step: "member" })
    );
}

#[test]
fn auto_select_picks_first_free_copy() {
    let (mut lib, a, _) = setup(3);
    lib.check_out(PublicationType::Book, 0, 0, a).unwrap();
    let mut sel = Selection::check_out();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&lib, 0).unwrap();
    assert_eq!(
        sel.step(),
        &Step::ChooseMember { kind: PublicationType::Book, publication: 0, copy: 1 }
    );
}

#[test]
fn check_in_of_free_copy_reports_failure() {
    let (mut lib, _, _) = setup(2);
    let mut sel = Selection::check_in();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&lib, 0).unwrap();
    sel.choose_copy(&mut lib, 1).unwrap();
    let report = sel.report().unwrap();
    assert_eq!(report.outcome, Outcome::Refused(CirculationError::CopyNotCheckedOut));
    assert_eq!(report.message(), "Publication was not able to be checked in");
}

#[test]
fn bad_indices_keep_the_current_step() {
    let (mut lib, _, _) = setup(2);
    let mut sel = Selection::check_in();
    sel.choose_type(PublicationType::Book).unwrap();
    assert_eq!(
        sel.choose_publication(&lib, 3),
        Err(CirculationError::InvalidSelection {
            target: SelectionTarget::Publication,
            index: 3,
            len: 1
        })
    );
    assert_eq!(sel.step(), &Step::ChoosePublication { kind: PublicationType::Book });
    sel.choose_publication(&lib, 0).unwrap();
    assert_eq!(
        sel.choose_copy(&mut lib, 2),
        Err(CirculationError::InvalidSelection { target: SelectionTarget::Copy, index: 2, len: 2 })
    );
    assert!(!sel.is_finished());
}

#[test]
fn member_index_out_of_range_is_rejected() {
    let (mut lib, _, _) = setup(1);
    let mut sel = Selection::check_out();
    sel.choose_type(PublicationType::Book).unwrap();
    sel.choose_publication(&lib, 0).unwrap();
    assert_eq!(
        sel.choose_member(&mut lib, 2),
        Err(CirculationError::InvalidSelection {
            target: SelectionTarget::Member,
            index: 2,
            len: 2
        })
    );
    assert_eq!(lib.shelf(PublicationType::Book)[0].checked_out_status(), vec![false]);
}
