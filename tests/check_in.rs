use circulation::circulation::CirculationError;
use circulation::library::Library;
use circulation::member::{MemberId, MemberRegistry};
use circulation::publication::{Publication, PublicationType, Resolution};

fn mk_library() -> (Library, MemberId, MemberId) {
    let mut members = MemberRegistry::new();
    let a = members.register("Ada", "ada@example.org").unwrap();
    let b = members.register("Bob", "bob@example.org").unwrap();
    let mut lib = Library::new(members);
    let heat = Publication::video("Heat", "Michael Mann", "Regency", Resolution::Hd, 2);
    lib.add_publication(heat.unwrap());
    (lib, a, b)
}

#[test]
fn check_in_clears_status_and_borrower() {
    let (mut lib, a, _) = mk_library();
    lib.check_out(PublicationType::Video, 0, 1, a).unwrap();
    assert_eq!(lib.check_in(PublicationType::Video, 0, 1), Ok(a));
    let video = &lib.shelf(PublicationType::Video)[0];
    assert_eq!(video.checked_out_status(), vec![false, false]);
    assert_eq!(video.borrower_at(1), None);
}

#[test]
fn check_in_of_available_copy_fails_unchanged() {
    let (mut lib, a, _) = mk_library();
    lib.check_out(PublicationType::Video, 0, 0, a).unwrap();
    let before = lib.shelf(PublicationType::Video)[0].clone();
    assert_eq!(
        lib.check_in(PublicationType::Video, 0, 1),
        Err(CirculationError::CopyNotCheckedOut)
    );
    assert_eq!(lib.shelf(PublicationType::Video)[0], before);
}

#[test]
fn round_trip_is_independent_of_borrower() {
    for pick_b in [false, true] {
        let (mut lib, a, b) = mk_library();
        let before = lib.shelf(PublicationType::Video)[0].clone();
        let who = if pick_b { b } else { a };
        lib.check_out(PublicationType::Video, 0, 0, who).unwrap();
        lib.check_in(PublicationType::Video, 0, 0).unwrap();
        assert_eq!(lib.shelf(PublicationType::Video)[0], before);
    }
}

#[test]
fn anyone_may_return_a_copy() {
    // Check-in does not ask who is returning the copy; it reports the recorded borrower.
    let (mut lib, a, _) = mk_library();
    lib.check_out(PublicationType::Video, 0, 0, a).unwrap();
    assert_eq!(lib.check_in(PublicationType::Video, 0, 0), Ok(a));
}
