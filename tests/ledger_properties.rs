use circulation::circulation::CirculationError;
use circulation::member::MemberId;
use circulation::publication::CopyLedger;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Out(usize, u32),
    In(usize),
}

fn any_op(copies: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..copies, 1u32..6).prop_map(|(i, m)| Op::Out(i, m)),
        (0..copies).prop_map(Op::In),
    ]
}

fn ledger_and_ops() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec(any_op(n), 0..64)))
}

proptest! {
    #[test]
    fn status_matches_borrower_after_any_sequence((n, ops) in ledger_and_ops()) {
        let mut ledger = CopyLedger::new(n);
        for op in ops {
            let before = ledger.clone();
            match op {
                Op::Out(i, m) => {
                    let was_out = before.borrower_at(i).is_some();
                    let res = ledger.check_out(i, MemberId::new(m));
                    if was_out {
                        prop_assert_eq!(res, Err(CirculationError::CopyUnavailable));
                        prop_assert_eq!(&ledger, &before);
                    } else {
                        prop_assert!(res.is_ok());
                        prop_assert_eq!(ledger.borrower_at(i), Some(MemberId::new(m)));
                    }
                }
                Op::In(i) => {
                    let held = before.borrower_at(i);
                    let res = ledger.check_in(i);
                    match held {
                        Some(m) => prop_assert_eq!(res, Ok(m)),
                        None => {
                            prop_assert_eq!(res, Err(CirculationError::CopyNotCheckedOut));
                            prop_assert_eq!(&ledger, &before);
                        }
                    }
                }
            }
            let status = ledger.checked_out_status();
            prop_assert_eq!(status.len(), n);
            for (i, out) in status.iter().enumerate() {
                prop_assert_eq!(*out, ledger.borrower_at(i).is_some());
            }
            // Only the targeted copy may differ.
            let touched = match op { Op::Out(i, _) | Op::In(i) => i };
            for i in (0..n).filter(|&i| i != touched) {
                prop_assert_eq!(ledger.borrower_at(i), before.borrower_at(i));
            }
        }
    }

    #[test]
    fn check_out_then_check_in_restores_copy(n in 1usize..8, pick in 0usize..8, m in 1u32..100) {
        let i = pick % n;
        let mut ledger = CopyLedger::new(n);
        let before = ledger.clone();
        ledger.check_out(i, MemberId::new(m)).unwrap();
        ledger.check_in(i).unwrap();
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn first_available_is_lowest_free_index(flags in prop::collection::vec(any::<bool>(), 0..10)) {
        let mut ledger = CopyLedger::new(flags.len());
        for (i, out) in flags.iter().enumerate() {
            if *out {
                ledger.check_out(i, MemberId::new(1)).unwrap();
            }
        }
        prop_assert_eq!(ledger.first_available(), flags.iter().position(|out| !out));
    }
}
