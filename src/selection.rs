//! The linear selection flow behind the check-out and check-in menus.
//!
//! ```text
//! ChooseType -> ChoosePublication -> (ChooseCopy | AutoSelectCopy)
//!            -> [ChooseMember] -> Mutate -> Report
//! ```
//!
//! Check-out picks the lowest free copy itself and then asks for a member; if
//! no copy is free it reports the refusal without ever asking for a member.
//! Check-in asks for the copy explicitly and never asks for a member.
//!
//! A rejected index leaves the flow where it was, so the caller can simply
//! prompt again.
//!
//! ```
//! use circulation::member::MemberRegistry;
//! use circulation::library::Library;
//! use circulation::publication::{BookFormat, Publication, PublicationType};
//! use circulation::selection::{Selection, Step};
//!
//! let mut members = MemberRegistry::new();
//! members.register("Ada", "ada@example.org").unwrap();
//! let mut lib = Library::new(members);
//! let dune = Publication::book("Dune", "Herbert", 412, BookFormat::Paperback, 1).unwrap();
//! lib.add_publication(dune);
//!
//! let mut sel = Selection::check_out();
//! sel.choose_type(PublicationType::Book).unwrap();
//! sel.choose_publication(&lib, 0).unwrap();
//! assert!(matches!(sel.step(), Step::ChooseMember { copy: 0, .. }));
//! sel.choose_member(&mut lib, 0).unwrap();
//! assert_eq!(sel.report().unwrap().message(), "Publication checked out");
//! ```

use crate::circulation::{check_range, CirculationError, SelectionTarget};
use crate::engine::CirculationEngine;
use crate::library::Loan;
use crate::member::MemberId;
use crate::publication::PublicationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Flow {
    CheckOut,
    CheckIn,
}

impl Flow {
    pub fn label(self) -> &'static str {
        match self {
            Flow::CheckOut => "Check out",
            Flow::CheckIn => "Check in",
        }
    }
}

/// How a finished flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    CheckedOut(Loan),
    CheckedIn { copy: usize, member: MemberId },
    Refused(CirculationError),
}

/// Terminal state of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Report {
    pub flow: Flow,
    pub kind: PublicationType,
    pub publication: usize,
    pub outcome: Outcome,
}

impl Report {
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, Outcome::Refused(_))
    }

    pub fn message(&self) -> &'static str {
        match (self.flow, self.succeeded()) {
            (Flow::CheckOut, true) => "Publication checked out",
            (Flow::CheckOut, false) => {
                "Publication not currently available for check out. Please try again later."
            }
            (Flow::CheckIn, true) => "Publication checked in",
            (Flow::CheckIn, false) => "Publication was not able to be checked in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Step {
    ChooseType,
    ChoosePublication { kind: PublicationType },
    ChooseCopy { kind: PublicationType, publication: usize },
    ChooseMember { kind: PublicationType, publication: usize, copy: usize },
    Report(Report),
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::ChooseType => "publication type",
            Step::ChoosePublication { .. } => "publication",
            Step::ChooseCopy { .. } => "copy",
            Step::ChooseMember { .. } => "member",
            Step::Report(_) => "report",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    flow: Flow,
    step: Step,
}

impl Selection {
    pub fn new(flow: Flow) -> Self {
        Self { flow, step: Step::ChooseType }
    }

    pub fn check_out() -> Self {
        Self::new(Flow::CheckOut)
    }

    pub fn check_in() -> Self {
        Self::new(Flow::CheckIn)
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn report(&self) -> Option<&Report> {
        match &self.step {
            Step::Report(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.report().is_some()
    }

    fn out_of_sequence(&self, expected: &'static str) -> CirculationError {
        tracing::debug!(expected, current = self.step.name(), "selection step out of sequence");
        CirculationError::OutOfSequence { step: expected }
    }

    pub fn choose_type(&mut self, kind: PublicationType) -> Result<(), CirculationError> {
        if self.step != Step::ChooseType {
            return Err(self.out_of_sequence("publication type"));
        }
        self.step = Step::ChoosePublication { kind };
        Ok(())
    }

    /// Pick a publication by shelf position. For check-out this also performs
    /// the copy auto-selection, possibly finishing the flow with a refusal.
    pub fn choose_publication(
        &mut self,
        engine: &dyn CirculationEngine,
        index: usize,
    ) -> Result<(), CirculationError> {
        let Step::ChoosePublication { kind } = self.step else {
            return Err(self.out_of_sequence("publication"));
        };
        check_range(SelectionTarget::Publication, index, engine.shelf_len(kind))?;
        self.step = match self.flow {
            Flow::CheckIn => Step::ChooseCopy { kind, publication: index },
            Flow::CheckOut => {
                let free = engine.publication(kind, index).and_then(|p| p.first_available());
                match free {
                    Some(copy) => {
                        tracing::debug!(%kind, publication = index, copy, "auto-selected copy");
                        Step::ChooseMember { kind, publication: index, copy }
                    }
                    None => {
                        tracing::warn!(
                            %kind,
                            publication = index,
                            "no copy available for check out"
                        );
                        Step::Report(Report {
                            flow: self.flow,
                            kind,
                            publication: index,
                            outcome: Outcome::Refused(CirculationError::CopyUnavailable),
                        })
                    }
                }
            }
        };
        Ok(())
    }

    /// Check-in only: name the copy being returned, then check it in.
    pub fn choose_copy(
        &mut self,
        engine: &mut dyn CirculationEngine,
        copy: usize,
    ) -> Result<(), CirculationError> {
        let Step::ChooseCopy { kind, publication } = self.step else {
            return Err(self.out_of_sequence("copy"));
        };
        let copies = engine.publication(kind, publication).map_or(0, |p| p.num_copies());
        check_range(SelectionTarget::Copy, copy, copies)?;
        let outcome = match engine.check_in(kind, publication, copy) {
            Ok(member) => Outcome::CheckedIn { copy, member },
            Err(err) => Outcome::Refused(err),
        };
        self.step = Step::Report(Report { flow: self.flow, kind, publication, outcome });
        Ok(())
    }

    /// Check-out only: pick the borrowing member by registry position, then
    /// lend the auto-selected copy.
    pub fn choose_member(
        &mut self,
        engine: &mut dyn CirculationEngine,
        index: usize,
    ) -> Result<(), CirculationError> {
        let Step::ChooseMember { kind, publication, copy } = self.step else {
            return Err(self.out_of_sequence("member"));
        };
        check_range(SelectionTarget::Member, index, engine.member_count())?;
        let Some(member) = engine.member_at(index).map(|p| p.id()) else {
            return Err(CirculationError::InvalidSelection {
                target: SelectionTarget::Member,
                index,
                len: engine.member_count(),
            });
        };
        let outcome = match engine.check_out(kind, publication, copy, member) {
            Ok(loan) => Outcome::CheckedOut(loan),
            Err(err) => Outcome::Refused(err),
        };
        self.step = Step::Report(Report { flow: self.flow, kind, publication, outcome });
        Ok(())
    }
}
