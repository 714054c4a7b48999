//! Check-out and check-in rules over a publication's copy ledger.
//!
//! Both operations touch exactly one [`CopyRecord`] and leave it unchanged on
//! failure. Check-in does not verify who is returning the copy.
//!
//! [`CopyRecord`]: crate::publication::CopyRecord

use std::fmt;

use crate::member::MemberId;
use crate::publication::{CopyLedger, Publication};

/// What a positional index was selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionTarget {
    Type,
    Publication,
    Copy,
    Member,
}

impl fmt::Display for SelectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionTarget::Type => "publication type",
            SelectionTarget::Publication => "publication",
            SelectionTarget::Copy => "copy",
            SelectionTarget::Member => "member",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CirculationError {
    #[error("no copy available for check out")]
    CopyUnavailable,
    #[error("copy is not checked out")]
    CopyNotCheckedOut,
    #[error("invalid {target} selection: index {index}, have {len}")]
    InvalidSelection { target: SelectionTarget, index: usize, len: usize },
    #[error("unknown member id {0}")]
    UnknownMember(MemberId),
    #[error("selection is not waiting for a {step}")]
    OutOfSequence { step: &'static str },
}

pub(crate) fn check_range(
    target: SelectionTarget,
    index: usize,
    len: usize,
) -> Result<(), CirculationError> {
    if index >= len {
        return Err(CirculationError::InvalidSelection { target, index, len });
    }
    Ok(())
}

impl CopyLedger {
    /// Lend copy `index` to `borrower`. Fails without mutation if the copy is
    /// already lent.
    pub fn check_out(&mut self, index: usize, borrower: MemberId) -> Result<(), CirculationError> {
        let len = self.copies.len();
        let copy = self.copies.get_mut(index).ok_or(CirculationError::InvalidSelection {
            target: SelectionTarget::Copy,
            index,
            len,
        })?;
        if copy.is_checked_out() {
            return Err(CirculationError::CopyUnavailable);
        }
        copy.borrower = Some(borrower);
        Ok(())
    }

    /// Return copy `index`, yielding whoever held it. Fails without mutation
    /// if the copy was not lent.
    pub fn check_in(&mut self, index: usize) -> Result<MemberId, CirculationError> {
        let len = self.copies.len();
        let copy = self.copies.get_mut(index).ok_or(CirculationError::InvalidSelection {
            target: SelectionTarget::Copy,
            index,
            len,
        })?;
        copy.borrower.take().ok_or(CirculationError::CopyNotCheckedOut)
    }
}

impl Publication {
    pub fn check_out(&mut self, index: usize, borrower: MemberId) -> Result<(), CirculationError> {
        self.ledger.check_out(index, borrower)
    }

    pub fn check_in(&mut self, index: usize) -> Result<MemberId, CirculationError> {
        self.ledger.check_in(index)
    }

    pub fn first_available(&self) -> Option<usize> {
        self.ledger.first_available()
    }
}
