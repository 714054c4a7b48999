//! Validation shared by member and publication edits.

use crate::publication::PublicationType;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} out of range: min {min}, got {got}")]
    OutOfRange { field: &'static str, min: u32, got: u32 },
    #[error("edit describes a {got} but the publication is a {expected}")]
    KindMismatch { expected: PublicationType, got: PublicationType },
    #[error("no member at position {index} (have {len})")]
    NoSuchMember { index: usize, len: usize },
    #[error("no {kind} at position {index} (have {len})")]
    NoSuchPublication { kind: PublicationType, index: usize, len: usize },
    #[error("member ids exhausted")]
    IdsExhausted,
}

/// Trim and reject empty input.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, EditError> {
    let t = value.trim();
    if t.is_empty() {
        return Err(EditError::Empty(field));
    }
    Ok(t.to_string())
}

pub(crate) fn at_least(field: &'static str, min: u32, got: u32) -> Result<u32, EditError> {
    if got < min {
        return Err(EditError::OutOfRange { field, min, got });
    }
    Ok(got)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims() {
        assert_eq!(required("title", "  Dune "), Ok("Dune".to_string()));
        assert_eq!(required("title", " \t"), Err(EditError::Empty("title")));
    }

    #[test]
    fn at_least_reports_bounds() {
        assert_eq!(at_least("pages", 1, 3), Ok(3));
        assert_eq!(
            at_least("pages", 1, 0),
            Err(EditError::OutOfRange { field: "pages", min: 1, got: 0 })
        );
    }
}
