//! Library members and the registry that owns them.
//!
//! Publications never hold a `Person`; they record a [`MemberId`] handle and
//! resolve it through the [`MemberRegistry`] when a name is needed.

use std::fmt;

use crate::edit::{required, EditError};

/// Stable, non-owning handle to a library member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(u32);

impl MemberId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A library member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Person {
    pub(crate) id: MemberId,
    pub(crate) name: String,
    pub(crate) email: String,
}

impl Person {
    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Owns every [`Person`] of a session, in registration order, and issues ids.
///
/// Ids come from a counter owned by the registry; they only ever increase and
/// are never reused. Members are never removed.
///
/// ```
/// use circulation::member::MemberRegistry;
///
/// let mut members = MemberRegistry::new();
/// let ada = members.register("Ada Lovelace", "ada@example.org").unwrap();
/// let bob = members.register("Bob", "bob@example.org").unwrap();
/// assert!(bob > ada);
/// assert_eq!(members.get(ada).unwrap().name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone)]
pub struct MemberRegistry {
    members: Vec<Person>,
    // None once u32::MAX has been handed out.
    next_id: Option<u32>,
}

impl Default for MemberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberRegistry {
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Start the id counter at `next_id` instead of 1.
    pub fn with_next_id(next_id: u32) -> Self {
        Self { members: Vec::new(), next_id: Some(next_id) }
    }

    /// The id the next registration will receive, or `None` if ids ran out.
    pub fn next_id(&self) -> Option<MemberId> {
        self.next_id.map(MemberId)
    }

    pub fn register(&mut self, name: &str, email: &str) -> Result<MemberId, EditError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let Some(raw) = self.next_id else {
            tracing::warn!(name = %name, "member registration refused: ids exhausted");
            return Err(EditError::IdsExhausted);
        };
        let id = MemberId(raw);
        self.next_id = raw.checked_add(1);
        tracing::info!(member = %id, name = %name, "member registered");
        self.members.push(Person { id, name, email });
        Ok(id)
    }

    /// Replace name and email of the member at `index`. Nothing changes on error.
    pub fn edit(&mut self, index: usize, name: &str, email: &str) -> Result<(), EditError> {
        let len = self.members.len();
        let name = required("name", name)?;
        let email = required("email", email)?;
        let person = self.members.get_mut(index).ok_or(EditError::NoSuchMember { index, len })?;
        person.name = name;
        person.email = email;
        tracing::info!(member = %person.id, "member edited");
        Ok(())
    }

    pub fn get(&self, id: MemberId) -> Option<&Person> {
        self.members.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in registration order.
    pub fn position(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|p| p.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Person> {
        self.members.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_start_at_counter() {
        let mut r = MemberRegistry::with_next_id(5);
        let a = r.register("A", "a@x").unwrap();
        let b = r.register("B", "b@x").unwrap();
        assert_eq!(a.get(), 5);
        assert_eq!(b.get(), 6);
        assert_eq!(r.next_id(), Some(MemberId::new(7)));
    }

    #[test]
    fn last_id_is_never_handed_out_twice() {
        let mut r = MemberRegistry::with_next_id(u32::MAX);
        let a = r.register("A", "a@x").unwrap();
        assert_eq!(a, MemberId::new(u32::MAX));
        assert_eq!(r.next_id(), None);
        assert_eq!(r.register("B", "b@x"), Err(EditError::IdsExhausted));
        assert_eq!(r.len(), 1);
        assert_eq!(r.get(a).map(Person::name), Some("A"));
    }

    #[test]
    fn position_follows_registration_order() {
        let mut r = MemberRegistry::new();
        let ids: Vec<_> = ["A", "B", "C"].iter().map(|n| r.register(n, "x@x").unwrap()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(r.position(*id), Some(i));
        }
        assert_eq!(r.position(MemberId::new(99)), None);
    }

    #[test]
    fn failed_registration_does_not_consume_an_id() {
        let mut r = MemberRegistry::new();
        assert_eq!(r.register("  ", "a@x"), Err(EditError::Empty("name")));
        assert_eq!(r.register("A", ""), Err(EditError::Empty("email")));
        assert!(r.is_empty());
        assert_eq!(r.register("A", "a@x").unwrap().get(), 1);
    }

    #[test]
    fn edit_trims_and_rejects_empty() {
        let mut r = MemberRegistry::new();
        let id = r.register("A", "a@x").unwrap();
        r.edit(0, "  Alice ", " alice@x ").unwrap();
        let p = r.get(id).unwrap();
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.email(), "alice@x");

        assert_eq!(r.edit(0, "Zed", ""), Err(EditError::Empty("email")));
        assert_eq!(r.get(id).unwrap().name(), "Alice");
        assert_eq!(r.edit(3, "Zed", "z@x"), Err(EditError::NoSuchMember { index: 3, len: 1 }));
    }
}
