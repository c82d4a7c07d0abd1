//! Standard-mode restriction table: resource → subjects allowed to use it.

use std::collections::{BTreeSet, HashMap};

use crate::error::{EligibilityError, Result};
use crate::types::{Fallback, ResourceId, RestrictionKind, SubjectId};

type KindTable = HashMap<ResourceId, BTreeSet<SubjectId>>;

/// One table per initialised [`RestrictionKind`].
///
/// A resource without an entry is decided by the caller's missing-key
/// policy. A resource whose entry has no subjects is denied to everyone.
#[derive(Clone, Debug, Default)]
pub struct RestrictionTable {
    tables: HashMap<RestrictionKind, KindTable>,
}

impl RestrictionTable {
    /// Creates empty tables for the given kinds.
    pub fn with_kinds(kinds: impl IntoIterator<Item = RestrictionKind>) -> Self {
        Self {
            tables: kinds.into_iter().map(|kind| (kind, KindTable::new())).collect(),
        }
    }

    pub fn has_kind(&self, kind: RestrictionKind) -> bool {
        self.tables.contains_key(&kind)
    }

    fn table(&self, kind: RestrictionKind) -> Result<&KindTable> {
        self.tables
            .get(&kind)
            .ok_or(EligibilityError::UnknownKind(kind))
    }

    fn table_mut(&mut self, kind: RestrictionKind) -> Result<&mut KindTable> {
        self.tables
            .get_mut(&kind)
            .ok_or(EligibilityError::UnknownKind(kind))
    }

    /// Adds `subject` to the allowed set of `resource`.
    ///
    /// Returns `Ok(false)` when the pair was already present.
    pub fn add_restriction(
        &mut self,
        kind: RestrictionKind,
        resource: ResourceId,
        subject: SubjectId,
    ) -> Result<bool> {
        Ok(self
            .table_mut(kind)?
            .entry(resource)
            .or_default()
            .insert(subject))
    }

    /// Creates an entry for `resource` without granting it to anyone.
    pub fn declare(&mut self, kind: RestrictionKind, resource: ResourceId) -> Result<()> {
        self.table_mut(kind)?.entry(resource).or_default();
        Ok(())
    }

    pub fn is_allowed(
        &self,
        kind: RestrictionKind,
        resource: &str,
        subject: &str,
        missing_key: Fallback,
    ) -> Result<bool> {
        Ok(match self.table(kind)?.get(resource) {
            None => missing_key.is_allowed(),
            Some(subjects) => subjects.contains(subject),
        })
    }

    /// Subjects allowed to use `resource`, or `None` when it has no entry.
    pub fn allowed_subjects(
        &self,
        kind: RestrictionKind,
        resource: &str,
    ) -> Result<Option<&BTreeSet<SubjectId>>> {
        Ok(self.table(kind)?.get(resource))
    }

    /// Number of resources with an entry in `kind`.
    pub fn len(&self, kind: RestrictionKind) -> usize {
        self.tables.get(&kind).map_or(0, HashMap::len)
    }

    /// Total (resource, subject) pairs across every table.
    pub fn pair_count(&self) -> usize {
        self.tables
            .values()
            .flat_map(HashMap::values)
            .map(BTreeSet::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RestrictionTable {
        RestrictionTable::with_kinds([RestrictionKind::Equipment, RestrictionKind::Consumable])
    }

    #[test]
    fn add_restriction_is_idempotent() {
        let mut table = table();
        let kind = RestrictionKind::Equipment;

        assert!(table
            .add_restriction(kind, "PowerArmor".into(), "Avian".into())
            .unwrap());
        assert!(!table
            .add_restriction(kind, "PowerArmor".into(), "Avian".into())
            .unwrap());

        let subjects = table.allowed_subjects(kind, "PowerArmor").unwrap().unwrap();
        assert_eq!(subjects.len(), 1);
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn missing_key_follows_policy() {
        let table = table();
        let kind = RestrictionKind::Equipment;

        assert!(table.is_allowed(kind, "Parka", "Avian", Fallback::Allow).unwrap());
        assert!(!table.is_allowed(kind, "Parka", "Avian", Fallback::Deny).unwrap());
    }

    #[test]
    fn present_key_only_allows_listed_subjects() {
        let mut table = table();
        let kind = RestrictionKind::Equipment;
        table
            .add_restriction(kind, "PowerArmor".into(), "Avian".into())
            .unwrap();

        assert!(table.is_allowed(kind, "PowerArmor", "Avian", Fallback::Deny).unwrap());
        assert!(!table.is_allowed(kind, "PowerArmor", "Human", Fallback::Allow).unwrap());
    }

    #[test]
    fn empty_entry_denies_regardless_of_policy() {
        let mut table = table();
        let kind = RestrictionKind::Consumable;
        table.declare(kind, "Rations".into()).unwrap();

        assert!(!table.is_allowed(kind, "Rations", "Avian", Fallback::Allow).unwrap());
        assert!(table.allowed_subjects(kind, "Rations").unwrap().unwrap().is_empty());
    }

    #[test]
    fn declare_keeps_existing_subjects() {
        let mut table = table();
        let kind = RestrictionKind::Consumable;
        table
            .add_restriction(kind, "Rations".into(), "Avian".into())
            .unwrap();
        table.declare(kind, "Rations".into()).unwrap();

        assert!(table.is_allowed(kind, "Rations", "Avian", Fallback::Deny).unwrap());
    }

    #[test]
    fn uninitialised_kind_is_an_error() {
        let mut table = table();

        assert_eq!(
            table.is_allowed(RestrictionKind::Bed, "Bed", "Avian", Fallback::Allow),
            Err(EligibilityError::UnknownKind(RestrictionKind::Bed))
        );
        assert!(table
            .add_restriction(RestrictionKind::Bed, "Bed".into(), "Avian".into())
            .is_err());
        assert_eq!(table.len(RestrictionKind::Bed), 0);
    }
}
