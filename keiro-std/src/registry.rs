//! Registry of listeners, grouped and priority-ordered.
//!
//! Registration happens on a [`RegistryBuilder`]; [`RegistryBuilder::build`]
//! sorts every group and constructs the listeners, producing an immutable
//! [`Registry`] that dispatch reads without locking.

use crate::config::ResolutionPolicy;
use keiro_core::{BoxListener, ConfigurationError, RegistrationRecord};
use std::collections::{HashMap, hash_map::Entry as MapEntry};

/// A record paired with the listener it resolved to.
pub struct Entry {
    record: RegistrationRecord,
    listener: Option<BoxListener>,
}

impl Entry {
    /// The registration metadata.
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// The constructed listener, or `None` for a placeholder slot.
    pub fn listener(&self) -> Option<&BoxListener> {
        self.listener.as_ref()
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("record", &self.record)
            .field("resolved", &self.listener.is_some())
            .finish()
    }
}

// ============================================================================
// RegistryBuilder - collects records during initialization
// ============================================================================

/// Collects registration records, grouped by name, in insertion order.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: HashMap<String, Vec<RegistrationRecord>>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a group's record list, creating it empty on first sight.
    pub fn upsert_group(&mut self, group: &str) -> &mut Vec<RegistrationRecord> {
        match self.groups.entry(group.to_owned()) {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => {
                tracing::trace!(group, "new group");
                entry.insert(Vec::new())
            }
        }
    }

    /// Append a record to the group it names.
    pub fn append_record(&mut self, record: RegistrationRecord) -> Result<(), ConfigurationError> {
        if record.group().is_empty() {
            return Err(ConfigurationError::EmptyGroup {
                identity: record.identity().name().to_owned(),
            });
        }
        let group = record.group().to_owned();
        self.upsert_group(&group).push(record);
        Ok(())
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Check if no records were collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sort and resolve every group into an immutable [`Registry`].
    ///
    /// Records are stable-sorted by ascending priority, so ties keep their
    /// insertion order. Identities are then resolved in sorted order, group
    /// by group in ascending name order, so a fail-fast error always reports
    /// the same identity.
    pub fn build(self, policy: ResolutionPolicy) -> Result<Registry, ConfigurationError> {
        let mut pending: Vec<_> = self.groups.into_iter().collect();
        pending.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        let mut groups = HashMap::with_capacity(pending.len());
        for (name, mut records) in pending {
            records.sort_by_key(RegistrationRecord::priority);

            let mut entries = Vec::with_capacity(records.len());
            for record in records {
                let listener = resolve(&record, policy)?;
                entries.push(Entry { record, listener });
            }

            tracing::debug!(group = %name, listeners = entries.len(), "group ready");
            groups.insert(name, entries);
        }

        Ok(Registry { groups })
    }
}

fn resolve(
    record: &RegistrationRecord,
    policy: ResolutionPolicy,
) -> Result<Option<BoxListener>, ConfigurationError> {
    match record.identity().resolve() {
        Ok(listener) => Ok(Some(listener)),
        Err(source) => match policy {
            ResolutionPolicy::FailFast => Err(ConfigurationError::Unresolvable {
                identity: record.identity().name().to_owned(),
                source,
            }),
            ResolutionPolicy::Placeholder => {
                tracing::warn!(
                    identity = record.identity().name(),
                    group = record.group(),
                    module = record.module(),
                    error = %source,
                    "listener could not be constructed, keeping an empty slot"
                );
                Ok(None)
            }
        },
    }
}

// ============================================================================
// Registry - immutable, thread-safe listener storage
// ============================================================================

/// An immutable table of groups to priority-ordered listener entries.
///
/// Created by [`RegistryBuilder::build`]. Entries are never added or removed
/// afterwards, so a registry can be read from any number of threads.
#[derive(Debug, Default)]
pub struct Registry {
    groups: HashMap<String, Vec<Entry>>,
}

impl Registry {
    /// The ordered entries of a group, or `None` if the group is unknown.
    pub fn listeners_of(&self, group: &str) -> Option<&[Entry]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Check whether a group has been registered.
    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Iterate over group names, in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Check if no group was registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistryBuilder, ResolutionPolicy};
    use keiro_core::{ConfigurationError, Identity, Listener, RegistrationRecord};

    #[derive(Default)]
    struct Nop;
    impl Listener for Nop {}

    fn record(group: &'static str, name: &'static str, priority: i32) -> RegistrationRecord {
        RegistrationRecord::new(group, Identity::new(name, || Ok(Box::new(Nop))))
            .with_priority(priority)
    }

    fn names(registry: &super::Registry, group: &str) -> Vec<String> {
        registry
            .listeners_of(group)
            .unwrap()
            .iter()
            .map(|e| e.record().identity().name().to_owned())
            .collect()
    }

    #[test]
    fn sorts_by_priority_keeping_insertion_order_on_ties() {
        let mut builder = RegistryBuilder::new();
        for r in [
            record("a", "late", 5),
            record("a", "first-tie", 1),
            record("a", "early", -3),
            record("a", "second-tie", 1),
        ] {
            builder.append_record(r).unwrap();
        }
        let registry = builder.build(ResolutionPolicy::FailFast).unwrap();

        assert_eq!(
            names(&registry, "a"),
            ["early", "first-tie", "second-tie", "late"]
        );
    }

    #[test]
    fn groups_are_partitioned() {
        let mut builder = RegistryBuilder::new();
        builder.append_record(record("a", "x", 0)).unwrap();
        builder.append_record(record("b", "y", 0)).unwrap();
        builder.upsert_group("empty");
        assert_eq!(builder.len(), 2);

        let registry = builder.build(ResolutionPolicy::FailFast).unwrap();
        let mut groups: Vec<_> = registry.groups().collect();
        groups.sort_unstable();

        assert_eq!(groups, ["a", "b", "empty"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.listeners_of("empty").map(<[_]>::len), Some(0));
        assert!(registry.listeners_of("missing").is_none());
    }

    #[test]
    fn upsert_returns_existing_group() {
        let mut builder = RegistryBuilder::new();
        builder.append_record(record("a", "x", 0)).unwrap();
        assert_eq!(builder.upsert_group("a").len(), 1);
    }

    #[test]
    fn rejects_empty_group() {
        let mut builder = RegistryBuilder::new();
        let err = builder.append_record(record("", "orphan", 0)).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyGroup { identity } if identity == "orphan"));
        assert!(builder.is_empty());
    }

    #[test]
    fn fail_fast_names_identity() {
        let mut builder = RegistryBuilder::new();
        builder
            .append_record(RegistrationRecord::new(
                "a",
                Identity::new("broken", || Err("no constructor".into())),
            ))
            .unwrap();

        let err = builder.build(ResolutionPolicy::FailFast).unwrap_err();
        assert!(
            matches!(err, ConfigurationError::Unresolvable { ref identity, .. } if identity == "broken")
        );
    }

    #[test]
    fn fail_fast_reports_first_group_by_name() {
        for _ in 0..16 {
            let mut builder = RegistryBuilder::new();
            let broken = [("zeta", "broken-z"), ("beta", "broken-b"), ("alpha", "broken-a")];
            for (group, name) in broken {
                builder
                    .append_record(RegistrationRecord::new(
                        group,
                        Identity::new(name, || Err("no constructor".into())),
                    ))
                    .unwrap();
            }

            let err = builder.build(ResolutionPolicy::FailFast).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::Unresolvable { ref identity, .. } if identity == "broken-a")
            );
        }
    }

    #[test]
    fn placeholder_keeps_slot() {
        let mut builder = RegistryBuilder::new();
        builder.append_record(record("a", "ok", 0)).unwrap();
        builder
            .append_record(
                RegistrationRecord::new("a", Identity::new("broken", || Err("nope".into())))
                    .with_priority(1),
            )
            .unwrap();

        let registry = builder.build(ResolutionPolicy::Placeholder).unwrap();
        let entries = registry.listeners_of("a").unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].listener().is_some());
        assert!(entries[1].listener().is_none());
    }
}
