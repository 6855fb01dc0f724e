//! In-memory user storage, namespaced by backend target.

use std::collections::BTreeMap;

use dashmap::DashMap;
use userdeck_model::{UserId, UserRecord};

/// Records held for one target namespace.
///
/// Ids are assigned from a monotonic counter so a deleted record's id
/// is never reused. The BTreeMap keeps list responses in ascending id
/// order, which is insertion order.
#[derive(Debug, Default)]
struct TargetStore {
    next_id: UserId,
    users: BTreeMap<UserId, UserRecord>,
}

/// All user records, keyed by target name.
///
/// Each target addresses an isolated namespace; a target's store is
/// created lazily on its first write.
#[derive(Debug, Default)]
pub struct UserStore {
    targets: DashMap<String, TargetStore>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records of a target, ascending id order.
    pub fn list(&self, target: &str) -> Vec<UserRecord> {
        self.targets
            .get(target)
            .map(|store| store.users.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, target: &str, id: UserId) -> Option<UserRecord> {
        self.targets.get(target)?.users.get(&id).cloned()
    }

    /// Insert a new record and return it with its assigned id.
    pub fn insert(
        &self,
        target: &str,
        name: String,
        email: String,
    ) -> UserRecord {
        let mut store = self.targets.entry(target.to_string()).or_default();
        store.next_id += 1;
        let record = UserRecord {
            id: store.next_id,
            name,
            email,
        };
        store.users.insert(record.id, record.clone());
        record
    }

    /// Rewrite the name and email of an existing record.
    pub fn update(
        &self,
        target: &str,
        id: UserId,
        name: String,
        email: String,
    ) -> Option<UserRecord> {
        let mut store = self.targets.get_mut(target)?;
        let record = store.users.get_mut(&id)?;
        record.name = name;
        record.email = email;
        Some(record.clone())
    }

    /// Remove a record, returning it if it existed.
    pub fn remove(&self, target: &str, id: UserId) -> Option<UserRecord> {
        self.targets.get_mut(target)?.users.remove(&id)
    }
}
