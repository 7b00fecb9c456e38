//! Per-session user-management screens, kept in process memory.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::models::user::UserScreen;

struct Inner {
    screens: HashMap<String, UserScreen>,
    /// Access order, least recently used first, for eviction.
    order: VecDeque<String>,
}

#[derive(Clone)]
pub struct WorkspaceStore {
    inner: Arc<Mutex<Inner>>,
    capacity: usize,
}

impl WorkspaceStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                screens: HashMap::new(),
                order: VecDeque::new(),
            })),
            capacity: capacity.max(1),
        }
    }

    /// Run `f` against the screen for `key`, creating a seeded one first if needed.
    /// The lock is held for the whole call, so transitions never interleave.
    /// Every call marks `key` as most recently used.
    pub fn with<R>(&self, key: &str, f: impl FnOnce(&mut UserScreen) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let Inner { screens, order } = &mut *guard;
        if screens.contains_key(key) {
            if let Some(pos) = order.iter().position(|k| k == key) {
                order.remove(pos);
            }
        } else {
            while screens.len() >= self.capacity {
                let Some(stale) = order.pop_front() else { break };
                screens.remove(&stale);
                log::debug!("Evicted workspace {stale}");
            }
        }
        order.push_back(key.to_string());
        f(screens.entry(key.to_string()).or_default())
    }

    pub fn remove(&self, key: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.screens.remove(key).is_some() {
            inner.order.retain(|k| k != key);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Modal;

    #[test]
    fn screens_are_isolated_per_key() {
        let store = WorkspaceStore::new(4);
        store.with("a", |s| {
            s.prepare_delete("1");
            s.delete();
        });
        assert_eq!(store.with("a", |s| s.users().len()), 3);
        assert_eq!(store.with("b", |s| s.users().len()), 4);
    }

    #[test]
    fn least_recently_used_is_evicted_at_capacity() {
        let store = WorkspaceStore::new(2);
        store.with("a", |s| { s.prepare_delete("1"); s.delete(); });
        store.with("b", |_| ());
        store.with("c", |_| ());
        assert_eq!(store.len(), 2);
        // "a" was evicted and comes back freshly seeded.
        assert_eq!(store.with("a", |s| s.users().len()), 4);
    }

    #[test]
    fn recently_used_outlives_idle() {
        let store = WorkspaceStore::new(2);
        store.with("active", |s| { s.prepare_delete("1"); s.delete(); });
        store.with("idle", |s| { s.prepare_delete("4"); s.delete(); });
        store.with("active", |s| assert!(s.prepare_edit("2")));
        store.with("drive-by", |_| ());

        assert_eq!(store.len(), 2);
        let (users, modal) = store.with("active", |s| (s.users().len(), s.modal().clone()));
        assert_eq!(users, 3);
        assert_eq!(modal, Modal::Edit("2".to_string()));
        // "idle" was dropped and comes back freshly seeded.
        assert_eq!(store.with("idle", |s| s.users().len()), 4);
    }

    #[test]
    fn remove_drops_state() {
        let store = WorkspaceStore::new(2);
        store.with("a", |s| s.open_add());
        store.remove("a");
        assert!(store.is_empty());
    }
}
