//! Application registry: the name -> path mapping of launchable apps.
//!
//! Names are stored lowercase and looked up case/trim-insensitively.
//! The map is published as an immutable snapshot behind a lock: readers
//! clone an `Arc` and never observe a half-reloaded registry, and
//! `reload()` is a clean build-then-publish replace.

mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{debug, error, info};

pub use loader::{AppEntry, read_entries, write_entries};

type Snapshot = Arc<HashMap<String, String>>;

/// In-memory registry of launchable applications.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: RwLock<Snapshot>,
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry contents with the given entries.
    ///
    /// Names are lowercased; duplicate names keep the last entry.
    /// Returns the number of apps now registered.
    pub fn load(&self, entries: Vec<AppEntry>) -> usize {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.to_lowercase();
            debug!(name = %name, path = %entry.path, "registered app");
            map.insert(name, entry.path);
        }
        let count = map.len();
        self.publish(Arc::new(map));
        info!("loaded {count} applications");
        count
    }

    /// Replace the registry contents from an apps file.
    ///
    /// A missing or malformed file is reported and leaves the registry
    /// empty but usable - it never propagates past this boundary.
    pub fn load_file(&self, path: &Path) -> usize {
        match read_entries(path) {
            Ok(entries) => self.load(entries),
            Err(e) => {
                error!("failed to load apps from {}: {e:#}", path.display());
                self.publish(Arc::new(HashMap::new()));
                0
            }
        }
    }

    /// Re-read the apps file, replacing the registry wholesale.
    ///
    /// No stale entries survive; concurrent readers see either the old
    /// snapshot or the new one in full.
    pub fn reload(&self, path: &Path) -> usize {
        self.load_file(path)
    }

    /// Look up an application path by name (case/trim-insensitive).
    pub fn lookup(&self, name: &str) -> Option<String> {
        let key = name.trim().to_lowercase();
        self.snapshot().get(&key).cloned()
    }

    /// All registered names, sorted.
    ///
    /// Sorting keeps fuzzy-match tie-breaking deterministic.
    pub fn all_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.snapshot().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered applications.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// True when no applications are registered.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    // A poisoned lock only ever guards a fully built snapshot, so it is
    // safe to keep using the inner value.
    fn snapshot(&self) -> Snapshot {
        self.apps
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn publish(&self, snapshot: Snapshot) {
        *self.apps.write().unwrap_or_else(|e| e.into_inner()) = snapshot;
    }
}
