//! Record loader registry - Picks a parsing strategy by file extension.
//!
//! Strategies are registered once at startup under a lowercase extension key
//! and looked up case-insensitively when a seed file is loaded. The registry
//! is an ordinary value owned by the composition root, so tests can build a
//! fresh one.

/// Built-in strategy for JSON arrays of employee objects
pub mod json;

use crate::{
    entities::EmployeeRecord,
    errors::{Error, Result},
};
use std::{collections::HashMap, fmt, path::Path, sync::Arc};
use tracing::{debug, error};

/// Given a file path, produce the records it describes.
///
/// Strategies own their I/O. A strategy that cannot read or decode its input
/// logs the problem and returns an empty list instead of failing startup.
pub type LoaderStrategy = Arc<dyn Fn(&Path) -> Vec<EmployeeRecord> + Send + Sync>;

/// Maps lowercase file extensions to loader strategies.
#[derive(Default)]
pub struct LoaderRegistry {
    strategies: HashMap<String, LoaderStrategy>,
}

impl LoaderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in strategies (`json`) registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("json", json::load_json);
        registry
    }

    /// Stores `strategy` under the lowercased `extension`, replacing any
    /// strategy already registered for it.
    pub fn register<F>(&mut self, extension: &str, strategy: F)
    where
        F: Fn(&Path) -> Vec<EmployeeRecord> + Send + Sync + 'static,
    {
        let key = extension.to_lowercase();
        debug!("Registering loader strategy for '{}'", key);
        self.strategies.insert(key, Arc::new(strategy));
    }

    /// Loads records from `path` with the strategy registered for its extension.
    ///
    /// # Errors
    /// Returns [`Error::UnregisteredStrategy`] when no strategy matches the
    /// extension. Never returns an empty list in place of that error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<EmployeeRecord>> {
        let path = path.as_ref();
        let extension = extension_of(path);

        let Some(strategy) = self.strategies.get(&extension) else {
            error!("No loader strategy registered for {:?}", path);
            return Err(Error::UnregisteredStrategy { extension });
        };

        debug!("Loading {:?} with the '{}' strategy", path, extension);
        Ok(strategy(path))
    }
}

impl fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.strategies.keys().collect();
        keys.sort();
        f.debug_struct("LoaderRegistry")
            .field("strategies", &keys)
            .finish()
    }
}

/// Lowercased text after the last `.` of the file name, or `""` when the
/// name has no dot.
fn extension_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()))
        .unwrap_or_default()
}
