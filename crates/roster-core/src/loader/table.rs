//! Constructor table keyed by export name

use crate::commands::CommandModule;
use crate::error::ConstructError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A type-erased module constructor
pub type Constructor<C> =
    Arc<dyn Fn(&Arc<C>) -> Result<Arc<dyn CommandModule>, ConstructError> + Send + Sync>;

/// The compiled-in set of module constructors.
///
/// Discovered manifests refer to entries by key; a manifest without an
/// `export` key refers to the entry named by its module id
/// (e.g. `commands/moderation/mute`).
pub struct ModuleTable<C> {
    constructors: HashMap<String, Constructor<C>>,
}

impl<C: Send + Sync + 'static> ModuleTable<C> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor. A later registration under the same key replaces the earlier one.
    pub fn register<M, F>(&mut self, key: impl Into<String>, constructor: F) -> &mut Self
    where
        M: CommandModule + 'static,
        F: Fn(&Arc<C>) -> Result<M, ConstructError> + Send + Sync + 'static,
    {
        let erased: Constructor<C> = Arc::new(move |ctx: &Arc<C>| {
            constructor(ctx).map(|module| Arc::new(module) as Arc<dyn CommandModule>)
        });
        self.constructors.insert(key.into(), erased);
        self
    }

    /// Builder-style [`ModuleTable::register`]
    pub fn with<M, F>(mut self, key: impl Into<String>, constructor: F) -> Self
    where
        M: CommandModule + 'static,
        F: Fn(&Arc<C>) -> Result<M, ConstructError> + Send + Sync + 'static,
    {
        self.register(key, constructor);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Constructor<C>> {
        self.constructors.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<C: Send + Sync + 'static> Default for ModuleTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ModuleTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.constructors.keys().collect();
        keys.sort();
        f.debug_struct("ModuleTable").field("keys", &keys).finish()
    }
}
