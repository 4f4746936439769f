//! Loader: candidate -> constructed module

use super::manifest::{ManifestFormat, ModuleManifest};
use super::table::ModuleTable;
use crate::commands::CommandModule;
use crate::discovery::Candidate;
use crate::error::{RosterError, RosterResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Instantiates discovered modules against a shared context
pub struct Loader<C> {
    context: Arc<C>,
    table: Arc<ModuleTable<C>>,
}

impl<C: Send + Sync + 'static> Loader<C> {
    pub fn new(context: Arc<C>, table: Arc<ModuleTable<C>>) -> Self {
        Self { context, table }
    }

    /// Import and construct the module behind `candidate`
    pub async fn load(&self, candidate: &Candidate) -> RosterResult<Arc<dyn CommandModule>> {
        let content = fs::read_to_string(&candidate.path).await.map_err(|e| {
            RosterError::load(&candidate.path, format!("Failed to read module: {}", e))
        })?;

        let manifest = ModuleManifest::parse(&content, ManifestFormat::from_path(&candidate.path))
            .map_err(|e| {
                RosterError::load(&candidate.path, format!("Invalid module manifest: {}", e))
            })?;

        self.construct(candidate, manifest)
    }

    /// Construct a module from an already parsed manifest
    pub fn construct(
        &self,
        candidate: &Candidate,
        manifest: ModuleManifest,
    ) -> RosterResult<Arc<dyn CommandModule>> {
        match (manifest.export, manifest.command) {
            (Some(export), Some(_)) => Err(RosterError::load(
                &candidate.path,
                format!(
                    "Manifest declares both export '{}' and an inline [command]",
                    export
                ),
            )),
            (None, Some(declared)) => {
                debug!(path = %candidate.path.display(), "Using inline command declaration");
                Ok(Arc::new(declared))
            }
            (export, None) => {
                let key = export.unwrap_or_else(|| candidate.module_id.clone());
                self.instantiate(candidate, &key)
            }
        }
    }

    fn instantiate(&self, candidate: &Candidate, key: &str) -> RosterResult<Arc<dyn CommandModule>> {
        let constructor = self.table.get(key).ok_or_else(|| {
            RosterError::load(
                &candidate.path,
                format!("No default export registered for '{}'", key),
            )
        })?;

        match panic::catch_unwind(AssertUnwindSafe(|| constructor(&self.context))) {
            Ok(Ok(module)) => Ok(module),
            Ok(Err(e)) => Err(RosterError::load(
                &candidate.path,
                format!("Constructor for '{}' failed: {}", key, e),
            )),
            Err(payload) => Err(RosterError::panicked(
                &candidate.path,
                format!("Constructor for '{}'", key),
                payload.as_ref(),
            )),
        }
    }
}
