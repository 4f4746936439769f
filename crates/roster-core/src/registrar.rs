//! The startup registration pass
//!
//! Roots are processed in order. Each root is walked on a blocking thread,
//! then its candidates are loaded with bounded concurrency. Loaded modules
//! are classified and admitted strictly in discovery order by the one
//! [`RegistryBuilder`], so concurrent loading never changes which of two
//! same-named commands wins.

use crate::classifier::Classifier;
use crate::commands::CommandModule;
use crate::config::RegistryConfig;
use crate::discovery::{Candidate, Discoverer};
use crate::error::{RosterError, RosterResult};
use crate::loader::{Loader, ModuleTable};
use crate::registry::{Admission, CommandRegistry, RegistryBuilder};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Per-pass counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    /// Candidates yielded by discovery
    pub discovered: usize,
    pub registered: usize,
    /// Message commands accepted but kept out of the table
    pub disabled: usize,
    /// Missing or duplicate names
    pub rejected: usize,
    /// Modules matching no command variant
    pub ignored: usize,
    pub load_failures: usize,
    pub discovery_failures: usize,
}

impl RegistrationReport {
    /// Whether anything was rejected or failed to load or list
    pub fn has_problems(&self) -> bool {
        self.rejected > 0 || self.load_failures > 0 || self.discovery_failures > 0
    }
}

/// Discovers, loads, classifies and registers command modules
pub struct CommandRegistrar<C> {
    config: RegistryConfig,
    discoverer: Discoverer,
    loader: Loader<C>,
}

impl<C: Send + Sync + 'static> CommandRegistrar<C> {
    pub fn new(config: RegistryConfig, context: Arc<C>, table: Arc<ModuleTable<C>>) -> Self {
        Self {
            discoverer: Discoverer::from_config(&config),
            loader: Loader::new(context, table),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Run the pass over every configured root.
    ///
    /// Never fails: every problem is logged, counted, and the affected
    /// candidate or subtree skipped.
    pub async fn register_all(&self) -> (CommandRegistry, RegistrationReport) {
        let mut builder = RegistryBuilder::from_config(&self.config);
        let mut report = RegistrationReport::default();

        for root in self.config.resolved_roots() {
            let candidates = match self.discover_root(&root).await {
                Ok((candidates, errors)) => {
                    for err in &errors {
                        log_failure(err, "Failed to list command directory");
                    }
                    report.discovery_failures += errors.len();
                    candidates
                }
                Err(err) => {
                    log_failure(&err, "Command directory walk aborted");
                    report.discovery_failures += 1;
                    continue;
                }
            };

            report.discovered += candidates.len();
            self.load_and_admit(&candidates, &mut builder, &mut report)
                .await;
        }

        let registry = builder.build();
        info!(
            commands = registry.command_count(),
            aliases = registry.alias_count(),
            slash_commands = registry.slash_count(),
            context_commands = registry.context_count(),
            rejected = report.rejected,
            load_failures = report.load_failures,
            discovery_failures = report.discovery_failures,
            "Command registration finished"
        );

        (registry, report)
    }

    async fn discover_root(
        &self,
        root: &Path,
    ) -> RosterResult<(Vec<Candidate>, Vec<RosterError>)> {
        let discoverer = self.discoverer.clone();
        let root = root.to_path_buf();
        let walked = tokio::task::spawn_blocking(move || discoverer.discover(&root)).await?;
        Ok(walked)
    }

    async fn load_and_admit(
        &self,
        candidates: &[Candidate],
        builder: &mut RegistryBuilder,
        report: &mut RegistrationReport,
    ) {
        let concurrency = self.config.load_concurrency.max(1);
        let mut loads = stream::iter(candidates)
            .map(|candidate| async move { (candidate, self.loader.load(candidate).await) })
            .buffered(concurrency);

        while let Some((candidate, loaded)) = loads.next().await {
            match loaded {
                Ok(module) => admit_module(module, candidate, builder, report),
                Err(err) => {
                    log_failure(&err, "Failed to load command module");
                    report.load_failures += 1;
                }
            }
        }
    }
}

fn admit_module(
    module: Arc<dyn CommandModule>,
    candidate: &Candidate,
    builder: &mut RegistryBuilder,
    report: &mut RegistrationReport,
) {
    let command = match Classifier::try_classify(module, &candidate.path) {
        Ok(Some(command)) => command,
        Ok(None) => {
            report.ignored += 1;
            return;
        }
        Err(err) => {
            log_failure(&err, "Failed to load command module");
            report.load_failures += 1;
            return;
        }
    };

    match builder.admit(command) {
        Admission::Registered => report.registered += 1,
        Admission::Disabled => report.disabled += 1,
        Admission::Rejected(_) => report.rejected += 1,
    }
}

fn log_failure(err: &RosterError, message: &str) {
    warn!(
        code = err.error_code(),
        path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
        reason = %err,
        "{}", message
    );
}

/// Run a full registration pass with `config`
pub async fn register_commands<C: Send + Sync + 'static>(
    config: RegistryConfig,
    context: Arc<C>,
    table: Arc<ModuleTable<C>>,
) -> (CommandRegistry, RegistrationReport) {
    CommandRegistrar::new(config, context, table)
        .register_all()
        .await
}
