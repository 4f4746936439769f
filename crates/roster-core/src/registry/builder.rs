//! Single-writer registry builder

use super::types::{Admission, CommandRegistry};
use crate::commands::{
    ClassifiedCommand, CommandCategory, ContextCommand, MessageCommand, SlashCommand,
};
use crate::config::{AliasPolicy, RegistryConfig};
use crate::error::RosterError;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Owns the mutable tables while commands are being registered
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: CommandRegistry,
    disabled: HashSet<String>,
    alias_policy: AliasPolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new()
            .with_disabled(config.disabled_commands.iter().cloned())
            .with_alias_policy(config.alias_policy)
    }

    /// Message command names to keep out of the command table
    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    /// Apply the admission rules for the command's category
    pub fn admit(&mut self, command: ClassifiedCommand) -> Admission {
        match command {
            ClassifiedCommand::Message(cmd) => self.admit_message(cmd),
            ClassifiedCommand::Slash(cmd) => self.admit_slash(cmd),
            ClassifiedCommand::Context(cmd) => self.admit_context(cmd),
        }
    }

    fn admit_message(&mut self, command: MessageCommand) -> Admission {
        if let Err(err) = check_name(
            &self.registry.commands,
            CommandCategory::Message,
            &command.name,
            &command.source_path,
        ) {
            return reject(err);
        }

        let name = command.name.clone();
        let aliases = command.aliases.clone();
        let source_path = command.source_path.clone();
        let disabled = self.disabled.contains(&name);

        if disabled {
            // The name is not inserted, so a later candidate may still claim it.
            debug!(name = %name, path = %source_path.display(), "Command is disabled");
            self.registry.disabled.insert(name.clone());
        } else {
            debug!(name = %name, path = %source_path.display(), "Registered command");
            self.registry.commands.insert(name.clone(), command);
        }

        for alias in aliases {
            self.insert_alias(alias, &name, &source_path);
        }

        if disabled {
            Admission::Disabled
        } else {
            Admission::Registered
        }
    }

    fn admit_slash(&mut self, command: SlashCommand) -> Admission {
        if let Err(err) = check_name(
            &self.registry.slash_commands,
            CommandCategory::Slash,
            &command.name,
            &command.source_path,
        ) {
            return reject(err);
        }

        debug!(name = %command.name, path = %command.source_path.display(), "Registered slash command");
        self.registry
            .slash_commands
            .insert(command.name.clone(), command);
        Admission::Registered
    }

    fn admit_context(&mut self, command: ContextCommand) -> Admission {
        if let Err(err) = check_name(
            &self.registry.context_commands,
            CommandCategory::Context,
            &command.name,
            &command.source_path,
        ) {
            return reject(err);
        }

        debug!(name = %command.name, path = %command.source_path.display(), "Registered context command");
        self.registry
            .context_commands
            .insert(command.name.clone(), command);
        Admission::Registered
    }

    fn insert_alias(&mut self, alias: String, name: &str, source_path: &Path) {
        let previous = self.registry.aliases.get(&alias).cloned();

        match (previous, self.alias_policy) {
            (Some(owner), _) if owner == name => {}
            (Some(owner), AliasPolicy::LastWriteWins) => {
                warn!(
                    alias = %alias,
                    previous = %owner,
                    name = %name,
                    path = %source_path.display(),
                    "Alias reassigned to a later command"
                );
                self.registry.aliases.insert(alias, name.to_string());
            }
            (Some(owner), AliasPolicy::FirstWriteWins) => {
                warn!(
                    alias = %alias,
                    owner = %owner,
                    name = %name,
                    path = %source_path.display(),
                    "Alias already taken, keeping the first owner"
                );
            }
            (None, _) => {
                self.registry.aliases.insert(alias, name.to_string());
            }
        }
    }

    pub fn contains_command(&self, name: &str) -> bool {
        self.registry.commands.contains_key(name)
    }

    /// Freeze the tables
    pub fn build(self) -> CommandRegistry {
        self.registry
    }
}

fn check_name<V>(
    table: &BTreeMap<String, V>,
    category: CommandCategory,
    name: &str,
    source_path: &Path,
) -> Result<(), RosterError> {
    if name.is_empty() {
        return Err(RosterError::validation(
            source_path,
            format!("The {} doesn't have a name", category),
        ));
    }

    if table.contains_key(name) {
        return Err(RosterError::conflict(category, name, source_path));
    }

    Ok(())
}

fn reject(err: RosterError) -> Admission {
    warn!(
        code = err.error_code(),
        path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
        reason = %err,
        "Command rejected"
    );
    Admission::Rejected(err)
}
