//! Read-only registry and admission outcomes

use crate::commands::{ContextCommand, MessageCommand, SlashCommand};
use crate::error::RosterError;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of offering one classified command to the builder
#[derive(Debug, Clone)]
pub enum Admission {
    /// Inserted into its category table
    Registered,
    /// Accepted, but the name is disabled so only its aliases were recorded
    Disabled,
    /// Not inserted; the error says why
    Rejected(RosterError),
}

impl Admission {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Frozen command tables handed to the dispatcher
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    pub(super) commands: BTreeMap<String, MessageCommand>,
    pub(super) aliases: BTreeMap<String, String>,
    pub(super) slash_commands: BTreeMap<String, SlashCommand>,
    pub(super) context_commands: BTreeMap<String, ContextCommand>,
    pub(super) disabled: BTreeSet<String>,
}

impl CommandRegistry {
    /// Message command registered under exactly `name`
    pub fn command(&self, name: &str) -> Option<&MessageCommand> {
        self.commands.get(name)
    }

    /// Message command by name, falling back to the alias table
    pub fn resolve(&self, name_or_alias: &str) -> Option<&MessageCommand> {
        self.commands.get(name_or_alias).or_else(|| {
            self.aliases
                .get(name_or_alias)
                .and_then(|name| self.commands.get(name))
        })
    }

    /// Canonical name an alias points at. The name may be disabled.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Aliases currently pointing at `name`, sorted
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        self.aliases
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    pub fn slash_command(&self, name: &str) -> Option<&SlashCommand> {
        self.slash_commands.get(name)
    }

    pub fn context_command(&self, name: &str) -> Option<&ContextCommand> {
        self.context_commands.get(name)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(name)
    }

    /// Message commands in name order
    pub fn commands(&self) -> impl Iterator<Item = &MessageCommand> {
        self.commands.values()
    }

    /// `(alias, name)` pairs in alias order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
    }

    pub fn slash_commands(&self) -> impl Iterator<Item = &SlashCommand> {
        self.slash_commands.values()
    }

    pub fn context_commands(&self) -> impl Iterator<Item = &ContextCommand> {
        self.context_commands.values()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn slash_count(&self) -> usize {
        self.slash_commands.len()
    }

    pub fn context_count(&self) -> usize {
        self.context_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
            && self.aliases.is_empty()
            && self.slash_commands.is_empty()
            && self.context_commands.is_empty()
    }
}
