//! The capability contract every loadable command module implements

use serde::{Deserialize, Serialize};
use std::any::Any;

/// A constructed command module.
///
/// Implementors override the probe for each capability they provide. The
/// registry only reads the probes once, right after construction; after that
/// the module is an opaque payload handed to the dispatcher, which can
/// downcast it through [`CommandModule::as_any`].
pub trait CommandModule: Send + Sync {
    /// Message (prefix/text) command capability
    fn message_command(&self) -> Option<MessageCommandInfo> {
        None
    }

    /// Slash command capability
    fn slash_command(&self) -> Option<SlashCommandInfo> {
        None
    }

    /// Context-menu command capability
    fn context_command(&self) -> Option<ContextCommandInfo> {
        None
    }

    /// Cast to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Identity of a message command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCommandInfo {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MessageCommandInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Replace the alias list
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Identity of a slash command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SlashCommandInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What a context-menu command is attached to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextTarget {
    #[default]
    User,
    Message,
}

/// Identity of a context-menu command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextCommandInfo {
    pub name: String,
    #[serde(default)]
    pub target: ContextTarget,
}

impl ContextCommandInfo {
    pub fn new(name: impl Into<String>, target: ContextTarget) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}
