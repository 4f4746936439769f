//! Descriptor-only commands declared inline in a module manifest
//!
//! ```toml
//! [command]
//! kind = "message"
//! name = "mute"
//! aliases = ["silence", "shush"]
//! description = "Mute a member"
//! ```
//!
//! These let operators register names (and check for conflicts) without a
//! compiled constructor. They carry no behavior of their own.

use super::module::{
    CommandModule, ContextCommandInfo, ContextTarget, MessageCommandInfo, SlashCommandInfo,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Which capability a declared command claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredKind {
    Message,
    Slash,
    Context,
    /// Anything else; classifies as no known variant
    Unknown,
}

impl DeclaredKind {
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "message" | "command" | "text" => Self::Message,
            "slash" => Self::Slash,
            "context" | "context_menu" | "context-menu" => Self::Context,
            _ => Self::Unknown,
        }
    }
}

/// The `[command]` table of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredCommand {
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target: ContextTarget,
}

impl DeclaredCommand {
    pub fn declared_kind(&self) -> DeclaredKind {
        DeclaredKind::parse(&self.kind)
    }
}

impl CommandModule for DeclaredCommand {
    fn message_command(&self) -> Option<MessageCommandInfo> {
        (self.declared_kind() == DeclaredKind::Message).then(|| MessageCommandInfo {
            name: self.name.clone(),
            aliases: self.aliases.clone(),
            description: self.description.clone(),
        })
    }

    fn slash_command(&self) -> Option<SlashCommandInfo> {
        (self.declared_kind() == DeclaredKind::Slash).then(|| SlashCommandInfo {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    fn context_command(&self) -> Option<ContextCommandInfo> {
        (self.declared_kind() == DeclaredKind::Context)
            .then(|| ContextCommandInfo::new(self.name.clone(), self.target))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
