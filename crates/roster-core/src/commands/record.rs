//! Classified command records stored in the registry tables

use super::module::{CommandModule, ContextTarget};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The three disjoint command categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Message,
    Slash,
    Context,
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "command"),
            Self::Slash => write!(f, "slash command"),
            Self::Context => write!(f, "context command"),
        }
    }
}

/// A message command together with its behavior payload
#[derive(Clone)]
pub struct MessageCommand {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: Option<String>,
    /// File the module was loaded from
    pub source_path: PathBuf,
    pub module: Arc<dyn CommandModule>,
}

/// A slash command together with its behavior payload
#[derive(Clone)]
pub struct SlashCommand {
    pub name: String,
    pub description: Option<String>,
    pub source_path: PathBuf,
    pub module: Arc<dyn CommandModule>,
}

/// A context-menu command together with its behavior payload
#[derive(Clone)]
pub struct ContextCommand {
    pub name: String,
    pub target: ContextTarget,
    pub source_path: PathBuf,
    pub module: Arc<dyn CommandModule>,
}

impl fmt::Debug for MessageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCommand")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .field("source_path", &self.source_path)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlashCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("source_path", &self.source_path)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for ContextCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextCommand")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("source_path", &self.source_path)
            .finish_non_exhaustive()
    }
}

/// A loaded module after classification
#[derive(Debug, Clone)]
pub enum ClassifiedCommand {
    Message(MessageCommand),
    Slash(SlashCommand),
    Context(ContextCommand),
}

impl ClassifiedCommand {
    pub fn name(&self) -> &str {
        match self {
            Self::Message(cmd) => &cmd.name,
            Self::Slash(cmd) => &cmd.name,
            Self::Context(cmd) => &cmd.name,
        }
    }

    pub fn category(&self) -> CommandCategory {
        match self {
            Self::Message(_) => CommandCategory::Message,
            Self::Slash(_) => CommandCategory::Slash,
            Self::Context(_) => CommandCategory::Context,
        }
    }

    pub fn source_path(&self) -> &Path {
        match self {
            Self::Message(cmd) => &cmd.source_path,
            Self::Slash(cmd) => &cmd.source_path,
            Self::Context(cmd) => &cmd.source_path,
        }
    }
}
