//! Command module contract and command records
//!
//! A loaded module is an `Arc<dyn CommandModule>`. It advertises what it can
//! do through three capability probes; the classifier turns the first probe
//! that answers into one of the closed [`ClassifiedCommand`] variants, which
//! is what the registry stores.
//!
//! | Category | Probe | Table |
//! |----------|-------|-------|
//! | message command | [`CommandModule::message_command`] | `commands` + `aliases` |
//! | slash command | [`CommandModule::slash_command`] | `slash_commands` |
//! | context command | [`CommandModule::context_command`] | `context_commands` |

mod declared;
mod module;
mod record;

#[cfg(test)]
mod tests;

pub use declared::{DeclaredCommand, DeclaredKind};
pub use module::{
    CommandModule, ContextCommandInfo, ContextTarget, MessageCommandInfo, SlashCommandInfo,
};
pub use record::{ClassifiedCommand, CommandCategory, ContextCommand, MessageCommand, SlashCommand};
