//! roster core library
//!
//! Discovers command modules under a set of directories, loads them against a
//! shared application context, classifies each one as a message, slash or
//! context-menu command, and registers it into the lookup tables a dispatcher
//! reads.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use roster_core::{ModuleTable, RegistryConfig, register_commands};
//! use std::sync::Arc;
//!
//! let mut table = ModuleTable::<Bot>::new();
//! table.register("commands/ping", |bot: &Arc<Bot>| Ok(Ping::new(bot.clone())));
//!
//! let config = RegistryConfig::new("./src", ["commands", "slash"]);
//! let (registry, report) = register_commands(config, Arc::new(bot), Arc::new(table)).await;
//!
//! if let Some(cmd) = registry.resolve("p") {
//!     println!("{} from {}", cmd.name, cmd.source_path.display());
//! }
//! ```

pub mod classifier;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod registrar;
pub mod registry;

pub use classifier::Classifier;
pub use commands::{
    ClassifiedCommand, CommandCategory, CommandModule, ContextCommand, ContextCommandInfo,
    ContextTarget, DeclaredCommand, MessageCommand, MessageCommandInfo, SlashCommand,
    SlashCommandInfo,
};
pub use config::{AliasPolicy, LoggingConfig, RegistryConfig};
pub use discovery::{Candidate, Discoverer};
pub use error::{ConstructError, RosterError, RosterResult};
pub use loader::{Loader, ModuleManifest, ModuleTable};
pub use registrar::{CommandRegistrar, RegistrationReport, register_commands};
pub use registry::{Admission, CommandRegistry, RegistryBuilder};
