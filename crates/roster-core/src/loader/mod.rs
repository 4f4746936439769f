//! Module loading
//!
//! Loading a candidate means reading its manifest, resolving the default
//! export it names (or its module id) in the [`ModuleTable`], and calling
//! that constructor with the shared application context. A manifest may
//! instead declare its command inline, in which case no constructor is
//! involved.
//!
//! ```toml
//! # commands/moderation/mute.toml
//! export = "moderation::mute"
//! ```

mod manifest;
mod module_loader;
mod table;

#[cfg(test)]
mod tests;

pub use manifest::{ManifestFormat, ModuleManifest};
pub use module_loader::Loader;
pub use table::{Constructor, ModuleTable};
