//! Command registry tables
//!
//! [`RegistryBuilder`] is the single writer during the registration pass: it
//! applies the per-category admission rules (non-empty name, first
//! registration wins, disabled message commands are not inserted) and
//! maintains the alias table. [`RegistryBuilder::build`] freezes the tables
//! into a read-only [`CommandRegistry`] for the dispatcher.

mod builder;
mod types;


pub use builder::RegistryBuilder;
pub use types::{Admission, CommandRegistry};
