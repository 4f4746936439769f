//! Error types for roster
//!
//! Every failure raised while discovering, loading or registering commands is a
//! [`RosterError`]. The registration pass never returns these to its caller; it
//! logs them and moves on to the next candidate. Configuration loading and the
//! CLI do propagate them.

mod constructors;
mod conversions;
mod types;

pub use types::{ConstructError, RosterError, RosterResult};
