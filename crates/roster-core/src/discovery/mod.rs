//! Command module discovery from the file system
//!
//! Each root is walked depth-first with entries visited in file-name order,
//! so the order in which candidates are yielded (and therefore which of two
//! same-named commands wins) is stable across runs and platforms.
//!
//! Pruning happens before descent: a directory whose name contains the
//! ignore marker is never read.

mod walker;


pub use walker::{Candidate, Discoverer, Walk};
