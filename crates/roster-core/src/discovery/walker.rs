//! Recursive walker yielding loadable candidates

use crate::config::RegistryConfig;
use crate::error::{RosterError, RosterResult};
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// A file eligible for loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path of the module manifest
    pub path: PathBuf,
    /// Path relative to the base directory, without extension, `/`-separated
    pub module_id: String,
}

/// Walks command roots and yields loadable candidates
#[derive(Debug, Clone)]
pub struct Discoverer {
    base_dir: PathBuf,
    ignore_marker: String,
    extensions: Vec<String>,
    follow_links: bool,
}

impl Discoverer {
    /// Create a discoverer with default rules
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let defaults = RegistryConfig::default();
        Self {
            base_dir: base_dir.into(),
            ignore_marker: defaults.ignore_marker,
            extensions: defaults.extensions,
            follow_links: defaults.follow_links,
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            ignore_marker: config.ignore_marker.clone(),
            extensions: config.extensions.clone(),
            follow_links: config.follow_links,
        }
    }

    pub fn with_ignore_marker(mut self, marker: impl Into<String>) -> Self {
        self.ignore_marker = marker.into();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Lazily walk one root.
    ///
    /// The iterator can be created again for the same root to restart the
    /// walk. Errors are yielded in place; the walk continues with the next
    /// sibling after an unreadable subtree.
    pub fn walk(&self, root: impl AsRef<Path>) -> Walk {
        let marker = self.ignore_marker.clone();
        let prune = move |entry: &DirEntry| {
            if entry.depth() == 0 || !is_excluded(entry, &marker) {
                return true;
            }
            debug!(path = %entry.path().display(), "Skipping ignored entry");
            false
        };

        let inner = WalkDir::new(root.as_ref())
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(Box::new(prune) as PruneFn);

        Walk {
            discoverer: self.clone(),
            inner,
        }
    }

    /// Walk a root to completion, splitting candidates from errors
    pub fn discover(&self, root: impl AsRef<Path>) -> (Vec<Candidate>, Vec<RosterError>) {
        let mut candidates = Vec::new();
        let mut errors = Vec::new();
        for item in self.walk(root) {
            match item {
                Ok(candidate) => candidates.push(candidate),
                Err(err) => errors.push(err),
            }
        }
        (candidates, errors)
    }

    /// Whether a file has a loadable extension
    pub fn is_loadable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Module id of a candidate path
    pub fn module_id(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        relative
            .with_extension("")
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn candidate(&self, entry: DirEntry) -> RosterResult<Option<Candidate>> {
        if entry.file_type().is_dir() {
            return Ok(None);
        }

        if entry.depth() == 0 {
            return Err(RosterError::discovery(
                entry.path(),
                "Command root is not a directory",
            ));
        }

        if !self.is_loadable(entry.path()) {
            return Ok(None);
        }

        let path = entry.into_path();
        let module_id = self.module_id(&path);
        Ok(Some(Candidate { path, module_id }))
    }
}

type PruneFn = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Lazy candidate iterator over one root
pub struct Walk {
    discoverer: Discoverer,
    inner: walkdir::FilterEntry<walkdir::IntoIter, PruneFn>,
}

impl Iterator for Walk {
    type Item = RosterResult<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            match self.discoverer.candidate(entry) {
                Ok(Some(candidate)) => return Some(Ok(candidate)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

fn is_excluded(entry: &DirEntry, marker: &str) -> bool {
    entry.file_name().to_string_lossy().contains(marker)
}
