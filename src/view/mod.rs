//! Path-addressable views over an ordered list of sources.
//!
//! A [`View`] is a path plus a shared reference to the source list.
//! Navigation only extends the path; sources are walked when a terminal
//! operation runs:
//!
//! - scalar access (`get`, `as_*`) uses shadow-wins resolution: the first
//!   source that resolves the path supplies the value
//! - enumeration (`keys`, `values`, `items`) takes the union of keys over
//!   every resolving source, then resolves each key shadow-wins
//! - `all_contents` concatenates the contents of every resolving source

mod contents;
mod enumerate;
mod extract;
mod flatten;
mod resolve;

pub use contents::AllContents;
pub use flatten::{Redacted, REDACTED};
pub use resolve::{resolve_in, Resolved};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strata_value::Value;

/// Label rendered for the empty path.
pub const ROOT_NAME: &str = "root";

/// One navigation step from a parent location to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Key(String),
    Index(usize),
}

impl From<&str> for Access {
    fn from(key: &str) -> Self {
        Access::Key(key.to_string())
    }
}

impl From<String> for Access {
    fn from(key: String) -> Self {
        Access::Key(key)
    }
}

impl From<usize> for Access {
    fn from(index: usize) -> Self {
        Access::Index(index)
    }
}

impl fmt::Display for Access {
    /// Bracketed suffix: `['key']` or `[3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Key(key) => {
                f.write_str("['")?;
                for c in key.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("']")
            }
            Access::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// An immutable location in a layered configuration.
///
/// Cloning a view copies its path and bumps the reference count of the
/// shared source list; sources are never copied or mutated.
#[derive(Clone)]
pub struct View {
    sources: Arc<[Value]>,
    path: Vec<Access>,
}

/// A [`View`] with an empty path.
pub type RootView = View;

impl View {
    /// Create a root view over `sources`, highest priority first.
    pub fn new<I, V>(sources: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let sources: Vec<Value> = sources.into_iter().map(Into::into).collect();
        Self::from_shared(sources.into())
    }

    /// Create a root view over an already shared source list.
    pub fn from_shared(sources: Arc<[Value]>) -> Self {
        Self {
            sources,
            path: Vec::new(),
        }
    }

    /// Child view one step below this one. Never fails.
    pub fn at(&self, step: impl Into<Access>) -> View {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(step.into());
        View {
            sources: Arc::clone(&self.sources),
            path,
        }
    }

    pub fn key(&self, key: impl Into<String>) -> View {
        self.at(Access::Key(key.into()))
    }

    pub fn index(&self, index: usize) -> View {
        self.at(Access::Index(index))
    }

    pub fn path(&self) -> &[Access] {
        &self.path
    }

    /// The shared source list, highest priority first.
    pub fn sources(&self) -> &Arc<[Value]> {
        &self.sources
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Breadcrumb for diagnostics, e.g. `root[5]['foo']['bar'][20]`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_NAME)?;
        for step in &self.path {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name())
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl PartialEq for View {
    /// Same path over the same source list (by identity, not contents).
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sources, &other.sources) && self.path == other.path
    }
}

impl Eq for View {}
