//! Resolution primitives.
//!
//! Every terminal operation is expressed through one of two policies:
//! shadow-wins ([`View::resolve_first`]) or all-matches
//! ([`View::resolve_all`]).

use strata_value::Value;

use super::{Access, View};
use crate::error::{Result, ViewError};

/// A value resolved from one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub value: &'a Value,
    /// Priority index of the source (0 = highest).
    pub source: usize,
}

/// Walk `path` within a single source.
///
/// `Key` steps require a map containing the key, `Index` steps a list with
/// the index in bounds. The empty path yields the source itself.
pub fn resolve_in<'a>(source: &'a Value, path: &[Access]) -> Option<&'a Value> {
    path.iter().try_fold(source, |current, step| match step {
        Access::Key(key) => current.get_key(key),
        Access::Index(index) => current.get_index(*index),
    })
}

/// First source, in priority order, that resolves `path`.
pub(crate) fn first_match<'a>(sources: &'a [Value], path: &[Access]) -> Option<Resolved<'a>> {
    sources.iter().enumerate().find_map(|(source, root)| {
        resolve_in(root, path).map(|value| Resolved { value, source })
    })
}

/// Every source that resolves `path`, in priority order.
pub(crate) fn all_matches<'a>(
    sources: &'a [Value],
    path: &'a [Access],
) -> impl Iterator<Item = Resolved<'a>> + 'a {
    sources.iter().enumerate().filter_map(move |(source, root)| {
        resolve_in(root, path).map(|value| Resolved { value, source })
    })
}

impl View {
    /// Shadow-wins resolution.
    ///
    /// Returns the value from the highest-priority source that resolves
    /// this path, or `NotFound` if none does.
    pub fn resolve_first(&self) -> Result<Resolved<'_>> {
        let found = first_match(&self.sources, &self.path);
        tracing::trace!(
            view = %self,
            source = ?found.map(|r| r.source),
            "shadow-wins resolution"
        );
        found.ok_or_else(|| ViewError::not_found(self.name()))
    }

    /// All-matches resolution.
    ///
    /// One slot per source in priority order: `Some` where the path
    /// resolves, `None` where it is missing.
    pub fn resolve_all(&self) -> Vec<Option<&Value>> {
        let slots: Vec<Option<&Value>> = self
            .sources
            .iter()
            .map(|root| resolve_in(root, &self.path))
            .collect();
        tracing::trace!(
            view = %self,
            resolved = slots.iter().filter(|s| s.is_some()).count(),
            sources = slots.len(),
            "all-matches resolution"
        );
        slots
    }

    /// The successful entries of [`resolve_all`](Self::resolve_all), tagged with their source.
    pub fn resolved(&self) -> impl Iterator<Item = Resolved<'_>> + '_ {
        all_matches(&self.sources, &self.path)
    }

    /// Like [`resolve_first`](Self::resolve_first), without the error.
    pub fn first(&self) -> Option<Resolved<'_>> {
        first_match(&self.sources, &self.path)
    }

    /// Whether any source resolves this path.
    pub fn exists(&self) -> bool {
        self.first().is_some()
    }
}
