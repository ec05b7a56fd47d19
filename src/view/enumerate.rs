//! Merge-aware enumeration of mapping views.

use indexmap::IndexSet;
use strata_value::{Value, ValueKind};

use super::resolve::first_match;
use super::{Access, View};
use crate::error::{Result, ViewError};

impl View {
    /// Union of keys across every source that resolves this view.
    ///
    /// Keys come out in first-seen order: all keys of the highest-priority
    /// map, then keys of lower-priority maps not seen before. Fails with
    /// `TypeMismatch` if any resolving source holds a non-map, and with
    /// `NotFound` if no source resolves the path.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys: IndexSet<String> = IndexSet::new();
        let mut found = false;

        for resolved in self.resolved() {
            found = true;
            match resolved.value {
                Value::Map(map) => {
                    for key in map.keys() {
                        if !keys.contains(key) {
                            keys.insert(key.clone());
                        }
                    }
                }
                other => {
                    return Err(ViewError::type_mismatch(
                        self.name(),
                        ValueKind::Map,
                        other.kind(),
                    ));
                }
            }
        }

        if !found {
            return Err(ViewError::not_found(self.name()));
        }
        Ok(keys.into_iter().collect())
    }

    /// Shadow-wins value for each of [`keys`](Self::keys), in the same order.
    pub fn values(&self) -> Result<Vec<&Value>> {
        Ok(self.items()?.into_iter().map(|(_, value)| value).collect())
    }

    /// Each of [`keys`](Self::keys) paired with its shadow-wins value.
    pub fn items(&self) -> Result<Vec<(String, &Value)>> {
        let keys = self.keys()?;
        let mut items = Vec::with_capacity(keys.len());
        let mut path = self.path.clone();

        for key in keys {
            path.push(Access::Key(key.clone()));
            let resolved = first_match(&self.sources, &path);
            path.pop();
            match resolved {
                Some(resolved) => items.push((key, resolved.value)),
                None => return Err(ViewError::not_found(self.key(key).name())),
            }
        }
        Ok(items)
    }

    /// Child views for each of [`keys`](Self::keys), in the same order.
    pub fn children(&self) -> Result<Vec<View>> {
        Ok(self.keys()?.into_iter().map(|key| self.key(key)).collect())
    }
}
