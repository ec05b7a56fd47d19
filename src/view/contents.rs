//! Concatenating content iteration.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use strata_value::Value;

use super::resolve::resolve_in;
use super::View;
use crate::error::{Expected, Result, ViewError};

/// Lazy, forward-only contents of a view across every source.
///
/// Created by [`View::all_contents`]. Sources are resolved one at a time
/// as the iterator advances. A resolving map contributes its keys (as
/// `Str` values), a resolving list its elements. Reaching a resolving
/// source of any other kind yields one `TypeMismatch` error, after which
/// the iterator is exhausted; items yielded before the error stay valid.
pub struct AllContents<'a> {
    view: &'a View,
    sources: Enumerate<slice::Iter<'a, Value>>,
    current: Option<Pending<'a>>,
    failed: bool,
}

enum Pending<'a> {
    Keys(indexmap::map::Keys<'a, String, Value>),
    Items(slice::Iter<'a, Value>),
}

impl<'a> Pending<'a> {
    fn next(&mut self) -> Option<Value> {
        match self {
            Pending::Keys(keys) => keys.next().map(|key| Value::Str(key.clone())),
            Pending::Items(items) => items.next().cloned(),
        }
    }
}

impl<'a> AllContents<'a> {
    pub(crate) fn new(view: &'a View) -> Self {
        Self {
            view,
            sources: view.sources.iter().enumerate(),
            current: None,
            failed: false,
        }
    }
}

impl<'a> Iterator for AllContents<'a> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(pending) = self.current.as_mut() {
                if let Some(value) = pending.next() {
                    return Some(Ok(value));
                }
                self.current = None;
            }

            let (index, root) = self.sources.next()?;
            let Some(resolved) = resolve_in(root, &self.view.path) else {
                continue;
            };
            match resolved {
                Value::Map(map) => self.current = Some(Pending::Keys(map.keys())),
                Value::List(items) => self.current = Some(Pending::Items(items.iter())),
                other => {
                    self.failed = true;
                    tracing::debug!(
                        view = %self.view,
                        source = index,
                        kind = %other.kind(),
                        "contents stopped at non-container source"
                    );
                    return Some(Err(ViewError::type_mismatch(
                        self.view.name(),
                        Expected::CONTAINER,
                        other.kind(),
                    )));
                }
            }
        }
    }
}

impl FusedIterator for AllContents<'_> {}

impl View {
    /// Contents of every resolving source, concatenated in priority order.
    ///
    /// Not deduplicated: a key present in two sources appears twice.
    pub fn all_contents(&self) -> AllContents<'_> {
        AllContents::new(self)
    }
}
