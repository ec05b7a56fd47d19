//! Materializing the merged tree below a view.

use serde::Serialize;
use strata_value::{Map, Value};

use super::{Access, View};
use crate::error::{Result, ViewError};

/// Placeholder written over redacted scalars.
pub const REDACTED: &str = "[REDACTED]";

/// A flattened tree with secrets replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redacted {
    pub value: Value,
    /// Names of every redacted location, in tree order.
    pub redactions: Vec<String>,
}

impl View {
    /// The merged tree at this view.
    ///
    /// Where every resolving source holds a map, the result is a map over
    /// [`keys`](Self::keys) with each entry flattened recursively. Anywhere
    /// else the shadow-wins value is taken whole.
    pub fn flatten(&self) -> Result<Value> {
        let mut resolved = self.resolved().map(|r| r.value).peekable();
        let Some(winner) = resolved.peek().copied() else {
            return Err(ViewError::not_found(self.name()));
        };
        if !resolved.all(Value::is_map) {
            return Ok(winner.clone());
        }

        let mut merged = Map::new();
        for child in self.children()? {
            let value = child.flatten()?;
            if let Some(Access::Key(key)) = child.path.last() {
                merged.insert(key.clone(), value);
            }
        }
        Ok(Value::Map(merged))
    }

    /// [`flatten`](Self::flatten), then replace every scalar stored under a
    /// key containing one of `secret_words` (case-insensitive).
    pub fn flatten_redacted(&self, secret_words: &[&str]) -> Result<Redacted> {
        let mut value = self.flatten()?;
        let words: Vec<String> = secret_words.iter().map(|w| w.to_lowercase()).collect();
        let mut redactions = Vec::new();
        redact_recursive(&mut value, self.name(), &words, &mut redactions);
        Ok(Redacted { value, redactions })
    }
}

fn redact_recursive(value: &mut Value, name: String, words: &[String], redactions: &mut Vec<String>) {
    match value {
        Value::Map(map) => {
            for (key, val) in map.iter_mut() {
                let key_lower = key.to_lowercase();
                let current = format!("{}{}", name, Access::Key(key.clone()));

                let is_secret = words.iter().any(|w| key_lower.contains(w.as_str()));

                if is_secret && !val.is_map() && !val.is_list() {
                    *val = Value::Str(REDACTED.to_string());
                    redactions.push(current);
                } else {
                    redact_recursive(val, current, words, redactions);
                }
            }
        }
        Value::List(items) => {
            for (i, val) in items.iter_mut().enumerate() {
                let current = format!("{}{}", name, Access::Index(i));
                redact_recursive(val, current, words, redactions);
            }
        }
        _ => {}
    }
}
