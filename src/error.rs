//! Error types for view resolution.

use std::fmt;
use strata_value::ValueKind;

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// What a failing operation was prepared to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Exactly one kind.
    Kind(ValueKind),
    /// Any of several kinds.
    OneOf(&'static [ValueKind]),
}

impl Expected {
    /// Kinds `all_contents` can enumerate.
    pub const CONTAINER: Expected = Expected::OneOf(&[ValueKind::Map, ValueKind::List]);

    /// Kinds with a canonical textual form.
    pub const STRINGABLE: Expected = Expected::OneOf(&[
        ValueKind::Str,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Bool,
    ]);

    /// Kinds with a truth value.
    pub const TRUTHY: Expected =
        Expected::OneOf(&[ValueKind::Bool, ValueKind::Int, ValueKind::Float]);

    pub fn accepts(&self, kind: ValueKind) -> bool {
        match self {
            Expected::Kind(k) => *k == kind,
            Expected::OneOf(kinds) => kinds.contains(&kind),
        }
    }
}

impl From<ValueKind> for Expected {
    fn from(kind: ValueKind) -> Self {
        Expected::Kind(kind)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::OneOf(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        let sep = if i + 1 == kinds.len() { " or " } else { ", " };
                        f.write_str(sep)?;
                    }
                    write!(f, "{}", kind)?;
                }
                Ok(())
            }
        }
    }
}

/// Errors returned by terminal view operations.
///
/// Both variants carry the rendered name of the offending view
/// (e.g. `root['cache']['mode']`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("{name} not found")]
    NotFound { name: String },

    #[error("{name} must be {expected}, not {actual}")]
    TypeMismatch {
        name: String,
        expected: Expected,
        actual: ValueKind,
    },
}

impl ViewError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<Expected>,
        actual: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Rendered name of the view the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::TypeMismatch { name, .. } => name,
        }
    }
}
