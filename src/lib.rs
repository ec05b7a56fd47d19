//! Strata - layered configuration views
//!
//! This crate resolves paths against an ordered list of configuration
//! sources (highest priority first). Scalar lookups are shadow-wins,
//! key enumeration is a union across sources, and content iteration
//! concatenates every source.
//!
//! ```
//! use serde_json::json;
//! use strata::{RootView, Value};
//!
//! let config = RootView::new([
//!     json!({"cache": {"mode": "on"}}),
//!     json!({"cache": {"mode": "off", "spm": "off"}}),
//! ]);
//!
//! assert_eq!(config.key("cache").key("mode").as_str().unwrap(), "on");
//! assert_eq!(config.key("cache").keys().unwrap(), vec!["mode", "spm"]);
//! assert_eq!(
//!     config.key("cache").all_contents().collect::<Result<Vec<_>, _>>().unwrap(),
//!     vec![Value::from("mode"), Value::from("mode"), Value::from("spm")],
//! );
//! ```

pub mod error;
pub mod view;

pub use error::{Expected, Result, ViewError};
pub use strata_value::{Map, Value, ValueKind};
pub use view::{resolve_in, Access, AllContents, Redacted, Resolved, RootView, View, REDACTED};
