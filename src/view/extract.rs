//! Typed extraction and scalar conversions.

use strata_value::{Map, Value, ValueKind};

use super::View;
use crate::error::{Expected, Result, ViewError};

impl View {
    /// Shadow-wins value at this path.
    pub fn get(&self) -> Result<&Value> {
        self.resolve_first().map(|resolved| resolved.value)
    }

    /// Shadow-wins value, required to be of `kind`.
    ///
    /// Kinds are matched exactly: an `Int` does not satisfy `Float`.
    pub fn get_kind(&self, kind: ValueKind) -> Result<&Value> {
        let value = self.get()?;
        if value.kind() == kind {
            Ok(value)
        } else {
            Err(self.mismatch(kind, value))
        }
    }

    /// Textual form of a scalar.
    ///
    /// Strings are returned as-is; ints, floats and bools are rendered in
    /// their canonical form. Null, lists and maps are a type mismatch.
    pub fn as_string(&self) -> Result<String> {
        let value = self.get()?;
        match value {
            Value::Str(s) => Ok(s.clone()),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => Ok(value.to_string()),
            other => Err(self.mismatch(Expected::STRINGABLE, other)),
        }
    }

    /// Truth value of a scalar: bools as-is, numbers are true when non-zero.
    pub fn as_bool(&self) -> Result<bool> {
        match self.get()? {
            Value::Bool(b) => Ok(*b),
            Value::Int(i) => Ok(*i != 0),
            Value::Float(x) => Ok(*x != 0.0),
            other => Err(self.mismatch(Expected::TRUTHY, other)),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        let value = self.get()?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(ValueKind::Int, value))
    }

    pub fn as_float(&self) -> Result<f64> {
        let value = self.get()?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(ValueKind::Float, value))
    }

    pub fn as_str(&self) -> Result<&str> {
        let value = self.get()?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(ValueKind::Str, value))
    }

    /// The shadow-wins list. Lower-priority lists are not concatenated;
    /// use [`all_contents`](Self::all_contents) for that.
    pub fn as_list(&self) -> Result<&[Value]> {
        let value = self.get()?;
        value
            .as_list()
            .ok_or_else(|| self.mismatch(ValueKind::List, value))
    }

    /// The shadow-wins map. Lower-priority maps are not merged;
    /// use [`flatten`](Self::flatten) for that.
    pub fn as_map(&self) -> Result<&Map> {
        let value = self.get()?;
        value
            .as_map()
            .ok_or_else(|| self.mismatch(ValueKind::Map, value))
    }

    pub(crate) fn mismatch(&self, expected: impl Into<Expected>, actual: &Value) -> ViewError {
        ViewError::type_mismatch(self.name(), expected, actual.kind())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Expected, ViewError};
    use crate::view::RootView;
    use serde_json::json;
    use strata_value::{Value, ValueKind};

    fn root(source: serde_json::Value) -> RootView {
        RootView::new([source])
    }

    #[test]
    fn test_get_kind_matches() {
        let config = root(json!({"foo": "bar", "n": 2}));
        assert_eq!(
            config.key("foo").get_kind(ValueKind::Str).unwrap(),
            &Value::Str("bar".into())
        );
        assert_eq!(config.key("n").get_kind(ValueKind::Int).unwrap(), &Value::Int(2));
    }

    #[test]
    fn test_get_kind_mismatch_names_view_and_kinds() {
        let config = root(json!({"foo": 2}));
        let err = config.key("foo").get_kind(ValueKind::Str).unwrap_err();
        assert_eq!(
            err,
            ViewError::TypeMismatch {
                name: "root['foo']".to_string(),
                expected: Expected::Kind(ValueKind::Str),
                actual: ValueKind::Int,
            }
        );
    }

    #[test]
    fn test_get_kind_is_exact_for_numbers() {
        let config = root(json!({"n": 2, "x": 2.0}));
        assert!(config.key("n").get_kind(ValueKind::Float).is_err());
        assert!(config.key("x").get_kind(ValueKind::Int).is_err());
        assert!(config.key("n").as_float().is_err());
    }

    #[test]
    fn test_get_kind_not_found_wins_over_mismatch() {
        let config = root(json!({}));
        assert!(config.key("foo").get_kind(ValueKind::Str).unwrap_err().is_not_found());
    }

    #[test]
    fn test_as_string() {
        let config = root(json!({"s": "bar", "i": 2, "f": 1.5, "b": true}));
        assert_eq!(config.key("s").as_string().unwrap(), "bar");
        assert_eq!(config.key("i").as_string().unwrap(), "2");
        assert_eq!(config.key("f").as_string().unwrap(), "1.5");
        assert_eq!(config.key("b").as_string().unwrap(), "true");
    }

    #[test]
    fn test_as_string_rejects_containers_and_null() {
        let config = root(json!({"l": [1], "m": {}, "n": null}));
        for key in ["l", "m", "n"] {
            let err = config.key(key).as_string().unwrap_err();
            assert!(err.is_type_mismatch(), "{key}: {err}");
        }
    }

    #[test]
    fn test_as_bool() {
        let config = root(json!({"t": true, "zero": 0, "one": 7, "fz": 0.0, "f": 0.1}));
        assert!(config.key("t").as_bool().unwrap());
        assert!(!config.key("zero").as_bool().unwrap());
        assert!(config.key("one").as_bool().unwrap());
        assert!(!config.key("fz").as_bool().unwrap());
        assert!(config.key("f").as_bool().unwrap());
    }

    #[test]
    fn test_as_bool_rejects_strings() {
        let config = root(json!({"s": "true"}));
        let err = config.key("s").as_bool().unwrap_err();
        assert_eq!(err.to_string(), "root['s'] must be bool, int or float, not str");
    }

    #[test]
    fn test_strict_accessors() {
        let config = root(json!({"i": 3, "x": 0.5, "s": "v", "l": [1], "m": {"k": 1}}));
        assert_eq!(config.key("i").as_int().unwrap(), 3);
        assert_eq!(config.key("x").as_float().unwrap(), 0.5);
        assert_eq!(config.key("s").as_str().unwrap(), "v");
        assert_eq!(config.key("l").as_list().unwrap(), &[Value::Int(1)]);
        assert_eq!(config.key("m").as_map().unwrap().len(), 1);
        assert!(config.key("s").as_int().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_get_kind_agrees_with_get() {
        let config = root(json!({"a": [1, {"b": null}]}));
        for view in [config.clone(), config.key("a"), config.key("a").index(1).key("b")] {
            let value = view.get().unwrap();
            assert_eq!(view.get_kind(value.kind()).unwrap(), value);
        }
    }
}
