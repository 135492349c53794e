//! Task identifiers.

use serde::Serialize;
use serde_json::Value;

/// Identifier of a task within a single request.
///
/// Ids are supplied by the caller and only need to be unique inside one
/// payload. Numbers and strings are kept apart: `1` and `"1"` are
/// different ids. A whole float id such as `1.0` is the integer `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum TaskId {
    /// Integer id
    Int(i64),
    /// String id
    Text(String),
}

impl TaskId {
    /// Interpret a raw JSON value as an id.
    ///
    /// Returns `None` for anything that is not an integer or a string.
    /// Whole floats such as `2.0` count as integers.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)).map(Self::Int),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for TaskId {
    fn from(id: i32) -> Self {
        Self::Int(id.into())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => id.fmt(f),
            Self::Text(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(TaskId::from_value(&json!(7)), Some(TaskId::Int(7)));
        assert_eq!(TaskId::from_value(&json!("a")), Some(TaskId::from("a")));
        assert_eq!(TaskId::from_value(&json!(1.5)), None);
        assert_eq!(TaskId::from_value(&json!(null)), None);
        assert_eq!(TaskId::from_value(&json!([1])), None);
    }

    #[test]
    fn test_whole_float_is_int() {
        assert_eq!(TaskId::from_value(&json!(2.0)), Some(TaskId::Int(2)));
        assert_eq!(TaskId::from_value(&json!(-4.0)), Some(TaskId::Int(-4)));
        assert_eq!(TaskId::from_value(&json!(1e300)), None);
    }

    #[test]
    fn test_int_and_text_are_distinct() {
        assert_ne!(TaskId::from(1), TaskId::from("1"));
    }

    #[test]
    fn test_serializes_as_received() {
        assert_eq!(serde_json::to_value(TaskId::from(3)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(TaskId::from("x")).unwrap(), json!("x"));
    }
}
