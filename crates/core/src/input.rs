//! Raw payload handling.
//!
//! Callers hand over loosely-shaped JSON. This module turns it into
//! [`Task`]s, mapping every missing or malformed field to `None` so the
//! scorers downstream never have to fail.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::id::TaskId;
use crate::task::Task;

/// Result type for payload handling.
pub type Result<T> = std::result::Result<T, InputError>;

/// Date format accepted for `due_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const KNOWN_FIELDS: [&str; 6] = [
    "id",
    "title",
    "due_date",
    "estimated_hours",
    "importance",
    "dependencies",
];

/// Errors raised at the payload boundary.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `tasks` is present but not a list
    #[error("Invalid tasks format: expected a list of tasks")]
    TasksNotAList,

    /// Payload is neither an object nor a list
    #[error("Invalid payload: expected an object with a `tasks` list or a list of tasks")]
    UnexpectedPayload,

    /// Task list is empty or absent
    #[error("No tasks provided")]
    NoTasks,
}

/// A request body: the raw task list plus an optional strategy name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPayload {
    /// Raw task entries, not yet normalized
    pub tasks: Vec<Value>,
    /// Requested strategy name, if any
    pub strategy: Option<String>,
}

impl TaskPayload {
    /// Parse a payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value.
    ///
    /// Accepts `{"tasks": [...], "strategy": "..."}` or a bare list.
    /// A non-string `strategy` is ignored.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(tasks) => Ok(Self { tasks, strategy: None }),
            Value::Object(mut body) => {
                let tasks = match body.remove("tasks") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(tasks)) => tasks,
                    Some(_) => return Err(InputError::TasksNotAList),
                };
                let strategy = match body.remove("strategy") {
                    Some(Value::String(name)) => Some(name),
                    _ => None,
                };
                Ok(Self { tasks, strategy })
            }
            _ => Err(InputError::UnexpectedPayload),
        }
    }

    /// Whether the payload carries no task entries at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Normalize the raw entries.
    pub fn normalized(&self) -> Vec<Task> {
        normalize_tasks(&self.tasks)
    }
}

/// Normalize raw task entries.
///
/// Entries that are not objects are skipped. A missing or unusable `id`
/// becomes the entry's 1-based position in the raw list.
pub fn normalize_tasks(raw: &[Value]) -> Vec<Task> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, entry)| match entry {
            Value::Object(fields) => Some(normalize_task(idx, fields)),
            _ => None,
        })
        .collect()
}

fn normalize_task(idx: usize, fields: &Map<String, Value>) -> Task {
    let id = fields
        .get("id")
        .and_then(TaskId::from_value)
        .unwrap_or(TaskId::Int(idx as i64 + 1));

    let title = match fields.get("title") {
        Some(Value::String(title)) => title.clone(),
        None | Some(Value::Null) => format!("Task {id}"),
        Some(other) => other.to_string(),
    };

    let extra = fields
        .iter()
        .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Task {
        id,
        title,
        due_date: fields.get("due_date").and_then(parse_date),
        estimated_hours: fields.get("estimated_hours").and_then(parse_number),
        importance: fields.get("importance").and_then(parse_number),
        dependencies: fields.get("dependencies").map(parse_dependencies).unwrap_or_default(),
        extra,
    }
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
}

/// Accept a JSON number or a numeric string; reject non-finite values.
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn parse_dependencies(value: &Value) -> Vec<TaskId> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(TaskId::from_value).collect(),
        scalar => TaskId::from_value(scalar).into_iter().collect(),
    }
}
