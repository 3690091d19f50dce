//! Progress snapshot model
//!
//! A snapshot is one full progress report polled from the server. It is a
//! tree keyed by phase (`yum_importer`, `yum_distributor`,
//! `export_distributor`), each phase holding one sub-tree per step. The
//! server fills these trees in lazily, so every lookup here tolerates
//! missing phases, missing steps and missing counters.

use crate::error::{ReportError, Result};
use crate::state::StepState;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One polled progress report
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    root: Value,
}

impl Snapshot {
    /// Wrap an already-decoded report
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Decode a report from JSON text
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Whether the report contains the given phase
    pub fn has_phase(&self, phase: &str) -> bool {
        self.root.get(phase).is_some_and(|v| !v.is_null())
    }

    /// Read one step of one phase
    ///
    /// Returns `Ok(None)` when either the phase or the step is absent.
    pub fn step(&self, phase: &str, step: &str) -> Result<Option<StepReport>> {
        let Some(data) = self.root.get(phase).and_then(|p| p.get(step)) else {
            return Ok(None);
        };
        if data.is_null() {
            return Ok(None);
        }
        StepReport::from_value(&format!("{phase}.{step}"), data).map(Some)
    }
}

impl From<Value> for Snapshot {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Per-type counters of the sync content download step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ContentDetails {
    #[serde(default, deserialize_with = "count")]
    pub rpm_done: u64,
    #[serde(default, deserialize_with = "count")]
    pub rpm_total: u64,
    #[serde(default, deserialize_with = "count")]
    pub drpm_done: u64,
    #[serde(default, deserialize_with = "count")]
    pub drpm_total: u64,
}

/// One per-item failure, normalized from either wire shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    /// File name or URL of the item that failed
    pub identifier: String,
    pub message: String,
    pub code: Option<i64>,
    pub traceback: Vec<String>,
}

/// One step of a snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub state: StepState,
    pub items_total: u64,
    pub items_left: u64,
    pub num_success: u64,
    pub num_error: u64,
    pub size_total: u64,
    pub size_left: u64,
    pub details: ContentDetails,
    pub error_details: Vec<ErrorDetail>,
    /// Step-level failure message (metadata download)
    pub error: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawStep {
    #[serde(deserialize_with = "count")]
    items_total: u64,
    #[serde(deserialize_with = "count")]
    items_left: u64,
    #[serde(deserialize_with = "count")]
    num_success: u64,
    #[serde(deserialize_with = "count")]
    num_error: u64,
    #[serde(deserialize_with = "count")]
    size_total: u64,
    #[serde(deserialize_with = "count")]
    size_left: u64,
    #[serde(deserialize_with = "nullable")]
    details: ContentDetails,
    #[serde(deserialize_with = "nullable")]
    error_details: Vec<Value>,
    error: Option<Value>,
}

impl StepReport {
    /// Build a step from its sub-tree; `path` is only used in errors
    pub fn from_value(path: &str, data: &Value) -> Result<Self> {
        if !data.is_object() {
            return Err(ReportError::invalid_step(path, "expected an object").into());
        }

        let state = match data.get("state") {
            None | Some(Value::Null) => StepState::NotStarted,
            Some(Value::String(s)) => s
                .parse::<StepState>()
                .map_err(|state| ReportError::unknown_state(path, &state))?,
            Some(_) => return Err(ReportError::invalid_step(path, "state must be a string").into()),
        };

        let raw = RawStep::deserialize(data)
            .map_err(|e| ReportError::invalid_step(path, &e.to_string()))?;

        Ok(Self {
            state,
            items_total: raw.items_total,
            items_left: raw.items_left,
            num_success: raw.num_success,
            num_error: raw.num_error,
            size_total: raw.size_total,
            size_left: raw.size_left,
            details: raw.details,
            error_details: raw.error_details.iter().map(ErrorDetail::from_value).collect(),
            error: raw.error.as_ref().and_then(text),
        })
    }

    /// Items processed so far
    pub fn items_done(&self) -> u64 {
        self.items_total.saturating_sub(self.items_left)
    }

    /// Bytes transferred so far
    pub fn size_done(&self) -> u64 {
        self.size_total.saturating_sub(self.size_left)
    }
}

impl ErrorDetail {
    /// Normalize one `error_details` entry
    ///
    /// Entries in an unexpected shape are kept, with the raw JSON as the
    /// message, so they still reach the user.
    pub fn from_value(value: &Value) -> Self {
        match value {
            // [filename, {error_message, error_code, response_code}]
            Value::Array(pair) if pair.len() == 2 => {
                let identifier = text(&pair[0]).unwrap_or_default();
                let info = &pair[1];
                Self {
                    identifier,
                    message: info.get("error_message").and_then(text).unwrap_or_default(),
                    code: info.get("error_code").and_then(Value::as_i64),
                    traceback: Vec::new(),
                }
            }
            // {url, error, traceback}
            Value::Object(map) => {
                let identifier = ["url", "filename", "name"]
                    .iter()
                    .find_map(|key| map.get(*key).and_then(text))
                    .unwrap_or_default();
                let traceback = match map.get("traceback") {
                    Some(Value::Array(lines)) => lines.iter().filter_map(text).collect(),
                    Some(Value::String(s)) => s.lines().map(str::to_string).collect(),
                    _ => Vec::new(),
                };
                Self {
                    identifier,
                    message: map.get("error").and_then(text).unwrap_or_default(),
                    code: map.get("error_code").and_then(Value::as_i64),
                    traceback,
                }
            }
            other => Self {
                identifier: String::new(),
                message: other.to_string(),
                code: None,
                traceback: Vec::new(),
            },
        }
    }
}

/// Render a scalar as display text; `null` has none
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
