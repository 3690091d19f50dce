//! Snapshot builders for creating polling scenarios

use rpm_status_core::ids::{DISTRIBUTOR_KEY, EXPORT_DISTRIBUTOR_KEY, IMPORTER_KEY};
use rpm_status_core::{Snapshot, StepState};
use serde_json::{Map, Value, json};

/// Builder for one step sub-tree
#[derive(Debug, Clone, Default)]
pub struct StepBuilder {
    fields: Map<String, Value>,
}

impl StepBuilder {
    /// Step in the given state
    pub fn new(state: StepState) -> Self {
        let mut fields = Map::new();
        fields.insert("state".to_string(), json!(state.as_str()));
        Self { fields }
    }

    pub fn not_started() -> Self {
        Self::new(StepState::NotStarted)
    }

    pub fn running() -> Self {
        Self::new(StepState::Running)
    }

    pub fn complete() -> Self {
        Self::new(StepState::Complete)
    }

    pub fn failed() -> Self {
        Self::new(StepState::Failed)
    }

    pub fn skipped() -> Self {
        Self::new(StepState::Skipped)
    }

    pub fn cancelled() -> Self {
        Self::new(StepState::Cancelled)
    }

    /// Set `items_total` and `items_left`
    pub fn items(mut self, total: u64, left: u64) -> Self {
        self.fields.insert("items_total".to_string(), json!(total));
        self.fields.insert("items_left".to_string(), json!(left));
        self
    }

    /// Set `size_total` and `size_left`
    pub fn size(mut self, total: u64, left: u64) -> Self {
        self.fields.insert("size_total".to_string(), json!(total));
        self.fields.insert("size_left".to_string(), json!(left));
        self
    }

    /// Set the RPM and delta RPM counters of the content download step
    pub fn content_details(mut self, rpm: (u64, u64), drpm: (u64, u64)) -> Self {
        self.fields.insert(
            "details".to_string(),
            json!({
                "rpm_done": rpm.0,
                "rpm_total": rpm.1,
                "drpm_done": drpm.0,
                "drpm_total": drpm.1,
            }),
        );
        self
    }

    /// Add a package failure in the record shape
    pub fn package_error(self, url: &str, error: &str) -> Self {
        self.error_detail(json!({"url": url, "error": error, "traceback": []}))
    }

    /// Add a distribution file failure in the pair shape
    pub fn file_error(self, filename: &str, message: &str, code: i64) -> Self {
        self.error_detail(json!([
            filename,
            {"response_code": 0, "error_message": message, "error_code": code}
        ]))
    }

    /// Add `count` package failures with distinct identifiers
    pub fn package_errors(self, count: usize) -> Self {
        (0..count).fold(self, |builder, i| {
            builder.package_error(&format!("http://example.com/pkg-{i}.rpm"), "404 Not Found")
        })
    }

    /// Add a raw `error_details` entry
    pub fn error_detail(mut self, entry: Value) -> Self {
        let details = self
            .fields
            .entry("error_details".to_string())
            .or_insert_with(|| json!([]));
        if let Value::Array(entries) = details {
            entries.push(entry);
        }
        self
    }

    /// Set the step-level `error` message
    pub fn error(mut self, message: &str) -> Self {
        self.fields.insert("error".to_string(), json!(message));
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Builder for a full snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    phases: Map<String, Value>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `step` under `phase`, creating the phase if needed
    pub fn step(mut self, phase: &str, key: &str, step: StepBuilder) -> Self {
        let phase = self
            .phases
            .entry(phase.to_string())
            .or_insert_with(|| json!({}));
        if let Value::Object(steps) = phase {
            steps.insert(key.to_string(), step.build());
        }
        self
    }

    /// Add a phase with no steps yet
    pub fn empty_phase(mut self, phase: &str) -> Self {
        self.phases
            .entry(phase.to_string())
            .or_insert_with(|| json!({}));
        self
    }

    pub fn importer(self, key: &str, step: StepBuilder) -> Self {
        self.step(IMPORTER_KEY, key, step)
    }

    pub fn distributor(self, key: &str, step: StepBuilder) -> Self {
        self.step(DISTRIBUTOR_KEY, key, step)
    }

    pub fn export(self, key: &str, step: StepBuilder) -> Self {
        self.step(EXPORT_DISTRIBUTOR_KEY, key, step)
    }

    pub fn build_value(self) -> Value {
        Value::Object(self.phases)
    }

    pub fn build(self) -> Snapshot {
        Snapshot::new(self.build_value())
    }

    /// One line of a JSON-lines capture
    pub fn to_json_line(&self) -> String {
        Value::Object(self.phases.clone()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_builder_fields() {
        let value = StepBuilder::running().items(10, 4).package_errors(2).build();
        assert_eq!(value["state"], "RUNNING");
        assert_eq!(value["items_left"], 4);
        assert_eq!(value["error_details"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_snapshot_builder_groups_by_phase() {
        let snapshot = SnapshotBuilder::new()
            .importer("metadata", StepBuilder::complete())
            .importer("content", StepBuilder::running().size(10, 5))
            .build();

        assert!(snapshot.has_phase(IMPORTER_KEY));
        assert!(!snapshot.has_phase(DISTRIBUTOR_KEY));
        let content = snapshot.step(IMPORTER_KEY, "content").unwrap().unwrap();
        assert_eq!(content.size_done(), 5);
    }
}
