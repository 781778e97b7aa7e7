//! Task entity for the to-do list.

use super::id::{next_entity_id, now_epoch_ms, EntityId, IdExhausted};
use serde::{Deserialize, Serialize};

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with a fresh id.
    ///
    /// Text is stored as given; callers trim and reject blanks.
    pub fn new(text: impl Into<String>) -> Result<Self, IdExhausted> {
        Ok(Self {
            id: next_entity_id()?,
            text: text.into(),
            completed: false,
            created_at: now_epoch_ms(),
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn update(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new("water plants").unwrap();
        assert_eq!(task.text, "water plants");
        assert!(!task.completed);
        assert!(task.created_at > 0);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let task = Task::new("x").unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["completed"], serde_json::json!(false));
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let task: Task =
            serde_json::from_str(r#"{"id":7,"text":"legacy","createdAt":1}"#).unwrap();
        assert!(!task.completed);
    }
}
