//! Task record and request payload types.

use serde::{Deserialize, Deserializer, Serialize};

/// Store-issued task identifier.
///
/// Signed so that any integer path segment parses and resolves to "not found"
/// instead of being rejected as malformed.
pub type TaskId = i64;

/// A tracked to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    /// Build a task from a validated creation payload and an issued id.
    pub fn new(id: TaskId, input: TaskCreate) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        }
    }

    /// Apply every field present in `update`, leaving the rest untouched.
    ///
    /// Returns true if any field was present.
    pub fn merge(&mut self, update: &TaskUpdate) -> bool {
        let mut touched = false;

        if let Some(Some(title)) = &update.title {
            self.title = title.clone();
            touched = true;
        }

        if let Some(description) = &update.description {
            self.description = description.clone();
            touched = true;
        }

        if let Some(Some(completed)) = update.completed {
            self.completed = completed;
            touched = true;
        }

        touched
    }
}

/// Payload for `POST /tasks/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TaskCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload for `PUT /tasks/:id`.
///
/// Each field distinguishes "absent" (outer `None`) from an explicit JSON `null`
/// (`Some(None)`). A null description clears it; a null title or completion
/// flag fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Option<bool>>,
}

impl TaskUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(Some(completed));
        self
    }
}

/// Marks a field as present in the payload, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
