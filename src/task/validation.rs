//! Structural field validation for task payloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{TaskCreate, TaskUpdate};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Malformed or out-of-constraint input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }
}

/// Boundary validation run before a payload reaches the operation layer.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for TaskCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        if let Some(description) = &self.description {
            check_description(description, &mut errors);
        }
        finish(errors)
    }
}

impl Validate for TaskUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        match &self.title {
            Some(Some(title)) => check_title(title, &mut errors),
            Some(None) => errors.push(FieldError::new("title", "Title may not be null")),
            None => {}
        }

        if let Some(Some(description)) = &self.description {
            check_description(description, &mut errors);
        }

        if let Some(None) = self.completed {
            errors.push(FieldError::new("completed", "Completed may not be null"));
        }

        finish(errors)
    }
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    let len = title.chars().count();
    if len == 0 {
        errors.push(FieldError::new(
            "title",
            "String should have at least 1 character",
        ));
    } else if len > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("String should have at most {} characters", TITLE_MAX_CHARS),
        ));
    }
}

fn check_description(description: &str, errors: &mut Vec<FieldError>) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.push(FieldError::new(
            "description",
            format!(
                "String should have at most {} characters",
                DESCRIPTION_MAX_CHARS
            ),
        ));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(TaskCreate::new("a").validate().is_ok());
        assert!(TaskCreate::new("a".repeat(TITLE_MAX_CHARS)).validate().is_ok());

        let err = TaskCreate::new("a".repeat(TITLE_MAX_CHARS + 1))
            .validate()
            .unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "title");

        let err = TaskCreate::new("").validate().unwrap_err();
        assert_eq!(err.errors[0].field, "title");
    }

    #[test]
    fn test_lengths_count_characters() {
        // 100 multi-byte characters is still within bounds
        assert!(TaskCreate::new("é".repeat(TITLE_MAX_CHARS)).validate().is_ok());
    }

    #[test]
    fn test_description_bounds() {
        assert!(TaskCreate::new("t").with_description("").validate().is_ok());
        assert!(TaskCreate::new("t")
            .with_description("d".repeat(DESCRIPTION_MAX_CHARS))
            .validate()
            .is_ok());

        let err = TaskCreate::new("t")
            .with_description("d".repeat(DESCRIPTION_MAX_CHARS + 1))
            .validate()
            .unwrap_err();
        assert_eq!(err.errors[0].field, "description");
    }

    #[test]
    fn test_collects_all_errors() {
        let err = TaskCreate::new("")
            .with_description("d".repeat(DESCRIPTION_MAX_CHARS + 1))
            .validate()
            .unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "description"]);
    }

    #[test]
    fn test_update_validation() {
        assert!(TaskUpdate::default().validate().is_ok());
        assert!(TaskUpdate::default().description(None).validate().is_ok());
        assert!(TaskUpdate::default().title("ok").completed(true).validate().is_ok());

        let err = TaskUpdate::default()
            .title("a".repeat(TITLE_MAX_CHARS + 1))
            .validate()
            .unwrap_err();
        assert_eq!(err.errors[0].field, "title");

        let err = TaskUpdate::default().title("").validate().unwrap_err();
        assert_eq!(err.errors[0].field, "title");

        let err = TaskUpdate::default()
            .description(Some("d".repeat(DESCRIPTION_MAX_CHARS + 1)))
            .validate()
            .unwrap_err();
        assert_eq!(err.errors[0].field, "description");

        assert!(TaskUpdate::default()
            .description(Some("d".repeat(DESCRIPTION_MAX_CHARS)))
            .validate()
            .is_ok());

        let nulls: TaskUpdate =
            serde_json::from_str(r#"{"title": null, "completed": null}"#).unwrap();
        let err = nulls.validate().unwrap_err();
        assert_eq!(err.errors.len(), 2);
    }
}
