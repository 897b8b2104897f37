// ABOUTME: Input validation for visitor feedback and retrospectives
// ABOUTME: Returns field-level errors instead of failing on the first problem

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{MAX_AUTHOR_LEN, MAX_COMMENT_LEN, MAX_EMAIL_LEN, MAX_RETROSPECTIVE_LEN};
use crate::types::{FeedbackCreateInput, RetrospectiveUpsertInput};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Validation error for a single input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_feedback_input(input: &FeedbackCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if input.author.trim().is_empty() {
        errors.push(ValidationError::new("author", "Name is required"));
    } else if input.author.chars().count() > MAX_AUTHOR_LEN {
        errors.push(ValidationError::new(
            "author",
            format!("Name must be at most {} characters", MAX_AUTHOR_LEN),
        ));
    }

    let email = input.email.trim();
    if email.len() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(email) {
        errors.push(ValidationError::new("email", "Valid email is required"));
    }

    if input.comment.trim().is_empty() {
        errors.push(ValidationError::new("comment", "Comment is required"));
    } else if input.comment.chars().count() > MAX_COMMENT_LEN {
        errors.push(ValidationError::new(
            "comment",
            format!("Comment must be at most {} characters", MAX_COMMENT_LEN),
        ));
    }

    errors
}

pub fn validate_retrospective_input(input: &RetrospectiveUpsertInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if input.retrospective.chars().count() > MAX_RETROSPECTIVE_LEN {
        errors.push(ValidationError::new(
            "retrospective",
            format!(
                "Retrospective must be at most {} characters",
                MAX_RETROSPECTIVE_LEN
            ),
        ));
    }

    errors
}
