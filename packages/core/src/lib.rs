// ABOUTME: Core types, constants, and utilities for Folio
// ABOUTME: Shared by the GitHub lister, summarizer pipeline, storage and API packages

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    Feedback, FeedbackCreateInput, FeedbackFilter, ProjectCard, ReadmeSummary,
    RepositoryDescriptor, Retrospective, RetrospectiveUpsertInput,
};

// Re-export constants
pub use constants::{
    DEFAULT_PORTFOLIO_MARKER, NO_SUMMARY_AVAILABLE, README_NOT_FOUND, SUMMARY_FAILED,
};

// Re-export utilities
pub use utils::{generate_feedback_id, truncate};

// Re-export validation
pub use validation::{
    validate_feedback_input, validate_retrospective_input, ValidationError,
};
