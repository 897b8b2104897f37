// ABOUTME: SQLite persistence for visitor feedback and project retrospectives
// ABOUTME: Exposes the pool bootstrap plus one storage type per table

pub mod db;
pub mod error;
pub mod feedback;
pub mod retrospective;

pub use db::{connect, run_migrations};
#[cfg(any(test, feature = "test-utils"))]
pub use db::connect_in_memory;
pub use error::{StorageError, StorageResult};
pub use feedback::FeedbackStorage;
pub use retrospective::RetrospectiveStorage;
pub use sqlx::SqlitePool;
