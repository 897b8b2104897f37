// ABOUTME: Feedback storage layer using SQLite
// ABOUTME: Visitor submissions land unapproved and wait for admin moderation

use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::{debug, info};

use folio_core::{generate_feedback_id, validate_feedback_input, Feedback, FeedbackCreateInput, FeedbackFilter};

use crate::error::{StorageError, StorageResult};

pub struct FeedbackStorage {
    pool: SqlitePool,
}

impl FeedbackStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a visitor submission. New feedback is never approved.
    pub async fn create_feedback(
        &self,
        project_id: &str,
        input: FeedbackCreateInput,
    ) -> StorageResult<Feedback> {
        let errors = validate_feedback_input(&input);
        if !errors.is_empty() {
            return Err(StorageError::Validation(errors));
        }

        let feedback = Feedback {
            id: generate_feedback_id(),
            project_id: project_id.to_string(),
            author: input.author.trim().to_string(),
            email: input.email.trim().to_string(),
            comment: input.comment.trim().to_string(),
            approved: false,
            created_at: now(),
        };
        debug!("Creating feedback {} for project {}", feedback.id, project_id);

        sqlx::query(
            r#"
            INSERT INTO project_feedback (id, project_id, author, email, comment, approved, created_at)
            VALUES (?, ?, ?, ?, ?, 0, ?)
            "#,
        )
        .bind(&feedback.id)
        .bind(&feedback.project_id)
        .bind(&feedback.author)
        .bind(&feedback.email)
        .bind(&feedback.comment)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await?;

        Ok(feedback)
    }

    pub async fn get_feedback(&self, id: &str) -> StorageResult<Feedback> {
        let row = sqlx::query("SELECT * FROM project_feedback WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("feedback {}", id)))?;

        row_to_feedback(&row)
    }

    /// Moderation queue, newest first
    pub async fn list_feedback(&self, filter: FeedbackFilter) -> StorageResult<Vec<Feedback>> {
        debug!("Listing feedback: {}", filter);

        let rows = match filter.approved() {
            Some(approved) => {
                sqlx::query(
                    "SELECT * FROM project_feedback WHERE approved = ? ORDER BY julianday(created_at) DESC, rowid DESC",
                )
                .bind(approved)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query("SELECT * FROM project_feedback ORDER BY julianday(created_at) DESC, rowid DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(row_to_feedback).collect()
    }

    /// Feedback for one project. Visitors only ever see approved entries.
    pub async fn list_project_feedback(
        &self,
        project_id: &str,
        include_pending: bool,
    ) -> StorageResult<Vec<Feedback>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM project_feedback
            WHERE project_id = ? AND (approved = 1 OR ?)
            ORDER BY julianday(created_at) DESC, rowid DESC
            "#,
        )
        .bind(project_id)
        .bind(include_pending)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_feedback).collect()
    }

    pub async fn approve_feedback(&self, id: &str) -> StorageResult<Feedback> {
        let result = sqlx::query("UPDATE project_feedback SET approved = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("feedback {}", id)));
        }

        info!("Approved feedback {}", id);
        self.get_feedback(id).await
    }

    /// Approve every listed id in one statement. Unknown ids are skipped.
    pub async fn approve_many(&self, ids: &[String]) -> StorageResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::<Sqlite>::new("UPDATE project_feedback SET approved = 1 WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.as_str());
        }
        separated.push_unseparated(")");

        let affected = builder.build().execute(&self.pool).await?.rows_affected();
        info!("Bulk-approved {} of {} feedback entries", affected, ids.len());
        Ok(affected)
    }

    pub async fn delete_feedback(&self, id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM project_feedback WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("feedback {}", id)));
        }

        info!("Deleted feedback {}", id);
        Ok(())
    }
}

/// Current time, truncated to microseconds
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn row_to_feedback(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Feedback> {
    Ok(Feedback {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        author: row.try_get("author")?,
        email: row.try_get("email")?,
        comment: row.try_get("comment")?,
        approved: row.try_get("approved")?,
        created_at: row.try_get("created_at")?,
    })
}
