// ABOUTME: Retrospective storage layer using SQLite
// ABOUTME: One retrospective per project, replaced wholesale on each save

use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use folio_core::{validate_retrospective_input, Retrospective, RetrospectiveUpsertInput};

use crate::error::{StorageError, StorageResult};
use crate::feedback::now;

pub struct RetrospectiveStorage {
    pool: SqlitePool,
}

impl RetrospectiveStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_retrospective(&self, project_id: &str) -> StorageResult<Option<Retrospective>> {
        debug!("Fetching retrospective for {}", project_id);

        let row = sqlx::query("SELECT * FROM project_retrospectives WHERE project_id = ?")
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_retrospective).transpose()
    }

    pub async fn upsert_retrospective(
        &self,
        project_id: &str,
        input: RetrospectiveUpsertInput,
    ) -> StorageResult<Retrospective> {
        let errors = validate_retrospective_input(&input);
        if !errors.is_empty() {
            return Err(StorageError::Validation(errors));
        }

        let retrospective = Retrospective {
            project_id: project_id.to_string(),
            project_name: input.project_name,
            retrospective: input.retrospective,
            updated_at: now(),
        };

        sqlx::query(
            r#"
            INSERT INTO project_retrospectives (project_id, project_name, retrospective, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(project_id) DO UPDATE SET
                project_name = excluded.project_name,
                retrospective = excluded.retrospective,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&retrospective.project_id)
        .bind(&retrospective.project_name)
        .bind(&retrospective.retrospective)
        .bind(retrospective.updated_at)
        .execute(&self.pool)
        .await?;

        info!("Saved retrospective for {}", project_id);
        Ok(retrospective)
    }
}

fn row_to_retrospective(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Retrospective> {
    Ok(Retrospective {
        project_id: row.try_get("project_id")?,
        project_name: row.try_get("project_name")?,
        retrospective: row.try_get("retrospective")?,
        updated_at: row.try_get("updated_at")?,
    })
}
