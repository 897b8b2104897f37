// ABOUTME: Integration tests for feedback moderation and retrospective storage
// ABOUTME: Runs the crate migrations against an in-memory SQLite database

use std::str::FromStr;

use chrono::{Duration, TimeZone, Utc};

use folio_core::{FeedbackCreateInput, FeedbackFilter, RetrospectiveUpsertInput};
use folio_storage::{run_migrations, FeedbackStorage, RetrospectiveStorage, StorageError};
use pretty_assertions::assert_eq;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Helper to create an in-memory database for testing
async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str(":memory:")
        .unwrap()
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

fn input(author: &str, comment: &str) -> FeedbackCreateInput {
    FeedbackCreateInput {
        author: author.to_string(),
        email: format!("{}@example.com", author.trim().to_lowercase()),
        comment: comment.to_string(),
    }
}

#[tokio::test]
async fn test_new_feedback_is_unapproved() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let feedback = storage
        .create_feedback("octo/demo", input("  Ada ", " Nice work "))
        .await
        .unwrap();

    assert!(feedback.id.starts_with("fb-"));
    assert!(!feedback.approved);
    assert_eq!(feedback.author, "Ada");
    assert_eq!(feedback.comment, "Nice work");

    let stored = storage.get_feedback(&feedback.id).await.unwrap();
    assert_eq!(stored, feedback);
}

#[tokio::test]
async fn test_invalid_feedback_is_rejected() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let err = storage
        .create_feedback(
            "octo/demo",
            FeedbackCreateInput {
                author: "".to_string(),
                email: "not-an-email".to_string(),
                comment: "hi".to_string(),
            },
        )
        .await
        .unwrap_err();

    match err {
        StorageError::Validation(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["author", "email"]);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert!(storage.list_feedback(FeedbackFilter::All).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_view_hides_pending_feedback() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let first = storage.create_feedback("octo/demo", input("Ada", "one")).await.unwrap();
    storage.create_feedback("octo/demo", input("Bob", "two")).await.unwrap();
    storage.create_feedback("octo/other", input("Cy", "three")).await.unwrap();
    storage.approve_feedback(&first.id).await.unwrap();

    let public = storage.list_project_feedback("octo/demo", false).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, first.id);
    assert!(public[0].approved);

    let admin = storage.list_project_feedback("octo/demo", true).await.unwrap();
    let authors: Vec<&str> = admin.iter().map(|f| f.author.as_str()).collect();
    assert_eq!(authors, vec!["Bob", "Ada"]);
}

#[tokio::test]
async fn test_filters_and_newest_first() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let a = storage.create_feedback("p", input("Ada", "a")).await.unwrap();
    let b = storage.create_feedback("p", input("Bob", "b")).await.unwrap();
    let c = storage.create_feedback("p", input("Cy", "c")).await.unwrap();
    storage.approve_feedback(&b.id).await.unwrap();

    let ids = |list: Vec<folio_core::Feedback>| list.into_iter().map(|f| f.id).collect::<Vec<_>>();

    assert_eq!(
        ids(storage.list_feedback(FeedbackFilter::All).await.unwrap()),
        vec![c.id.clone(), b.id.clone(), a.id.clone()]
    );
    assert_eq!(
        ids(storage.list_feedback(FeedbackFilter::Pending).await.unwrap()),
        vec![c.id.clone(), a.id.clone()]
    );
    assert_eq!(
        ids(storage.list_feedback(FeedbackFilter::Approved).await.unwrap()),
        vec![b.id]
    );
}

#[tokio::test]
async fn test_bulk_approve_flips_only_named_ids() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let a = storage.create_feedback("p", input("Ada", "a")).await.unwrap();
    let b = storage.create_feedback("p", input("Bob", "b")).await.unwrap();
    let c = storage.create_feedback("p", input("Cy", "c")).await.unwrap();

    let affected = storage
        .approve_many(&[a.id.clone(), c.id.clone(), "fb-missing".to_string()])
        .await
        .unwrap();
    assert_eq!(affected, 2);

    assert!(storage.get_feedback(&a.id).await.unwrap().approved);
    assert!(!storage.get_feedback(&b.id).await.unwrap().approved);
    assert!(storage.get_feedback(&c.id).await.unwrap().approved);

    assert_eq!(storage.approve_many(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let storage = FeedbackStorage::new(create_test_db().await);

    assert!(matches!(
        storage.approve_feedback("fb-nope").await,
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(
        storage.delete_feedback("fb-nope").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_feedback() {
    let storage = FeedbackStorage::new(create_test_db().await);

    let feedback = storage.create_feedback("p", input("Ada", "a")).await.unwrap();
    storage.delete_feedback(&feedback.id).await.unwrap();

    assert!(matches!(
        storage.get_feedback(&feedback.id).await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_retrospective_upsert_replaces_text() {
    let storage = RetrospectiveStorage::new(create_test_db().await);

    assert!(storage.get_retrospective("octo/demo").await.unwrap().is_none());

    storage
        .upsert_retrospective(
            "octo/demo",
            RetrospectiveUpsertInput {
                project_name: Some("demo".to_string()),
                retrospective: "First take".to_string(),
            },
        )
        .await
        .unwrap();
    storage
        .upsert_retrospective(
            "octo/demo",
            RetrospectiveUpsertInput {
                project_name: Some("demo".to_string()),
                retrospective: "Second take".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = storage.get_retrospective("octo/demo").await.unwrap().unwrap();
    assert_eq!(stored.retrospective, "Second take");
    assert_eq!(stored.project_name.as_deref(), Some("demo"));
}

#[tokio::test]
async fn test_retrospective_timestamp_survives_reload() {
    let storage = RetrospectiveStorage::new(create_test_db().await);

    let saved = storage
        .upsert_retrospective(
            "octo/demo",
            RetrospectiveUpsertInput {
                project_name: None,
                retrospective: "Lessons".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = storage.get_retrospective("octo/demo").await.unwrap().unwrap();
    assert_eq!(stored.updated_at, saved.updated_at);
    assert_eq!(stored, saved);
}

#[tokio::test]
async fn test_ordering_follows_created_at_not_insert_order() {
    let pool = create_test_db().await;
    let storage = FeedbackStorage::new(pool.clone());

    let first = storage.create_feedback("p", input("Ada", "a")).await.unwrap();
    let second = storage.create_feedback("p", input("Bob", "b")).await.unwrap();

    // Backdate the newer row; sub-second digits vary in width once stored
    let backdated = Utc.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap() + Duration::milliseconds(500);
    sqlx::query("UPDATE project_feedback SET created_at = ? WHERE id = ?")
        .bind(backdated)
        .bind(&second.id)
        .execute(&pool)
        .await
        .unwrap();

    let listed = storage.list_project_feedback("p", true).await.unwrap();
    assert_eq!(
        listed.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
        vec![first.id.as_str(), second.id.as_str()]
    );
    assert_eq!(listed[1].created_at, backdated);
}

#[tokio::test]
async fn test_connect_creates_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("folio.db").display());

    let pool = folio_storage::connect(&url).await.unwrap();
    let storage = FeedbackStorage::new(pool);
    storage.create_feedback("p", input("Ada", "a")).await.unwrap();

    assert!(dir.path().join("folio.db").exists());
}
