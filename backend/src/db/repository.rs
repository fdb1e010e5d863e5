use sqlx::SqlitePool;

use crate::models::{Assignment, NewAssignment};

pub async fn insert_assignment(
    db: &SqlitePool,
    new: &NewAssignment,
) -> Result<Assignment, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO assignments (name, course, due_date, type)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.name)
    .bind(&new.course)
    .bind(&new.due_date)
    .bind(&new.kind)
    .execute(db)
    .await?
    .last_insert_rowid();

    find_assignment_by_id(db, id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

pub async fn find_assignment_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Assignment>, sqlx::Error> {
    sqlx::query_as::<_, Assignment>(
        "SELECT id, name, course, due_date, type, completed FROM assignments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_pending_assignments(db: &SqlitePool) -> Result<Vec<Assignment>, sqlx::Error> {
    sqlx::query_as::<_, Assignment>(
        r#"
        SELECT id, name, course, due_date, type, completed
        FROM assignments
        WHERE completed = 0
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn fetch_completed_assignments(db: &SqlitePool) -> Result<Vec<Assignment>, sqlx::Error> {
    sqlx::query_as::<_, Assignment>(
        r#"
        SELECT id, name, course, due_date, type, completed
        FROM assignments
        WHERE completed = 1
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

/// Returns the number of rows touched; zero when `id` matches nothing.
pub async fn mark_assignment_completed(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE assignments SET completed = 1 WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result)
}
