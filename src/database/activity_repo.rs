use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?1
LIMIT 1
"#;

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_ALL: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY id ASC
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub schedule: Option<&'a str>,
    pub max_participants: i64,
}

pub async fn insert(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_DELETE_BY_NAME: &str = r#"
DELETE FROM activities
WHERE name = ?1
"#;

pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_BY_NAME)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
