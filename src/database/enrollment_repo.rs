use sqlx::SqlitePool;

use crate::models::EnrollmentRow;

/// Cap value meaning "no numeric limit on participants". Activities are
/// provisioned with this by default; any positive value is an enforced cap.
pub const CAP_UNLIMITED: i64 = 0;

const SQL_FIND: &str = r#"
SELECT
  id,
  activity_id,
  student_id
FROM enrollments
WHERE activity_id = ?1
  AND student_id = ?2
LIMIT 1
"#;

pub async fn find(
    pool: &SqlitePool,
    activity_id: i64,
    student_id: i64,
) -> sqlx::Result<Option<EnrollmentRow>> {
    sqlx::query_as::<_, EnrollmentRow>(SQL_FIND)
        .bind(activity_id)
        .bind(student_id)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_FOR_ACTIVITY: &str = r#"
SELECT COUNT(*)
FROM enrollments
WHERE activity_id = ?1
"#;

pub async fn count_for_activity(pool: &SqlitePool, activity_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_one(pool)
        .await
}

const SQL_INSERT: &str = r#"
INSERT INTO enrollments (activity_id, student_id)
VALUES (?1, ?2)
"#;

pub async fn insert(pool: &SqlitePool, activity_id: i64, student_id: i64) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT)
        .bind(activity_id)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

// Count and insert run as one statement, so two racing signups cannot both
// squeeze past a nearly-full cap: SQLite serializes the writers and the
// loser's subquery sees the winner's row.
const SQL_INSERT_IF_CAPACITY: &str = r#"
INSERT INTO enrollments (activity_id, student_id)
SELECT ?1, ?2
WHERE (
  SELECT COUNT(*)
  FROM enrollments
  WHERE activity_id = ?1
) < ?3
"#;

/// Returns false when the activity is already at `cap`; callers pass a
/// positive cap only (use [`insert`] for `CAP_UNLIMITED` activities).
pub async fn insert_if_capacity(
    pool: &SqlitePool,
    activity_id: i64,
    student_id: i64,
    cap: i64,
) -> sqlx::Result<bool> {
    let res = sqlx::query(SQL_INSERT_IF_CAPACITY)
        .bind(activity_id)
        .bind(student_id)
        .bind(cap)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}

const SQL_DELETE: &str = r#"
DELETE FROM enrollments
WHERE activity_id = ?1
  AND student_id = ?2
"#;

pub async fn delete(pool: &SqlitePool, activity_id: i64, student_id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE)
        .bind(activity_id)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_PARTICIPANT_EMAILS: &str = r#"
SELECT s.email
FROM enrollments e
JOIN students s ON s.id = e.student_id
WHERE e.activity_id = ?1
ORDER BY e.id ASC
"#;

/// Emails of everyone enrolled in the activity, in signup order.
pub async fn list_participant_emails(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(SQL_LIST_PARTICIPANT_EMAILS)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}
