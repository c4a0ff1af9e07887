use sqlx::SqlitePool;

use crate::models::StudentRow;

const SQL_FIND_BY_EMAIL: &str = r#"
SELECT
  id,
  email,
  name,
  grade
FROM students
WHERE email = ?1
LIMIT 1
"#;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_STUDENT: &str = r#"
INSERT INTO students (
  email,
  name,
  grade
) VALUES (?, ?, ?)
"#;

pub struct NewStudent<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub grade: Option<&'a str>,
}

pub async fn insert(pool: &SqlitePool, student: NewStudent<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_STUDENT)
        .bind(student.email)
        .bind(student.name)
        .bind(student.grade)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_DELETE_BY_EMAIL: &str = r#"
DELETE FROM students
WHERE email = ?1
"#;

pub async fn delete_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_BY_EMAIL)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
