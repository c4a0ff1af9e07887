use sqlx::SqlitePool;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL UNIQUE,
  description TEXT,
  schedule TEXT,
  max_participants INTEGER NOT NULL DEFAULT 0
)
"#;

const SQL_CREATE_STUDENTS: &str = r#"
CREATE TABLE IF NOT EXISTS students (
  id INTEGER PRIMARY KEY,
  email TEXT NOT NULL UNIQUE,
  name TEXT,
  grade TEXT
)
"#;

const SQL_CREATE_ENROLLMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS enrollments (
  id INTEGER PRIMARY KEY,
  activity_id INTEGER NOT NULL REFERENCES activities(id) ON DELETE CASCADE,
  student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
  UNIQUE (activity_id, student_id)
)
"#;

/// Creates the three tables if they do not exist yet. Ran at startup;
/// the UNIQUE pair constraint is what keeps duplicate enrollments out
/// even when a request races the duplicate pre-check.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_STUDENTS).execute(pool).await?;
    sqlx::query(SQL_CREATE_ENROLLMENTS).execute(pool).await?;
    Ok(())
}
