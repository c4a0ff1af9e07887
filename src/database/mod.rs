pub mod activity_repo;
pub mod enrollment_repo;
pub mod schema;
pub mod student_repo;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Opens the SQLite pool. Foreign keys are enabled per connection so the
/// ON DELETE CASCADE rules on enrollments actually fire.
pub async fn connect(db_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().connect_with(options).await
}
