#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub grade: Option<String>,
}
