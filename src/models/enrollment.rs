#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
}
