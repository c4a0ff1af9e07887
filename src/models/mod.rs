pub mod activity;
pub mod enrollment;
pub mod student;

pub use activity::ActivityRow;
pub use enrollment::EnrollmentRow;
pub use student::StudentRow;
