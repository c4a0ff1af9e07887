use axum::http::StatusCode;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::enrollment_repo::CAP_UNLIMITED;
use crate::database::{activity_repo, enrollment_repo, student_repo};

#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyEnrolled,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student not found")]
    StudentNotFound,
    #[error("Student is not signed up for this activity")]
    NotEnrolled,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl EnrollmentError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyEnrolled
            | Self::ActivityFull
            | Self::StudentNotFound
            | Self::NotEnrolled => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Signs `email` up for the named activity. Unknown students are created
/// on the spot with just their email; name and grade stay empty until
/// someone fills them in elsewhere.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let activity = activity_repo::find_by_name(pool, activity_name)
        .await?
        .ok_or(EnrollmentError::ActivityNotFound)?;

    let student_id = match student_repo::find_by_email(pool, email).await? {
        Some(student) => student.id,
        None => {
            student_repo::insert(
                pool,
                student_repo::NewStudent {
                    email,
                    name: None,
                    grade: None,
                },
            )
            .await?
        }
    };

    if enrollment_repo::find(pool, activity.id, student_id)
        .await?
        .is_some()
    {
        return Err(EnrollmentError::AlreadyEnrolled);
    }

    if activity.max_participants != CAP_UNLIMITED {
        let current = enrollment_repo::count_for_activity(pool, activity.id).await?;
        if current >= activity.max_participants {
            return Err(EnrollmentError::ActivityFull);
        }
    }

    // The capped insert re-checks the count in the same statement, so a
    // concurrent signup that slipped past the check above loses here
    // instead of overshooting the cap. Same idea for the duplicate check:
    // the UNIQUE(activity_id, student_id) constraint is the backstop.
    let inserted = if activity.max_participants == CAP_UNLIMITED {
        enrollment_repo::insert(pool, activity.id, student_id)
            .await
            .map(|_| true)
    } else {
        enrollment_repo::insert_if_capacity(pool, activity.id, student_id, activity.max_participants)
            .await
    };

    match inserted {
        Ok(true) => Ok(format!("Signed up {} for {}", email, activity_name)),
        Ok(false) => Err(EnrollmentError::ActivityFull),
        Err(e) if is_unique_violation(&e) => Err(EnrollmentError::AlreadyEnrolled),
        Err(e) => Err(e.into()),
    }
}

/// Removes `email` from the named activity. Unlike signup, an unknown
/// student is an error here rather than a reason to create one.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let activity = activity_repo::find_by_name(pool, activity_name)
        .await?
        .ok_or(EnrollmentError::ActivityNotFound)?;

    let student = student_repo::find_by_email(pool, email)
        .await?
        .ok_or(EnrollmentError::StudentNotFound)?;

    let removed = enrollment_repo::delete(pool, activity.id, student.id).await?;
    if removed == 0 {
        return Err(EnrollmentError::NotEnrolled);
    }

    Ok(format!("Unregistered {} from {}", email, activity_name))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
