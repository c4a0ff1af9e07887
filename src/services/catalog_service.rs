use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{activity_repo, enrollment_repo};

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Full catalog snapshot keyed by activity name, each activity carrying its
/// participant emails in signup order. No pagination; the catalog is small.
pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<BTreeMap<String, ActivityView>> {
    let activities = activity_repo::list_all(pool).await?;

    let mut catalog = BTreeMap::new();
    for activity in activities {
        let participants = enrollment_repo::list_participant_emails(pool, activity.id).await?;
        catalog.insert(
            activity.name,
            ActivityView {
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants,
            },
        );
    }

    Ok(catalog)
}
