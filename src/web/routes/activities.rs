use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::services::catalog_service::{self, ActivityView};
use crate::services::enrollment_service::{self, EnrollmentError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<String, ActivityView>>, (StatusCode, Json<Value>)> {
    catalog_service::list_activities(&pool)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!(error = %e, "list_activities_failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "Internal server error" })),
            )
        })
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    enrollment_service::signup(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| reject(e, "signup_failed"))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    enrollment_service::unregister(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| reject(e, "unregister_failed"))
}

fn reject(err: EnrollmentError, context: &'static str) -> (StatusCode, Json<Value>) {
    tracing::warn!(error = %err, "{}", context);
    let status = err.status();
    // Store-level failures stay opaque to the caller.
    let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.to_string()
    };
    (status, Json(serde_json::json!({ "detail": detail })))
}
