use crate::dtos::{CreateStatusCheck, StatusCheckResponse};
use crate::handlers::LIST_LIMIT;
use crate::models::StatusCheck;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use service_core::error::AppError;

pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStatusCheck>,
) -> Result<impl IntoResponse, AppError> {
    let record = StatusCheck::new(input.client_name);

    state
        .db
        .status_checks()
        .insert_one(&record, None)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to insert status check {} into database: {}",
                record.id,
                e
            );
            AppError::from(e)
        })?;

    tracing::info!(status_check_id = %record.id, client_name = %record.client_name, "Status check recorded");

    // Echo the record that was stored, not a fresh read.
    Ok(Json(StatusCheckResponse::from(record)))
}

pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder().limit(LIST_LIMIT).build();

    let mut cursor = state
        .db
        .status_checks()
        .find(None, find_options)
        .await
        .map_err(AppError::from)?;

    let mut checks = Vec::new();
    while let Some(record) = cursor.try_next().await.map_err(AppError::from)? {
        checks.push(StatusCheckResponse::from(record));
    }

    Ok(Json(checks))
}
