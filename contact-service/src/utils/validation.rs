use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::ErrorResponse;

/// JSON extractor that rejects before the handler runs: a body that does
/// not match the record shape (missing field, wrong type) is a 422 carrying
/// the serde path of the offending field; non-JSON input is a 400. Either
/// way nothing reaches the persistence layer.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("Invalid request body: {}", e.body_text()),
                }),
            )
                .into_response(),
            other => AppError::BadRequest(anyhow::anyhow!(other.body_text())).into_response(),
        })?;

        value
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(value))
    }
}
