use crate::dtos::{ContactFormResponse, CreateContactForm};
use crate::handlers::LIST_LIMIT;
use crate::models::ContactForm;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

pub async fn create_contact_form(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactForm>,
) -> Result<impl IntoResponse, AppError> {
    let record = ContactForm::new(
        input.name,
        input.email,
        input.phone,
        input.amount,
        input.message,
    );

    state
        .db
        .contact_forms()
        .insert_one(&record, None)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to insert contact form {} into database: {}",
                record.id,
                e
            );
            AppError::from(e)
        })?;

    tracing::info!(contact_form_id = %record.id, amount = record.amount, "Contact form recorded");

    Ok(Json(ContactFormResponse::from(record)))
}

pub async fn list_contact_forms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder().limit(LIST_LIMIT).build();

    let mut cursor = state
        .db
        .contact_forms()
        .find(None, find_options)
        .await
        .map_err(AppError::from)?;

    let mut forms = Vec::new();
    while let Some(record) = cursor.try_next().await.map_err(AppError::from)? {
        forms.push(ContactFormResponse::from(record));
    }

    Ok(Json(forms))
}

pub async fn get_contact_form(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Absence is a normal outcome of find_one; it only becomes an error here.
    let record = state
        .db
        .contact_forms()
        .find_one(doc! { "_id": &contact_id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Contact form not found")))?;

    Ok(Json(ContactFormResponse::from(record)))
}
