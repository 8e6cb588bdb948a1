use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::conf::settings;
use crate::pkg::internal::adaptors::candidates::mutators::{
    CandidateMutator, CreateCandidateData,
};
use crate::pkg::internal::adaptors::candidates::selectors::CandidateSelector;
use crate::pkg::internal::adaptors::candidates::spec::{CandidateEntry, CandidateStatus};
use crate::pkg::internal::uploads::{self, BufferedUpload};
use crate::pkg::internal::validate::{check_new_candidate, CandidateFields};
use crate::pkg::server::state::{AppState, GetTxn};
use crate::prelude::{AppError, Result};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CandidateEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let candidates = CandidateSelector::new(&mut tx).get_all().await?;
    Ok(Json(candidates))
}

pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateEntry>)> {
    let mut fields = CandidateFields::default();
    let mut resume: Option<BufferedUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or("") {
            "name" => fields.name = field.text().await?,
            "email" => fields.email = field.text().await?,
            "phone" => fields.phone = field.text().await?,
            "jobTitle" => fields.job_title = field.text().await?,
            "resume" => {
                let original_filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                uploads::check_upload(content_type.as_deref(), data.len())?;
                resume = Some(BufferedUpload {
                    original_filename,
                    data: data.into(),
                });
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    check_new_candidate(&fields)?;

    let mut tx = state.db_pool.begin_txn().await?;
    if CandidateSelector::new(&mut tx)
        .get_by_email(&fields.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Candidate with this email already exists".into(),
        ));
    }

    // the buffered file hits disk only once every other precondition passed
    let resume_path = match &resume {
        Some(upload) => Some(uploads::persist(&settings.upload_dir, upload).await?),
        None => None,
    };

    let created = CandidateMutator::new(&mut tx)
        .create(CreateCandidateData {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            job_title: fields.job_title,
            resume: resume_path.clone(),
        })
        .await;
    let created = match created {
        Ok(entry) => entry,
        Err(err) => {
            if let Some(path) = &resume_path {
                uploads::discard(path).await;
            }
            return Err(err);
        }
    };
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Deserialize)]
pub struct UpdateStatusInput {
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateStatusInput>,
) -> Result<Json<CandidateEntry>> {
    let status: CandidateStatus = input.status.parse()?;

    let mut tx = state.db_pool.begin_txn().await?;
    let updated = CandidateMutator::new(&mut tx)
        .update_status(id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".into()))?;
    tx.commit().await?;
    Ok(Json(updated))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let candidate = CandidateSelector::new(&mut tx)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".into()))?;
    CandidateMutator::new(&mut tx).delete(id).await?;
    tx.commit().await?;

    if let Some(path) = &candidate.resume {
        uploads::discard(path).await;
    }
    Ok(Json(json!({ "message": "Candidate deleted" })))
}
