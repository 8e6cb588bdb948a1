use sqlx::PgConnection;

use crate::errors::AppError;
use crate::pkg::internal::adaptors::candidates::spec::{CandidateEntry, CandidateStatus};
use crate::prelude::Result;

pub struct CreateCandidateData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub resume: Option<String>,
}

pub struct CandidateMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CandidateMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CandidateMutator { pool }
    }

    pub async fn create(&mut self, candidate: CreateCandidateData) -> Result<CandidateEntry> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            r#"
            INSERT INTO candidates (name, email, phone, job_title, status, resume)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, job_title, status, resume, created_at, updated_at
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.job_title)
        .bind(CandidateStatus::Pending.as_str())
        .bind(&candidate.resume)
        .fetch_one(&mut *self.pool)
        .await
        .map_err(|e| match e {
            // the unique index on email is the authoritative duplicate check;
            // the selector pre-check only produces a friendlier early exit
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Candidate with this email already exists".into())
            }
            other => AppError::Database(other),
        })?;
        Ok(row)
    }

    pub async fn update_status(
        &mut self,
        id: i32,
        status: CandidateStatus,
    ) -> Result<Option<CandidateEntry>> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            r#"
            UPDATE candidates
            SET status = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, name, email, phone, job_title, status, resume, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
