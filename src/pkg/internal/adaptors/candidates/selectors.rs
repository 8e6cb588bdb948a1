use sqlx::PgConnection;

use crate::pkg::internal::adaptors::candidates::spec::CandidateEntry;
use crate::prelude::Result;

pub struct CandidateSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CandidateSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<CandidateEntry>> {
        let rows = sqlx::query_as::<_, CandidateEntry>(
            "SELECT id, name, email, phone, job_title, status, resume, created_at, updated_at
             FROM candidates ORDER BY created_at DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<CandidateEntry>> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            "SELECT id, name, email, phone, job_title, status, resume, created_at, updated_at
             FROM candidates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<CandidateEntry>> {
        let row = sqlx::query_as::<_, CandidateEntry>(
            "SELECT id, name, email, phone, job_title, status, resume, created_at, updated_at
             FROM candidates WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
