use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// Lifecycle states a candidate moves through. Only these three values are
/// ever persisted; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    Pending,
    Reviewed,
    Hired,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "Pending",
            CandidateStatus::Reviewed => "Reviewed",
            CandidateStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(CandidateStatus::Pending),
            "Reviewed" => Ok(CandidateStatus::Reviewed),
            "Hired" => Ok(CandidateStatus::Hired),
            _ => Err(AppError::Validation("Invalid status".into())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEntry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub status: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!(
            "Pending".parse::<CandidateStatus>().unwrap(),
            CandidateStatus::Pending
        );
        assert_eq!(
            "Reviewed".parse::<CandidateStatus>().unwrap(),
            CandidateStatus::Reviewed
        );
        assert_eq!(
            "Hired".parse::<CandidateStatus>().unwrap(),
            CandidateStatus::Hired
        );
        assert!("Rejected".parse::<CandidateStatus>().is_err());
        assert!("pending".parse::<CandidateStatus>().is_err());
        assert!("".parse::<CandidateStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            CandidateStatus::Pending,
            CandidateStatus::Reviewed,
            CandidateStatus::Hired,
        ] {
            assert_eq!(status.to_string().parse::<CandidateStatus>().unwrap(), status);
        }
    }

    #[test]
    fn entry_serializes_with_camel_case_keys() {
        let entry = CandidateEntry {
            id: 1,
            name: "Ada".into(),
            email: "ada@x.com".into(),
            phone: "5551234567".into(),
            job_title: "Engineer".into(),
            status: CandidateStatus::Pending.to_string(),
            resume: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["jobTitle"], "Engineer");
        assert_eq!(value["status"], "Pending");
        assert!(value["resume"].is_null());
        assert!(value.get("job_title").is_none());
    }
}
