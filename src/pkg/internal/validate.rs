use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::AppError;
use crate::prelude::Result;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[\w-]+(\.[\w-]+)*@([\w-]+\.)+[a-zA-Z]{2,7}$")
        .expect("invalid email pattern");
}

/// Field payload of a candidate creation request, collected from the
/// multipart form before any persistence happens.
#[derive(Debug, Default)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
}

pub fn check_new_candidate(fields: &CandidateFields) -> Result<()> {
    if fields.name.is_empty()
        || fields.email.is_empty()
        || fields.phone.is_empty()
        || fields.job_title.is_empty()
    {
        return Err(AppError::Validation(
            "All fields (name, email, phone, jobTitle) are required".into(),
        ));
    }
    if !EMAIL_RE.is_match(&fields.email) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    if !valid_phone(&fields.phone) {
        return Err(AppError::Validation("Invalid phone number format".into()));
    }
    Ok(())
}

pub fn valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str, job_title: &str) -> CandidateFields {
        CandidateFields {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            job_title: job_title.into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_candidate() {
        assert!(check_new_candidate(&fields("Ada", "ada@x.com", "5551234567", "Engineer")).is_ok());
        assert!(check_new_candidate(&fields(
            "Grace",
            "grace.hopper@navy.mil",
            "0123456789",
            "Rear Admiral"
        ))
        .is_ok());
        assert!(
            check_new_candidate(&fields("X", "first-last@sub.domain.org", "9999999999", "Y"))
                .is_ok()
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(check_new_candidate(&fields("", "ada@x.com", "5551234567", "Engineer")).is_err());
        assert!(check_new_candidate(&fields("Ada", "", "5551234567", "Engineer")).is_err());
        assert!(check_new_candidate(&fields("Ada", "ada@x.com", "", "Engineer")).is_err());
        assert!(check_new_candidate(&fields("Ada", "ada@x.com", "5551234567", "")).is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["not-an-email", "a@b", "a@b.", "@x.com", "ada@x.toolongtld"] {
            assert!(
                check_new_candidate(&fields("Ada", email, "5551234567", "Engineer")).is_err(),
                "expected {email} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_phones() {
        for phone in ["12345", "12345678901", "12345abcde", "555 123 45", ""] {
            assert!(!valid_phone(phone), "expected {phone:?} to be rejected");
        }
        assert!(valid_phone("5551234567"));
    }
}
