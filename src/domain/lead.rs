use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

pub const MAX_FIELD_LEN: usize = 100;

/// Raw contact form input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

/// Validated contact details, persisted once per successful submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    /// RFC 3339 timestamp.
    pub captured_at: String,
}

impl LeadRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Company,
}

impl LeadField {
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::FirstName => "First name",
            LeadField::LastName => "Last name",
            LeadField::Email => "Work email",
            LeadField::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeadValidationError {
    #[error("{} is required", .0.label())]
    Missing(LeadField),
    #[error("{} must be at most {} characters", .0.label(), MAX_FIELD_LEN)]
    TooLong(LeadField),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("could not timestamp submission: {0}")]
    Timestamp(String),
}

impl LeadValidationError {
    /// Field the message should be shown against, if any.
    pub fn field(&self) -> Option<LeadField> {
        match self {
            LeadValidationError::Missing(field) | LeadValidationError::TooLong(field) => Some(*field),
            LeadValidationError::InvalidEmail => Some(LeadField::Email),
            LeadValidationError::Timestamp(_) => None,
        }
    }
}

impl LeadForm {
    pub fn validate(&self) -> Result<LeadRecord, LeadValidationError> {
        let first_name = required(&self.first_name, LeadField::FirstName)?;
        let last_name = required(&self.last_name, LeadField::LastName)?;
        let email = required(&self.email, LeadField::Email)?;
        if !is_plausible_email(&email) {
            return Err(LeadValidationError::InvalidEmail);
        }
        let company = required(&self.company, LeadField::Company)?;

        let captured_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|err| LeadValidationError::Timestamp(err.to_string()))?;

        Ok(LeadRecord {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email: email.to_ascii_lowercase(),
            company,
            captured_at,
        })
    }
}

fn required(value: &str, field: LeadField) -> Result<String, LeadValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LeadValidationError::Missing(field));
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Err(LeadValidationError::TooLong(field));
    }
    Ok(trimmed.to_string())
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> LeadForm {
        LeadForm {
            first_name: "  Ada ".into(),
            last_name: "Lovelace".into(),
            email: "Ada@Example.com".into(),
            company: "Analytical Media".into(),
        }
    }

    #[test]
    fn valid_form_produces_trimmed_record() {
        let record = form().validate().unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.full_name(), "Ada Lovelace");
        assert!(OffsetDateTime::parse(&record.captured_at, &Rfc3339).is_ok());
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let mut input = form();
        input.company = "   ".into();
        let err = input.validate().unwrap_err();
        assert_eq!(err, LeadValidationError::Missing(LeadField::Company));
        assert_eq!(err.field(), Some(LeadField::Company));
        assert_eq!(err.to_string(), "Company is required");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["plain", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@.c", "a@b.c"] {
            let mut input = form();
            input.email = bad.into();
            assert_eq!(
                input.validate().unwrap_err(),
                LeadValidationError::InvalidEmail,
                "{bad}"
            );
        }
    }

    #[test]
    fn overly_long_names_are_rejected() {
        let mut input = form();
        input.last_name = "x".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(
            input.validate().unwrap_err(),
            LeadValidationError::TooLong(LeadField::LastName)
        );
    }

    #[test]
    fn length_error_names_the_field_limit() {
        let message = LeadValidationError::TooLong(LeadField::Company).to_string();
        assert_eq!(message, format!("Company must be at most {MAX_FIELD_LEN} characters"));
    }
}
