//! Field-level checks on passenger drafts.
//!
//! The result is advisory: callers gate booking creation on an empty error list,
//! the store does not re-run these checks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::passenger::PassengerDraft;
use crate::{CoreError, CoreResult};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

// Optional leading +, then at least seven digits, spaces, hyphens or parentheses
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    FirstNameRequired,
    LastNameRequired,
    GenderRequired,
    DateOfBirthRequired,
    ContactEmailRequired,
    ContactPhoneRequired,
    InvalidEmail,
    InvalidPhone,
}

/// A failed rule for one passenger. `passenger` is 1-based, as shown on the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub passenger: usize,
    pub rule: Rule,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.passenger;
        match self.rule {
            Rule::FirstNameRequired => write!(f, "Passenger {n}: First name is required"),
            Rule::LastNameRequired => write!(f, "Passenger {n}: Last name is required"),
            Rule::GenderRequired => write!(f, "Passenger {n}: Gender is required"),
            Rule::DateOfBirthRequired => write!(f, "Passenger {n}: Date of birth is required"),
            Rule::ContactEmailRequired => write!(f, "Contact email is required"),
            Rule::ContactPhoneRequired => write!(f, "Contact phone number is required"),
            Rule::InvalidEmail => write!(f, "Passenger {n}: Invalid email format"),
            Rule::InvalidPhone => write!(f, "Passenger {n}: Invalid phone number"),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Check every draft by list position; an empty result means the drafts may be booked.
///
/// Errors follow draft order, then rule order within a draft.
pub fn validate(drafts: &[PassengerDraft]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (position, draft) in drafts.iter().enumerate() {
        let mut fail = |rule| {
            errors.push(ValidationError {
                passenger: position + 1,
                rule,
            })
        };

        if is_blank(&draft.first_name) {
            fail(Rule::FirstNameRequired);
        }
        if is_blank(&draft.last_name) {
            fail(Rule::LastNameRequired);
        }
        if draft.gender.is_none() {
            fail(Rule::GenderRequired);
        }
        if draft.date_of_birth.is_none() {
            fail(Rule::DateOfBirthRequired);
        }

        let email = draft.email.as_deref().unwrap_or_default();
        let phone = draft.phone.as_deref().unwrap_or_default();
        let email_missing = position == 0 && is_blank(email);
        let phone_missing = position == 0 && is_blank(phone);

        if email_missing {
            fail(Rule::ContactEmailRequired);
        }
        if phone_missing {
            fail(Rule::ContactPhoneRequired);
        }
        // Any non-empty value is pattern checked, whitespace included
        if !email_missing && !email.is_empty() && !is_valid_email(email) {
            fail(Rule::InvalidEmail);
        }
        if !phone_missing && !phone.is_empty() && !is_valid_phone(phone) {
            fail(Rule::InvalidPhone);
        }
    }

    if !errors.is_empty() {
        tracing::debug!("Passenger validation found {} problem(s)", errors.len());
    }

    errors
}

/// Same checks as [`validate`], folded into a `Result` for callers that gate on it
pub fn ensure_valid(drafts: &[PassengerDraft]) -> CoreResult<()> {
    let errors = validate(drafts);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::ValidationFailed(errors))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
