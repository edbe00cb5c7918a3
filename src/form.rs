//! Application form handling
//!
//! Validates the submitted fields, builds the record, and saves it. Field
//! format advisories (email shape, age range) only feed the page's input
//! styling; they never block a save.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{AGE_MAX, AGE_MIN};
use crate::record::ApplicationRecord;
use crate::status::roll_status;
use crate::store::{ApplicationStore, StorageBackend, StoreError};

/// Raw field values as read off the form inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    /// Kept as text until the record is built; inputs hand over strings
    pub age: String,
    pub reason: String,
    /// Name of the chosen resume file, if one was picked
    #[serde(default)]
    pub resume_file_name: Option<String>,
}

/// Rejected submissions; `Display` strings are shown to the applicant
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a whole number for age.")]
    AgeNotANumber,
}

/// Submission failures: rejected input or a storage fault
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationForm {
    /// True when every required field has content
    pub fn has_required_fields(&self) -> bool {
        !(self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.age.trim().is_empty()
            || self.reason.trim().is_empty())
    }

    /// Build the stored record, stamping the submission date and rolling a
    /// fresh status
    pub fn into_record<R: Rng>(
        self,
        submitted_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<ApplicationRecord, FormError> {
        if !self.has_required_fields() {
            return Err(FormError::MissingRequired);
        }
        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| FormError::AgeNotANumber)?;

        Ok(ApplicationRecord {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            age,
            reason: self.reason,
            resume_file_name: self.resume_file_name,
            submission_date: submitted_at,
            status: roll_status(rng),
        })
    }
}

/// Validate, build, and persist a submission in one step
///
/// Returns the saved record so the page can confirm it. Re-submitting an
/// email replaces the earlier application, fresh status and date included.
pub fn submit<B: StorageBackend, R: Rng>(
    form: ApplicationForm,
    store: &mut ApplicationStore<B>,
    rng: &mut R,
) -> Result<ApplicationRecord, SubmitError> {
    let record = form.into_record(Utc::now(), rng)?;
    store.save(record.clone())?;
    log::info!("Application submitted for {}", record.email);
    Ok(record)
}

/// Advisory email shape check: something@something.something, no whitespace
///
/// Mirrors what the page highlights on blur. Does not gate saving.
pub fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Advisory age range check. Does not gate saving.
pub fn age_in_range(age: u32) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}
