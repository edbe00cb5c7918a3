//! Application records
//!
//! One record per submitted application, keyed by applicant email.
//! Serialized field names are the page's camelCase storage contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome assigned to an application when it is created
///
/// Assigned once by weighted random draw and never transitioned afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Accepted,
    Rejected,
    #[default]
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
            Status::Pending => "pending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "accepted" => Some(Status::Accepted),
            "rejected" => Some(Status::Rejected),
            "pending" => Some(Status::Pending),
            _ => None,
        }
    }
}

/// A single submitted application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// Applicant's full name
    pub full_name: String,
    /// Unique key; compared case-insensitively, stored as typed
    pub email: String,
    /// Advisory range 18-100, not enforced here
    pub age: u32,
    /// Free-text motivation
    pub reason: String,
    /// Name of the uploaded resume file, if any (never the bytes)
    #[serde(default)]
    pub resume_file_name: Option<String>,
    /// Set once at submission
    pub submission_date: DateTime<Utc>,
    /// Fixed at creation by weighted random draw
    pub status: Status,
}
