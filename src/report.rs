//! Status-check presentation
//!
//! Maps a lookup to what the page renders: a label triple for the status and
//! a relative submission date.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::record::{ApplicationRecord, Status};
use crate::store::{ApplicationStore, StorageBackend};

/// Presentation triple for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub icon: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
}

/// Fixed mapping from status to its label
pub fn status_label(status: Status) -> StatusLabel {
    match status {
        Status::Accepted => StatusLabel {
            icon: "✔",
            headline: "Accepted",
            description: "Congratulations! Your application has been accepted.",
        },
        Status::Rejected => StatusLabel {
            icon: "❌",
            headline: "Rejected",
            description: "We appreciate your interest, but your application was not selected at this time.",
        },
        Status::Pending => StatusLabel {
            icon: "⏳",
            headline: "Pending",
            description: "Your application is currently under review. Please check back later.",
        },
    }
}

/// Outcome of a status lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StatusCheck {
    /// Query was blank
    EmptyQuery,
    /// No application under that email
    NotFound,
    /// Matching application, shaped for display
    Found(StatusReport),
}

/// Everything the page needs to render a found application
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: Status,
    pub label: StatusLabel,
    pub applicant: String,
    pub submitted: String,
}

impl StatusReport {
    pub fn new(record: &ApplicationRecord, now: DateTime<Utc>) -> Self {
        Self {
            status: record.status,
            label: status_label(record.status),
            applicant: record.full_name.clone(),
            submitted: format_submission_date(record.submission_date, now),
        }
    }
}

/// Look up an application and shape the result for display
pub fn check_status<B: StorageBackend>(
    store: &ApplicationStore<B>,
    email: &str,
    now: DateTime<Utc>,
) -> StatusCheck {
    let email = email.trim();
    if email.is_empty() {
        return StatusCheck::EmptyQuery;
    }
    match store.find_by_email(email) {
        Some(record) => StatusCheck::Found(StatusReport::new(&record, now)),
        None => StatusCheck::NotFound,
    }
}

/// Format a submission date as a relative string
pub fn format_submission_date(submitted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(submitted);
    let mins = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if days >= 1 {
        if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else {
            // Format as date
            format!(
                "{}/{}/{}",
                submitted.month(),
                submitted.day(),
                submitted.year() % 100
            )
        }
    } else if hours >= 1 {
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if mins >= 1 {
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use chrono::TimeZone;

    fn record(status: Status) -> ApplicationRecord {
        ApplicationRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            age: 25,
            reason: "...".to_string(),
            resume_file_name: None,
            submission_date: Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(status_label(Status::Accepted).icon, "✔");
        assert_eq!(status_label(Status::Rejected).icon, "❌");
        assert_eq!(status_label(Status::Pending).icon, "⏳");

        assert!(
            status_label(Status::Accepted)
                .description
                .starts_with("Congratulations")
        );
        assert!(
            status_label(Status::Pending)
                .description
                .contains("under review")
        );
    }

    #[test]
    fn test_check_outcomes() {
        let mut store = ApplicationStore::new(MemoryBackend::new());
        let now = Utc.with_ymd_and_hms(2026, 8, 2, 9, 30, 0).unwrap();

        assert_eq!(check_status(&store, "   ", now), StatusCheck::EmptyQuery);
        assert_eq!(
            check_status(&store, "jane@x.com", now),
            StatusCheck::NotFound
        );

        store.save(record(Status::Accepted)).unwrap();
        match check_status(&store, "JANE@X.com", now) {
            StatusCheck::Found(report) => {
                assert_eq!(report.status, Status::Accepted);
                assert_eq!(report.applicant, "Jane Doe");
                assert_eq!(report.submitted, "Yesterday");
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_dates() {
        let submitted = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let fmt = |now| format_submission_date(submitted, now);

        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 30).unwrap()), "Just now");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 1, 12, 1, 0).unwrap()), "1 min ago");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 1, 12, 45, 0).unwrap()), "45 mins ago");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 1, 13, 0, 0).unwrap()), "1 hour ago");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).unwrap()), "6 hours ago");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 2, 12, 0, 0).unwrap()), "Yesterday");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap()), "3 days ago");
        assert_eq!(fmt(Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()), "8/1/26");
    }

    #[test]
    fn test_report_serializes_for_the_page() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 9, 31, 0).unwrap();
        let check = StatusCheck::Found(StatusReport::new(&record(Status::Pending), now));
        let json = serde_json::to_string(&check).unwrap();

        assert!(json.contains("\"kind\":\"found\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"applicant\":\"Jane Doe\""));

        let not_found = serde_json::to_string(&StatusCheck::NotFound).unwrap();
        assert!(not_found.contains("\"kind\":\"notFound\""));
    }
}
