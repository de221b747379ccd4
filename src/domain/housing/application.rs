use crate::domain::errors::ApplicationError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Expired,
}

impl ApplicationStatus {
    pub fn is_final(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

/// What the landlord decided about a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub study_program: String,
    pub student_id: String,
}

/// A tenant's request to rent a specific listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalApplication {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub student: StudentInfo,
    pub move_in_date: DateTime<Utc>,
    pub duration: String,
    pub message: String,
    pub landlord_response: Option<String>,
    pub documents: Vec<String>,
}

impl RentalApplication {
    /// Accept or reject a pending application, recording the landlord's reply.
    /// Decided applications stay as they are.
    pub fn decide(&mut self, verdict: Verdict, response: String) -> Result<(), ApplicationError> {
        if self.status.is_final() {
            return Err(ApplicationError::AlreadyDecided {
                id: self.id,
                status: format!("{:?}", self.status).to_lowercase(),
            });
        }
        self.status = match verdict {
            Verdict::Accept => ApplicationStatus::Accepted,
            Verdict::Reject => ApplicationStatus::Rejected,
        };
        if !response.trim().is_empty() {
            self.landlord_response = Some(response);
        }
        Ok(())
    }

    /// A pending application left unanswered past the window is expired.
    pub fn is_overdue(&self, now: DateTime<Utc>, expiry_days: i64) -> bool {
        self.status == ApplicationStatus::Pending
            && now - self.submitted_at > Duration::days(expiry_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;

    fn pending() -> RentalApplication {
        mock::sample_applications(&mock::sample_listings())
            .into_iter()
            .find(|a| a.status == ApplicationStatus::Pending)
            .expect("seed data has a pending application")
    }

    #[test]
    fn accepting_records_status_and_response() {
        let mut app = pending();
        app.decide(Verdict::Accept, "Qabul qilindi".to_string())
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::Accepted);
        assert_eq!(app.landlord_response.as_deref(), Some("Qabul qilindi"));
    }

    #[test]
    fn rejecting_without_text_leaves_no_response() {
        let mut app = pending();
        app.decide(Verdict::Reject, "  ".to_string()).unwrap();
        assert_eq!(app.status, ApplicationStatus::Rejected);
        assert!(app.landlord_response.is_none());
    }

    #[test]
    fn decided_applications_cannot_be_reanswered() {
        let mut app = pending();
        app.decide(Verdict::Accept, String::new()).unwrap();
        let err = app.decide(Verdict::Reject, String::new()).unwrap_err();
        assert!(matches!(err, ApplicationError::AlreadyDecided { .. }));
        assert_eq!(app.status, ApplicationStatus::Accepted);
    }

    #[test]
    fn only_old_pending_applications_are_overdue() {
        let mut app = pending();
        let now = app.submitted_at + Duration::days(31);
        assert!(app.is_overdue(now, 30));
        assert!(!app.is_overdue(app.submitted_at + Duration::days(5), 30));

        app.decide(Verdict::Accept, String::new()).unwrap();
        assert!(!app.is_overdue(now, 30));
    }
}
