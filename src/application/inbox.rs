use crate::domain::errors::ApplicationError;
use crate::domain::housing::application::{
    ApplicationStatus, RentalApplication, Verdict,
};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Sort order for the applications view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InboxSort {
    #[default]
    Newest,
    Oldest,
}

/// Per-status counters shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub expired: usize,
}

/// The landlord's incoming rental applications.
pub struct ApplicationInbox {
    applications: Vec<RentalApplication>,
}

impl ApplicationInbox {
    pub fn new(applications: Vec<RentalApplication>) -> Self {
        Self { applications }
    }

    pub fn all(&self) -> &[RentalApplication] {
        &self.applications
    }

    pub fn push(&mut self, application: RentalApplication) {
        info!(application = %application.id, "application submitted");
        self.applications.push(application);
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            all: self.applications.len(),
            ..Default::default()
        };
        for app in &self.applications {
            match app.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Accepted => counts.accepted += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
                ApplicationStatus::Expired => counts.expired += 1,
            }
        }
        counts
    }

    /// Filter by status (`None` = all) and sort by submission time.
    pub fn select(
        &self,
        status: Option<ApplicationStatus>,
        sort: InboxSort,
    ) -> Vec<&RentalApplication> {
        let mut selected: Vec<&RentalApplication> = self
            .applications
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .collect();
        match sort {
            InboxSort::Newest => selected.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at)),
            InboxSort::Oldest => selected.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at)),
        }
        selected
    }

    pub fn respond(
        &mut self,
        id: Uuid,
        verdict: Verdict,
        response: String,
    ) -> Result<(), ApplicationError> {
        let app = self
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ApplicationError::NotFound { id })?;
        app.decide(verdict, response)?;
        info!(application = %id, status = ?app.status, "application answered");
        Ok(())
    }

    /// Expire pending applications older than the configured window.
    /// Returns how many were aged out.
    pub fn expire_overdue(&mut self, now: DateTime<Utc>, expiry_days: i64) -> usize {
        let mut expired = 0;
        for app in &mut self.applications {
            if app.is_overdue(now, expiry_days) {
                app.status = ApplicationStatus::Expired;
                expired += 1;
            }
        }
        if expired > 0 {
            info!(count = expired, "pending applications expired");
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;
    use chrono::Duration;

    fn inbox() -> ApplicationInbox {
        let listings = mock::sample_listings();
        ApplicationInbox::new(mock::sample_applications(&listings))
    }

    #[test]
    fn counts_cover_every_status() {
        let counts = inbox().counts();
        assert_eq!(counts.all, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.accepted, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.expired, 0);
    }

    #[test]
    fn newest_sort_puts_latest_first() {
        let inbox = inbox();
        let newest = inbox.select(None, InboxSort::Newest);
        assert!(newest.windows(2).all(|w| w[0].submitted_at >= w[1].submitted_at));

        let oldest = inbox.select(None, InboxSort::Oldest);
        assert!(oldest.windows(2).all(|w| w[0].submitted_at <= w[1].submitted_at));
    }

    #[test]
    fn status_filter_narrows_selection() {
        let inbox = inbox();
        let pending = inbox.select(Some(ApplicationStatus::Pending), InboxSort::Newest);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].student.full_name, "Aziza Karimova");
    }

    #[test]
    fn respond_accepts_pending_only() {
        let mut inbox = inbox();
        let pending_id = inbox.select(Some(ApplicationStatus::Pending), InboxSort::Newest)[0].id;
        let accepted_id = inbox.select(Some(ApplicationStatus::Accepted), InboxSort::Newest)[0].id;

        inbox
            .respond(pending_id, Verdict::Accept, "Xush kelibsiz!".to_string())
            .unwrap();
        assert_eq!(inbox.counts().accepted, 2);

        assert!(inbox
            .respond(accepted_id, Verdict::Reject, String::new())
            .is_err());
    }

    #[test]
    fn respond_unknown_id_is_not_found() {
        let mut inbox = inbox();
        let err = inbox
            .respond(Uuid::new_v4(), Verdict::Accept, String::new())
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[test]
    fn expire_overdue_ages_out_old_pending() {
        let mut inbox = inbox();
        let latest = inbox
            .all()
            .iter()
            .map(|a| a.submitted_at)
            .max()
            .unwrap();

        assert_eq!(inbox.expire_overdue(latest + Duration::days(5), 30), 0);
        assert_eq!(inbox.expire_overdue(latest + Duration::days(31), 30), 1);
        assert_eq!(inbox.counts().expired, 1);
        assert_eq!(inbox.counts().pending, 0);
    }
}
