use chrono::{Duration, Utc};
use joybor::application::analytics::AnalyticsReport;
use joybor::application::catalog::ListingCatalog;
use joybor::application::inbox::{ApplicationInbox, InboxSort};
use joybor::domain::housing::application::{ApplicationStatus, Verdict};
use joybor::domain::locale::Language;
use joybor::infrastructure::mock;
use uuid::Uuid;

fn seeded() -> (ListingCatalog, ApplicationInbox) {
    let catalog = ListingCatalog::new(mock::sample_listings());
    let inbox = ApplicationInbox::new(mock::sample_applications(catalog.all()));
    (catalog, inbox)
}

#[test]
fn accepting_a_pending_application_updates_counts_and_report() {
    let (catalog, mut inbox) = seeded();
    let pending_id = inbox.select(Some(ApplicationStatus::Pending), InboxSort::Newest)[0].id;

    inbox
        .respond(pending_id, Verdict::Accept, "Xush kelibsiz!".to_string())
        .unwrap();

    let counts = inbox.counts();
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.accepted, 2);

    let report = AnalyticsReport::build(&catalog, &inbox, Language::Uz);
    assert_eq!(report.stats.pending_applications, 0);
    assert_eq!(report.stats.total_applications, counts.all);
}

#[test]
fn rejection_keeps_the_landlord_response() {
    let (_, mut inbox) = seeded();
    let pending_id = inbox.select(Some(ApplicationStatus::Pending), InboxSort::Newest)[0].id;

    inbox
        .respond(
            pending_id,
            Verdict::Reject,
            "Afsuski joy qolmadi".to_string(),
        )
        .unwrap();

    let rejected = inbox.select(Some(ApplicationStatus::Rejected), InboxSort::Newest);
    let answered = rejected.iter().find(|a| a.id == pending_id).unwrap();
    assert_eq!(
        answered.landlord_response.as_deref(),
        Some("Afsuski joy qolmadi")
    );
}

#[test]
fn a_second_verdict_is_refused() {
    let (_, mut inbox) = seeded();
    let pending_id = inbox.select(Some(ApplicationStatus::Pending), InboxSort::Newest)[0].id;

    inbox
        .respond(pending_id, Verdict::Accept, String::new())
        .unwrap();
    assert!(
        inbox
            .respond(pending_id, Verdict::Reject, String::new())
            .is_err()
    );

    // Unknown ids are refused as well
    assert!(
        inbox
            .respond(Uuid::new_v4(), Verdict::Accept, String::new())
            .is_err()
    );
}

#[test]
fn stale_pending_applications_expire_on_startup_sweep() {
    let (_, mut inbox) = seeded();
    let newest = inbox.all().iter().map(|a| a.submitted_at).max().unwrap();

    // Within the window nothing changes
    assert_eq!(inbox.expire_overdue(newest + Duration::days(10), 30), 0);

    // Past the window the pending one ages out, decided ones are untouched
    let expired = inbox.expire_overdue(newest + Duration::days(40), 30);
    assert_eq!(expired, 1);
    let counts = inbox.counts();
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.expired, 1);
    assert_eq!(counts.accepted, 1);
    assert_eq!(counts.rejected, 1);

    // A sweep right now with fresh data is a no-op
    assert_eq!(inbox.expire_overdue(Utc::now(), 365 * 10), 0);
}
