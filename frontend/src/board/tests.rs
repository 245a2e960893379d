use super::*;
use crate::request::mock::MockHttpClient;
use jobtrack_shared::AppliedDate;

// =========================================================
// Helpers
// =========================================================

fn api() -> JobTrackApi<MockHttpClient> {
    JobTrackApi::new("https://api.example.com", MockHttpClient::new())
}

fn record(id: u64, company: &str, status: ApplicationStatus) -> JobApplication {
    JobApplication {
        id: JobId::new(id),
        company_name: company.to_string(),
        position: "Engineer".to_string(),
        applied_date: AppliedDate::from_ymd(2024, 1, 1).unwrap(),
        status,
        notes: None,
    }
}

fn record_json(id: u64, company: &str, status: &str) -> String {
    format!(
        r#"{{"id":{id},"companyName":"{company}","position":"Engineer","appliedDate":"2024-01-01","status":"{status}","notes":""}}"#
    )
}

/// 已加载三条记录的面板
fn loaded_board(confirm_before_delete: bool) -> JobBoard {
    let mut board = JobBoard::new(confirm_before_delete);
    assert!(board.begin_load());
    board.finish_load(Ok(vec![
        record(1, "Acme", ApplicationStatus::Pending),
        record(2, "Globex", ApplicationStatus::Rejected),
        record(3, "Initech", ApplicationStatus::Pending),
    ]));
    board
}

fn fill_acme(board: &mut JobBoard) {
    board.set_field(DraftField::CompanyName, "Acme".into());
    board.set_field(DraftField::Position, "Engineer".into());
    board.set_field(DraftField::AppliedDate, "2024-01-01".into());
    board.set_field(DraftField::Status, "Pending".into());
    board.set_field(DraftField::Notes, "".into());
}

// =========================================================
// List
// =========================================================

#[tokio::test]
async fn list_replaces_collection_with_server_order() {
    let api = api();
    api.client().reply(
        200,
        &format!(
            "[{},{}]",
            record_json(5, "Zeta", "Accepted"),
            record_json(2, "Alpha", "Pending")
        ),
    );

    let mut board = JobBoard::new(true);
    assert!(board.begin_load());
    assert!(board.is_loading());
    assert!(!board.begin_load(), "second load while pending is ignored");

    board.finish_load(api.list_applications().await);

    assert!(!board.is_loading());
    let ids: Vec<u64> = board.records().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![5, 2]);
    assert!(board.notice().is_none());
}

#[tokio::test]
async fn failed_list_keeps_previous_records_and_reports() {
    let api = api();
    api.client().reply(500, "");

    let mut board = loaded_board(true);
    let before = board.records().to_vec();

    assert!(board.begin_load());
    board.finish_load(api.list_applications().await);

    assert_eq!(board.records(), before.as_slice());
    assert!(board.notice().unwrap().is_error());
}

#[test]
fn status_counts_follow_records() {
    let board = loaded_board(true);
    assert_eq!(
        board.status_counts(),
        vec![
            (ApplicationStatus::Pending, 2),
            (ApplicationStatus::InterviewScheduled, 0),
            (ApplicationStatus::Rejected, 1),
            (ApplicationStatus::Accepted, 0),
        ]
    );
}

#[test]
fn dismissing_an_old_notice_keeps_the_newer_one() {
    let mut board = JobBoard::new(true);
    board.begin_submit();
    let first = board.notice_seq();
    assert!(board.notice().is_some());

    board.set_field(DraftField::CompanyName, "Acme".into());
    board.begin_submit();
    let second = board.notice_seq();
    assert_ne!(first, second);

    assert!(!board.dismiss_notice(first));
    assert_eq!(board.notice().unwrap().message, "Position is required");

    assert!(board.dismiss_notice(second));
    assert!(board.notice().is_none());
    assert!(!board.dismiss_notice(second));
}

// =========================================================
// Create
// =========================================================

#[tokio::test]
async fn create_appends_server_record_and_clears_draft() {
    let api = api();
    api.client().reply(201, &record_json(7, "Acme", "Pending"));

    let mut board = JobBoard::new(true);
    fill_acme(&mut board);

    let write = board.begin_submit().unwrap();
    assert!(matches!(write, PendingWrite::Create(_)));
    assert!(board.is_submitting());

    board.finish_submit(write.send(&api).await);

    assert_eq!(board.records().len(), 1);
    assert_eq!(board.records()[0].id, JobId::new(7));
    assert_eq!(board.records()[0].status, ApplicationStatus::Pending);
    assert_eq!(board.draft(), &JobDraft::default());
    assert!(!board.is_submitting());
    assert_eq!(board.notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(
        api.client().calls(),
        vec!["POST https://api.example.com/job-applications"]
    );
}

#[tokio::test]
async fn create_appends_after_existing_records() {
    let api = api();
    api.client().reply(201, &record_json(9, "Acme", "Pending"));

    let mut board = loaded_board(true);
    fill_acme(&mut board);
    let write = board.begin_submit().unwrap();
    board.finish_submit(write.send(&api).await);

    let ids: Vec<u64> = board.records().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 9]);
}

#[tokio::test]
async fn failed_create_keeps_draft_for_retry() {
    let api = api();
    api.client().reply(422, r#"{"error":"bad"}"#);

    let mut board = JobBoard::new(true);
    fill_acme(&mut board);
    let draft_before = board.draft().clone();

    let write = board.begin_submit().unwrap();
    board.finish_submit(write.send(&api).await);

    assert!(board.records().is_empty());
    assert_eq!(board.draft(), &draft_before);
    assert!(board.notice().unwrap().is_error());
    assert!(!board.is_submitting(), "user can retry");
    assert!(board.begin_submit().is_some());
}

#[test]
fn invalid_draft_never_reaches_the_network() {
    let mut board = JobBoard::new(true);
    board.set_field(DraftField::CompanyName, "Acme".into());

    assert!(board.begin_submit().is_none());
    assert!(!board.is_submitting());
    let notice = board.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(notice.message, "Position is required");
}

#[tokio::test]
async fn double_submit_sends_one_request() {
    let api = api();
    api.client().reply(201, &record_json(7, "Acme", "Pending"));

    let mut board = JobBoard::new(true);
    fill_acme(&mut board);

    let first = board.begin_submit();
    let second = board.begin_submit();
    assert!(first.is_some());
    assert!(second.is_none());

    board.finish_submit(first.unwrap().send(&api).await);
    assert_eq!(board.records().len(), 1);
    assert_eq!(api.client().requests().len(), 1);
}

// =========================================================
// Update
// =========================================================

#[tokio::test]
async fn update_replaces_only_the_edited_record() {
    let api = api();
    api.client().reply(200, &record_json(2, "Globex", "Accepted"));

    let mut board = loaded_board(true);
    let untouched: Vec<JobApplication> = board
        .records()
        .iter()
        .filter(|r| r.id != JobId::new(2))
        .cloned()
        .collect();

    assert!(board.start_edit(JobId::new(2)));
    assert_eq!(board.draft().company_name, "Globex");
    board.set_field(DraftField::Status, "Accepted".into());

    let write = board.begin_submit().unwrap();
    assert!(matches!(write, PendingWrite::Update(id, _) if id == JobId::new(2)));
    board.finish_submit(write.send(&api).await);

    assert_eq!(board.records().len(), 3);
    assert_eq!(board.records()[1].status, ApplicationStatus::Accepted);
    assert_eq!(board.records()[0], untouched[0]);
    assert_eq!(board.records()[2], untouched[1]);
    assert_eq!(board.editing(), None);
    assert_eq!(board.draft(), &JobDraft::default());
    assert_eq!(
        api.client().calls(),
        vec!["PUT https://api.example.com/job-applications/2"]
    );
}

#[tokio::test]
async fn cleared_notes_are_sent_on_update() {
    let api = api();
    api.client().reply(200, &record_json(1, "Acme", "Pending"));

    let mut board = JobBoard::new(true);
    assert!(board.begin_load());
    let mut noted = record(1, "Acme", ApplicationStatus::Pending);
    noted.notes = Some("call back friday".to_string());
    board.finish_load(Ok(vec![noted]));

    assert!(board.start_edit(JobId::new(1)));
    assert_eq!(board.draft().notes, "call back friday");
    board.set_field(DraftField::Notes, "".into());

    let write = board.begin_submit().unwrap();
    board.finish_submit(write.send(&api).await);

    let sent = api.client().requests();
    let body = sent[0].body.as_deref().unwrap();
    assert!(body.contains(r#""notes":"""#), "body was {body}");
    assert_eq!(board.records()[0].notes.as_deref(), Some(""));
}

#[tokio::test]
async fn failed_update_stays_in_edit_mode() {
    let api = api();
    api.client().fail("offline");

    let mut board = loaded_board(true);
    let before = board.records().to_vec();
    board.start_edit(JobId::new(3));
    board.set_field(DraftField::Notes, "follow up".into());

    let write = board.begin_submit().unwrap();
    board.finish_submit(write.send(&api).await);

    assert_eq!(board.records(), before.as_slice());
    assert_eq!(board.editing(), Some(JobId::new(3)));
    assert_eq!(board.draft().notes, "follow up");
    assert!(board.notice().unwrap().is_error());
}

#[test]
fn submit_target_follows_edit_selection() {
    let mut board = loaded_board(true);
    fill_acme(&mut board);
    assert!(matches!(board.begin_submit(), Some(PendingWrite::Create(_))));
    board.finish_submit(Err(ApiError::Server(500)));

    assert!(board.start_edit(JobId::new(1)));
    assert!(matches!(
        board.begin_submit(),
        Some(PendingWrite::Update(id, _)) if id == JobId::new(1)
    ));
    board.finish_submit(Err(ApiError::Server(500)));

    board.cancel_edit();
    assert_eq!(board.editing(), None);
    assert_eq!(board.draft(), &JobDraft::default());
    fill_acme(&mut board);
    assert!(matches!(board.begin_submit(), Some(PendingWrite::Create(_))));
}

#[test]
fn edit_target_is_locked_while_saving() {
    let mut board = loaded_board(true);
    board.start_edit(JobId::new(1));
    let _write = board.begin_submit().unwrap();

    assert!(!board.start_edit(JobId::new(2)));
    board.cancel_edit();
    assert_eq!(board.editing(), Some(JobId::new(1)));
}

#[test]
fn editing_unknown_record_is_refused() {
    let mut board = loaded_board(true);
    assert!(!board.start_edit(JobId::new(99)));
    assert_eq!(board.editing(), None);
}

// =========================================================
// Delete
// =========================================================

#[tokio::test]
async fn delete_without_confirmation_fires_immediately() {
    let api = api();
    api.client().reply(204, "");

    let mut board = loaded_board(false);
    let id = board.request_delete(JobId::new(2)).unwrap();
    board.finish_delete(api.delete_application(id).await);

    assert_eq!(board.records().len(), 2);
    assert!(board.find(JobId::new(2)).is_none());
    assert_eq!(
        api.client().calls(),
        vec!["DELETE https://api.example.com/job-applications/2"]
    );
}

#[tokio::test]
async fn delete_with_confirmation_waits_for_user() {
    let api = api();
    api.client().reply(200, "");

    let mut board = loaded_board(true);
    assert_eq!(board.request_delete(JobId::new(1)), None);
    assert_eq!(board.awaiting_confirmation(), Some(JobId::new(1)));
    assert!(api.client().requests().is_empty());

    let id = board.confirm_delete().unwrap();
    assert_eq!(board.awaiting_confirmation(), None);
    board.finish_delete(api.delete_application(id).await);

    let ids: Vec<u64> = board.records().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn cancelled_confirmation_deletes_nothing() {
    let mut board = loaded_board(true);
    board.request_delete(JobId::new(1));
    board.cancel_delete();

    assert_eq!(board.confirm_delete(), None);
    assert_eq!(board.records().len(), 3);
}

#[tokio::test]
async fn failed_delete_leaves_collection_unchanged() {
    let api = api();
    api.client().reply(404, "");

    let mut board = loaded_board(false);
    let before = board.records().to_vec();
    let id = board.request_delete(JobId::new(42)).unwrap();
    board.finish_delete(api.delete_application(id).await);

    assert_eq!(board.records(), before.as_slice());
    assert!(board.notice().unwrap().is_error());
    assert!(!board.is_deleting());
}

#[test]
fn one_delete_in_flight_at_a_time() {
    let mut board = loaded_board(false);
    assert_eq!(board.request_delete(JobId::new(1)), Some(JobId::new(1)));
    assert_eq!(board.request_delete(JobId::new(2)), None);

    board.finish_delete(Ok(()));
    assert_eq!(board.request_delete(JobId::new(2)), Some(JobId::new(2)));
}

#[test]
fn deleting_the_edited_record_leaves_edit_mode() {
    let mut board = loaded_board(false);
    board.start_edit(JobId::new(3));
    board.request_delete(JobId::new(3));
    board.finish_delete(Ok(()));

    assert_eq!(board.editing(), None);
    assert_eq!(board.draft(), &JobDraft::default());
}

#[test]
fn stray_completions_are_ignored() {
    let mut board = loaded_board(false);
    let before = board.clone();

    board.finish_submit(Ok(record(50, "Ghost", ApplicationStatus::Pending)));
    board.finish_delete(Ok(()));

    assert_eq!(board, before);
}
