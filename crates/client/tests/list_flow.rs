//! List pages built from fetched data: roster sheet, bunk grouping,
//! carpool seats, failed-photo reprocessing and trash restore.

mod common;

use chrono::{Duration, TimeZone, Utc};

use camp_client::api::CampApi;
use camp_client::bulk::reprocess_photos;
use camp_client::mutation::Mutation;
use camp_client::query::QueryState;
use camp_client::toast::{ToastKind, Toaster};
use camp_core::attendance::{AttendanceSheet, AttendanceStatus};
use camp_core::camper::Camper;
use camp_core::events::Carpool;
use camp_core::filters::ListFilter;
use camp_core::messages::{group_by_bunk, DailyMessage, UNASSIGNED_BUNK};
use camp_core::photos::{reprocess_candidates, Photo};
use camp_core::retention::TrashedRecord;
use camp_core::status::PhotoStatus;

use common::{date, FakeApi, FakeState};

fn camper(id: i64, first: &str, bunk: Option<&str>) -> Camper {
    Camper {
        id,
        first_name: first.into(),
        last_name: "Lake".into(),
        bunk: bunk.map(str::to_string),
    }
}

fn message(id: i64, bunk: Option<&str>) -> DailyMessage {
    DailyMessage {
        id,
        camper_id: id,
        camper_name: format!("Camper {id}"),
        bunk: bunk.map(str::to_string),
        send_on: date("2025-07-02"),
        body: "Have fun".into(),
    }
}

fn photo(id: i64, status: PhotoStatus) -> Photo {
    Photo {
        id,
        file_name: format!("IMG_{id}.jpg"),
        processing_status: status,
        face_count: 0,
    }
}

#[tokio::test]
async fn roster_query_feeds_attendance_sheet() {
    let api = FakeApi::new(FakeState {
        campers: vec![camper(1, "Ava", Some("Pines")), camper(2, "Ben", None)],
        ..Default::default()
    });

    let roster = QueryState::fetch("campers", api.list_campers(&ListFilter::new())).await;
    assert!(roster.is_ready());

    let mut sheet = AttendanceSheet::new(4, date("2025-07-02"), roster.items());
    sheet.mark(1, AttendanceStatus::Absent).unwrap();
    let summary = sheet.summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.absent, 1);
    assert_eq!(summary.rate, 50);
}

#[tokio::test]
async fn messages_are_grouped_by_bunk() {
    let api = FakeApi::new(FakeState {
        messages: vec![
            message(1, None),
            message(2, Some("Pines")),
            message(3, Some("Birches")),
        ],
        ..Default::default()
    });

    let filter = ListFilter::new().on(date("2025-07-02"));
    let messages = QueryState::fetch("messages", api.list_messages(&filter)).await;
    let groups = group_by_bunk(messages.data_or_default());

    let names: Vec<_> = groups.iter().map(|g| g.bunk.as_str()).collect();
    assert_eq!(names, vec!["Birches", "Pines", UNASSIGNED_BUNK]);
}

#[tokio::test]
async fn carpool_seats_are_derived() {
    let api = FakeApi::new(FakeState {
        carpools: vec![
            Carpool {
                id: 1,
                driver_name: "Dana".into(),
                seats: 4,
                riders: vec![1, 2, 3],
            },
            Carpool {
                id: 2,
                driver_name: "Eli".into(),
                seats: 2,
                riders: vec![4, 5],
            },
        ],
        ..Default::default()
    });

    let carpools = api.list_carpools(&ListFilter::new()).await.unwrap();
    let remaining: Vec<_> = carpools.iter().map(|c| c.occupancy().remaining()).collect();
    assert_eq!(remaining, vec![1, 0]);
    assert_eq!(carpools[0].occupancy().percent(), 75);
    assert!(carpools[1].occupancy().is_full());
}

#[tokio::test]
async fn failed_photos_are_requeued() {
    let api = FakeApi::new(FakeState {
        photos: vec![
            photo(1, PhotoStatus::Completed),
            photo(2, PhotoStatus::Failed),
            photo(3, PhotoStatus::Pending),
            photo(4, PhotoStatus::Failed),
        ],
        ..Default::default()
    });
    let (toaster, mut rx) = Toaster::channel();

    let photos = api.list_photos(&ListFilter::new()).await.unwrap();
    let ids = reprocess_candidates(&photos);
    assert_eq!(ids, vec![2, 4]);

    let outcome = reprocess_photos(&api, &ids, &toaster).await;
    assert_eq!(outcome.success_count, 2);
    assert_eq!(api.state().reprocessed, vec![2, 4]);

    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Queued 2 photos");
}

#[tokio::test]
async fn restoring_trash_removes_it_from_the_list() {
    let deleted_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let api = FakeApi::new(FakeState {
        trash: vec![
            TrashedRecord {
                id: 7,
                entity_type: "camper".into(),
                label: "Ava Lake".into(),
                deleted_at,
            },
            TrashedRecord {
                id: 8,
                entity_type: "event".into(),
                label: "Color war".into(),
                deleted_at,
            },
        ],
        ..Default::default()
    });
    let (toaster, mut rx) = Toaster::channel();
    let restore = Mutation::new("restore_trash", "Item restored", "Failed to restore item", toaster);

    let now = deleted_at + Duration::days(10);
    let before = api.list_trash().await.unwrap();
    assert!(before.iter().all(|t| t.days_remaining(now) == 20));

    restore.run(api.restore_trash(7)).await.unwrap();

    let after = api.list_trash().await.unwrap();
    assert_eq!(after.iter().map(|t| t.id).collect::<Vec<_>>(), vec![8]);
    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Item restored");
}
