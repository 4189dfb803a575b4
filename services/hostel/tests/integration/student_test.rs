use hostel::domain::types::{Attendance, Fee};
use hostel::error::HostelError;
use hostel::usecase::student::{GetStudentUseCase, ListStudentsUseCase, StudentOverviewUseCase};
use hostel_testing::session::MockSession;
use rust_decimal::Decimal;

use crate::helpers::{MockStudentRepo, SharedStore, Store, date, room, shared, student};

fn seeded() -> SharedStore {
    let fees = (1..=25)
        .map(|i| Fee {
            fee_id: i,
            student_id: 1,
            amount: Decimal::new(500_000, 2),
            payment_date: Some(date(2026, 1, 1)),
            payment_status: "PAID".to_owned(),
            fee_type: Some("YEARLY".to_owned()),
            period: Some("year".to_owned()),
        })
        .collect();
    let attendance = (1..=35)
        .map(|i| Attendance {
            attendance_id: i,
            student_id: 1,
            date: date(2026, 1, 1) + chrono::Days::new(i as u64),
            status: "PRESENT".to_owned(),
        })
        .collect();
    shared(Store {
        students: vec![student(2, "AH26-102", None), student(1, "AH26-101", Some(4))],
        rooms: vec![room(4, "R-101", Some("2-Seater"), Some(2))],
        fees,
        attendance,
        ..Store::default()
    })
}

fn repo(store: &SharedStore) -> MockStudentRepo {
    MockStudentRepo {
        store: store.clone(),
    }
}

#[tokio::test]
async fn should_return_student_overview_with_capped_history() {
    let store = seeded();
    let uc = StudentOverviewUseCase {
        students: repo(&store),
    };

    let overview = uc.execute(&MockSession::student(10, 1).data).await.unwrap();

    assert_eq!(overview.student.student_code, "AH26-101");
    assert_eq!(overview.room.map(|r| r.room_no).as_deref(), Some("R-101"));
    assert_eq!(overview.fees.len(), 20);
    assert_eq!(overview.fees[0].fee_id, 25, "newest fee first");
    assert_eq!(overview.attendance.len(), 30);
    assert_eq!(overview.attendance[0].attendance_id, 35, "newest day first");
    assert!(!overview.read_only);
}

#[tokio::test]
async fn should_mark_guardian_overview_read_only() {
    let store = seeded();
    let uc = StudentOverviewUseCase {
        students: repo(&store),
    };

    let overview = uc
        .execute(&MockSession::guardian(11, Some(1)).data)
        .await
        .unwrap();

    assert!(overview.read_only);
    assert_eq!(overview.student.student_id, 1);
}

#[tokio::test]
async fn should_report_missing_record_for_unlinked_guardian() {
    let store = seeded();
    let uc = StudentOverviewUseCase {
        students: repo(&store),
    };

    let result = uc.execute(&MockSession::guardian(11, None).data).await;

    assert!(matches!(result, Err(HostelError::NoStudentRecord)), "got {result:?}");
}

#[tokio::test]
async fn should_forbid_admin_from_own_dashboard() {
    let store = seeded();
    let uc = StudentOverviewUseCase {
        students: repo(&store),
    };

    let result = uc.execute(&MockSession::admin().data).await;

    assert!(matches!(result, Err(HostelError::Forbidden)), "got {result:?}");
}

#[tokio::test]
async fn should_list_students_in_id_order_for_admin_only() {
    let store = seeded();
    let uc = ListStudentsUseCase {
        students: repo(&store),
    };

    let students = uc.execute(&MockSession::admin().data).await.unwrap();
    let denied = uc.execute(&MockSession::student(10, 1).data).await;

    assert_eq!(
        students.iter().map(|s| s.student_id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(matches!(denied, Err(HostelError::Forbidden)), "got {denied:?}");
}

#[tokio::test]
async fn should_scope_get_student_to_linked_profile() {
    let store = seeded();
    let uc = GetStudentUseCase {
        students: repo(&store),
    };
    let session = MockSession::student(10, 1).data;

    let own = uc.execute(&session, "1").await.unwrap();
    let other = uc.execute(&session, "2").await;
    let missing_other = uc.execute(&session, "404").await;

    assert_eq!(own.student_code, "AH26-101");
    assert!(matches!(other, Err(HostelError::Forbidden)), "got {other:?}");
    assert!(
        matches!(missing_other, Err(HostelError::Forbidden)),
        "access is checked before existence, got {missing_other:?}"
    );
}

#[tokio::test]
async fn should_let_admin_read_any_student() {
    let store = seeded();
    let uc = GetStudentUseCase {
        students: repo(&store),
    };
    let admin = MockSession::admin().data;

    let found = uc.execute(&admin, "2").await.unwrap();
    let missing = uc.execute(&admin, "99").await;
    let malformed = uc.execute(&admin, "abc").await;

    assert_eq!(found.student_code, "AH26-102");
    assert!(matches!(missing, Err(HostelError::StudentNotFound)), "got {missing:?}");
    assert!(
        matches!(malformed, Err(HostelError::InvalidInput("invalid student id"))),
        "got {malformed:?}"
    );
}
