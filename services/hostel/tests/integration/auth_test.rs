use hostel::error::HostelError;
use hostel::usecase::auth::{LoginInput, LoginUseCase, SignupInput, SignupUseCase};
use hostel_domain::role::Role;

use crate::helpers::{
    ADMIN_PASSWORD, MockCredentialRepo, MockStudentRepo, MockUnitOfWork, PREFIX, SharedStore,
    Store, shared, student, test_admin, test_hasher,
};

fn signup_uc(store: &SharedStore) -> SignupUseCase<MockUnitOfWork, MockStudentRepo> {
    SignupUseCase {
        uow: MockUnitOfWork::new(store),
        students: MockStudentRepo {
            store: store.clone(),
        },
        hasher: test_hasher(),
        student_code_prefix: PREFIX.to_owned(),
        password_min_length: 6,
    }
}

fn login_uc(store: &SharedStore) -> LoginUseCase<MockCredentialRepo, MockStudentRepo> {
    let hasher = test_hasher();
    LoginUseCase {
        credentials: MockCredentialRepo {
            store: store.clone(),
        },
        students: MockStudentRepo {
            store: store.clone(),
        },
        admin: test_admin(&hasher),
        hasher,
    }
}

fn student_signup(name: &str, email: &str) -> SignupInput {
    SignupInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: "secret1".to_owned(),
        ..SignupInput::default()
    }
}

fn login(handle: &str, password: &str, role: Option<&str>) -> LoginInput {
    LoginInput {
        login: handle.to_owned(),
        password: password.to_owned(),
        role: role.map(str::to_owned),
    }
}

// ── Signup ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sign_up_student_and_log_in_with_generated_code() {
    let store = shared(Store::default());

    let session = signup_uc(&store)
        .execute(SignupInput {
            phone: Some(" 9876543210 ".to_owned()),
            course: Some("B.Tech".to_owned()),
            ..student_signup("Rahul Sharma", "Rahul@Example.com")
        })
        .await
        .unwrap();

    assert_eq!(session.role, Role::Student);
    assert_eq!(session.student_code.as_deref(), Some("AH26-101"));
    assert_eq!(session.email.as_deref(), Some("rahul@example.com"));

    {
        let store = store.lock().unwrap();
        assert_eq!(store.students.len(), 1);
        assert_eq!(store.students[0].phone.as_deref(), Some("9876543210"));
        assert_eq!(store.credentials.len(), 1);
        assert_eq!(store.credentials[0].login_id, "AH26-101");
        assert_ne!(store.credentials[0].password_hash, "secret1");
    }

    let by_code = login_uc(&store)
        .execute(login("AH26-101", "secret1", Some("student")))
        .await
        .unwrap();
    assert_eq!(by_code.student_id, session.student_id);
    assert_eq!(by_code.student_code.as_deref(), Some("AH26-101"));

    let by_email = login_uc(&store)
        .execute(login("RAHUL@example.com", "secret1", None))
        .await
        .unwrap();
    assert_eq!(by_email.user_id, session.user_id);
}

#[tokio::test]
async fn should_issue_unique_increasing_student_codes() {
    let store = shared(Store::default());
    let uc = signup_uc(&store);

    let mut codes = Vec::new();
    for i in 0..3 {
        let session = uc
            .execute(student_signup("Student", &format!("s{i}@example.com")))
            .await
            .unwrap();
        codes.push(session.student_code.unwrap());
    }

    assert_eq!(codes, vec!["AH26-101", "AH26-102", "AH26-103"]);
}

#[tokio::test]
async fn should_continue_after_highest_existing_code() {
    let store = shared(Store {
        students: vec![student(1, "AH26-150", None), student(2, "AH25-900", None)],
        ..Store::default()
    });

    let session = signup_uc(&store)
        .execute(student_signup("Asha", "asha@example.com"))
        .await
        .unwrap();

    assert_eq!(session.student_code.as_deref(), Some("AH26-151"));
}

#[tokio::test]
async fn should_reject_duplicate_email_without_leaving_a_profile() {
    let store = shared(Store::default());
    let uc = signup_uc(&store);
    uc.execute(student_signup("Rahul", "rahul@example.com"))
        .await
        .unwrap();

    let result = uc
        .execute(student_signup("Rahul Again", "RAHUL@example.com"))
        .await;

    assert!(
        matches!(result, Err(HostelError::AlreadyRegistered)),
        "expected AlreadyRegistered, got {result:?}"
    );
    assert_eq!(
        store.lock().unwrap().students.len(),
        1,
        "the second profile must be rolled back"
    );
}

#[tokio::test]
async fn should_reject_invalid_signup_fields() {
    let store = shared(Store::default());
    let uc = signup_uc(&store);

    let cases = [
        (student_signup("", "a@example.com"), "name, email and password are required"),
        (student_signup("A", "not-an-email"), "a valid email is required"),
        (
            SignupInput {
                password: "abc".to_owned(),
                ..student_signup("A", "a@example.com")
            },
            "password is too short",
        ),
        (
            SignupInput {
                role: Some("admin".to_owned()),
                ..student_signup("A", "a@example.com")
            },
            "admin accounts cannot be created by signup",
        ),
        (
            SignupInput {
                role: Some("warden".to_owned()),
                ..student_signup("A", "a@example.com")
            },
            "invalid role",
        ),
    ];

    for (input, expected) in cases {
        let result = uc.execute(input).await;
        assert!(
            matches!(result, Err(HostelError::InvalidInput(msg)) if msg == expected),
            "expected InvalidInput({expected}), got {result:?}"
        );
    }
    assert!(store.lock().unwrap().credentials.is_empty());
}

#[tokio::test]
async fn should_link_guardian_to_existing_student() {
    let store = shared(Store {
        students: vec![student(7, "AH26-107", None)],
        ..Store::default()
    });

    let session = signup_uc(&store)
        .execute(SignupInput {
            role: Some("Guardian".to_owned()),
            linked_student_id: Some(7),
            ..student_signup("Parent", "parent@example.com")
        })
        .await
        .unwrap();

    assert_eq!(session.role, Role::Guardian);
    assert_eq!(session.student_id, Some(7));
    assert_eq!(session.student_code.as_deref(), Some("AH26-107"));

    let store = store.lock().unwrap();
    assert_eq!(store.students.len(), 1, "guardians get no profile");
    assert_eq!(store.credentials[0].login_id, "parent@example.com");
}

#[tokio::test]
async fn should_reject_guardian_linked_to_unknown_student() {
    let store = shared(Store::default());

    let result = signup_uc(&store)
        .execute(SignupInput {
            role: Some("guardian".to_owned()),
            linked_student_id: Some(99),
            ..student_signup("Parent", "parent@example.com")
        })
        .await;

    assert!(
        matches!(
            result,
            Err(HostelError::InvalidInput("linked student does not exist"))
        ),
        "got {result:?}"
    );
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_login_alike() {
    let store = shared(Store::default());
    signup_uc(&store)
        .execute(student_signup("Rahul", "rahul@example.com"))
        .await
        .unwrap();

    let wrong = login_uc(&store)
        .execute(login("AH26-101", "nope!!", None))
        .await;
    let unknown = login_uc(&store)
        .execute(login("AH26-999", "secret1", None))
        .await;

    assert!(matches!(wrong, Err(HostelError::InvalidCredentials)), "got {wrong:?}");
    assert!(matches!(unknown, Err(HostelError::InvalidCredentials)), "got {unknown:?}");
}

#[tokio::test]
async fn should_reject_login_when_asserted_role_differs() {
    let store = shared(Store::default());
    signup_uc(&store)
        .execute(student_signup("Rahul", "rahul@example.com"))
        .await
        .unwrap();

    let result = login_uc(&store)
        .execute(login("AH26-101", "secret1", Some("guardian")))
        .await;

    assert!(matches!(result, Err(HostelError::RoleMismatch)), "got {result:?}");
}

#[tokio::test]
async fn should_log_in_configured_admin_without_database_row() {
    let store = shared(Store::default());

    let session = login_uc(&store)
        .execute(login("admin", ADMIN_PASSWORD, Some("ADMIN")))
        .await
        .unwrap();

    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.user_id, 0);
    assert_eq!(session.student_id, None);
}

#[tokio::test]
async fn should_reject_admin_with_wrong_password_or_role() {
    let store = shared(Store::default());
    let uc = login_uc(&store);

    let wrong = uc.execute(login("ADMIN", "guess", None)).await;
    let mismatch = uc
        .execute(login("ADMIN", ADMIN_PASSWORD, Some("student")))
        .await;

    assert!(matches!(wrong, Err(HostelError::InvalidCredentials)), "got {wrong:?}");
    assert!(matches!(mismatch, Err(HostelError::RoleMismatch)), "got {mismatch:?}");
}

#[tokio::test]
async fn should_require_login_and_password() {
    let store = shared(Store::default());

    let result = login_uc(&store).execute(login("  ", "", None)).await;

    assert!(matches!(result, Err(HostelError::InvalidInput(_))), "got {result:?}");
}

#[tokio::test]
async fn should_reject_fields_longer_than_their_columns() {
    let store = shared(Store::default());
    let uc = signup_uc(&store);

    let cases = [
        (student_signup(&"n".repeat(101), "a@example.com"), "name is too long"),
        (
            student_signup("A", &format!("{}@example.com", "e".repeat(250))),
            "email is too long",
        ),
        (
            SignupInput {
                phone: Some("9".repeat(21)),
                ..student_signup("A", "a@example.com")
            },
            "phone is too long",
        ),
        (
            SignupInput {
                gender: Some("unspecified".to_owned()),
                ..student_signup("A", "a@example.com")
            },
            "gender is too long",
        ),
        (
            SignupInput {
                guardian_phone: Some("+91 98765 43210 ext 12".to_owned()),
                ..student_signup("A", "a@example.com")
            },
            "guardian phone is too long",
        ),
    ];

    for (input, expected) in cases {
        let result = uc.execute(input).await;
        assert!(
            matches!(result, Err(HostelError::InvalidInput(msg)) if msg == expected),
            "expected InvalidInput({expected}), got {result:?}"
        );
    }
    let store = store.lock().unwrap();
    assert!(store.students.is_empty());
    assert!(store.credentials.is_empty());
}

#[tokio::test]
async fn should_accept_name_at_column_width() {
    let store = shared(Store::default());

    let session = signup_uc(&store)
        .execute(student_signup(&"n".repeat(100), "long@example.com"))
        .await
        .unwrap();

    assert_eq!(session.name.chars().count(), 100);
}
