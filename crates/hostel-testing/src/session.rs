//! Mock sessions for router tests.
//!
//! The service resolves the session cookie into a `SessionData` request
//! extension. `MockSession` inserts that extension directly, so router tests
//! need neither a session store nor a login round trip.

use axum::Extension;

use hostel_domain::role::Role;
use hostel_session::session::SessionData;

/// Configurable identity injected into test requests.
#[derive(Debug, Clone)]
pub struct MockSession {
    pub data: SessionData,
}

impl MockSession {
    pub fn student(user_id: i32, student_id: i32) -> Self {
        Self {
            data: SessionData {
                user_id,
                role: Role::Student,
                student_id: Some(student_id),
                name: format!("student-{student_id}"),
                student_code: Some(format!("AH26-{}", 100 + student_id)),
                email: Some(format!("student{student_id}@example.com")),
            },
        }
    }

    pub fn guardian(user_id: i32, student_id: Option<i32>) -> Self {
        Self {
            data: SessionData {
                user_id,
                role: Role::Guardian,
                student_id,
                name: format!("guardian-{user_id}"),
                student_code: None,
                email: Some(format!("guardian{user_id}@example.com")),
            },
        }
    }

    pub fn admin() -> Self {
        Self {
            data: SessionData::admin("Administrator"),
        }
    }

    /// Layer that attaches this session to every request. Apply with `router.layer(...)`.
    pub fn layer(&self) -> Extension<SessionData> {
        Extension(self.data.clone())
    }
}
