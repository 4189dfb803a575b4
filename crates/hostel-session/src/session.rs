//! Session payload and the role gate.

use serde::{Deserialize, Serialize};

use hostel_core::error::AppError;
use hostel_domain::role::Role;

/// User id carried by the configured administrator, who has no credential row.
pub const ADMIN_USER_ID: i32 = 0;

/// Identity attached to a session.
///
/// Stored as JSON in the session store and returned as-is by `GET /api/auth/me`,
/// hence the camelCase wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user_id: i32,
    pub role: Role,
    pub student_id: Option<i32>,
    pub name: String,
    pub student_code: Option<String>,
    pub email: Option<String>,
}

impl SessionData {
    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            user_id: ADMIN_USER_ID,
            role: Role::Admin,
            student_id: None,
            name: name.into(),
            student_code: None,
            email: None,
        }
    }

    /// Fail unless the session's role is in `allowed`.
    ///
    /// Non-admin sessions must carry a real user id; the admin sentinel on
    /// any other role is treated as no session at all.
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), AppError> {
        if self.role != Role::Admin && self.user_id == ADMIN_USER_ID {
            return Err(AppError::Unauthenticated);
        }
        if !allowed.contains(&self.role) {
            return Err(AppError::Forbidden);
        }
        Ok(())
    }

    /// Whether this session may read the profile with `student_id`.
    pub fn can_view_student(&self, student_id: i32) -> bool {
        self.role == Role::Admin || self.student_id == Some(student_id)
    }
}
