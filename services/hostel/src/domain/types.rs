use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use hostel_domain::role::Role;

/// Newest fee rows shown on the student dashboard.
pub const FEE_HISTORY_LIMIT: u64 = 20;
/// Newest attendance rows shown on the student dashboard.
pub const ATTENDANCE_HISTORY_LIMIT: u64 = 30;

/// Widths of the `VARCHAR` columns user input lands in.
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;
pub const PHONE_MAX_LEN: usize = 20;
pub const GENDER_MAX_LEN: usize = 10;
pub const ADDRESS_MAX_LEN: usize = 255;
pub const COURSE_MAX_LEN: usize = 100;
pub const ROOM_TYPE_MAX_LEN: usize = 20;

/// `fees.amount` is `NUMERIC(10,2)`: at most 8 integer and 2 fractional digits.
pub const FEE_AMOUNT_SCALE: u32 = 2;
pub const FEE_AMOUNT_MAX_CENTS: i64 = 9_999_999_999;

pub const FEE_TYPE_YEARLY: &str = "YEARLY";
pub const FEE_PERIOD_YEAR: &str = "year";

/// Stored login credential.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: i32,
    pub login_id: String,
    pub email: Option<String>,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub student_id: Option<i32>,
}

/// Administrator identity supplied by configuration. Never persisted.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub login_id: String,
    pub name: String,
    pub password_hash: String,
}

impl AdminCredential {
    pub fn matches_login(&self, handle: &str) -> bool {
        self.login_id.eq_ignore_ascii_case(handle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub student_id: i32,
    pub student_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub room_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub room_id: i32,
    pub room_no: String,
    pub room_type: Option<String>,
    pub capacity: Option<i32>,
}

/// A room with the number of students currently assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub room: Room,
    pub occupied: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeStatus {
    Paid,
    Pending,
}

impl FeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Pending => "PENDING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fee {
    pub fee_id: i32,
    pub student_id: i32,
    pub amount: Decimal,
    pub payment_date: Option<NaiveDate>,
    pub payment_status: String,
    pub fee_type: Option<String>,
    pub period: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub attendance_id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: String,
}

/// Everything a student or guardian sees on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StudentOverview {
    pub student: Student,
    pub room: Option<Room>,
    pub fees: Vec<Fee>,
    pub attendance: Vec<Attendance>,
    #[serde(rename = "readOnly")]
    pub read_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub student_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCredential {
    pub login_id: String,
    pub email: Option<String>,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub student_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewFee {
    pub student_id: i32,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: FeeStatus,
    pub fee_type: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_no: String,
    pub room_type: String,
    pub capacity: i32,
}
