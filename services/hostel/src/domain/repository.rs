#![allow(async_fn_in_trait)]

use chrono::NaiveDate;

use hostel_session::session::SessionData;

use crate::domain::types::{
    Attendance, Credential, Fee, NewCredential, NewFee, NewRoom, NewStudent, Room,
    RoomOccupancy, Student,
};
use crate::error::HostelError;

/// Read access to login credentials.
pub trait CredentialRepository: Send + Sync {
    /// Match `handle` against the login id, or against the email case-insensitively.
    async fn find_by_login(&self, handle: &str) -> Result<Option<Credential>, HostelError>;
}

/// Read access to student profiles and their dashboard data.
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, HostelError>;

    async fn find_by_code(&self, student_code: &str) -> Result<Option<Student>, HostelError>;

    /// All students ordered by id.
    async fn list(&self) -> Result<Vec<Student>, HostelError>;

    async fn find_room(&self, room_id: i32) -> Result<Option<Room>, HostelError>;

    /// Newest first.
    async fn recent_fees(&self, student_id: i32, limit: u64) -> Result<Vec<Fee>, HostelError>;

    /// Newest first by date.
    async fn recent_attendance(
        &self,
        student_id: i32,
        limit: u64,
    ) -> Result<Vec<Attendance>, HostelError>;
}

/// Server-side session storage keyed by an opaque id.
pub trait SessionStore: Send + Sync {
    /// Persist `data` under a fresh id and return the id.
    async fn create(&self, data: &SessionData) -> Result<String, HostelError>;

    /// `None` for unknown or expired ids.
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, HostelError>;

    async fn destroy(&self, session_id: &str) -> Result<(), HostelError>;
}

/// Opens database transactions.
pub trait UnitOfWork: Send + Sync {
    type Tx: SignupTx + BookingTx;

    async fn begin(&self) -> Result<Self::Tx, HostelError>;
}

/// An open transaction. Dropping it without `commit` discards its writes.
pub trait Transaction: Send + Sync + Sized {
    async fn commit(self) -> Result<(), HostelError>;

    async fn rollback(self) -> Result<(), HostelError>;
}

/// Writes performed by signup, all inside one transaction.
pub trait SignupTx: Transaction {
    /// Serialise student-code generation until this transaction ends.
    async fn lock_student_codes(&self) -> Result<(), HostelError>;

    /// Every stored code starting with `{prefix}-`.
    async fn student_codes_with_prefix(&self, prefix: &str) -> Result<Vec<String>, HostelError>;

    /// Returns the new student id.
    async fn insert_student(&self, student: &NewStudent) -> Result<i32, HostelError>;

    /// Returns the new user id. A taken login id or email is `AlreadyRegistered`.
    async fn insert_credential(&self, credential: &NewCredential) -> Result<i32, HostelError>;
}

/// Writes performed by pay-and-book, all inside one transaction.
pub trait BookingTx: Transaction {
    async fn insert_fee(&self, fee: &NewFee) -> Result<Fee, HostelError>;

    /// Serialise room selection until this transaction ends.
    async fn lock_rooms(&self) -> Result<(), HostelError>;

    async fn rooms_with_occupancy(&self) -> Result<Vec<RoomOccupancy>, HostelError>;

    async fn insert_room(&self, room: &NewRoom) -> Result<Room, HostelError>;

    /// Point the student at `room_id`. Returns the number of rows updated.
    async fn set_student_room(&self, student_id: i32, room_id: i32) -> Result<u64, HostelError>;

    async fn insert_allocation(
        &self,
        student_id: i32,
        room_id: i32,
        allocation_date: NaiveDate,
    ) -> Result<(), HostelError>;
}
