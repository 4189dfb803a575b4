use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use hostel::domain::password::PasswordHasher;
use hostel::domain::repository::{
    BookingTx, CredentialRepository, SignupTx, StudentRepository, Transaction, UnitOfWork,
};
use hostel::domain::types::{
    AdminCredential, Attendance, Credential, Fee, NewCredential, NewFee, NewRoom, NewStudent,
    Room, RoomOccupancy, Student,
};
use hostel::error::HostelError;

pub const PREFIX: &str = "AH26";
pub const ADMIN_PASSWORD: &str = "admin-secret";

/// Cheap Argon2 parameters so tests don't spend seconds hashing.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::with_cost(8, 1).unwrap()
}

pub fn test_admin(hasher: &PasswordHasher) -> AdminCredential {
    AdminCredential {
        login_id: "ADMIN".to_owned(),
        name: "Administrator".to_owned(),
        password_hash: hasher.hash(ADMIN_PASSWORD).unwrap(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub student_id: i32,
    pub room_id: i32,
    pub allocation_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub credentials: Vec<Credential>,
    pub students: Vec<Student>,
    pub rooms: Vec<Room>,
    pub fees: Vec<Fee>,
    pub attendance: Vec<Attendance>,
    pub allocations: Vec<Allocation>,
}

pub type SharedStore = Arc<Mutex<Store>>;

pub fn shared(store: Store) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn student(student_id: i32, code: &str, room_id: Option<i32>) -> Student {
    Student {
        student_id,
        student_code: code.to_owned(),
        name: format!("Student {student_id}"),
        email: Some(format!("student{student_id}@example.com")),
        phone: None,
        gender: None,
        address: None,
        course: None,
        year: None,
        guardian_name: None,
        guardian_phone: None,
        room_id,
    }
}

pub fn room(room_id: i32, room_no: &str, room_type: Option<&str>, capacity: Option<i32>) -> Room {
    Room {
        room_id,
        room_no: room_no.to_owned(),
        room_type: room_type.map(str::to_owned),
        capacity,
    }
}

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

// ── Read repositories ────────────────────────────────────────────────────────

pub struct MockCredentialRepo {
    pub store: SharedStore,
}

impl CredentialRepository for MockCredentialRepo {
    async fn find_by_login(&self, handle: &str) -> Result<Option<Credential>, HostelError> {
        let lowered = handle.to_lowercase();
        Ok(self
            .store
            .lock()
            .unwrap()
            .credentials
            .iter()
            .find(|c| c.login_id == handle || c.email.as_deref() == Some(lowered.as_str()))
            .cloned())
    }
}

pub struct MockStudentRepo {
    pub store: SharedStore,
}

impl StudentRepository for MockStudentRepo {
    async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, HostelError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .students
            .iter()
            .find(|s| s.student_id == student_id)
            .cloned())
    }

    async fn find_by_code(&self, student_code: &str) -> Result<Option<Student>, HostelError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .students
            .iter()
            .find(|s| s.student_code == student_code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Student>, HostelError> {
        let mut students = self.store.lock().unwrap().students.clone();
        students.sort_by_key(|s| s.student_id);
        Ok(students)
    }

    async fn find_room(&self, room_id: i32) -> Result<Option<Room>, HostelError> {
        let store = self.store.lock().unwrap();
        Ok(store.rooms.iter().find(|r| r.room_id == room_id).cloned())
    }

    async fn recent_fees(&self, student_id: i32, limit: u64) -> Result<Vec<Fee>, HostelError> {
        let store = self.store.lock().unwrap();
        let mut fees: Vec<Fee> = store
            .fees
            .iter()
            .filter(|f| f.student_id == student_id)
            .cloned()
            .collect();
        fees.sort_by(|a, b| b.fee_id.cmp(&a.fee_id));
        fees.truncate(limit as usize);
        Ok(fees)
    }

    async fn recent_attendance(
        &self,
        student_id: i32,
        limit: u64,
    ) -> Result<Vec<Attendance>, HostelError> {
        let store = self.store.lock().unwrap();
        let mut rows: Vec<Attendance> = store
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.date, b.attendance_id).cmp(&(a.date, a.attendance_id)));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

// ── Unit of work ─────────────────────────────────────────────────────────────

/// Step at which a transaction fails with a persistence error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Never,
    LockRooms,
    InsertAllocation,
}

pub struct MockUnitOfWork {
    pub store: SharedStore,
    pub fail: FailPoint,
}

impl MockUnitOfWork {
    pub fn new(store: &SharedStore) -> Self {
        Self {
            store: Arc::clone(store),
            fail: FailPoint::Never,
        }
    }

    pub fn failing_at(store: &SharedStore, fail: FailPoint) -> Self {
        Self {
            store: Arc::clone(store),
            fail,
        }
    }
}

impl UnitOfWork for MockUnitOfWork {
    type Tx = MockTx;

    async fn begin(&self) -> Result<MockTx, HostelError> {
        let snapshot = self.store.lock().unwrap().clone();
        Ok(MockTx {
            store: Arc::clone(&self.store),
            staged: Mutex::new(snapshot),
            fail: self.fail,
        })
    }
}

/// Writes go to a private copy that replaces the shared store on commit.
pub struct MockTx {
    store: SharedStore,
    staged: Mutex<Store>,
    fail: FailPoint,
}

impl MockTx {
    fn fail_at(&self, point: FailPoint) -> Result<(), HostelError> {
        if self.fail == point {
            return Err(HostelError::Persistence(anyhow::anyhow!(
                "injected failure at {point:?}"
            )));
        }
        Ok(())
    }
}

impl Transaction for MockTx {
    async fn commit(self) -> Result<(), HostelError> {
        *self.store.lock().unwrap() = self.staged.into_inner().unwrap();
        Ok(())
    }

    async fn rollback(self) -> Result<(), HostelError> {
        Ok(())
    }
}

impl SignupTx for MockTx {
    async fn lock_student_codes(&self) -> Result<(), HostelError> {
        Ok(())
    }

    async fn student_codes_with_prefix(&self, prefix: &str) -> Result<Vec<String>, HostelError> {
        let marker = format!("{prefix}-");
        let staged = self.staged.lock().unwrap();
        Ok(staged
            .students
            .iter()
            .filter(|s| s.student_code.starts_with(&marker))
            .map(|s| s.student_code.clone())
            .collect())
    }

    async fn insert_student(&self, new: &NewStudent) -> Result<i32, HostelError> {
        let mut staged = self.staged.lock().unwrap();
        let student_id = next_id(staged.students.iter().map(|s| s.student_id));
        staged.students.push(Student {
            student_id,
            student_code: new.student_code.clone(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            gender: new.gender.clone(),
            address: new.address.clone(),
            course: new.course.clone(),
            year: new.year,
            guardian_name: new.guardian_name.clone(),
            guardian_phone: new.guardian_phone.clone(),
            room_id: None,
        });
        Ok(student_id)
    }

    async fn insert_credential(&self, new: &NewCredential) -> Result<i32, HostelError> {
        let mut staged = self.staged.lock().unwrap();
        let taken = staged.credentials.iter().any(|c| {
            c.login_id == new.login_id || (c.email.is_some() && c.email == new.email)
        });
        if taken {
            return Err(HostelError::AlreadyRegistered);
        }
        let user_id = next_id(staged.credentials.iter().map(|c| c.user_id));
        staged.credentials.push(Credential {
            user_id,
            login_id: new.login_id.clone(),
            email: new.email.clone(),
            name: new.name.clone(),
            password_hash: new.password_hash.clone(),
            role: new.role,
            student_id: new.student_id,
        });
        Ok(user_id)
    }
}

impl BookingTx for MockTx {
    async fn insert_fee(&self, new: &NewFee) -> Result<Fee, HostelError> {
        let mut staged = self.staged.lock().unwrap();
        let fee = Fee {
            fee_id: next_id(staged.fees.iter().map(|f| f.fee_id)),
            student_id: new.student_id,
            amount: new.amount,
            payment_date: Some(new.payment_date),
            payment_status: new.status.as_str().to_owned(),
            fee_type: Some(new.fee_type.to_owned()),
            period: Some(new.period.to_owned()),
        };
        staged.fees.push(fee.clone());
        Ok(fee)
    }

    async fn lock_rooms(&self) -> Result<(), HostelError> {
        self.fail_at(FailPoint::LockRooms)
    }

    async fn rooms_with_occupancy(&self) -> Result<Vec<RoomOccupancy>, HostelError> {
        let staged = self.staged.lock().unwrap();
        Ok(staged
            .rooms
            .iter()
            .map(|room| RoomOccupancy {
                room: room.clone(),
                occupied: staged
                    .students
                    .iter()
                    .filter(|s| s.room_id == Some(room.room_id))
                    .count() as i64,
            })
            .collect())
    }

    async fn insert_room(&self, new: &NewRoom) -> Result<Room, HostelError> {
        let mut staged = self.staged.lock().unwrap();
        let created = Room {
            room_id: next_id(staged.rooms.iter().map(|r| r.room_id)),
            room_no: new.room_no.clone(),
            room_type: Some(new.room_type.clone()),
            capacity: Some(new.capacity),
        };
        staged.rooms.push(created.clone());
        Ok(created)
    }

    async fn set_student_room(&self, student_id: i32, room_id: i32) -> Result<u64, HostelError> {
        let mut staged = self.staged.lock().unwrap();
        match staged.students.iter_mut().find(|s| s.student_id == student_id) {
            Some(s) => {
                s.room_id = Some(room_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn insert_allocation(
        &self,
        student_id: i32,
        room_id: i32,
        allocation_date: NaiveDate,
    ) -> Result<(), HostelError> {
        self.fail_at(FailPoint::InsertAllocation)?;
        self.staged.lock().unwrap().allocations.push(Allocation {
            student_id,
            room_id,
            allocation_date,
        });
        Ok(())
    }
}
