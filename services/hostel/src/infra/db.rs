use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, Statement, TransactionTrait, sea_query::Expr,
};
use sea_orm_migration::MigratorTrait;

use hostel_domain::role::Role;
use hostel_migration::Migrator;
use hostel_schema::{attendance, fees, room, room_allocation, student, users};

use crate::domain::repository::{
    BookingTx, CredentialRepository, SignupTx, StudentRepository, Transaction, UnitOfWork,
};
use crate::domain::types::{
    Attendance, Credential, Fee, NewCredential, NewFee, NewRoom, NewStudent, Room,
    RoomOccupancy, Student,
};
use crate::error::HostelError;

/// Advisory lock keys, held for the lifetime of one transaction.
const STUDENT_CODE_LOCK: i64 = 0x686f_7374_0001;
const ROOM_SELECTION_LOCK: i64 = 0x686f_7374_0002;

// ── Schema version ───────────────────────────────────────────────────────────

/// Refuse to run against a schema that is behind the migration ledger,
/// or bring it up to date when `apply` is set.
pub async fn ensure_schema(db: &DatabaseConnection, apply: bool) -> anyhow::Result<()> {
    if apply {
        Migrator::up(db, None).await.context("apply migrations")?;
        return Ok(());
    }
    let pending = Migrator::get_pending_migrations(db)
        .await
        .context("read migration ledger")?;
    if !pending.is_empty() {
        anyhow::bail!(
            "database schema is behind by {} migration(s); run the migration binary or set RUN_MIGRATIONS=true",
            pending.len()
        );
    }
    Ok(())
}

// ── Credential repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCredentialRepository {
    pub db: DatabaseConnection,
}

impl CredentialRepository for DbCredentialRepository {
    async fn find_by_login(&self, handle: &str) -> Result<Option<Credential>, HostelError> {
        let model = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::LoginId.eq(handle))
                    .add(users::Column::Email.eq(handle.to_lowercase())),
            )
            .order_by_asc(users::Column::UserId)
            .one(&self.db)
            .await
            .context("find credential by login")?;
        model.map(credential_from_model).transpose()
    }
}

fn credential_from_model(model: users::Model) -> Result<Credential, HostelError> {
    let role = model
        .role
        .parse::<Role>()
        .with_context(|| format!("user {} has unknown role {:?}", model.user_id, model.role))?;
    Ok(Credential {
        user_id: model.user_id,
        login_id: model.login_id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        role,
        student_id: model.student_id,
    })
}

// ── Student repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

impl StudentRepository for DbStudentRepository {
    async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, HostelError> {
        let model = student::Entity::find_by_id(student_id)
            .one(&self.db)
            .await
            .context("find student by id")?;
        Ok(model.map(student_from_model))
    }

    async fn find_by_code(&self, student_code: &str) -> Result<Option<Student>, HostelError> {
        let model = student::Entity::find()
            .filter(student::Column::StudentCode.eq(student_code))
            .one(&self.db)
            .await
            .context("find student by code")?;
        Ok(model.map(student_from_model))
    }

    async fn list(&self) -> Result<Vec<Student>, HostelError> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::StudentId)
            .all(&self.db)
            .await
            .context("list students")?;
        Ok(models.into_iter().map(student_from_model).collect())
    }

    async fn find_room(&self, room_id: i32) -> Result<Option<Room>, HostelError> {
        let model = room::Entity::find_by_id(room_id)
            .one(&self.db)
            .await
            .context("find room by id")?;
        Ok(model.map(room_from_model))
    }

    async fn recent_fees(&self, student_id: i32, limit: u64) -> Result<Vec<Fee>, HostelError> {
        let models = fees::Entity::find()
            .filter(fees::Column::StudentId.eq(student_id))
            .order_by_desc(fees::Column::FeeId)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent fees")?;
        Ok(models.into_iter().map(fee_from_model).collect())
    }

    async fn recent_attendance(
        &self,
        student_id: i32,
        limit: u64,
    ) -> Result<Vec<Attendance>, HostelError> {
        let models = attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .order_by_desc(attendance::Column::Date)
            .order_by_desc(attendance::Column::AttendanceId)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent attendance")?;
        Ok(models
            .into_iter()
            .map(|m| Attendance {
                attendance_id: m.attendance_id,
                student_id: m.student_id,
                date: m.date,
                status: m.status,
            })
            .collect())
    }
}

fn student_from_model(model: student::Model) -> Student {
    Student {
        student_id: model.student_id,
        student_code: model.student_code,
        name: model.name,
        email: model.email,
        phone: model.phone,
        gender: model.gender,
        address: model.address,
        course: model.course,
        year: model.year,
        guardian_name: model.guardian_name,
        guardian_phone: model.guardian_phone,
        room_id: model.room_id,
    }
}

fn room_from_model(model: room::Model) -> Room {
    Room {
        room_id: model.room_id,
        room_no: model.room_no,
        room_type: model.room_type,
        capacity: model.capacity,
    }
}

fn fee_from_model(model: fees::Model) -> Fee {
    Fee {
        fee_id: model.fee_id,
        student_id: model.student_id,
        amount: model.amount,
        payment_date: model.payment_date,
        payment_status: model.payment_status,
        fee_type: model.fee_type,
        period: model.period,
    }
}

// ── Transactions ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUnitOfWork {
    pub db: DatabaseConnection,
}

impl UnitOfWork for DbUnitOfWork {
    type Tx = DbTx;

    async fn begin(&self) -> Result<DbTx, HostelError> {
        let txn = self.db.begin().await.context("begin transaction")?;
        Ok(DbTx { txn })
    }
}

/// A live database transaction. Dropped without commit, sea-orm rolls it back.
pub struct DbTx {
    txn: DatabaseTransaction,
}

impl DbTx {
    async fn advisory_lock(&self, key: i64) -> Result<(), DbErr> {
        self.txn
            .execute(Statement::from_sql_and_values(
                self.txn.get_database_backend(),
                "SELECT pg_advisory_xact_lock($1)",
                [key.into()],
            ))
            .await?;
        Ok(())
    }
}

impl Transaction for DbTx {
    async fn commit(self) -> Result<(), HostelError> {
        self.txn.commit().await.context("commit transaction")?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), HostelError> {
        self.txn.rollback().await.context("roll back transaction")?;
        Ok(())
    }
}

impl SignupTx for DbTx {
    async fn lock_student_codes(&self) -> Result<(), HostelError> {
        self.advisory_lock(STUDENT_CODE_LOCK)
            .await
            .context("lock student codes")?;
        Ok(())
    }

    async fn student_codes_with_prefix(&self, prefix: &str) -> Result<Vec<String>, HostelError> {
        let codes = student::Entity::find()
            .select_only()
            .column(student::Column::StudentCode)
            .filter(student::Column::StudentCode.starts_with(format!("{prefix}-")))
            .into_tuple::<String>()
            .all(&self.txn)
            .await
            .context("list student codes")?;
        Ok(codes)
    }

    async fn insert_student(&self, new: &NewStudent) -> Result<i32, HostelError> {
        let model = student::ActiveModel {
            student_code: Set(new.student_code.clone()),
            name: Set(new.name.clone()),
            email: Set(new.email.clone()),
            phone: Set(new.phone.clone()),
            gender: Set(new.gender.clone()),
            address: Set(new.address.clone()),
            course: Set(new.course.clone()),
            year: Set(new.year),
            guardian_name: Set(new.guardian_name.clone()),
            guardian_phone: Set(new.guardian_phone.clone()),
            room_id: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.txn)
        .await
        .context("insert student")?;
        Ok(model.student_id)
    }

    async fn insert_credential(&self, new: &NewCredential) -> Result<i32, HostelError> {
        let result = users::ActiveModel {
            login_id: Set(new.login_id.clone()),
            email: Set(new.email.clone()),
            name: Set(new.name.clone()),
            password_hash: Set(new.password_hash.clone()),
            role: Set(new.role.as_str().to_owned()),
            student_id: Set(new.student_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.txn)
        .await;
        match result {
            Ok(model) => Ok(model.user_id),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(HostelError::AlreadyRegistered)
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert credential").into()),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RoomOccupancyRow {
    room_id: i32,
    room_no: String,
    room_type: Option<String>,
    capacity: Option<i32>,
    occupied: i64,
}

impl BookingTx for DbTx {
    async fn insert_fee(&self, new: &NewFee) -> Result<Fee, HostelError> {
        let model = fees::ActiveModel {
            student_id: Set(new.student_id),
            amount: Set(new.amount),
            payment_date: Set(Some(new.payment_date)),
            payment_status: Set(new.status.as_str().to_owned()),
            fee_type: Set(Some(new.fee_type.to_owned())),
            period: Set(Some(new.period.to_owned())),
            ..Default::default()
        }
        .insert(&self.txn)
        .await
        .context("insert fee")?;
        Ok(fee_from_model(model))
    }

    async fn lock_rooms(&self) -> Result<(), HostelError> {
        self.advisory_lock(ROOM_SELECTION_LOCK)
            .await
            .context("lock room selection")?;
        Ok(())
    }

    async fn rooms_with_occupancy(&self) -> Result<Vec<RoomOccupancy>, HostelError> {
        let rows = RoomOccupancyRow::find_by_statement(Statement::from_string(
            self.txn.get_database_backend(),
            r#"
            SELECT r.room_id, r.room_no, r.room_type, r.capacity,
                   COUNT(s.student_id) AS occupied
            FROM room r
            LEFT JOIN student s ON s.room_id = r.room_id
            GROUP BY r.room_id
            ORDER BY r.room_id
            "#,
        ))
        .all(&self.txn)
        .await
        .context("list rooms with occupancy")?;
        Ok(rows
            .into_iter()
            .map(|row| RoomOccupancy {
                room: Room {
                    room_id: row.room_id,
                    room_no: row.room_no,
                    room_type: row.room_type,
                    capacity: row.capacity,
                },
                occupied: row.occupied,
            })
            .collect())
    }

    async fn insert_room(&self, new: &NewRoom) -> Result<Room, HostelError> {
        let model = room::ActiveModel {
            room_no: Set(new.room_no.clone()),
            room_type: Set(Some(new.room_type.clone())),
            capacity: Set(Some(new.capacity)),
            hostel_id: Set(None),
            ..Default::default()
        }
        .insert(&self.txn)
        .await
        .context("insert room")?;
        Ok(room_from_model(model))
    }

    async fn set_student_room(&self, student_id: i32, room_id: i32) -> Result<u64, HostelError> {
        let result = student::Entity::update_many()
            .col_expr(student::Column::RoomId, Expr::value(room_id))
            .filter(student::Column::StudentId.eq(student_id))
            .exec(&self.txn)
            .await
            .context("update student room")?;
        Ok(result.rows_affected)
    }

    async fn insert_allocation(
        &self,
        student_id: i32,
        room_id: i32,
        allocation_date: NaiveDate,
    ) -> Result<(), HostelError> {
        room_allocation::ActiveModel {
            student_id: Set(student_id),
            room_id: Set(room_id),
            allocation_date: Set(allocation_date),
            ..Default::default()
        }
        .insert(&self.txn)
        .await
        .context("insert room allocation")?;
        Ok(())
    }
}
