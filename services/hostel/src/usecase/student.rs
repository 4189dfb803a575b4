use hostel_domain::role::Role;
use hostel_session::session::SessionData;

use crate::domain::repository::StudentRepository;
use crate::domain::types::{
    ATTENDANCE_HISTORY_LIMIT, FEE_HISTORY_LIMIT, Student, StudentOverview,
};
use crate::error::HostelError;

// ── Overview (own dashboard) ─────────────────────────────────────────────────

pub struct StudentOverviewUseCase<S: StudentRepository> {
    pub students: S,
}

impl<S: StudentRepository> StudentOverviewUseCase<S> {
    /// Profile, room, recent fees and attendance of the session's student.
    pub async fn execute(&self, session: &SessionData) -> Result<StudentOverview, HostelError> {
        session.authorize(&[Role::Student, Role::Guardian])?;
        let student_id = session.student_id.ok_or(HostelError::NoStudentRecord)?;
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or(HostelError::NoStudentRecord)?;
        let room = match student.room_id {
            Some(room_id) => self.students.find_room(room_id).await?,
            None => None,
        };
        let fees = self
            .students
            .recent_fees(student_id, FEE_HISTORY_LIMIT)
            .await?;
        let attendance = self
            .students
            .recent_attendance(student_id, ATTENDANCE_HISTORY_LIMIT)
            .await?;
        Ok(StudentOverview {
            student,
            room,
            fees,
            attendance,
            read_only: session.role.is_read_only(),
        })
    }
}

// ── List (admin) ─────────────────────────────────────────────────────────────

pub struct ListStudentsUseCase<S: StudentRepository> {
    pub students: S,
}

impl<S: StudentRepository> ListStudentsUseCase<S> {
    pub async fn execute(&self, session: &SessionData) -> Result<Vec<Student>, HostelError> {
        session.authorize(&[Role::Admin])?;
        self.students.list().await
    }
}

// ── Get by id ────────────────────────────────────────────────────────────────

pub struct GetStudentUseCase<S: StudentRepository> {
    pub students: S,
}

impl<S: StudentRepository> GetStudentUseCase<S> {
    /// Admins may read any profile; everyone else only their linked one.
    /// Access is decided before existence, so probing ids reveals nothing.
    pub async fn execute(&self, session: &SessionData, raw_id: &str) -> Result<Student, HostelError> {
        session.authorize(&Role::ALL)?;
        let student_id: i32 = raw_id
            .trim()
            .parse()
            .map_err(|_| HostelError::InvalidInput("invalid student id"))?;
        if !session.can_view_student(student_id) {
            return Err(HostelError::Forbidden);
        }
        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(HostelError::StudentNotFound)
    }
}
