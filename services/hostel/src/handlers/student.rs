use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use hostel_session::identity::CurrentSession;

use crate::domain::types::{Student, StudentOverview};
use crate::error::HostelError;
use crate::state::AppState;
use crate::usecase::student::{GetStudentUseCase, ListStudentsUseCase, StudentOverviewUseCase};

// ── GET /api/student/me ──────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<StudentOverview>, HostelError> {
    let usecase = StudentOverviewUseCase {
        students: state.student_repo(),
    };
    Ok(Json(usecase.execute(&session).await?))
}

// ── GET /api/student/list ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

pub async fn list_students(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<StudentListResponse>, HostelError> {
    let usecase = ListStudentsUseCase {
        students: state.student_repo(),
    };
    let students = usecase.execute(&session).await?;
    Ok(Json(StudentListResponse { students }))
}

// ── GET /api/student/{id} ────────────────────────────────────────────────────

pub async fn get_student(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<Student>, HostelError> {
    let usecase = GetStudentUseCase {
        students: state.student_repo(),
    };
    Ok(Json(usecase.execute(&session, &id).await?))
}
