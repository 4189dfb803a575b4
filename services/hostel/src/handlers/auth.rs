use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use hostel_domain::role::Role;
use hostel_session::{
    cookie::{clear_session_cookie, session_id, set_session_cookie},
    identity::CurrentSession,
    session::SessionData,
};

use crate::domain::repository::SessionStore;
use crate::error::HostelError;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, SignupInput, SignupUseCase};

#[derive(Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: SessionData,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /api/auth/signup ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    #[serde(alias = "linkedStudentId")]
    pub linked_student_id: Option<i32>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    #[serde(alias = "guardianName")]
    pub guardian_name: Option<String>,
    #[serde(alias = "guardianPhone")]
    pub guardian_phone: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            role: req.role,
            linked_student_id: req.linked_student_id,
            phone: req.phone,
            gender: req.gender,
            address: req.address,
            course: req.course,
            year: req.year,
            guardian_name: req.guardian_name,
            guardian_phone: req.guardian_phone,
        }
    }
}

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HostelError> {
    let Json(body) = body?;
    let usecase = SignupUseCase {
        uow: state.unit_of_work(),
        students: state.student_repo(),
        hasher: state.hasher.clone(),
        student_code_prefix: state.config.student_code_prefix.clone(),
        password_min_length: state.config.password_min_length,
    };
    let session = usecase.execute(body.into()).await?;

    let store = state.session_store();
    let sid = store.create(&session).await?;
    let jar = set_session_cookie(jar, sid, &state.cookie_settings());
    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "Signup successful.",
            user: session,
        }),
    ))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "email", alias = "login_id", alias = "loginId")]
    pub login: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HostelError> {
    let Json(body) = body?;
    let usecase = LoginUseCase {
        credentials: state.credential_repo(),
        students: state.student_repo(),
        hasher: state.hasher.clone(),
        admin: (*state.admin).clone(),
    };
    let session = usecase
        .execute(LoginInput {
            login: body.login.unwrap_or_default(),
            password: body.password.unwrap_or_default(),
            role: body.role,
        })
        .await?;

    // A fresh id on every login; the previous session, if any, is dropped.
    let store = state.session_store();
    if let Some(previous) = session_id(&jar) {
        store.destroy(&previous).await?;
    }
    let sid = store.create(&session).await?;
    let jar = set_session_cookie(jar, sid, &state.cookie_settings());
    Ok((
        jar,
        Json(AuthResponse {
            message: "Login successful.",
            user: session,
        }),
    ))
}

// ── POST /api/auth/logout ────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HostelError> {
    if let Some(sid) = session_id(&jar) {
        state.session_store().destroy(&sid).await?;
    }
    let jar = clear_session_cookie(jar, &state.cookie_settings());
    Ok((
        jar,
        Json(MessageResponse {
            message: "Logged out.",
        }),
    ))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

pub async fn me(
    CurrentSession(session): CurrentSession,
) -> Result<Json<SessionData>, HostelError> {
    session.authorize(&Role::ALL)?;
    Ok(Json(session))
}
