use hostel_domain::role::Role;
use hostel_domain::student_code::next_student_code;
use hostel_session::session::SessionData;

use crate::domain::password::PasswordHasher;
use crate::domain::repository::{CredentialRepository, SignupTx, StudentRepository, UnitOfWork};
use crate::domain::types::{
    ADDRESS_MAX_LEN, AdminCredential, COURSE_MAX_LEN, EMAIL_MAX_LEN, GENDER_MAX_LEN, NAME_MAX_LEN,
    NewCredential, NewStudent, PHONE_MAX_LEN, Student,
};
use crate::error::HostelError;
use crate::usecase::{check_len, settle};

fn parse_role(raw: Option<&str>) -> Result<Option<Role>, HostelError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(r) => r
            .parse()
            .map(Some)
            .map_err(|_| HostelError::InvalidInput("invalid role")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn check_optional(value: Option<&str>, max: usize, message: &'static str) -> Result<(), HostelError> {
    value.map_or(Ok(()), |v| check_len(v, max, message))
}

fn check_profile(profile: &NewStudent) -> Result<(), HostelError> {
    check_optional(profile.phone.as_deref(), PHONE_MAX_LEN, "phone is too long")?;
    check_optional(profile.gender.as_deref(), GENDER_MAX_LEN, "gender is too long")?;
    check_optional(profile.address.as_deref(), ADDRESS_MAX_LEN, "address is too long")?;
    check_optional(profile.course.as_deref(), COURSE_MAX_LEN, "course is too long")?;
    check_optional(profile.guardian_name.as_deref(), NAME_MAX_LEN, "guardian name is too long")?;
    check_optional(profile.guardian_phone.as_deref(), PHONE_MAX_LEN, "guardian phone is too long")
}

// ── Signup ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub linked_student_id: Option<i32>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

pub struct SignupUseCase<U: UnitOfWork, S: StudentRepository> {
    pub uow: U,
    pub students: S,
    pub hasher: PasswordHasher,
    pub student_code_prefix: String,
    pub password_min_length: usize,
}

struct ValidSignup {
    name: String,
    email: String,
    password_hash: String,
    role: Role,
    linked: Option<Student>,
}

impl<U: UnitOfWork, S: StudentRepository> SignupUseCase<U, S> {
    /// Create the credential (and, for students, the profile) atomically.
    /// Returns the session identity for the new account.
    pub async fn execute(&self, input: SignupInput) -> Result<SessionData, HostelError> {
        let name = input.name.trim().to_owned();
        let email = input.email.trim().to_lowercase();
        if name.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(HostelError::InvalidInput(
                "name, email and password are required",
            ));
        }
        if !email.contains('@') {
            return Err(HostelError::InvalidInput("a valid email is required"));
        }
        if input.password.chars().count() < self.password_min_length {
            return Err(HostelError::InvalidInput("password is too short"));
        }
        check_len(&name, NAME_MAX_LEN, "name is too long")?;
        check_len(&email, EMAIL_MAX_LEN, "email is too long")?;
        let profile = NewStudent {
            phone: non_empty(input.phone),
            gender: non_empty(input.gender),
            address: non_empty(input.address),
            course: non_empty(input.course),
            year: input.year,
            guardian_name: non_empty(input.guardian_name),
            guardian_phone: non_empty(input.guardian_phone),
            ..NewStudent::default()
        };
        check_profile(&profile)?;
        let role = parse_role(input.role.as_deref())?.unwrap_or(Role::Student);
        let linked = match role {
            Role::Admin => {
                return Err(HostelError::InvalidInput(
                    "admin accounts cannot be created by signup",
                ));
            }
            Role::Student => None,
            Role::Guardian => match input.linked_student_id {
                None => None,
                Some(id) => Some(
                    self.students
                        .find_by_id(id)
                        .await?
                        .ok_or(HostelError::InvalidInput("linked student does not exist"))?,
                ),
            },
        };
        let password_hash = self.hasher.hash(&input.password)?;

        let valid = ValidSignup {
            name,
            email,
            password_hash,
            role,
            linked,
        };

        let tx = self.uow.begin().await?;
        let result = self.create_account(&tx, valid, profile).await;
        settle(tx, result).await
    }

    async fn create_account(
        &self,
        tx: &U::Tx,
        signup: ValidSignup,
        profile: NewStudent,
    ) -> Result<SessionData, HostelError> {
        match signup.role {
            Role::Student => {
                tx.lock_student_codes().await?;
                let existing = tx.student_codes_with_prefix(&self.student_code_prefix).await?;
                let code = next_student_code(&self.student_code_prefix, &existing);
                let student_id = tx
                    .insert_student(&NewStudent {
                        student_code: code.clone(),
                        name: signup.name.clone(),
                        email: Some(signup.email.clone()),
                        ..profile
                    })
                    .await?;
                let user_id = tx
                    .insert_credential(&NewCredential {
                        login_id: code.clone(),
                        email: Some(signup.email.clone()),
                        name: signup.name.clone(),
                        password_hash: signup.password_hash,
                        role: Role::Student,
                        student_id: Some(student_id),
                    })
                    .await?;
                tracing::info!(user_id, student_id, student_code = %code, "student registered");
                Ok(SessionData {
                    user_id,
                    role: Role::Student,
                    student_id: Some(student_id),
                    name: signup.name,
                    student_code: Some(code),
                    email: Some(signup.email),
                })
            }
            role => {
                let student_id = signup.linked.as_ref().map(|s| s.student_id);
                let user_id = tx
                    .insert_credential(&NewCredential {
                        login_id: signup.email.clone(),
                        email: Some(signup.email.clone()),
                        name: signup.name.clone(),
                        password_hash: signup.password_hash,
                        role,
                        student_id,
                    })
                    .await?;
                tracing::info!(user_id, role = %role, "account registered");
                Ok(SessionData {
                    user_id,
                    role,
                    student_id,
                    name: signup.name,
                    student_code: signup.linked.map(|s| s.student_code),
                    email: Some(signup.email),
                })
            }
        }
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct LoginInput {
    pub login: String,
    pub password: String,
    pub role: Option<String>,
}

pub struct LoginUseCase<C: CredentialRepository, S: StudentRepository> {
    pub credentials: C,
    pub students: S,
    pub hasher: PasswordHasher,
    pub admin: AdminCredential,
}

impl<C: CredentialRepository, S: StudentRepository> LoginUseCase<C, S> {
    pub async fn execute(&self, input: LoginInput) -> Result<SessionData, HostelError> {
        let handle = input.login.trim();
        if handle.is_empty() || input.password.is_empty() {
            return Err(HostelError::InvalidInput(
                "login id and password are required",
            ));
        }
        let asserted = parse_role(input.role.as_deref())?;

        // The configured administrator is checked before any database access.
        if self.admin.matches_login(handle) {
            if !self.hasher.verify(&input.password, &self.admin.password_hash)? {
                return Err(HostelError::InvalidCredentials);
            }
            if asserted.is_some_and(|r| r != Role::Admin) {
                return Err(HostelError::RoleMismatch);
            }
            return Ok(SessionData::admin(self.admin.name.clone()));
        }

        let Some(credential) = self.credentials.find_by_login(handle).await? else {
            self.hasher.verify_missing(&input.password)?;
            return Err(HostelError::InvalidCredentials);
        };
        if !self
            .hasher
            .verify(&input.password, &credential.password_hash)?
        {
            return Err(HostelError::InvalidCredentials);
        }
        if asserted.is_some_and(|r| r != credential.role) {
            return Err(HostelError::RoleMismatch);
        }

        let student = match credential.student_id {
            Some(id) => self.students.find_by_id(id).await?,
            None if credential.role == Role::Student => {
                self.students.find_by_code(&credential.login_id).await?
            }
            None => None,
        };
        tracing::info!(user_id = credential.user_id, role = %credential.role, "login");
        Ok(SessionData {
            user_id: credential.user_id,
            role: credential.role,
            student_id: student
                .as_ref()
                .map(|s| s.student_id)
                .or(credential.student_id),
            name: credential.name,
            student_code: student.map(|s| s.student_code),
            email: credential.email,
        })
    }
}
