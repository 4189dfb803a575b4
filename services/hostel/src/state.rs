use std::sync::Arc;

use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use hostel_session::cookie::CookieSettings;

use crate::config::HostelConfig;
use crate::domain::password::PasswordHasher;
use crate::domain::types::AdminCredential;
use crate::infra::cache::RedisSessionStore;
use crate::infra::db::{DbCredentialRepository, DbStudentRepository, DbUnitOfWork};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub config: Arc<HostelConfig>,
    pub admin: Arc<AdminCredential>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn credential_repo(&self) -> DbCredentialRepository {
        DbCredentialRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_repo(&self) -> DbStudentRepository {
        DbStudentRepository {
            db: self.db.clone(),
        }
    }

    pub fn unit_of_work(&self) -> DbUnitOfWork {
        DbUnitOfWork {
            db: self.db.clone(),
        }
    }

    pub fn session_store(&self) -> RedisSessionStore {
        RedisSessionStore {
            pool: self.redis.clone(),
            ttl_secs: self.config.session_ttl_secs,
        }
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        self.config.cookie_settings()
    }
}
