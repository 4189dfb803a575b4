use std::fmt;

use serde::Deserialize;

use hostel_core::config::Config;
use hostel_session::cookie::CookieSettings;

/// Hostel service configuration loaded from environment variables.
#[derive(Clone, Deserialize)]
pub struct HostelConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis URL backing the session store.
    pub redis_url: String,
    /// HTTP port (default 5000). Env var: `HOSTEL_PORT`.
    #[serde(default = "default_port")]
    pub hostel_port: u16,
    /// Login handle of the configured administrator.
    #[serde(default = "default_admin_login_id")]
    pub admin_login_id: String,
    /// Plaintext admin password; hashed once at startup, never stored.
    pub admin_password: String,
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    #[serde(default = "default_student_code_prefix")]
    pub student_code_prefix: String,
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// Session lifetime in the store and cookie Max-Age (default 24h).
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure`. Enable in production.
    #[serde(default)]
    pub cookie_secure: bool,
    pub cookie_domain: Option<String>,
    /// Browser origin allowed to call the API with credentials.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    /// Apply pending migrations at startup instead of refusing to start.
    #[serde(default)]
    pub run_migrations: bool,
}

fn default_port() -> u16 {
    5000
}

fn default_admin_login_id() -> String {
    "ADMIN".to_owned()
}

fn default_admin_name() -> String {
    "Administrator".to_owned()
}

fn default_student_code_prefix() -> String {
    "AH26".to_owned()
}

fn default_password_min_length() -> usize {
    6
}

fn default_session_ttl_secs() -> u64 {
    86_400
}

fn default_frontend_url() -> String {
    "http://localhost:5173".to_owned()
}

impl Config for HostelConfig {}

impl HostelConfig {
    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            secure: self.cookie_secure,
            domain: self.cookie_domain.clone(),
            max_age_secs: i64::try_from(self.session_ttl_secs).unwrap_or(i64::MAX),
        }
    }
}

// Hand-written so the admin password never reaches logs.
impl fmt::Debug for HostelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostelConfig")
            .field("hostel_port", &self.hostel_port)
            .field("admin_login_id", &self.admin_login_id)
            .field("admin_password", &"<redacted>")
            .field("student_code_prefix", &self.student_code_prefix)
            .field("password_min_length", &self.password_min_length)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_domain", &self.cookie_domain)
            .field("frontend_url", &self.frontend_url)
            .field("run_migrations", &self.run_migrations)
            .finish_non_exhaustive()
    }
}
