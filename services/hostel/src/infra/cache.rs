use anyhow::Context as _;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use rand::RngExt;

use hostel_session::session::SessionData;

use crate::domain::repository::SessionStore;
use crate::error::HostelError;

const SESSION_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SESSION_ID_LEN: usize = 48;

/// Opaque, unguessable session id.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    (0..SESSION_ID_LEN)
        .map(|_| SESSION_ID_CHARSET[rng.random_range(0..SESSION_ID_CHARSET.len())] as char)
        .collect()
}

fn session_key(session_id: &str) -> String {
    format!("session:{session_id}")
}

/// Sessions as JSON values in Redis, expiring after `ttl_secs`.
#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
    pub ttl_secs: u64,
}

impl SessionStore for RedisSessionStore {
    async fn create(&self, data: &SessionData) -> Result<String, HostelError> {
        let payload = serde_json::to_string(data).context("encode session")?;
        let session_id = generate_session_id();
        let mut conn = self.pool.get().await.context("redis connection")?;
        let (): () = conn
            .set_ex(session_key(&session_id), payload, self.ttl_secs)
            .await
            .context("store session")?;
        Ok(session_id)
    }

    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, HostelError> {
        let mut conn = self.pool.get().await.context("redis connection")?;
        let payload: Option<String> = conn
            .get(session_key(session_id))
            .await
            .context("load session")?;
        let Some(payload) = payload else {
            return Ok(None);
        };
        match serde_json::from_str(&payload) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                // Written by an incompatible build; treat as logged out.
                tracing::warn!(error = %e, "discarding unreadable session");
                Ok(None)
            }
        }
    }

    async fn destroy(&self, session_id: &str) -> Result<(), HostelError> {
        let mut conn = self.pool.get().await.context("redis connection")?;
        let (): () = conn
            .del(session_key(session_id))
            .await
            .context("delete session")?;
        Ok(())
    }
}
