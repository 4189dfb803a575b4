//! Argon2id password hashing and verification.

use std::sync::{Arc, OnceLock};

use anyhow::anyhow;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

/// Hashes and verifies passwords as PHC strings.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    /// Hash with this hasher's own parameters, verified against when no account matches.
    decoy: Arc<OnceLock<String>>,
}

impl PasswordHasher {
    /// Argon2id with the crate's recommended parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Argon2id with explicit memory (KiB) and iteration cost.
    pub fn with_cost(m_cost: u32, t_cost: u32) -> anyhow::Result<Self> {
        let params = Params::new(m_cost, t_cost, 1, None)
            .map_err(|e| anyhow!("invalid argon2 params: {e}"))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            decoy: Arc::default(),
        })
    }

    /// Hash with a fresh random salt.
    pub fn hash(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    /// `Ok(false)` on mismatch; `Err` only for a malformed stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> anyhow::Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("invalid password hash: {e}"))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow!("password verification failed: {e}")),
        }
    }

    /// Spend one full verification for a login handle with no account, so an
    /// unknown handle costs as much as a wrong password. Always `Ok(false)`.
    pub fn verify_missing(&self, password: &str) -> anyhow::Result<bool> {
        let decoy = match self.decoy.get() {
            Some(hash) => hash,
            None => {
                let hash = self.hash("no-such-account")?;
                self.decoy.get_or_init(|| hash)
            }
        };
        self.verify(password, decoy)?;
        Ok(false)
    }
}
