//! Journal credentials: Argon2id hashing with upgrade-on-verify
//!
//! Stored credentials are PHC strings (`$argon2id$v=19$...`). Journals written
//! before hashing was introduced carry a plaintext password; those still
//! verify, and a successful verification hands back a fresh hash so the
//! caller can replace the stored value. The same happens for hashes produced
//! with parameters weaker than the current defaults.

use crate::error::{LogbookError, Result};
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params};
use std::fmt;

const SALT_LEN: usize = 16;

/// Secret material as stored in the journal header
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

/// Outcome of checking a candidate password
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Password matched; `upgrade` holds a replacement when the stored form is outdated
    Accepted { upgrade: Option<Credential> },
    Rejected,
}

impl Credential {
    /// Wrap a credential exactly as read from disk
    pub fn from_stored(stored: impl Into<String>) -> Self {
        Credential(stored.into())
    }

    /// Hash a plaintext password with Argon2id and a random salt
    pub fn hash(password: &str) -> Result<Self> {
        if password.is_empty() {
            return Err(LogbookError::Credential(
                "Password cannot be empty".to_string(),
            ));
        }

        let mut salt_bytes = [0u8; SALT_LEN];
        getrandom::getrandom(&mut salt_bytes)
            .map_err(|e| LogbookError::Credential(format!("Failed to generate salt: {}", e)))?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| LogbookError::Credential(format!("Failed to encode salt: {}", e)))?;

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| LogbookError::Credential(format!("Password hashing failed: {}", e)))?;

        Ok(Credential(hash.to_string()))
    }

    /// The stored form, as written to the journal header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the stored form is a PHC hash rather than legacy plaintext
    pub fn is_hashed(&self) -> bool {
        self.0.starts_with('$')
    }

    /// Check `candidate` against the stored credential
    pub fn verify(&self, candidate: &str) -> Result<Verification> {
        if !self.is_hashed() {
            if candidate != self.0 {
                return Ok(Verification::Rejected);
            }
            let upgrade = Credential::hash(candidate)?;
            return Ok(Verification::Accepted {
                upgrade: Some(upgrade),
            });
        }

        let parsed = PasswordHash::new(&self.0)
            .map_err(|e| LogbookError::Credential(format!("Stored hash is malformed: {}", e)))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => {
                let upgrade = if is_outdated(&parsed) {
                    Some(Credential::hash(candidate)?)
                } else {
                    None
                };
                Ok(Verification::Accepted { upgrade })
            }
            Err(password_hash::Error::Password) => Ok(Verification::Rejected),
            Err(e) => Err(LogbookError::Credential(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}

/// A hash needs replacing when it was not produced with the current Argon2id defaults
fn is_outdated(hash: &PasswordHash<'_>) -> bool {
    if hash.algorithm != Algorithm::Argon2id.ident() {
        return true;
    }
    let current = Params::default();
    match Params::try_from(hash) {
        Ok(params) => {
            params.m_cost() < current.m_cost()
                || params.t_cost() < current.t_cost()
                || params.p_cost() < current.p_cost()
        }
        Err(_) => true,
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hashed() {
            f.debug_tuple("Credential").field(&"<hash>").finish()
        } else {
            f.debug_tuple("Credential").field(&"<plaintext>").finish()
        }
    }
}
