use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, ParamsBuilder,
};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::config::Config;
use crate::error::{AppError, Result};

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 6;

/// Derives opaque secrets from plaintext passwords.
///
/// The derivation is deterministic: the salt and pepper are fixed,
/// system-wide values from configuration, so the same password always yields
/// the same derived secret and a stored secret can be checked by
/// recomputation. Plaintext never reaches the store.
#[derive(Clone)]
pub struct SecretDeriver {
    salt: SaltString,
    pepper: Zeroizing<Vec<u8>>,
}

impl SecretDeriver {
    /// Creates a `SecretDeriver` from the configured salt and pepper.
    pub fn new(config: &Config) -> Result<Self> {
        let salt = SaltString::encode_b64(&config.password_salt)
            .map_err(|e| AppError::Hashing(format!("Salt encoding error: {}", e)))?;

        Ok(Self {
            salt,
            pepper: config.password_pepper.clone(),
        })
    }

    fn hasher(&self) -> Result<Argon2<'_>> {
        let params = ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Hashing(format!("Argon2 params: {}", e)))?;

        Argon2::new_with_secret(
            &self.pepper,
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        )
        .map_err(|e| AppError::Hashing(format!("Argon2 setup error: {}", e)))
    }

    /// Derives the opaque secret for a password.
    pub fn derive(&self, password: &str) -> Result<String> {
        let mut password_bytes = password.as_bytes().to_vec();

        let derived = self
            .hasher()?
            .hash_password(&password_bytes, &self.salt)
            .map_err(|e| AppError::Hashing(format!("Argon2 hash error: {}", e)))?
            .to_string();

        password_bytes.zeroize();
        Ok(derived)
    }

    /// Verifies a password against a stored derived secret.
    ///
    /// Recomputes the derivation and compares in constant time.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool> {
        let candidate = self.derive(password)?;
        Ok(candidate.as_bytes().ct_eq(stored.as_bytes()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver() -> SecretDeriver {
        SecretDeriver {
            salt: SaltString::encode_b64(&[7u8; 32]).unwrap(),
            pepper: Zeroizing::new(vec![42u8; 32]),
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let d = deriver();
        assert_eq!(d.derive("hunter2").unwrap(), d.derive("hunter2").unwrap());
    }

    #[test]
    fn different_passwords_derive_different_secrets() {
        let d = deriver();
        assert_ne!(d.derive("hunter2").unwrap(), d.derive("hunter3").unwrap());
    }

    #[test]
    fn verify_accepts_the_right_password() {
        let d = deriver();
        let stored = d.derive("correct horse").unwrap();
        assert!(d.verify("correct horse", &stored).unwrap());
    }

    #[test]
    fn verify_rejects_the_wrong_password() {
        let d = deriver();
        let stored = d.derive("correct horse").unwrap();
        assert!(!d.verify("battery staple", &stored).unwrap());
    }
}
