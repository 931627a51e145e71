use std::env;
use anyhow::{Context, Result};
use zeroize::{Zeroize, Zeroizing};

/// The application's configuration.
///
/// Loaded once at startup and injected into the components that need it;
/// nothing reads the environment after this point.
#[derive(Clone)]
pub struct Config {
    /// The URL of the PostgreSQL database.
    pub database_url: String,
    /// The fixed system-wide salt for password derivation.
    pub password_salt: Zeroizing<Vec<u8>>,
    /// The secret pepper mixed into password derivation.
    pub password_pepper: Zeroizing<Vec<u8>>,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let password_salt = read_secret_bytes("PASSWORD_SALT")?;
        let password_pepper = read_secret_bytes("PASSWORD_PEPPER")?;

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            password_salt,
            password_pepper,
        })
    }
}

/// Reads a 32-byte hex-encoded secret from the environment.
fn read_secret_bytes(name: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut hex_value = env::var(name)
        .with_context(|| format!("{} must be set (generate with: openssl rand -hex 32)", name))?;

    let bytes = hex::decode(&hex_value)
        .with_context(|| format!("{} must be valid hexadecimal", name))?;

    hex_value.zeroize();

    if bytes.len() != 32 {
        anyhow::bail!("{} must be exactly 32 bytes (64 hex characters)", name);
    }

    Ok(Zeroizing::new(bytes))
}
