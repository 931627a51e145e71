use deadpool_postgres::Pool;
use crate::config::Config;
use crate::crypto::secret::SecretDeriver;
use crate::error::Result;

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: Pool,
    /// The application's configuration.
    pub config: Config,
    /// The password secret deriver.
    pub secrets: SecretDeriver,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_url)?;
        tracing::info!("✅ PostgreSQL pool initialized with deadpool-postgres");

        let secrets = SecretDeriver::new(config)?;
        tracing::info!("✅ Secret deriver initialized");

        Ok(AppState {
            db,
            config: config.clone(),
            secrets,
        })
    }
}
