use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 20;
const CONNECT_ATTEMPTS: u32 = 6;
const INITIAL_BACKOFF: Duration = Duration::from_secs(2);

/// Connects to Postgres, retrying with doubling backoff while the database
/// is still starting up.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5));

    let mut backoff = INITIAL_BACKOFF;
    let mut attempt = 0;
    loop {
        attempt += 1;
        match options.clone().connect(database_url).await {
            Ok(pool) => {
                info!(attempt, "Database connection established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    "Database not reachable (attempt {}/{}): {}. Retrying in {:?}",
                    attempt, CONNECT_ATTEMPTS, e, backoff
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Applies the schema embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
