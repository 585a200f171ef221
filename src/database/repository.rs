use async_trait::async_trait;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::User;

/// Storage operations used by the country handlers
#[async_trait]
pub trait Repository: Send + Sync {
    /// Round-trip to the store
    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Look up a user by id
    async fn find_user(&self, user_id: i64) -> Result<Option<User>, DatabaseError>;

    /// Delete a country by id, returning the number of rows removed
    async fn delete_country(&self, country_id: i64) -> Result<u64, DatabaseError>;
}

const SELECT_USER_SQL: &str = "SELECT id::int8 AS id, is_admin::int4 AS is_admin FROM users WHERE id = $1";
const DELETE_COUNTRY_SQL: &str = "DELETE FROM countries WHERE id = $1";

/// Postgres-backed repository
#[derive(Clone)]
pub struct PgRepository {
    db: DatabaseManager,
    query_logging: bool,
    slow_query_threshold: Option<Duration>,
}

impl PgRepository {
    pub fn new(db: DatabaseManager, config: &DatabaseConfig) -> Self {
        Self {
            db,
            query_logging: config.enable_query_logging,
            slow_query_threshold: config
                .enable_slow_query_warning
                .then(|| Duration::from_millis(config.slow_query_threshold_ms)),
        }
    }

    async fn timed<T, F>(&self, sql: &'static str, query: F) -> Result<T, DatabaseError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        if self.query_logging {
            debug!(sql, "executing query");
        }

        let started = Instant::now();
        let result = query.await;
        let elapsed = started.elapsed();

        if let Some(threshold) = self.slow_query_threshold {
            if elapsed > threshold {
                warn!(sql, elapsed_ms = elapsed.as_millis() as u64, "slow query");
            }
        }

        result.map_err(DatabaseError::from)
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.db.health_check().await
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>, DatabaseError> {
        let pool = self.db.pool();
        self.timed(
            SELECT_USER_SQL,
            sqlx::query_as::<_, User>(SELECT_USER_SQL)
                .bind(user_id)
                .fetch_optional(pool),
        )
        .await
    }

    async fn delete_country(&self, country_id: i64) -> Result<u64, DatabaseError> {
        let pool = self.db.pool();
        let result = self
            .timed(
                DELETE_COUNTRY_SQL,
                sqlx::query(DELETE_COUNTRY_SQL).bind(country_id).execute(pool),
            )
            .await?;
        Ok(result.rows_affected())
    }
}
