//! Hosted data store: administrator registry, offers, per-user todos.
//!
//! SYSTEM CONTEXT
//! ==============
//! The schema is owned by the hosting platform; this service only reads it.
//! The pool connects lazily so an unreachable database degrades the routes
//! that need it instead of blocking startup.

use async_trait::async_trait;
use client::net::types::{AdminRecord, Offer, Todo};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::ProviderError;

#[async_trait]
pub trait DataStore: Send + Sync {
    /// Registry entry for `user_id`, or `None` when the user is not an admin.
    async fn find_admin(&self, user_id: &str) -> Result<Option<AdminRecord>, ProviderError>;

    /// Offers flagged active, newest first.
    async fn active_offers(&self) -> Result<Vec<Offer>, ProviderError>;

    /// Todos owned by `user_id`.
    async fn todos_for(&self, user_id: &str) -> Result<Vec<Todo>, ProviderError>;
}

/// Create the lazily connecting `PostgreSQL` pool.
///
/// # Errors
///
/// Returns an error if `database_url` cannot be parsed.
pub fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for PgStore {
    async fn find_admin(&self, user_id: &str) -> Result<Option<AdminRecord>, ProviderError> {
        let row = sqlx::query(
            "SELECT user_id::text AS user_id, email, role, created_at::text AS created_at
             FROM admin_users WHERE user_id::text = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(AdminRecord {
            user_id: row.try_get("user_id")?,
            email: row.try_get("email")?,
            role: row.try_get("role")?,
            created_at: row.try_get("created_at")?,
        }))
    }

    async fn active_offers(&self) -> Result<Vec<Offer>, ProviderError> {
        let rows = sqlx::query(
            "SELECT id::text AS id, title, description, discount_percent, code,
                    valid_until::text AS valid_until, active
             FROM special_offers
             WHERE active = true
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Offer, ProviderError> {
                Ok(Offer {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    description: row.try_get("description")?,
                    discount_percent: row.try_get("discount_percent")?,
                    code: row.try_get("code")?,
                    valid_until: row.try_get("valid_until")?,
                    active: row.try_get("active")?,
                })
            })
            .collect()
    }

    async fn todos_for(&self, user_id: &str) -> Result<Vec<Todo>, ProviderError> {
        let rows = sqlx::query(
            "SELECT id, title, done FROM todos
             WHERE user_id::text = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Todo, ProviderError> {
                Ok(Todo { id: row.try_get("id")?, title: row.try_get("title")?, done: row.try_get("done")? })
            })
            .collect()
    }
}
