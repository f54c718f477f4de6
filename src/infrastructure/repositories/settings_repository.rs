use crate::domain::settings::SettingsStore;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

/// Named configuration values stored in the `settings` table
pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn get_setting(&self, name: &str) -> AppResult<Option<String>> {
        let pool = self.pool.as_ref();
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM settings
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(value)
    }

    async fn set_setting(&self, name: &str, value: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO settings (name, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (name)
            DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(name)
        .bind(value)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn insert_setting_if_absent(&self, name: &str, value: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO settings (name, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(value)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
