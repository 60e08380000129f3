use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user_preferences::model::UserPreferences;
use business::domain::user_preferences::repository::UserPreferencesRepository;

use super::entity::UserPreferencesEntity;
use crate::db::database_error;
use crate::store::entity::StoreEntity;

pub struct UserPreferencesRepositoryPostgres {
    pool: PgPool,
}

impl UserPreferencesRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserPreferencesRepository for UserPreferencesRepositoryPostgres {
    async fn find_by_user_uuid(
        &self,
        user: &UserId,
    ) -> Result<Option<UserPreferences>, RepositoryError> {
        let Some(entity) = sqlx::query_as::<_, UserPreferencesEntity>(
            r#"SELECT p.id, p.uuid, u.uuid AS user_uuid, p.currency, p.language, p.location,
                p.notification_enabled, p.email_alerts
            FROM user_preferences p
            JOIN users u ON u.id = p.user_id
            WHERE u.uuid = $1"#,
        )
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        else {
            return Ok(None);
        };

        let stores = sqlx::query_as::<_, StoreEntity>(
            r#"SELECT s.uuid, s.name, s.location
            FROM user_preferred_stores ps
            JOIN stores s ON s.id = ps.store_id
            WHERE ps.user_preferences_id = $1
            ORDER BY s.name"#,
        )
        .bind(entity.id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entity
            .into_domain(stores.into_iter().map(StoreEntity::into_domain).collect())
            .map(Some)
    }

    async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let user_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO users (uuid) VALUES ($1)
            ON CONFLICT (uuid) DO UPDATE SET uuid = EXCLUDED.uuid
            RETURNING id"#,
        )
        .bind(preferences.owner.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        let preferences_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO user_preferences
                (uuid, user_id, currency, language, location, notification_enabled, email_alerts)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                currency = EXCLUDED.currency,
                language = EXCLUDED.language,
                location = EXCLUDED.location,
                notification_enabled = EXCLUDED.notification_enabled,
                email_alerts = EXCLUDED.email_alerts
            RETURNING id"#,
        )
        .bind(preferences.uuid)
        .bind(user_id)
        .bind(preferences.currency.to_string())
        .bind(preferences.language.to_string())
        .bind(&preferences.location)
        .bind(preferences.notification_enabled)
        .bind(preferences.email_alerts)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        sqlx::query("DELETE FROM user_preferred_stores WHERE user_preferences_id = $1")
            .bind(preferences_id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        let store_uuids: Vec<Uuid> = preferences.preferred_stores.iter().map(|s| s.uuid).collect();
        sqlx::query(
            r#"INSERT INTO user_preferred_stores (user_preferences_id, store_id)
            SELECT $1, id FROM stores WHERE uuid = ANY($2)"#,
        )
        .bind(preferences_id)
        .bind(&store_uuids)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)
    }
}
