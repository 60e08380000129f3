use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::price_alert::model::PriceAlert;
use business::domain::price_alert::repository::PriceAlertRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::PriceAlertEntity;
use crate::db::database_error;

pub struct PriceAlertRepositoryPostgres {
    pool: PgPool,
}

impl PriceAlertRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceAlertRepository for PriceAlertRepositoryPostgres {
    async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<PriceAlert>, RepositoryError> {
        let entities = sqlx::query_as::<_, PriceAlertEntity>(
            r#"SELECT a.uuid, a.owner_uuid, a.alert_type, a.target_price, a.last_triggered,
                a.created_at, i.uuid AS item_uuid, i.name AS item_name,
                i.description AS item_description, i.brand AS item_brand, i.unit AS item_unit
            FROM price_alerts a
            INNER JOIN items i ON i.id = a.item_id
            WHERE a.owner_uuid = $1
            ORDER BY a.created_at"#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(PriceAlertEntity::into_domain).collect()
    }

    async fn save(&self, alert: &PriceAlert) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO price_alerts
                (uuid, owner_uuid, alert_type, target_price, last_triggered, item_id, created_at)
            VALUES ($1, $2, $3, $4, $5, (SELECT id FROM items WHERE uuid = $6), $7)
            ON CONFLICT (uuid) DO UPDATE SET
                alert_type = EXCLUDED.alert_type,
                target_price = EXCLUDED.target_price,
                last_triggered = EXCLUDED.last_triggered"#,
        )
        .bind(alert.uuid)
        .bind(alert.owner.as_str())
        .bind(alert.alert_type.to_string())
        .bind(&alert.target_price)
        .bind(alert.last_triggered)
        .bind(alert.item.uuid)
        .bind(alert.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}
