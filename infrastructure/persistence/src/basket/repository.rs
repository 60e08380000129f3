use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::basket::model::Basket;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{BasketEntity, BasketItemEntity};
use crate::db::database_error;

const SELECT_BASKET: &str =
    "SELECT uuid, owner_uuid, name, description, created_at, updated_at FROM baskets";

const SELECT_LINES: &str = r#"SELECT b.uuid AS basket_uuid, bi.uuid, bi.quantity,
        i.uuid AS item_uuid, i.name AS item_name, i.description AS item_description,
        i.brand AS item_brand, i.unit AS item_unit
    FROM basket_items bi
    JOIN baskets b ON b.id = bi.basket_id
    JOIN items i ON i.id = bi.item_id"#;

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Basket>, RepositoryError> {
        let Some(entity) =
            sqlx::query_as::<_, BasketEntity>(&format!("{SELECT_BASKET} WHERE uuid = $1"))
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?
        else {
            return Ok(None);
        };

        let mut lines =
            sqlx::query_as::<_, BasketItemEntity>(&format!("{SELECT_LINES} WHERE b.uuid = $1 ORDER BY bi.id"))
                .bind(uuid)
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

        entity.into_domain(&mut lines).map(Some)
    }

    async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<Basket>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketEntity>(&format!(
            "{SELECT_BASKET} WHERE owner_uuid = $1 ORDER BY created_at"
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut lines = sqlx::query_as::<_, BasketItemEntity>(&format!(
            "{SELECT_LINES} WHERE b.owner_uuid = $1 ORDER BY bi.id"
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities
            .into_iter()
            .map(|entity| entity.into_domain(&mut lines))
            .collect()
    }

    async fn save(&self, basket: &Basket) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let basket_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO baskets (uuid, owner_uuid, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (uuid) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
            RETURNING id"#,
        )
        .bind(basket.uuid)
        .bind(basket.owner.as_str())
        .bind(&basket.name)
        .bind(&basket.description)
        .bind(basket.created_at)
        .bind(basket.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        if let Some(items) = &basket.items {
            sqlx::query("DELETE FROM basket_items WHERE basket_id = $1")
                .bind(basket_id)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;

            for line in items {
                sqlx::query(
                    r#"INSERT INTO basket_items (uuid, basket_id, item_id, quantity)
                    VALUES ($1, $2, (SELECT id FROM items WHERE uuid = $3), $4)"#,
                )
                .bind(line.uuid)
                .bind(basket_id)
                .bind(line.item.uuid)
                .bind(line.quantity)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;
            }
        }

        tx.commit().await.map_err(database_error)
    }
}
