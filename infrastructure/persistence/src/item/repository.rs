use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::ItemEntity;
use crate::db::database_error;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Item>, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT uuid, name, description, brand, unit FROM items WHERE uuid = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        entity.map(ItemEntity::into_domain).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT uuid, name, description, brand, unit FROM items ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(ItemEntity::into_domain).collect()
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO items (uuid, name, description, brand, unit)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (uuid) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                brand = EXCLUDED.brand,
                unit = EXCLUDED.unit"#,
        )
        .bind(item.uuid)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.brand)
        .bind(item.unit.to_string())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}
