use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::store::model::Store;
use business::domain::store::repository::StoreRepository;

use super::entity::StoreEntity;
use crate::db::database_error;

pub struct StoreRepositoryPostgres {
    pool: PgPool,
}

impl StoreRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryPostgres {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Store>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreEntity>(
            "SELECT uuid, name, location FROM stores WHERE uuid = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(StoreEntity::into_domain))
    }

    async fn find_by_uuids(&self, uuids: &[Uuid]) -> Result<Vec<Store>, RepositoryError> {
        if uuids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, StoreEntity>(
            "SELECT uuid, name, location FROM stores WHERE uuid = ANY($1) ORDER BY name",
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(StoreEntity::into_domain).collect())
    }

    async fn get_all(&self) -> Result<Vec<Store>, RepositoryError> {
        let entities = sqlx::query_as::<_, StoreEntity>(
            "SELECT uuid, name, location FROM stores ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(StoreEntity::into_domain).collect())
    }

    async fn save(&self, store: &Store) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO stores (uuid, name, location)
            VALUES ($1, $2, $3)
            ON CONFLICT (uuid) DO UPDATE SET
                name = EXCLUDED.name,
                location = EXCLUDED.location"#,
        )
        .bind(store.uuid)
        .bind(&store.name)
        .bind(&store.location)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}
