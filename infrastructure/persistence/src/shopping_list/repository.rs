use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::{ShoppingListEntity, ShoppingListItemEntity};
use crate::db::database_error;

const SELECT_LIST: &str =
    "SELECT uuid, owner_uuid, name, description, created_at, updated_at FROM shopping_lists";

const SELECT_ENTRIES: &str = r#"SELECT sl.uuid AS list_uuid, e.uuid, e.quantity, e.purchased,
        e.purchased_price, e.purchased_date,
        i.uuid AS item_uuid, i.name AS item_name, i.description AS item_description,
        i.brand AS item_brand, i.unit AS item_unit,
        s.uuid AS store_uuid, s.name AS store_name, s.location AS store_location
    FROM shopping_list_items e
    JOIN shopping_lists sl ON sl.id = e.shopping_list_id
    JOIN items i ON i.id = e.item_id
    LEFT JOIN stores s ON s.id = e.store_id"#;

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<ShoppingList>, RepositoryError> {
        let Some(entity) =
            sqlx::query_as::<_, ShoppingListEntity>(&format!("{SELECT_LIST} WHERE uuid = $1"))
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?
        else {
            return Ok(None);
        };

        let mut entries = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "{SELECT_ENTRIES} WHERE sl.uuid = $1 ORDER BY e.position"
        ))
        .bind(uuid)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entity.into_domain(&mut entries).map(Some)
    }

    async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_LIST} WHERE owner_uuid = $1 ORDER BY created_at"
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut entries = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "{SELECT_ENTRIES} WHERE sl.owner_uuid = $1 ORDER BY e.position"
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities
            .into_iter()
            .map(|entity| entity.into_domain(&mut entries))
            .collect()
    }

    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let list_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO shopping_lists (uuid, owner_uuid, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (uuid) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
            RETURNING id"#,
        )
        .bind(list.uuid)
        .bind(list.owner.as_str())
        .bind(&list.name)
        .bind(&list.description)
        .bind(list.created_at)
        .bind(list.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        if let Some(entries) = &list.items {
            sqlx::query("DELETE FROM shopping_list_items WHERE shopping_list_id = $1")
                .bind(list_id)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;

            for (position, entry) in entries.iter().enumerate() {
                sqlx::query(
                    r#"INSERT INTO shopping_list_items
                        (uuid, shopping_list_id, position, item_id, store_id,
                         quantity, purchased, purchased_price, purchased_date)
                    VALUES ($1, $2, $3,
                        (SELECT id FROM items WHERE uuid = $4),
                        (SELECT id FROM stores WHERE uuid = $5),
                        $6, $7, $8, $9)"#,
                )
                .bind(entry.uuid)
                .bind(list_id)
                .bind(position as i32)
                .bind(entry.item.uuid)
                .bind(entry.store.as_ref().map(|store| store.uuid))
                .bind(entry.quantity)
                .bind(entry.purchased)
                .bind(&entry.purchased_price)
                .bind(entry.purchased_date)
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;
            }
        }

        tx.commit().await.map_err(database_error)
    }

    async fn delete(&self, uuid: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shopping_lists WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
