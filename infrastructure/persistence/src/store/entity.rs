use sqlx::FromRow;
use uuid::Uuid;

use business::domain::store::model::Store;

#[derive(Debug, FromRow)]
pub struct StoreEntity {
    pub uuid: Uuid,
    pub name: String,
    pub location: Option<String>,
}

impl StoreEntity {
    pub fn into_domain(self) -> Store {
        Store::from_repository(self.uuid, self.name, self.location)
    }
}
