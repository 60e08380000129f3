use poem_openapi::Object;
use uuid::Uuid;

use business::domain::store::errors::StoreError;
use business::domain::store::model::{Store, StorePatch};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    /// Store name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl UpdateStoreRequest {
    pub fn into_patch(self) -> Result<StorePatch, StoreError> {
        StorePatch::new(self.name, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreSummary {
    pub uuid: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl From<&Store> for StoreSummary {
    fn from(store: &Store) -> Self {
        Self {
            uuid: store.uuid,
            name: store.name.clone(),
            location: store.location.clone(),
        }
    }
}
