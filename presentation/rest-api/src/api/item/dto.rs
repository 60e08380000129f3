use poem_openapi::Object;
use uuid::Uuid;

use business::domain::item::errors::ItemError;
use business::domain::item::model::{Item, ItemPatch};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// One of PIECE, GRAM, KILOGRAM, MILLILITER, LITER, PACK
    pub unit: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
}

impl UpdateItemRequest {
    pub fn into_patch(self) -> Result<ItemPatch, ItemError> {
        ItemPatch::new(self.name, self.description, self.brand, self.unit.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemSummary {
    pub uuid: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    pub unit: String,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            uuid: item.uuid,
            name: item.name.clone(),
            description: item.description.clone(),
            brand: item.brand.clone(),
            unit: item.unit.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::item::value_objects::ItemUnit;

    #[test]
    fn should_project_item_with_unit_name() {
        let item = Item::from_repository(
            Uuid::new_v4(),
            "Milk".to_string(),
            Some("Whole".to_string()),
            None,
            ItemUnit::Liter,
        );

        let summary = ItemSummary::from(&item);

        assert_eq!(summary.name, "Milk");
        assert_eq!(summary.unit, "LITER");
        assert!(summary.brand.is_none());
    }

    #[test]
    fn should_reject_unknown_unit_in_patch() {
        let request = UpdateItemRequest {
            name: None,
            description: None,
            brand: None,
            unit: Some("liter".to_string()),
        };
        assert!(matches!(request.into_patch(), Err(ItemError::InvalidUnit)));
    }
}
