use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::shopping_list::errors::ShoppingListError;
use business::domain::shopping_list::model::{
    ShoppingList, ShoppingListItem, ShoppingListItemPatch, ShoppingListPatch,
};

use crate::api::summary::list_of_summaries;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateShoppingListRequest {
    /// List name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateShoppingListRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl UpdateShoppingListRequest {
    pub fn into_patch(self) -> Result<ShoppingListPatch, ShoppingListError> {
        ShoppingListPatch::new(self.name, self.description)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddShoppingListItemRequest {
    pub item_uuid: String,
    #[oai(skip_serializing_if_is_none)]
    pub store_uuid: Option<String>,
    /// Must be greater than zero
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateShoppingListItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub purchased: Option<bool>,
    /// Decimal amount as a string, e.g. "3.49"
    #[oai(skip_serializing_if_is_none)]
    pub purchased_price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub purchased_date: Option<DateTime<Utc>>,
}

impl UpdateShoppingListItemRequest {
    pub fn into_patch(self) -> Result<ShoppingListItemPatch, ShoppingListError> {
        ShoppingListItemPatch::new(
            self.quantity,
            self.purchased,
            self.purchased_price.as_deref(),
            self.purchased_date,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListSummary {
    pub uuid: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub number_of_items: u64,
}

impl From<&ShoppingList> for ShoppingListSummary {
    fn from(list: &ShoppingList) -> Self {
        Self {
            uuid: list.uuid,
            name: list.name.clone(),
            description: list.description.clone(),
            number_of_items: list.items_count() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListItemSummary {
    pub uuid: Uuid,
    pub item_uuid: Uuid,
    pub item_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub store_uuid: Option<Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub store_name: Option<String>,
    pub quantity: i32,
    pub purchased: bool,
    #[oai(skip_serializing_if_is_none)]
    pub purchased_price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub purchased_date: Option<DateTime<Utc>>,
}

impl From<&ShoppingListItem> for ShoppingListItemSummary {
    fn from(entry: &ShoppingListItem) -> Self {
        Self {
            uuid: entry.uuid,
            item_uuid: entry.item.uuid,
            item_name: entry.item.name.clone(),
            store_uuid: entry.store.as_ref().map(|store| store.uuid),
            store_name: entry.store.as_ref().map(|store| store.name.clone()),
            quantity: entry.quantity,
            purchased: entry.purchased,
            purchased_price: entry.purchased_price.as_ref().map(ToString::to_string),
            purchased_date: entry.purchased_date,
        }
    }
}

/// A list together with its entries, in list order.
#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListDetail {
    pub uuid: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub number_of_items: u64,
    pub items: Vec<ShoppingListItemSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ShoppingList> for ShoppingListDetail {
    fn from(list: &ShoppingList) -> Self {
        Self {
            uuid: list.uuid,
            name: list.name.clone(),
            description: list.description.clone(),
            number_of_items: list.items_count() as u64,
            items: list
                .items
                .as_deref()
                .map(list_of_summaries)
                .unwrap_or_default(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use poem_openapi::types::ToJSON;

    use super::*;
    use business::domain::item::model::Item;
    use business::domain::item::value_objects::ItemUnit;
    use business::domain::shared::value_objects::UserId;
    use business::domain::store::model::Store;

    fn entry(name: &str, store: Option<Store>) -> ShoppingListItem {
        let item = Item::from_repository(Uuid::new_v4(), name.to_string(), None, None, ItemUnit::Piece);
        ShoppingListItem::new(item, store, 1).unwrap()
    }

    fn groceries(items: Option<Vec<ShoppingListItem>>) -> ShoppingList {
        ShoppingList::from_repository(
            Uuid::new_v4(),
            UserId::new("user-123"),
            "Groceries".to_string(),
            Some("Weekly".to_string()),
            items,
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn should_summarize_list_with_item_count() {
        let list = groceries(Some(vec![entry("Eggs", None), entry("Milk", None), entry("Bread", None)]));

        let summary = ShoppingListSummary::from(&list);

        assert_eq!(
            summary,
            ShoppingListSummary {
                uuid: list.uuid,
                name: "Groceries".to_string(),
                description: Some("Weekly".to_string()),
                number_of_items: 3,
            }
        );
        let json = summary.to_json().unwrap();
        assert_eq!(json["numberOfItems"], 3);
        assert_eq!(json["name"], "Groceries");
    }

    #[test]
    fn should_count_absent_items_as_zero() {
        assert_eq!(ShoppingListSummary::from(&groceries(None)).number_of_items, 0);
        assert!(ShoppingListDetail::from(&groceries(None)).items.is_empty());
    }

    #[test]
    fn should_keep_entry_order_in_detail() {
        let list = groceries(Some(vec![entry("Eggs", None), entry("Milk", None)]));

        let detail = ShoppingListDetail::from(&list);

        let names: Vec<&str> = detail.items.iter().map(|e| e.item_name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Milk"]);
        assert_eq!(detail.number_of_items, 2);
    }

    #[test]
    fn should_flatten_entry_with_store_and_price() {
        let store = Store::from_repository(Uuid::new_v4(), "Corner Shop".to_string(), None);
        let mut entry = entry("Coffee", Some(store.clone()));
        entry.purchased = true;
        entry.purchased_price = BigDecimal::from_str("4.50").ok();

        let summary = ShoppingListItemSummary::from(&entry);

        assert_eq!(summary.item_name, "Coffee");
        assert_eq!(summary.store_uuid, Some(store.uuid));
        assert_eq!(summary.store_name.as_deref(), Some("Corner Shop"));
        assert_eq!(summary.purchased_price.as_deref(), Some("4.50"));
    }

    #[test]
    fn should_reject_invalid_price_in_item_patch() {
        let request = UpdateShoppingListItemRequest {
            quantity: None,
            purchased: Some(true),
            purchased_price: Some("cheap".to_string()),
            purchased_date: None,
        };
        assert!(matches!(request.into_patch(), Err(ShoppingListError::InvalidPrice)));
    }
}
