use poem_openapi::Object;
use uuid::Uuid;

use business::domain::basket::errors::BasketError;
use business::domain::basket::model::{Basket, BasketPatch};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateBasketRequest {
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateBasketRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl UpdateBasketRequest {
    pub fn into_patch(self) -> Result<BasketPatch, BasketError> {
        BasketPatch::new(self.name, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct BasketSummary {
    pub uuid: Uuid,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Zero when the basket items were not loaded
    pub items_count: u64,
}

impl From<&Basket> for BasketSummary {
    fn from(basket: &Basket) -> Self {
        Self {
            uuid: basket.uuid,
            name: basket.name.clone(),
            description: basket.description.clone(),
            items_count: basket.items_count() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use business::domain::shared::value_objects::UserId;

    #[test]
    fn should_count_absent_items_as_zero() {
        let basket = Basket::from_repository(
            Uuid::new_v4(),
            UserId::new("user-123"),
            "Staples".to_string(),
            None,
            None,
            Utc::now(),
            Utc::now(),
        );

        let summary = BasketSummary::from(&basket);

        assert_eq!(summary.items_count, 0);
        assert_eq!(summary.name, "Staples");
    }
}
