use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::PriceAlertError;
use super::value_objects::AlertType;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{UserId, parse_amount};

/// A watch on an item's price. The item is always resolved: an alert
/// without one cannot be constructed or loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAlert {
    pub uuid: Uuid,
    pub owner: UserId,
    pub alert_type: AlertType,
    pub target_price: Option<BigDecimal>,
    pub last_triggered: Option<DateTime<Utc>>,
    pub item: Item,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new alert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceAlertProps {
    pub alert_type: AlertType,
    pub target_price: Option<BigDecimal>,
}

impl NewPriceAlertProps {
    pub fn new(alert_type: &str, target_price: Option<&str>) -> Result<Self, PriceAlertError> {
        let alert_type = alert_type
            .parse::<AlertType>()
            .map_err(|_| PriceAlertError::InvalidAlertType)?;
        let target_price = match target_price {
            Some(raw) => Some(parse_amount(raw).ok_or(PriceAlertError::InvalidTargetPrice)?),
            None => None,
        };

        Ok(Self {
            alert_type,
            target_price,
        })
    }
}

impl PriceAlert {
    pub fn new(owner: UserId, item: Item, props: NewPriceAlertProps) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            owner,
            alert_type: props.alert_type,
            target_price: props.target_price,
            last_triggered: None,
            item,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        uuid: Uuid,
        owner: UserId,
        alert_type: AlertType,
        target_price: Option<BigDecimal>,
        last_triggered: Option<DateTime<Utc>>,
        item: Item,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid,
            owner,
            alert_type,
            target_price,
            last_triggered,
            item,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn should_validate_alert_props() {
        let props = NewPriceAlertProps::new("PRICE_DROP", Some("1.25")).unwrap();
        assert_eq!(props.alert_type, AlertType::PriceDrop);
        assert_eq!(props.target_price, BigDecimal::from_str("1.25").ok());
    }

    #[test]
    fn should_reject_unknown_alert_type() {
        let result = NewPriceAlertProps::new("PRICE_SPIKE", None);
        assert!(matches!(result.unwrap_err(), PriceAlertError::InvalidAlertType));
    }

    #[test]
    fn should_reject_negative_target_price() {
        let result = NewPriceAlertProps::new("TARGET_PRICE", Some("-3"));
        assert!(matches!(result.unwrap_err(), PriceAlertError::InvalidTargetPrice));
    }

    #[test]
    fn should_reject_target_price_with_sub_cent_precision() {
        let result = NewPriceAlertProps::new("TARGET_PRICE", Some("0.005"));
        assert!(matches!(result.unwrap_err(), PriceAlertError::InvalidTargetPrice));
    }
}
