use uuid::Uuid;

use super::errors::ItemError;
use super::value_objects::ItemUnit;
use crate::domain::shared::value_objects::{non_blank, parse_optional};

/// A catalog product that can be put on shopping lists, baskets and alerts.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub unit: ItemUnit,
}

pub struct NewItemProps {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub unit: ItemUnit,
}

/// Fields a client wants to change on an item. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub unit: Option<ItemUnit>,
}

impl ItemPatch {
    /// Validates the raw request values. The unit must name an `ItemUnit`.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        brand: Option<String>,
        unit: Option<&str>,
    ) -> Result<Self, ItemError> {
        let name = match name {
            Some(n) => Some(non_blank(n).ok_or(ItemError::NameEmpty)?),
            None => None,
        };
        let unit = parse_optional(unit, || ItemError::InvalidUnit)?;

        Ok(Self {
            name,
            description,
            brand,
            unit,
        })
    }
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        if props.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        Ok(Self {
            uuid: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            brand: props.brand,
            unit: props.unit,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        uuid: Uuid,
        name: String,
        description: Option<String>,
        brand: Option<String>,
        unit: ItemUnit,
    ) -> Self {
        Self {
            uuid,
            name,
            description,
            brand,
            unit,
        }
    }

    pub fn apply_patch(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(brand) = &patch.brand {
            self.brand = Some(brand.clone());
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn milk() -> Item {
        Item::from_repository(
            Uuid::new_v4(),
            "Milk".to_string(),
            Some("Semi-skimmed".to_string()),
            Some("Alpine".to_string()),
            ItemUnit::Liter,
        )
    }

    #[test]
    fn should_create_item_when_name_valid() {
        let item = Item::new(NewItemProps {
            name: "Rye bread".to_string(),
            description: None,
            brand: None,
            unit: ItemUnit::Piece,
        })
        .unwrap();

        assert_eq!(item.name, "Rye bread");
        assert_eq!(item.unit, ItemUnit::Piece);
    }

    #[test]
    fn should_reject_item_when_name_blank() {
        let result = Item::new(NewItemProps {
            name: "  ".to_string(),
            description: None,
            brand: None,
            unit: ItemUnit::Piece,
        });

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_reject_patch_with_unknown_unit() {
        let result = ItemPatch::new(None, None, None, Some("BARREL"));
        assert!(matches!(result.unwrap_err(), ItemError::InvalidUnit));
    }

    #[test]
    fn should_reject_patch_with_blank_name() {
        let result = ItemPatch::new(Some("".to_string()), None, None, None);
        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_only_overwrite_present_fields() {
        let mut item = milk();
        let patch = ItemPatch::new(None, None, Some("Valley".to_string()), Some("MILLILITER"))
            .unwrap();

        item.apply_patch(&patch);

        assert_eq!(item.name, "Milk");
        assert_eq!(item.description.as_deref(), Some("Semi-skimmed"));
        assert_eq!(item.brand.as_deref(), Some("Valley"));
        assert_eq!(item.unit, ItemUnit::Milliliter);
    }

    #[test]
    fn should_leave_item_untouched_for_empty_patch() {
        let mut item = milk();
        let before = item.clone();

        item.apply_patch(&ItemPatch::default());

        assert_eq!(item, before);
    }

    fn unit_strategy() -> impl Strategy<Value = Option<ItemUnit>> {
        prop::option::of(prop_oneof![
            Just(ItemUnit::Piece),
            Just(ItemUnit::Gram),
            Just(ItemUnit::Kilogram),
            Just(ItemUnit::Milliliter),
            Just(ItemUnit::Liter),
            Just(ItemUnit::Pack),
        ])
    }

    fn patch_strategy() -> impl Strategy<Value = ItemPatch> {
        (
            prop::option::of("[A-Za-z][A-Za-z ]{0,11}"),
            prop::option::of("[a-z ]{0,16}"),
            prop::option::of("[A-Za-z]{1,8}"),
            unit_strategy(),
        )
            .prop_map(|(name, description, brand, unit)| ItemPatch {
                name,
                description,
                brand,
                unit,
            })
    }

    proptest! {
        #[test]
        fn applying_an_item_patch_twice_equals_applying_it_once(patch in patch_strategy()) {
            let mut once = milk();
            once.apply_patch(&patch);
            let mut twice = once.clone();
            twice.apply_patch(&patch);

            prop_assert_eq!(once, twice);
        }
    }
}
