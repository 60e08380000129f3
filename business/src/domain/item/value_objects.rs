use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Unit of measure an item is sold in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemUnit {
    #[default]
    Piece,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Pack,
}
