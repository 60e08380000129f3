use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// External identifier of a user, as carried in the `sub` claim of the
/// caller's bearer token. Every user-owned record is keyed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Parses an optional raw value into a closed enum.
///
/// `None` stays `None`; a value outside the enum's set yields `on_invalid()`.
pub fn parse_optional<T, E>(
    raw: Option<&str>,
    on_invalid: impl FnOnce() -> E,
) -> Result<Option<T>, E>
where
    T: FromStr,
{
    match raw {
        Some(value) => value.parse::<T>().map(Some).map_err(|_| on_invalid()),
        None => Ok(None),
    }
}

/// Most digits an amount may carry after the decimal point.
pub const AMOUNT_SCALE: i64 = 2;
/// Digits an amount may carry before the decimal point.
pub const AMOUNT_INTEGER_DIGITS: u32 = 10;

/// Parses a non-negative decimal amount such as a price.
///
/// Amounts are stored as `NUMERIC(12, 2)`, so anything with more than two
/// fractional digits or ten integer digits is rejected rather than rounded.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let amount = BigDecimal::from_str(raw.trim()).ok()?;
    if amount < BigDecimal::zero() {
        return None;
    }
    let (_, scale) = amount.normalized().as_bigint_and_exponent();
    if scale > AMOUNT_SCALE {
        return None;
    }
    if amount >= BigDecimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS)) {
        return None;
    }
    Some(amount)
}

/// Returns the value when it holds something other than whitespace.
pub fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Colour {
        Red,
    }

    impl FromStr for Colour {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "RED" => Ok(Colour::Red),
                _ => Err(()),
            }
        }
    }

    #[test]
    fn should_display_user_id_as_raw_subject() {
        let user_id = UserId::new("user-123");
        assert_eq!(user_id.to_string(), "user-123");
        assert_eq!(user_id.as_str(), "user-123");
    }

    #[test]
    fn should_compare_user_ids_by_value() {
        assert_eq!(UserId::from("same"), UserId::from("same".to_string()));
        assert_ne!(UserId::from("user-123"), UserId::from("user-456"));
    }

    #[test]
    fn should_leave_missing_value_unset() {
        let parsed: Result<Option<Colour>, &str> = parse_optional(None, || "invalid");
        assert_eq!(parsed, Ok(None));
    }

    #[test]
    fn should_parse_known_value() {
        let parsed: Result<Option<Colour>, &str> = parse_optional(Some("RED"), || "invalid");
        assert_eq!(parsed, Ok(Some(Colour::Red)));
    }

    #[test]
    fn should_reject_value_outside_enum() {
        let parsed: Result<Option<Colour>, &str> = parse_optional(Some("red"), || "invalid");
        assert_eq!(parsed, Err("invalid"));
    }

    #[test]
    fn should_parse_amounts() {
        assert_eq!(parse_amount("2.49"), BigDecimal::from_str("2.49").ok());
        assert_eq!(parse_amount(" 0 "), Some(BigDecimal::zero()));
        assert!(parse_amount("-1").is_none());
        assert!(parse_amount("cheap").is_none());
    }

    #[test]
    fn should_accept_trailing_zeros_beyond_two_decimals() {
        assert_eq!(parse_amount("4.990"), BigDecimal::from_str("4.99").ok());
        assert_eq!(parse_amount("1e2"), BigDecimal::from_str("100").ok());
    }

    #[test]
    fn should_reject_amounts_with_more_than_two_decimals() {
        assert!(parse_amount("4.999").is_none());
        assert!(parse_amount("0.001").is_none());
    }

    #[test]
    fn should_reject_amounts_too_large_to_store() {
        assert!(parse_amount("1e20").is_none());
        assert!(parse_amount("10000000000").is_none());
        assert_eq!(
            parse_amount("9999999999.99"),
            BigDecimal::from_str("9999999999.99").ok()
        );
    }

    #[test]
    fn should_reject_blank_strings() {
        assert!(non_blank("   ".to_string()).is_none());
        assert_eq!(non_blank("Milk".to_string()), Some("Milk".to_string()));
    }
}
