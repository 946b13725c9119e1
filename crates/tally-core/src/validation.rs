//! # Validation Module
//!
//! Manual entry validation for Tally POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    The Only Defense Line                            │
//! │                                                                     │
//! │  The form surface delivers three raw strings. This module is the    │
//! │  single gate between those strings and the ledger: the aggregate    │
//! │  total in ledger.rs assumes every stored quantity and price is a    │
//! │  well-formed non-negative number, and nothing downstream rechecks.  │
//! │                                                                     │
//! │  validate_entry(name, qty, price)                                   │
//! │       │                                                             │
//! │       ├── any field empty after trim? ──► Required { field }        │
//! │       ├── qty not a whole number >= 0? ─► InvalidQuantity           │
//! │       ├── price not a decimal >= 0? ────► InvalidPrice              │
//! │       │                                                             │
//! │       └── OK ──► LineItem ready for Ledger::append                  │
//! │                                                                     │
//! │  On error the caller leaves the form intact; on success it clears   │
//! │  all three fields and publishes an "item added" notification.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::item::LineItem;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_PRICE_CENTS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Parses a raw quantity field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must parse as a whole number >= 0 (zero is a legal placeholder row;
///   negatives and anything non-numeric are rejected)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] - this gate is the only thing
///   standing between raw form text and the ledger's total arithmetic
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required { field: "quantity" });
    }

    let qty = match raw.parse::<i64>() {
        Ok(qty) if qty >= 0 => qty,
        _ => {
            return Err(ValidationError::InvalidQuantity {
                value: raw.to_string(),
            })
        }
    };

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::QuantityTooLarge {
            requested: qty,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(qty)
}

/// Parses a raw price field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must parse as a non-negative decimal with at most two fraction digits
///   (see [`Money::parse`])
/// - Must not exceed [`MAX_ITEM_PRICE_CENTS`]
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required { field: "price" });
    }

    let price = Money::parse(raw).ok_or_else(|| ValidationError::InvalidPrice {
        value: raw.to_string(),
    })?;

    if price.cents() > MAX_ITEM_PRICE_CENTS {
        return Err(ValidationError::PriceTooLarge {
            requested: price,
            max: Money::from_cents(MAX_ITEM_PRICE_CENTS),
        });
    }

    Ok(price)
}

// =============================================================================
// Entry Validator
// =============================================================================

/// Validates and converts the three raw form fields into a line item.
///
/// Field checks run in form order (name, quantity, price) and the first
/// failure wins, so the shell can focus the offending input.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_entry;
///
/// let item = validate_entry("Pen", "3", "5.00").unwrap();
/// assert_eq!(item.quantity, 3);
///
/// assert!(validate_entry("Pen", "-1", "5.00").is_err());
/// ```
pub fn validate_entry(
    raw_name: &str,
    raw_quantity: &str,
    raw_price: &str,
) -> ValidationResult<LineItem> {
    let name = validate_name(raw_name)?;
    let quantity = parse_quantity(raw_quantity)?;
    let price = parse_price(raw_price)?;

    Ok(LineItem::new(name, quantity, price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Pen").unwrap(), "Pen");
        assert_eq!(validate_name("  Pen  ").unwrap(), "Pen");

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("0").unwrap(), 0);

        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { field: "quantity" })
        ));
        assert!(matches!(
            parse_quantity("-1"),
            Err(ValidationError::InvalidQuantity { .. })
        ));
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn test_quantity_bounded() {
        assert_eq!(parse_quantity("999").unwrap(), MAX_ITEM_QUANTITY);

        assert!(matches!(
            parse_quantity("1000"),
            Err(ValidationError::QuantityTooLarge {
                requested: 1000,
                max: MAX_ITEM_QUANTITY,
            })
        ));
        // A quantity near i64::MAX must be stopped here: downstream total
        // arithmetic trusts this gate
        assert!(matches!(
            parse_quantity("92233720368547758"),
            Err(ValidationError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("5.00").unwrap().cents(), 500);
        assert_eq!(parse_price("5").unwrap().cents(), 500);

        assert!(matches!(
            parse_price("  "),
            Err(ValidationError::Required { field: "price" })
        ));
        assert!(matches!(
            parse_price("-5"),
            Err(ValidationError::InvalidPrice { .. })
        ));
        assert!(parse_price("5.005").is_err());
    }

    #[test]
    fn test_price_bounded() {
        assert_eq!(parse_price("1000000.00").unwrap().cents(), 100_000_000);

        assert!(matches!(
            parse_price("1000000.01"),
            Err(ValidationError::PriceTooLarge { .. })
        ));
        assert!(matches!(
            parse_price("92233720368547758.00"),
            Err(ValidationError::PriceTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_entry_accept() {
        let item = validate_entry("Pen", "3", "5.00").unwrap();
        assert_eq!(item.name, "Pen");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price.unwrap().cents(), 500);
    }

    #[test]
    fn test_validate_entry_reject_matrix() {
        assert!(validate_entry("", "3", "5.00").is_err());
        assert!(validate_entry("Pen", "", "5.00").is_err());
        assert!(validate_entry("Pen", "3", "").is_err());
        assert!(validate_entry("Pen", "-1", "5.00").is_err());
        assert!(validate_entry("Pen", "abc", "5.00").is_err());
        assert!(validate_entry("Pen", "3", "-5.00").is_err());
        assert!(validate_entry("Pen", "3", "abc").is_err());
        assert!(validate_entry("Pen", "92233720368547758", "100.00").is_err());
    }

    #[test]
    fn test_first_failure_wins_in_form_order() {
        // Both quantity and price are bad; quantity is reported
        let err = validate_entry("Pen", "abc", "xyz").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuantity { .. }));
    }
}
