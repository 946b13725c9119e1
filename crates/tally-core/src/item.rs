//! # Line Item
//!
//! The single record type the ledger stores.
//!
//! ## Design Notes
//! The original app maintained two near-duplicate entry screens, one with a
//! price field and one without. Making `price` optional lets one data model
//! and one ledger serve both variants.
//!
//! Items carry no stable ID: identity is the item's position in the ledger
//! sequence, and two items with identical fields are distinct entries
//! (scanning the same barcode twice is two purchasable units, not a merge).

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One record in the ledger.
///
/// ## Invariants (enforced by the producers, assumed here)
/// - `name` is non-empty
/// - `quantity >= 0`
/// - `price`, when present, is non-negative
///
/// Producers are [`crate::validation::validate_entry`] for the manual form
/// and [`crate::ingest::ScanIngestor`] for scans; nothing else constructs
/// items that reach the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product label shown in the ledger view.
    pub name: String,

    /// Units of this entry.
    pub quantity: i64,

    /// Unit price; `None` on the price-less screen variant.
    pub price: Option<Money>,
}

impl LineItem {
    /// Creates a priced line item.
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            price: Some(price),
        }
    }

    /// Creates a line item with no price attached.
    pub fn unpriced(name: impl Into<String>, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            price: None,
        }
    }

    /// The amount this entry contributes to the ledger total.
    ///
    /// Unpriced items contribute zero.
    pub fn line_total(&self) -> Money {
        self.price
            .unwrap_or_else(Money::zero)
            .multiply_quantity(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem::new("Pen", 3, Money::from_cents(500));
        assert_eq!(item.line_total().cents(), 1500);
    }

    #[test]
    fn test_unpriced_contributes_zero() {
        let item = LineItem::unpriced("Mystery", 4);
        assert_eq!(item.line_total(), Money::zero());
    }

    #[test]
    fn test_equal_fields_compare_equal() {
        // Equality is field-wise; distinctness in the ledger is positional.
        let a = LineItem::new("Pen", 1, Money::from_cents(500));
        let b = LineItem::new("Pen", 1, Money::from_cents(500));
        assert_eq!(a, b);
    }
}
