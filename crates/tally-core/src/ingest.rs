//! # Scan Ingestion
//!
//! Converts a decoded scan payload into a canonical [`LineItem`].
//!
//! ## Position in the Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Camera hardware (excluded)                                         │
//! │       │  { payload: "ABC123" }                                      │
//! │       ▼                                                             │
//! │  ScannerGate.try_capture()  ── false ──► event dropped              │
//! │       │ true                                                        │
//! │       ▼                                                             │
//! │  ScanIngestor.ingest("ABC123")   ◄── THIS MODULE (pure conversion)  │
//! │       │  LineItem { name: "Scanned Item - ABC123", qty: 1, $5.00 }  │
//! │       ▼                                                             │
//! │  Ledger.append(item)  +  Notifier.publish("Scanned Item: ABC123")   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ingestor never touches the ledger; the session layer owns that
//! sequencing. Scanning the same payload twice produces two equal but
//! distinct items - the ledger treats repeats as separate purchasable
//! units, not a merge/increment.

use crate::item::LineItem;
use crate::money::Money;
use crate::{DEFAULT_SCAN_NAME_PREFIX, DEFAULT_SCAN_PRICE_CENTS};

// =============================================================================
// Scan Config
// =============================================================================

/// Configuration for scan-sourced items.
///
/// There is no price lookup in v0.1: every scanned item gets a placeholder
/// price. The amount is configuration, not policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Prefix prepended to the payload to form the item name.
    pub name_prefix: String,

    /// Placeholder unit price for scan-sourced items.
    pub default_price: Money,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            name_prefix: DEFAULT_SCAN_NAME_PREFIX.to_string(),
            default_price: Money::from_cents(DEFAULT_SCAN_PRICE_CENTS),
        }
    }
}

// =============================================================================
// Scan Ingestor
// =============================================================================

/// Converts raw scan payloads into canonical line items.
#[derive(Debug, Clone, Default)]
pub struct ScanIngestor {
    config: ScanConfig,
}

impl ScanIngestor {
    /// Creates an ingestor with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        ScanIngestor { config }
    }

    /// Converts a decoded payload into a line item.
    ///
    /// ## Behavior
    /// - `name` = configured prefix + payload (deterministic)
    /// - `quantity` = 1
    /// - `price` = configured placeholder
    ///
    /// Pure conversion: no ledger, no notification. The scanning hardware
    /// guarantees a non-empty payload; this function does not re-validate.
    pub fn ingest(&self, payload: &str) -> LineItem {
        LineItem::new(
            format!("{}{}", self.config.name_prefix, payload),
            1,
            self.config.default_price,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_is_deterministic() {
        let ingestor = ScanIngestor::default();
        let item = ingestor.ingest("ABC123");

        assert_eq!(item.name, "Scanned Item - ABC123");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Some(Money::from_cents(DEFAULT_SCAN_PRICE_CENTS)));
    }

    #[test]
    fn test_same_payload_twice_yields_equal_distinct_items() {
        let ingestor = ScanIngestor::default();
        let first = ingestor.ingest("ABC123");
        let second = ingestor.ingest("ABC123");

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_config() {
        let ingestor = ScanIngestor::new(ScanConfig {
            name_prefix: "SKU ".to_string(),
            default_price: Money::from_cents(199),
        });
        let item = ingestor.ingest("X1");

        assert_eq!(item.name, "SKU X1");
        assert_eq!(item.price, Some(Money::from_cents(199)));
    }
}
