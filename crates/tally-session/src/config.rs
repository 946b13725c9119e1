//! # Session Configuration
//!
//! Tunables for a session. Everything here has a sensible default; the
//! shell only overrides what its product owner cares about.

use std::time::Duration;

use tally_core::ingest::ScanConfig;
use tally_core::Money;

/// Configuration for a [`crate::session::Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name prefix for scan-sourced items.
    pub scan_name_prefix: String,

    /// Placeholder unit price for scan-sourced items. The two observed
    /// entry-screen variants hardcoded different amounts, so this is
    /// configuration rather than policy.
    pub scan_default_price: Money,

    /// How long a published notification stays visible with no
    /// superseding publish.
    pub notification_expiry: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let scan = ScanConfig::default();
        SessionConfig {
            scan_name_prefix: scan.name_prefix,
            scan_default_price: scan.default_price,
            // The source armed a 4000 ms timeout (its comment said two
            // seconds; the armed value wins)
            notification_expiry: Duration::from_secs(4),
        }
    }
}

impl SessionConfig {
    /// Sets the scan placeholder price.
    pub fn scan_default_price(mut self, price: Money) -> Self {
        self.scan_default_price = price;
        self
    }

    /// Sets the notification expiry window.
    pub fn notification_expiry(mut self, window: Duration) -> Self {
        self.notification_expiry = window;
        self
    }

    /// The scan ingestion config slice of this session config.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            name_prefix: self.scan_name_prefix.clone(),
            default_price: self.scan_default_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.scan_name_prefix, "Scanned Item - ");
        assert_eq!(config.scan_default_price.cents(), 500);
        assert_eq!(config.notification_expiry, Duration::from_secs(4));
    }

    #[test]
    fn test_builder_setters() {
        let config = SessionConfig::default()
            .scan_default_price(Money::from_cents(199))
            .notification_expiry(Duration::from_millis(1500));

        assert_eq!(config.scan_default_price.cents(), 199);
        assert_eq!(config.notification_expiry, Duration::from_millis(1500));
    }
}
