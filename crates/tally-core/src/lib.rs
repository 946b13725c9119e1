//! # tally-core: Pure Business Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Tally POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │              Mobile Shell (excluded collaborator)             │  │
//! │  │   Scanner view ──► Entry form ──► Ledger view ──► Bell        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ calls / reads snapshots           │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                     tally-session                             │  │
//! │  │   Session entry points, notification timer, export sink       │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ tally-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌────────┐ ┌────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │  │
//! │  │  │ money  │ │ ledger │ │ scanner │ │validation│ │ export  │  │  │
//! │  │  │ Money  │ │ Ledger │ │  gate   │ │  rules   │ │ render  │  │  │
//! │  │  └────────┘ └────────┘ └─────────┘ └──────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO TIMERS • NO HARDWARE • PURE FUNCTIONS            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`item`] - The line item record the ledger stores
//! - [`ledger`] - Ordered item ledger with a derived running total
//! - [`scanner`] - Scanner debounce state machine
//! - [`ingest`] - Scan payload → line item conversion
//! - [`validation`] - Manual entry validation
//! - [`export`] - Plain-text export rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, timers, hardware access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::ledger::Ledger;
//! use tally_core::validation::validate_entry;
//!
//! let mut ledger = Ledger::new();
//! let item = validate_entry("Pen", "3", "5.00").unwrap();
//! ledger.append(item);
//!
//! assert_eq!(ledger.total().cents(), 1500); // 3 × $5.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod ingest;
pub mod item;
pub mod ledger;
pub mod money;
pub mod scanner;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use ingest::{ScanConfig, ScanIngestor};
pub use item::LineItem;
pub use ledger::{Ledger, LedgerTotals, LedgerView};
pub use money::Money;
pub use scanner::{ScannerGate, ScannerState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default unit price attached to scan-sourced items, in cents.
///
/// ## Why a constant?
/// The scanner delivers only an opaque payload; there is no price lookup in
/// v0.1. The two observed entry-screen variants disagreed on the hardcoded
/// amount, so the default lives here and the session config can override it.
pub const DEFAULT_SCAN_PRICE_CENTS: i64 = 500;

/// Name prefix applied to scan-sourced items.
pub const DEFAULT_SCAN_NAME_PREFIX: &str = "Scanned Item - ";

/// Maximum length accepted for an item name.
///
/// ## Business Reason
/// Keeps ledger rows and export documents renderable on a phone screen.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Maximum quantity accepted for a single entry.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10),
/// and keeps line totals far away from i64 range no matter the price.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price accepted for a single entry, in cents ($1,000,000).
///
/// ## Business Reason
/// A fat-fingered price is caught at the form instead of distorting the
/// running total; together with [`MAX_ITEM_QUANTITY`] it also keeps the
/// total's i64 arithmetic exact for any ledger a session could hold.
pub const MAX_ITEM_PRICE_CENTS: i64 = 100_000_000;
