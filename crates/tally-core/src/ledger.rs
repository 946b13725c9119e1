//! # Item Ledger
//!
//! The ordered collection of line items plus its derived running total.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Ledger Operations                               │
//! │                                                                     │
//! │  Shell Action            Session Entry Point      Ledger Change     │
//! │  ────────────            ───────────────────      ─────────────     │
//! │                                                                     │
//! │  Scan barcode ─────────► on_scan_payload() ─────► append(item)      │
//! │                                                                     │
//! │  Submit form ──────────► submit_manual_entry() ─► append(item)      │
//! │                                                                     │
//! │  Tap Remove ───────────► remove_item(i) ────────► remove_at(i)      │
//! │                                                                     │
//! │  View ledger ──────────► ledger_view() ─────────► (read only)       │
//! │                                                                     │
//! │  `total` is recomputed after every mutation; it always equals       │
//! │  Σ quantity × price over the current sequence.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why checked removal?
//! The original screen spliced the backing array at whatever index the tap
//! handler had captured. A stale index (captured before another removal
//! shifted the sequence) silently removes the wrong item. `remove_at` makes
//! that a contract error instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::LineItem;
use crate::money::Money;

// =============================================================================
// Ledger
// =============================================================================

/// The transient item ledger.
///
/// ## Invariants
/// - Insertion order is preserved; identity is positional
/// - Append-only except for explicit removal-by-position
/// - `total` always equals the sum of line totals for the current sequence
/// - Discarded with the session; nothing here persists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Items in insertion order.
    items: Vec<LineItem>,

    /// Derived aggregate; maintained incrementally, never set directly.
    total: Money,

    /// When the ledger was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Ledger {
            items: Vec::new(),
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Appends an already-validated item to the end of the sequence.
    ///
    /// ## Behavior
    /// - Repeats are separate entries, never merged or incremented
    /// - Never fails; validation happened at the producer
    pub fn append(&mut self, item: LineItem) {
        self.total += item.line_total();
        self.items.push(item);
        debug_assert_eq!(self.total, self.recompute_total());
    }

    /// Removes the item at `index`, shifting subsequent items down by one.
    ///
    /// ## Returns
    /// - `Ok(item)` with the removed item on success
    /// - `Err(CoreError::IndexOutOfRange)` when `index >= len`; the ledger
    ///   is left unchanged
    pub fn remove_at(&mut self, index: usize) -> CoreResult<LineItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        self.total -= item.line_total();
        debug_assert_eq!(self.total, self.recompute_total());
        Ok(item)
    }

    /// Empties the ledger and resets the total.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero();
        self.created_at = Utc::now();
    }

    /// The derived aggregate total for the current sequence.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of entries in the ledger.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the ledger was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    // Ground truth for the incremental total; debug-asserted after mutations.
    fn recompute_total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshots for the Presentation Layer
// =============================================================================

/// Aggregate summary for the ledger view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Ledger> for LedgerTotals {
    fn from(ledger: &Ledger) -> Self {
        LedgerTotals {
            item_count: ledger.len(),
            total_quantity: ledger.total_quantity(),
            total_cents: ledger.total().cents(),
        }
    }
}

/// Full ledger snapshot including items and totals.
///
/// The presentation layer re-reads this each time it needs to render; it
/// never mutates ledger state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub items: Vec<LineItem>,
    pub totals: LedgerTotals,
    pub created_at: DateTime<Utc>,
}

impl From<&Ledger> for LedgerView {
    fn from(ledger: &Ledger) -> Self {
        LedgerView {
            items: ledger.items().to_vec(),
            totals: LedgerTotals::from(ledger),
            created_at: ledger.created_at(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
