//! # Scanner Gate
//!
//! Debounce state machine between the scanning hardware and ingestion.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Scanner Gate States                            │
//! │                                                                     │
//! │               show()                 try_capture()                  │
//! │   ┌────────┐ ───────► ┌────────┐ ─────────────────► ┌──────────┐    │
//! │   │  Idle  │          │ Armed  │                    │ Captured │    │
//! │   └────────┘ ◄─────── └────────┘ ◄───────────────── └──────────┘    │
//! │        ▲       hide()       ▲         resume()            │         │
//! │        │                    └──────────────────────────── │         │
//! │        └───────────────────────────── hide() ─────────────┘         │
//! │                                                                     │
//! │  INVARIANT: no ingestion while Captured - the camera keeps firing   │
//! │  scan callbacks for as long as the barcode is in frame, but exactly │
//! │  one line item is produced per user-acknowledged scan.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Scanner State
// =============================================================================

/// Where the scanner is in its debounce lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScannerState {
    /// Scanner hidden; scan events are ignored.
    Idle,

    /// Scanner visible and accepting input.
    Armed,

    /// A payload was just accepted; further input suppressed until the
    /// user explicitly asks to scan again.
    Captured,
}

// =============================================================================
// Scanner Gate
// =============================================================================

/// Owns the debounce state for the scan ingestion path.
///
/// The gate itself is pure state; the session layer consults it before
/// letting a scan payload anywhere near the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerGate {
    state: ScannerState,
}

impl ScannerGate {
    /// Creates a gate in the `Idle` state (scanner hidden).
    pub fn new() -> Self {
        ScannerGate {
            state: ScannerState::Idle,
        }
    }

    /// Current state, for the shell to render.
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// "Show scanner": Idle → Armed. No-op if already visible.
    pub fn show(&mut self) {
        if self.state == ScannerState::Idle {
            self.state = ScannerState::Armed;
        }
    }

    /// "Hide scanner": any state → Idle.
    pub fn hide(&mut self) {
        self.state = ScannerState::Idle;
    }

    /// "Scan again": Captured → Armed. No-op in other states.
    pub fn resume(&mut self) {
        if self.state == ScannerState::Captured {
            self.state = ScannerState::Armed;
        }
    }

    /// Attempts to accept a scan event.
    ///
    /// ## Returns
    /// - `true` if the gate was Armed: it transitions to Captured and the
    ///   caller may ingest exactly one payload
    /// - `false` otherwise: the event must be dropped
    pub fn try_capture(&mut self) -> bool {
        if self.state == ScannerState::Armed {
            self.state = ScannerState::Captured;
            true
        } else {
            false
        }
    }
}

impl Default for ScannerGate {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut gate = ScannerGate::new();
        assert_eq!(gate.state(), ScannerState::Idle);

        gate.show();
        assert_eq!(gate.state(), ScannerState::Armed);

        assert!(gate.try_capture());
        assert_eq!(gate.state(), ScannerState::Captured);

        gate.resume();
        assert_eq!(gate.state(), ScannerState::Armed);

        gate.hide();
        assert_eq!(gate.state(), ScannerState::Idle);
    }

    #[test]
    fn test_capture_suppressed_unless_armed() {
        let mut gate = ScannerGate::new();

        // Idle: camera isn't even visible
        assert!(!gate.try_capture());

        gate.show();
        assert!(gate.try_capture());

        // Captured: repeated camera callbacks for the same barcode
        assert!(!gate.try_capture());
        assert!(!gate.try_capture());

        gate.resume();
        assert!(gate.try_capture());
    }

    #[test]
    fn test_hide_from_captured() {
        let mut gate = ScannerGate::new();
        gate.show();
        gate.try_capture();

        gate.hide();
        assert_eq!(gate.state(), ScannerState::Idle);
        assert!(!gate.try_capture());
    }

    #[test]
    fn test_resume_is_noop_when_not_captured() {
        let mut gate = ScannerGate::new();
        gate.resume();
        assert_eq!(gate.state(), ScannerState::Idle);

        gate.show();
        gate.resume();
        assert_eq!(gate.state(), ScannerState::Armed);
    }
}
