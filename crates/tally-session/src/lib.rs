//! # tally-session: Session Orchestration for Tally POS
//!
//! The stateful layer between the (excluded) mobile shell and the pure
//! logic in `tally-core`.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       tally-session                                 │
//! │                                                                     │
//! │  • Owns the one Ledger and the one notification slot per session    │
//! │  • Gates scan events through the scanner debounce state machine     │
//! │  • Runs the single cancellable notification expiry task             │
//! │  • Hands export documents to the storage collaborator (ExportSink)  │
//! │                                                                     │
//! │  The shell never mutates ledger or notification state directly:     │
//! │  all mutation flows through [`session::Session`] entry points, and  │
//! │  rendering reads serializable snapshots.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Session configuration (scan defaults, expiry window)
//! - [`notify`] - Single-slot auto-expiring notification channel
//! - [`sink`] - Export sink trait and reference implementations
//! - [`session`] - The session façade
//! - [`error`] - Serializable session errors

pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod sink;

pub use config::SessionConfig;
pub use error::{ErrorCode, SessionError};
pub use notify::{Notification, Notifier};
pub use session::Session;
pub use sink::{DirSink, ExportFailure, ExportSink, MemorySink};
