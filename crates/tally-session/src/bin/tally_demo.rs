//! # Scripted Session Demo
//!
//! Drives one session end to end without the mobile shell: scan two
//! barcodes, type one manual entry, export an item, remove another, and
//! watch the notification slot expire.
//!
//! ## Usage
//! ```bash
//! cargo run -p tally-session --bin tally-demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p tally-session --bin tally-demo
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_core::Money;
use tally_session::{DirSink, Session};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let session = Session::new();

    // Scan path: arm, capture, acknowledge, capture again
    session.show_scanner();
    session.on_scan_payload("8901030865278");
    info!(notification = %session.notification().message, "after first scan");

    // The camera keeps firing while the barcode stays in frame
    session.on_scan_payload("8901030865278");
    session.resume_scanning();
    session.on_scan_payload("5449000000996");
    session.hide_scanner();

    // Manual entry path
    if let Err(err) = session.submit_manual_entry("Pen", "-1", "5.00") {
        info!(%err, "rejected as expected, form stays intact");
    }
    session
        .submit_manual_entry("Pen", "3", "5.00")
        .expect("valid entry");

    let view = session.ledger_view();
    info!(
        items = view.totals.item_count,
        total = %Money::from_cents(view.totals.total_cents),
        "ledger state"
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&view).expect("ledger view serializes")
    );

    // Export the manual entry to a temp directory
    let sink = DirSink::new(std::env::temp_dir().join("tally-exports"));
    session.export_item(2, &sink).expect("export");
    info!(notification = %session.notification().message, "after export");

    // Checked removal
    session.remove_item(0).expect("remove");
    if let Err(err) = session.remove_item(99) {
        info!(%err, "stale index rejected");
    }

    // Let the last notification expire on its own
    tokio::time::sleep(Duration::from_secs(4) + Duration::from_millis(50)).await;
    assert!(!session.notification().visible);
    info!(total = %session.total(), "final total, notification expired");
}
