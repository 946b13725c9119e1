//! # Export Rendering
//!
//! Renders a line item into a plain-text export document.
//!
//! Pure and deterministic: identical items always produce identical output.
//! The storage collaborator (the session's `ExportSink`) owns the actual
//! write and its success/failure notification; nothing here does I/O.

use crate::item::LineItem;

// =============================================================================
// Document Rendering
// =============================================================================

/// Renders the item's fields into a human-readable UTF-8 document.
///
/// ## Shape
/// ```text
/// Product Name: Pen
/// Quantity: 3
/// Price: $5.00
/// ```
///
/// The price line is omitted for unpriced items. All field values appear
/// verbatim.
pub fn format_item(item: &LineItem) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("Product Name: {}\n", item.name));
    doc.push_str(&format!("Quantity: {}\n", item.quantity));
    if let Some(price) = item.price {
        doc.push_str(&format!("Price: {}\n", price));
    }
    doc
}

/// Derives a deterministic filename for the item's export document.
///
/// The name is lowercased and any run of non-alphanumeric characters
/// collapses to a single `-`, so `"Scanned Item - ABC123"` becomes
/// `scanned-item-abc123.txt`.
pub fn export_filename(item: &LineItem) -> String {
    let mut slug = String::with_capacity(item.name.len());
    let mut last_dash = true; // suppress a leading dash

    for c in item.name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("item");
    }

    format!("{slug}.txt")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_format_contains_all_fields_verbatim() {
        let item = LineItem::new("Pen", 3, Money::from_cents(500));
        let doc = format_item(&item);

        assert!(doc.contains("Pen"));
        assert!(doc.contains("3"));
        assert!(doc.contains("$5.00"));
        assert_eq!(doc, "Product Name: Pen\nQuantity: 3\nPrice: $5.00\n");
    }

    #[test]
    fn test_format_is_deterministic() {
        let item = LineItem::new("Pen", 3, Money::from_cents(500));
        assert_eq!(format_item(&item), format_item(&item));
    }

    #[test]
    fn test_format_omits_missing_price() {
        let item = LineItem::unpriced("Mystery", 2);
        let doc = format_item(&item);

        assert_eq!(doc, "Product Name: Mystery\nQuantity: 2\n");
    }

    #[test]
    fn test_export_filename_slug() {
        let item = LineItem::new("Scanned Item - ABC123", 1, Money::from_cents(500));
        assert_eq!(export_filename(&item), "scanned-item-abc123.txt");

        let plain = LineItem::new("Pen", 1, Money::from_cents(500));
        assert_eq!(export_filename(&plain), "pen.txt");

        let odd = LineItem::new("***", 1, Money::from_cents(500));
        assert_eq!(export_filename(&odd), "item.txt");
    }
}
