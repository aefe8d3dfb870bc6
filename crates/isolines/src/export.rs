//! Comma-separated export of an isolines collection.
//!
//! One row per isoline: `<group>,<group> <index+1>,<value>`. Names are
//! derived, not stored. Undefined (non-finite) values are written as an empty
//! field.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::collection::{IsolineEntry, IsolinesCollection};

/// Header row of the export.
pub const CSV_HEADER: &str = "Group,Name,Value";

/// Format an isoline value the way it is listed.
///
/// Integral values carry no fractional part (`20`, not `20.0`).
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Quote a field if it contains a separator, quote or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn csv_row(entry: &IsolineEntry<'_>) -> String {
    format!(
        "{},{},{}",
        escape_field(entry.group),
        escape_field(&entry.name),
        format_value(entry.isoline.value)
    )
}

/// Write the export to any writer.
pub fn write_csv<W: Write>(collection: &IsolinesCollection, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for entry in collection.entries() {
        writeln!(writer, "{}", csv_row(&entry))?;
    }
    writer.flush()
}

/// Render the export as a string.
pub fn export_csv(collection: &IsolinesCollection) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + collection.total_isolines() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for entry in collection.entries() {
        out.push_str(&csv_row(&entry));
        out.push('\n');
    }
    out
}
