//! Terminal output.
//!
//! Records go to stdout as JSON so they can be piped; status lines go to
//! stderr.

use anyhow::Result;
use colored::Colorize;

use brewlog_core::{Record, RecordId};

/// How a record is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// One compact JSON object per line.
    Line,
    /// Indented JSON.
    Pretty,
}

impl RecordFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Line }
    }
}

pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dimmed informational line that is not a result.
pub fn notice(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Render a record in the wire shape (camelCase, `worthReordering` as 0/1).
pub fn render_record(record: &Record, format: RecordFormat) -> Result<String> {
    let rendered = match format {
        RecordFormat::Line => serde_json::to_string(record)?,
        RecordFormat::Pretty => serde_json::to_string_pretty(record)?,
    };
    Ok(rendered)
}

pub fn record(record: &Record, format: RecordFormat) -> Result<()> {
    println!("{}", render_record(record, format)?);
    Ok(())
}

/// Print the id of a record that was just written, then a status line.
///
/// The bare id on stdout is what scripts capture.
pub fn written(id: &RecordId, action: &str) {
    println!("{}", id);
    success(&format!("{} record {}", action, id.as_str().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_core::{Document, DocumentBody, normalize};
    use serde_json::{Value, json};

    fn sample() -> Record {
        let body = DocumentBody::new(json!({
            "ownerId": "alice",
            "brandName": "Lavazza",
            "overallTasteRating": 9,
            "worthReordering": true,
            "orderDate": "2024-01-01"
        }))
        .unwrap();
        normalize(&Document::new(RecordId::new("r1").unwrap(), body)).unwrap()
    }

    #[test]
    fn line_format_is_one_line_of_wire_json() {
        let rendered = render_record(&sample(), RecordFormat::Line).unwrap();
        assert!(!rendered.contains('\n'));

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["id"], "r1");
        assert_eq!(value["brandName"], "Lavazza");
        assert_eq!(value["overallTasteRating"], 4.5);
        assert_eq!(value["worthReordering"], 1);
        assert_eq!(value["orderDate"], "2024-01-01");
    }

    #[test]
    fn pretty_format_round_trips() {
        let record = sample();
        let rendered = render_record(&record, RecordFormat::Pretty).unwrap();
        assert!(rendered.lines().count() > 1);

        let parsed: Record = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn format_follows_flag() {
        assert_eq!(RecordFormat::from_pretty(true), RecordFormat::Pretty);
        assert_eq!(RecordFormat::from_pretty(false), RecordFormat::Line);
    }
}
