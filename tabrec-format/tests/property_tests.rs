//! Property-based tests for tabrec format primitives

use proptest::prelude::*;
use tabrec_format::{tokenize, Dataset};

/// Quote a cell the way a writer following the quoting convention would.
fn quote_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn render_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|cell| quote_cell(cell)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Plain cells: no separator, quote, or line-break characters, non-empty
/// so that rendered rows are never blank lines.
fn plain_cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.café-]{1,12}"
}

/// Cells drawing from the full quoting-relevant alphabet.
fn tricky_cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9,\"\n ]{0,16}"
}

proptest! {
    #[test]
    fn tokenize_roundtrip_plain_cells(
        rows in prop::collection::vec(prop::collection::vec(plain_cell(), 1..6), 1..20)
    ) {
        let csv = render_csv(&rows);
        let parsed = tokenize(&csv).expect("plain cells must tokenize");
        prop_assert_eq!(parsed, rows);
    }

    #[test]
    fn tokenize_roundtrip_quoted_cells(
        rows in prop::collection::vec(prop::collection::vec(tricky_cell(), 2..5), 1..10)
    ) {
        let csv = render_csv(&rows);
        let parsed = tokenize(&csv).expect("quoted cells must tokenize");
        prop_assert_eq!(parsed, rows);
    }

    #[test]
    fn record_count_matches_data_rows(
        rows in prop::collection::vec(prop::collection::vec(plain_cell(), 3..4), 1..20)
    ) {
        let csv = render_csv(&rows);
        let dataset = Dataset::parse(&csv).expect("parse");
        prop_assert_eq!(dataset.len(), rows.len() - 1);
    }

    #[test]
    fn row_and_key_order_preserved(
        rows in prop::collection::vec(prop::collection::vec(plain_cell(), 2..5), 2..15)
    ) {
        let width = rows[0].len();
        let mut uniform: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, "pad".to_string());
                row.truncate(width);
                row
            })
            .collect();
        // Make header names unique so positional lookups are unambiguous.
        for (idx, name) in uniform[0].iter_mut().enumerate() {
            name.push_str(&format!("_{}", idx));
        }

        let csv = render_csv(&uniform);
        let dataset = Dataset::parse(&csv).expect("parse");

        for (record, row) in dataset.iter().zip(uniform[1..].iter()) {
            let pairs: Vec<(String, String)> = record
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            let expected: Vec<(String, String)> = uniform[0]
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect();
            prop_assert_eq!(pairs, expected);
        }
    }

    #[test]
    fn serialized_output_parses_back(
        rows in prop::collection::vec(prop::collection::vec(tricky_cell(), 2..4), 2..8)
    ) {
        // Unique, plain header names; tricky data cells.
        let mut rows = rows;
        for (idx, name) in rows[0].iter_mut().enumerate() {
            *name = format!("field_{}", idx);
        }
        let csv = render_csv(&rows);
        let dataset = Dataset::parse(&csv).expect("parse");
        let text = tabrec_format::to_pretty_string(&dataset, 4).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        prop_assert_eq!(value.as_array().map(Vec::len), Some(dataset.len()));
    }
}
