// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Quoted fields may span lines.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off the first row when it is exactly `expected` (case-insensitive).
pub fn split_headers(
    mut rows: Vec<Vec<String>>,
    expected: &[&str],
) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows.first().is_some_and(|first| {
        first.len() == expected.len()
            && first.iter().zip(expected).all(|(a, b)| a.trim().eq_ignore_ascii_case(b))
    });
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as one string (Copy in the GUI, file export).
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_survive_a_round_trip() {
        let rows = vec![strs!["a,b", "say \"hi\"", "two\nlines"]];
        let text = to_export_string(&None, &rows, true, ',');
        assert_eq!(text, "\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n");
        assert_eq!(parse_rows(&text, ','), rows);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let rows = parse_rows("x\ty\r\n\r\n1\t2", '\t');
        assert_eq!(rows, vec![strs!["x", "y"], strs!["1", "2"]]);
    }

    #[test]
    fn header_row_is_recognised() {
        let rows = vec![strs!["Lemma", "count"], strs!["good", "3"]];
        let (h, body) = split_headers(rows, &["lemma", "count"]);
        assert_eq!(h, Some(strs!["Lemma", "count"]));
        assert_eq!(body, vec![strs!["good", "3"]]);

        let (h, body) = split_headers(vec![strs!["good", "3"]], &["lemma", "count"]);
        assert!(h.is_none());
        assert_eq!(body.len(), 1);
    }
}
