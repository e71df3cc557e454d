//! Minimal CSV record splitter.
//!
//! Comma-delimited, `"`-quoted fields (which may hold commas, newlines and
//! `""` escapes). A blank line is an empty record so record numbers stay in
//! step with the file.

/// Split `text` into records of raw (untrimmed) fields.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut row_started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                row_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                if row_started {
                    row.push(std::mem::take(&mut field));
                }
                records.push(std::mem::take(&mut row));
                row_started = false;
            }
            _ => {
                field.push(c);
                row_started = true;
            }
        }
    }

    if row_started {
        row.push(field);
        records.push(row);
    }

    records
}

/// Trim every field and drop the ones left empty.
pub fn clean_row(row: Vec<String>) -> Vec<String> {
    row.into_iter()
        .filter_map(|f| {
            let trimmed = f.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_rows() {
        let records = parse_records("a,b\nc,d,e\n");
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d", "e"]]);
    }

    #[test]
    fn blank_lines_are_empty_records() {
        let records = parse_records("a,b\n\nc,d");
        assert_eq!(records.len(), 3);
        assert!(records[1].is_empty());
        assert_eq!(records[2], vec!["c", "d"]);
    }

    #[test]
    fn quoted_fields_keep_commas_and_escapes() {
        let records = parse_records("\"x, y\",\"say \"\"hi\"\"\"\r\nz,w\r\n");
        assert_eq!(records[0], vec!["x, y", "say \"hi\""]);
        assert_eq!(records[1], vec!["z", "w"]);
    }

    #[test]
    fn quoted_newline_stays_in_field() {
        let records = parse_records("\"line1\nline2\",b\n");
        assert_eq!(records, vec![vec!["line1\nline2", "b"]]);
    }

    #[test]
    fn trailing_comma_gives_empty_field() {
        assert_eq!(parse_records("a,\n"), vec![vec!["a", ""]]);
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(parse_records("\u{feff}שלום,עולם"), vec![vec!["שלום", "עולם"]]);
    }

    #[test]
    fn clean_row_trims_and_drops_empty() {
        let row = vec![" a ".to_string(), "".to_string(), "  ".to_string(), "b".to_string()];
        assert_eq!(clean_row(row), vec!["a", "b"]);
    }
}
