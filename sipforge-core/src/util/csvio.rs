use std::io::{self, Write};

/// Write one CSV record with every field quoted unconditionally,
/// embedded quotes doubled, CRLF terminated.
pub fn write_record<W: Write>(w: &mut W, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        w.write_all(b"\"")?;
        w.write_all(field.replace('"', "\"\"").as_bytes())?;
        w.write_all(b"\"")?;
    }
    w.write_all(b"\r\n")
}

/// Split CSV content into records. Handles quoted fields, doubled
/// quotes and embedded commas or newlines; accepts LF or CRLF rows and
/// skips blank lines.
pub fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut saw_content = false;
    let mut chars = content.chars().peekable();

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
            '"' => {
                in_quotes = true;
                saw_content = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                saw_content = true;
            }
            '\r' => {}
            '\n' => {
                if saw_content || !field.is_empty() || !record.is_empty() {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                    saw_content = false;
                }
            }
            _ => {
                field.push(c);
                saw_content = true;
            }
        }
    }
    if saw_content || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_quoted() {
        let mut out = Vec::new();
        write_record(&mut out, &["", "box1", "300"]).unwrap();
        assert_eq!(out, b"\"\",\"box1\",\"300\"\r\n");
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let mut out = Vec::new();
        write_record(&mut out, &["say \"hi\""]).unwrap();
        assert_eq!(out, b"\"say \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn test_parse_plain_rows() {
        let rows = parse_records("Format,ID,Count\napplication/pdf,fmt/19,12\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Format", "ID", "Count"]);
        assert_eq!(rows[1], vec!["application/pdf", "fmt/19", "12"]);
    }

    #[test]
    fn test_parse_quoted_commas_and_quotes() {
        let rows = parse_records("\"Text, plain\",\"a \"\"b\"\"\"\r\n");
        assert_eq!(rows, vec![vec!["Text, plain".to_string(), "a \"b\"".to_string()]]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_missing_final_newline() {
        let rows = parse_records("a,b\n\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn test_parse_newline_inside_quoted_field() {
        let rows = parse_records("\"two\nlines\",x\n");
        assert_eq!(rows, vec![vec!["two\nlines".to_string(), "x".to_string()]]);
    }
}
