use crate::error::{Result, SheetError};
use orderlink_core::{Sheet, SheetRow};

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Parses delimited text into a header row plus data rows.
pub fn parse_sheet(data: &str, delimiter: Delimiter) -> Result<Sheet> {
    let mut records = parse_records(data, delimiter)?.into_iter();
    let headers = records
        .next()
        .ok_or_else(|| SheetError::Parse("missing header row".to_string()))?;
    let rows = records.map(|record| SheetRow::new(record.into_iter().map(Some))).collect();
    Ok(Sheet::new(headers, rows))
}

/// Splits RFC 4180 style text into records. Blank lines are skipped.
pub fn parse_records(data: &str, delimiter: Delimiter) -> Result<Vec<Vec<String>>> {
    let sep = delimiter.as_char();
    let data = data.strip_prefix(BOM).unwrap_or(data);

    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut line = 1;
    let mut chars = data.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line += 1;
                finish_record(&mut records, &mut record, &mut field);
            }
            _ if ch == sep => record.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(SheetError::Parse(format!(
            "unterminated quoted field starting on line {quote_line}"
        )));
    }
    finish_record(&mut records, &mut record, &mut field);

    Ok(records)
}

fn finish_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    if record.is_empty() && field.is_empty() {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

/// Appends one delimited record terminated by CRLF.
pub fn write_record<S: AsRef<str>>(out: &mut String, fields: &[S], delimiter: Delimiter) {
    let sep = delimiter.as_char();
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(sep);
        }
        push_field(out, field.as_ref(), sep);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, value: &str, sep: char) {
    let needs_quotes = value
        .chars()
        .any(|ch| ch == sep || matches!(ch, '"' | '\n' | '\r'));
    if !needs_quotes {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
