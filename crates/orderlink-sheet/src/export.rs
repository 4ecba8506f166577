use crate::csv::{parse_records, write_record, Delimiter};
use crate::error::{Result, SheetError};
use orderlink_core::{normalize_phone, CoreError, NormalizedPhone, OrderBatch, OrderRecord};

pub const PHONE_HEADER: &str = "رقم الهاتف";
pub const LINK_HEADER: &str = "رابط واتساب";
pub const DONE_HEADER: &str = "تم";

/// Excel only reads the Arabic headers as UTF-8 when the file starts with a BOM.
pub const UTF8_BOM: char = '\u{feff}';

const TRUE_CELL: &str = "TRUE";
const FALSE_CELL: &str = "FALSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub hyperlink: bool,
    pub link_label: String,
    pub done_column: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    pub data: String,
    pub phone: NormalizedPhone,
    pub previous: bool,
}

/// Writes the phone / link / done sheet; column order is fixed.
pub fn export_csv(records: &[OrderRecord], options: &ExportOptions) -> String {
    let mut out = String::from(UTF8_BOM);
    let mut header = vec![PHONE_HEADER, LINK_HEADER];
    if options.done_column {
        header.push(DONE_HEADER);
    }
    write_record(&mut out, &header, Delimiter::Comma);

    for record in records {
        let link = if options.hyperlink {
            hyperlink_formula(&record.link, &options.link_label)
        } else {
            record.link.clone()
        };
        let mut fields = vec![record.phone.display(), link];
        if options.done_column {
            fields.push(done_cell(record.done).to_string());
        }
        write_record(&mut out, &fields, Delimiter::Comma);
    }

    out
}

pub fn export_json(batch: &OrderBatch) -> Result<String> {
    let mut data = serde_json::to_string_pretty(batch)?;
    data.push('\n');
    Ok(data)
}

/// `=HYPERLINK("<url>", "<label>")`, quotes doubled as spreadsheets expect.
pub fn hyperlink_formula(url: &str, label: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\", \"{}\")",
        url.replace('"', "\"\""),
        label.replace('"', "\"\"")
    )
}

/// Rewrites the done flag of one row of a previously exported sheet.
pub fn mark_done_in_export(
    data: &str,
    phone: &NormalizedPhone,
    done: bool,
) -> Result<MarkOutcome> {
    let mut records = parse_records(data, Delimiter::Comma)?;
    let Some(header) = records.first_mut() else {
        return Err(SheetError::Parse("export is empty".to_string()));
    };
    if header.len() < 2 || header[0] != PHONE_HEADER || header[1] != LINK_HEADER {
        return Err(SheetError::Parse(format!(
            "not an order export: expected columns {PHONE_HEADER}, {LINK_HEADER}"
        )));
    }
    if header.len() < 3 {
        header.push(DONE_HEADER.to_string());
    }

    let mut previous = None;
    for row in records.iter_mut().skip(1) {
        if row.len() < 3 {
            row.resize(3, FALSE_CELL.to_string());
        }
        let matches = row
            .first()
            .and_then(|cell| normalize_phone(cell))
            .is_some_and(|found| &found == phone);
        if matches && previous.is_none() {
            previous = Some(parse_done_cell(&row[2])?);
            row[2] = done_cell(done).to_string();
        }
    }

    let previous = previous.ok_or_else(|| CoreError::UnknownPhone(phone.display()))?;

    let mut out = String::from(UTF8_BOM);
    for record in &records {
        write_record(&mut out, record, Delimiter::Comma);
    }
    Ok(MarkOutcome {
        data: out,
        phone: phone.clone(),
        previous,
    })
}

fn done_cell(done: bool) -> &'static str {
    if done {
        TRUE_CELL
    } else {
        FALSE_CELL
    }
}

fn parse_done_cell(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(SheetError::Parse(format!("invalid done value: {other}"))),
    }
}
