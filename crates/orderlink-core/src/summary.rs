use crate::domain::{Sheet, SheetRow};
use crate::layout::SheetLayout;

pub const FRAGMENT_SEPARATOR: &str = "، ";

const PLACEHOLDER_ITEM_LABEL: &str = "صنف";

// Only these literals count as an empty quantity; "00" or "0,0" are kept.
const ZERO_QUANTITIES: [&str; 2] = ["0", "0.0"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Start every item fragment on its own line.
    pub items_on_new_lines: bool,
}

/// Builds the notes + item quantities phrase for one row.
pub fn build_summary_phrase(
    sheet: &Sheet,
    row: &SheetRow,
    layout: &SheetLayout,
    options: SummaryOptions,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(note) = row.cell(layout.notes_column).map(str::trim) {
        if !note.is_empty() {
            parts.push(note.to_string());
        }
    }

    for idx in layout.item_columns_within(row.len()) {
        let Some(value) = row.cell(idx).map(str::trim) else {
            continue;
        };
        if value.is_empty() || ZERO_QUANTITIES.contains(&value) {
            continue;
        }

        let label = item_label(sheet, idx);
        if options.items_on_new_lines {
            parts.push(format!("\n{label}: {value}"));
        } else {
            parts.push(format!("{label}: {value}"));
        }
    }

    parts.join(FRAGMENT_SEPARATOR)
}

/// Trimmed text of the total column, empty when absent.
pub fn total_text(row: &SheetRow, layout: &SheetLayout) -> String {
    row.cell(layout.total_column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn item_label(sheet: &Sheet, idx: usize) -> String {
    match sheet.header(idx) {
        Some(label) => label.to_string(),
        None => format!("{PLACEHOLDER_ITEM_LABEL} {}", idx + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_summary_phrase, total_text, SummaryOptions};
    use crate::domain::{Sheet, SheetRow};
    use crate::layout::SheetLayout;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn phrase(sheet: &Sheet, row: &SheetRow) -> String {
        build_summary_phrase(sheet, row, &SheetLayout::default(), SummaryOptions::default())
    }

    #[test]
    fn phrase_combines_notes_and_items() {
        let sheet = Sheet::new(
            headers(&["ملاحظات", "_", "_", "إجمالي", "صنف1", "صنف2"]),
            vec![],
        );
        let row = SheetRow::from_values(["ملاحظة أولى", "x", "y", "150", "3", "0"]);
        assert_eq!(phrase(&sheet, &row), "ملاحظة أولى، صنف1: 3");
    }

    #[test]
    fn phrase_suppresses_literal_zero_quantities_only() {
        let sheet = Sheet::new(headers(&["n", "a", "b", "t", "i1", "i2", "i3", "i4"]), vec![]);
        let row = SheetRow::from_values(["", "", "", "", "0", " 0.0 ", "00", "0,0"]);
        assert_eq!(phrase(&sheet, &row), "i3: 00، i4: 0,0");
    }

    #[test]
    fn phrase_trims_values_and_skips_blank_cells() {
        let sheet = Sheet::new(headers(&["n", "a", "b", "t", "i1", "i2"]), vec![]);
        let row = SheetRow::new([
            Some("  "),
            None,
            None,
            None,
            Some("   "),
            Some(" 2 "),
        ]);
        assert_eq!(phrase(&sheet, &row), "i2: 2");
    }

    #[test]
    fn phrase_synthesizes_labels_past_header() {
        let sheet = Sheet::new(headers(&["n", "a", "b", "t", "i1"]), vec![]);
        let row = SheetRow::from_values(["", "", "", "", "1", "2"]);
        assert_eq!(phrase(&sheet, &row), "i1: 1، صنف 6: 2");
    }

    #[test]
    fn phrase_ignores_columns_beyond_item_range() {
        let sheet = Sheet::default();
        let mut values = vec![""; 13];
        values[11] = "5";
        values[12] = "9";
        let row = SheetRow::from_values(values);
        assert_eq!(phrase(&sheet, &row), "صنف 12: 5");
    }

    #[test]
    fn phrase_is_empty_for_short_rows() {
        let sheet = Sheet::default();
        let row = SheetRow::from_values(["", "x"]);
        assert_eq!(phrase(&sheet, &row), "");
    }

    #[test]
    fn phrase_can_put_items_on_new_lines() {
        let sheet = Sheet::new(headers(&["n", "a", "b", "t", "i1", "i2"]), vec![]);
        let row = SheetRow::from_values(["note", "", "", "", "1", "2"]);
        let value = build_summary_phrase(
            &sheet,
            &row,
            &SheetLayout::default(),
            SummaryOptions {
                items_on_new_lines: true,
            },
        );
        assert_eq!(value, "note، \ni1: 1، \ni2: 2");
    }

    #[test]
    fn total_text_is_trimmed_or_empty() {
        let layout = SheetLayout::default();
        let row = SheetRow::from_values(["", "", "", " 150 "]);
        assert_eq!(total_text(&row, &layout), "150");
        let short = SheetRow::from_values(["", ""]);
        assert_eq!(total_text(&short, &layout), "");
    }
}
