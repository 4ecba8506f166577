/// In-memory snapshot of an order sheet: the header labels and the data rows
/// beneath them. Rows may be shorter or longer than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: Vec<Option<String>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<SheetRow>) -> Self {
        Self { headers, rows }
    }

    /// Label of the header at `index`, if present and not blank.
    pub fn header(&self, index: usize) -> Option<&str> {
        self.headers
            .get(index)
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
    }

    /// Widest of the header row and every data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(SheetRow::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

impl SheetRow {
    /// Empty strings are stored as absent cells.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let cells = cells
            .into_iter()
            .map(|cell| cell.map(Into::into).filter(|value: &String| !value.is_empty()))
            .collect();
        Self { cells }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(Some))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }

    pub fn cells(&self) -> impl Iterator<Item = Option<&str>> {
        self.cells.iter().map(|cell| cell.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::{Sheet, SheetRow};

    #[test]
    fn empty_cells_are_absent() {
        let row = SheetRow::from_values(["a", "", "c"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.cell(0), Some("a"));
        assert_eq!(row.cell(1), None);
        assert_eq!(row.cell(7), None);
    }

    #[test]
    fn blank_headers_are_missing() {
        let sheet = Sheet::new(vec!["notes".to_string(), "  ".to_string()], vec![]);
        assert_eq!(sheet.header(0), Some("notes"));
        assert_eq!(sheet.header(1), None);
        assert_eq!(sheet.header(2), None);
    }

    #[test]
    fn column_count_covers_ragged_rows() {
        let sheet = Sheet::new(
            vec!["a".to_string()],
            vec![SheetRow::from_values(["1", "2", "3"])],
        );
        assert_eq!(sheet.column_count(), 3);
    }
}
