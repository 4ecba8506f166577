use crate::error::CoreError;
use std::ops::RangeInclusive;

pub const DEFAULT_NOTES_COLUMN: usize = 0;
pub const DEFAULT_TOTAL_COLUMN: usize = 3;
pub const DEFAULT_ITEM_START: usize = 4;
pub const DEFAULT_ITEM_END: usize = 11;

/// Fixed positional schema of an order sheet, all indices 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub notes_column: usize,
    pub total_column: usize,
    item_columns: RangeInclusive<usize>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            notes_column: DEFAULT_NOTES_COLUMN,
            total_column: DEFAULT_TOTAL_COLUMN,
            item_columns: DEFAULT_ITEM_START..=DEFAULT_ITEM_END,
        }
    }
}

impl SheetLayout {
    pub fn new(
        notes_column: usize,
        total_column: usize,
        item_start: usize,
        item_end: usize,
    ) -> Result<Self, CoreError> {
        if item_start > item_end {
            return Err(CoreError::InvalidItemRange {
                start: item_start,
                end: item_end,
            });
        }
        Ok(Self {
            notes_column,
            total_column,
            item_columns: item_start..=item_end,
        })
    }

    pub fn item_columns(&self) -> RangeInclusive<usize> {
        self.item_columns.clone()
    }

    /// Item indices that exist in a row of `row_len` cells.
    pub fn item_columns_within(&self, row_len: usize) -> RangeInclusive<usize> {
        let start = *self.item_columns.start();
        match row_len.checked_sub(1) {
            Some(last) => start..=(*self.item_columns.end()).min(last),
            None => 1..=0,
        }
    }

    /// Number of columns a sheet needs to honor every configured position.
    pub fn required_columns(&self) -> usize {
        self.notes_column
            .max(self.total_column)
            .max(*self.item_columns.end())
            + 1
    }
}
