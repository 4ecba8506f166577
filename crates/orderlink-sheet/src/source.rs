use crate::csv::{parse_sheet, Delimiter};
use crate::error::{Result, SheetError};
use orderlink_core::Sheet;
use std::fs;
use std::path::{Path, PathBuf};

pub trait SheetSource {
    fn source_name(&self) -> String;
    fn fetch_sheet(&self) -> Result<Sheet>;
}

/// An order sheet saved as `.csv` or `.tsv`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    delimiter: Delimiter,
}

impl FileSource {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let delimiter = delimiter_for(&path)?;
        Ok(Self { path, delimiter })
    }
}

impl SheetSource for FileSource {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_sheet(&self) -> Result<Sheet> {
        let bytes = fs::read(&self.path)?;
        let data = String::from_utf8(bytes).map_err(|_| {
            SheetError::Parse(format!("{} is not valid UTF-8", self.path.display()))
        })?;
        parse_sheet(&data, self.delimiter)
    }
}

pub fn delimiter_for(path: &Path) -> Result<Delimiter> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => Ok(Delimiter::Comma),
        Some("tsv") | Some("tab") => Ok(Delimiter::Tab),
        Some(other) => Err(SheetError::Unsupported(format!(
            ".{other} (save the sheet as .csv or .tsv)"
        ))),
        None => Err(SheetError::Unsupported(format!(
            "{} has no file extension",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{delimiter_for, FileSource, SheetSource};
    use crate::csv::Delimiter;
    use crate::error::SheetError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(
            delimiter_for(Path::new("orders.CSV")).unwrap(),
            Delimiter::Comma
        );
        assert_eq!(
            delimiter_for(Path::new("orders.tsv")).unwrap(),
            Delimiter::Tab
        );
        let err = delimiter_for(Path::new("orders.xlsx")).unwrap_err();
        assert!(matches!(err, SheetError::Unsupported(_)));
    }

    #[test]
    fn file_source_reads_sheet() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("orders.csv");
        fs::write(&path, "notes,phone\nrush,01012345678\n").expect("write");

        let source = FileSource::open(&path).expect("open");
        let sheet = source.fetch_sheet().expect("fetch");
        assert_eq!(sheet.rows.len(), 1);
        assert!(source.source_name().ends_with("orders.csv"));
    }

    #[test]
    fn file_source_rejects_invalid_utf8() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("orders.csv");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).expect("write");

        let err = FileSource::open(&path)
            .expect("open")
            .fetch_sheet()
            .unwrap_err();
        assert!(matches!(err, SheetError::Parse(_)));
    }
}
