use crate::domain::{first_phone_in_row, NormalizedPhone, OrderRecord, Sheet};
use crate::error::CoreError;
use crate::layout::SheetLayout;
use crate::link::build_link;
use crate::message::MessageTemplate;
use crate::summary::{build_summary_phrase, total_text, SummaryOptions};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub layout: SheetLayout,
    pub template: MessageTemplate,
    pub summary: SummaryOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub records: usize,
    pub without_phone: usize,
    pub duplicates: usize,
    pub warnings: Vec<String>,
}

/// Records produced by one pipeline run, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderBatch {
    pub records: Vec<OrderRecord>,
    pub report: RunReport,
}

impl OrderBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sets the completion flag of the record keyed by `phone`.
    pub fn mark_done(&mut self, phone: &NormalizedPhone, done: bool) -> Result<(), CoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.phone == phone)
            .ok_or_else(|| CoreError::UnknownPhone(phone.display()))?;
        record.done = done;
        Ok(())
    }
}

pub fn run_pipeline(sheet: &Sheet, options: &PipelineOptions) -> OrderBatch {
    let mut report = RunReport {
        rows: sheet.rows.len(),
        ..RunReport::default()
    };

    let required = options.layout.required_columns();
    let available = sheet.column_count();
    if available < required {
        report.warnings.push(format!(
            "sheet has {available} columns, expected at least {required}; some items will be missing"
        ));
    }

    let mut seen: HashSet<NormalizedPhone> = HashSet::new();
    let mut records = Vec::new();

    for row in &sheet.rows {
        let Some(phone) = first_phone_in_row(row.cells()) else {
            report.without_phone += 1;
            continue;
        };

        let total = total_text(row, &options.layout);
        let phrase = build_summary_phrase(sheet, row, &options.layout, options.summary);
        let message = options.template.render(&phrase, &total);
        let link = build_link(&phone, &message);

        if !seen.insert(phone.clone()) {
            report.duplicates += 1;
            continue;
        }

        records.push(OrderRecord::new(phone, message, link));
    }

    report.records = records.len();
    OrderBatch { records, report }
}
