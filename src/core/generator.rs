use crate::core::parser::{parse_row, split_line, split_lines, ColumnLayout, RowLocation};
use crate::core::trace::format_trace_line;
use crate::domain::model::{Header, ReportRecord, RowContext};
use crate::domain::ports::{ReportVariant, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// Input of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    pub files: Vec<String>,
    pub report: String,
    pub delimiter: u8,
}

impl ReportJob {
    pub fn new(files: Vec<String>, report: impl Into<String>) -> Self {
        Self {
            files,
            report: report.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn report_file_name(&self) -> String {
        format!("{}.json", self.report)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_missing: usize,
    pub files_empty: usize,
    pub records: usize,
    /// Last location the report was written to; `None` when no file was processed.
    pub report_path: Option<String>,
}

/// Object-safe face of a generator, so the registry can hand out any variant.
pub trait ReportRun {
    fn report_type(&self) -> &'static str;

    fn run(&mut self, storage: &dyn Storage, trace: &mut dyn Write) -> Result<RunSummary>;
}

pub struct ReportGenerator<V: ReportVariant> {
    variant: V,
    job: ReportJob,
    records: Vec<V::Record>,
}

impl<V: ReportVariant> ReportGenerator<V> {
    pub fn new(variant: V, job: ReportJob) -> Self {
        Self {
            variant,
            job,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[V::Record] {
        &self.records
    }

    fn existing_files(&self, storage: &dyn Storage) -> Vec<String> {
        self.job
            .files
            .iter()
            .filter(|path| storage.exists(path))
            .cloned()
            .collect()
    }

    /// Parses every data row of one file; returns how many records it added.
    fn process_file(&mut self, path: &str, content: &str, trace: &mut dyn Write) -> Result<usize> {
        let mut lines = split_lines(content).into_iter().enumerate();
        let Some((_, first)) = lines.next() else {
            return Ok(0);
        };

        let first = first.strip_prefix('\u{feff}').unwrap_or(first);
        let header = Header::new(split_line(first, self.job.delimiter)?);
        let layout = ColumnLayout::from_header(&header);
        tracing::debug!(
            "{}: {} columns, extra column at {:?}, hours at {:?}",
            path,
            header.len(),
            layout.extra_index,
            layout.hours_index
        );

        let mut added = 0;
        for (i, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let location = RowLocation { path, line: i + 1 };
            let values = split_line(line, self.job.delimiter)?;
            let base = parse_row(&layout, &values, location)?;
            let extra = {
                let ctx = RowContext {
                    values: &values,
                    header: &header,
                    base: &base,
                    extra_index: layout.extra_index,
                    hours_index: layout.hours_index,
                };
                self.variant.compute_extra(&ctx)
            };
            let record = self.variant.assemble(base, extra);

            writeln!(trace, "{}", format_trace_line(&record.field_values()))?;
            self.records.push(record);
            added += 1;
        }

        Ok(added)
    }

    /// 每處理完一個檔案就以目前累積的全部資料覆寫報表。
    fn write_snapshot(&self, storage: &dyn Storage) -> Result<String> {
        let data = serde_json::to_vec_pretty(&self.records)?;
        storage.write_report(&self.job.report_file_name(), &data)
    }
}

impl<V: ReportVariant> ReportRun for ReportGenerator<V> {
    fn report_type(&self) -> &'static str {
        self.variant.name()
    }

    fn run(&mut self, storage: &dyn Storage, trace: &mut dyn Write) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let files = self.existing_files(storage);
        summary.files_missing = self.job.files.len() - files.len();

        for path in &files {
            let content = storage.read_to_string(path)?;
            if split_lines(&content).is_empty() {
                tracing::debug!("{}: empty file, skipped", path);
                summary.files_empty += 1;
                continue;
            }

            let added = self.process_file(path, &content, trace)?;
            tracing::debug!("{}: {} records", path, added);

            let written = self.write_snapshot(storage)?;
            summary.files_processed += 1;
            summary.report_path = Some(written);
        }

        summary.records = self.records.len();
        Ok(summary)
    }
}
