use crate::domain::model::{BaseRecord, ReportRecord, RowContext};
use crate::utils::error::Result;

/// File-system collaborator used by the report generator.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_to_string(&self, path: &str) -> Result<String>;
    /// Writes `data` as `file_name`, replacing any previous content.
    /// Returns the location that was written.
    fn write_report(&self, file_name: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn files(&self) -> &[String];
    fn report(&self) -> &str;
    fn report_type(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn delimiter(&self) -> u8;
}

/// One report type: how its extra fields are derived and how a full record is assembled.
pub trait ReportVariant {
    type Record: ReportRecord;
    type Extra;

    fn name(&self) -> &'static str;

    fn compute_extra(&self, ctx: &RowContext<'_>) -> Self::Extra;

    fn assemble(&self, base: BaseRecord, extra: Self::Extra) -> Self::Record;
}
