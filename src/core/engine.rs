use crate::core::generator::{ReportJob, RunSummary};
use crate::core::registry::ReportRegistry;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct ReportEngine<S: Storage> {
    registry: ReportRegistry,
    storage: S,
}

impl<S: Storage> ReportEngine<S> {
    pub fn new(storage: S) -> Self {
        Self::with_registry(ReportRegistry::builtin(), storage)
    }

    pub fn with_registry(registry: ReportRegistry, storage: S) -> Self {
        Self { registry, storage }
    }

    pub fn registry(&self) -> &ReportRegistry {
        &self.registry
    }

    /// Runs one report, writing a trace line per record to `trace`.
    pub fn run<C: ConfigProvider>(&self, config: &C, trace: &mut dyn Write) -> Result<RunSummary> {
        let job = ReportJob::new(config.files().to_vec(), config.report())
            .with_delimiter(config.delimiter());
        let mut generator = self.registry.create(config.report_type(), job)?;

        tracing::info!(
            "Building '{}' report from {} file(s)",
            generator.report_type(),
            config.files().len()
        );
        let summary = generator.run(&self.storage, trace)?;
        trace.flush()?;

        tracing::info!(
            "Processed {} file(s) ({} missing, {} empty), {} records",
            summary.files_processed,
            summary.files_missing,
            summary.files_empty,
            summary.records
        );
        if let Some(path) = &summary.report_path {
            tracing::info!("📁 Report saved to: {}", path);
        }

        Ok(summary)
    }
}
