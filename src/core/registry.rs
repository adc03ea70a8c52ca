use crate::core::generator::{ReportGenerator, ReportJob, ReportRun};
use crate::core::payout::PayoutReport;
use crate::utils::error::{ReportError, Result};

pub type GeneratorFactory = fn(ReportJob) -> Box<dyn ReportRun>;

pub const DEFAULT_REPORT_TYPE: &str = "payout";

/// Report types by name, kept in registration order.
pub struct ReportRegistry {
    entries: Vec<(&'static str, GeneratorFactory)>,
}

fn payout_generator(job: ReportJob) -> Box<dyn ReportRun> {
    Box::new(ReportGenerator::new(PayoutReport, job))
}

impl ReportRegistry {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 新的報表類型在這裡註冊。
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("payout", payout_generator);
        registry
    }

    /// Adds a report type, replacing an earlier one with the same name.
    pub fn register(&mut self, name: &'static str, factory: GeneratorFactory) -> &mut Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((name, factory)),
        }
        self
    }

    pub fn report_types(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn create(&self, report_type: &str, job: ReportJob) -> Result<Box<dyn ReportRun>> {
        self.entries
            .iter()
            .find(|(name, _)| *name == report_type)
            .map(|(_, factory)| factory(job))
            .ok_or_else(|| ReportError::UnknownReportTypeError {
                requested: report_type.to_string(),
                available: self.report_types().iter().map(|s| s.to_string()).collect(),
            })
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
