pub mod cli;

#[cfg(feature = "cli")]
use crate::core::registry::DEFAULT_REPORT_TYPE;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_delimiter, validate_non_empty_list, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "timesheet-report")]
#[command(about = "Builds a JSON payroll report from delimited timesheet files")]
pub struct CliConfig {
    /// Timesheet files; paths that do not exist are skipped
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,

    /// Report name; output is written to <REPORT>.json
    #[arg(long)]
    pub report: String,

    #[arg(long, default_value = DEFAULT_REPORT_TYPE)]
    pub report_type: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("files", &self.files)?;
        validate_non_empty_string("report", &self.report)?;
        validate_path("report", &self.report)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_delimiter("delimiter", self.delimiter)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn files(&self) -> &[String] {
        &self.files
    }

    fn report(&self) -> &str {
        &self.report
    }

    fn report_type(&self) -> &str {
        &self.report_type
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn delimiter(&self) -> u8 {
        // validate() 已確認為 ASCII
        self.delimiter as u8
    }
}
