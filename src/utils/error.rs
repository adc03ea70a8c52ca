use crate::core::trace::format_trace_line;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{path}:{line}: column '{column}' at index {index} is missing (row has {width} values)")]
    MissingColumnError {
        path: String,
        line: usize,
        column: String,
        index: usize,
        width: usize,
    },

    #[error("Unknown report type '{requested}'. Available report types: {}", format_trace_line(.available))]
    UnknownReportTypeError {
        requested: String,
        available: Vec<String>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("無法讀寫檔案: {}", e),
            ReportError::SerializationError(e) => format!("無法輸出 JSON 報表: {}", e),
            ReportError::CsvError(e) => format!("無法解析資料列: {}", e),
            ReportError::MissingColumnError {
                path, line, column, ..
            } => format!("{} 第 {} 行缺少欄位 '{}'", path, line, column),
            ReportError::UnknownReportTypeError {
                requested,
                available,
            } => format!(
                "Cannot build report '{}'. Available reports: {}",
                requested,
                format_trace_line(available)
            ),
            ReportError::ConfigError { message } => format!("設定錯誤: {}", message),
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("參數 {} 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::IoError(_) => "Check that the input files are readable and the output directory is writable",
            ReportError::SerializationError(_) => "Re-run the report; the accumulated records could not be encoded",
            ReportError::CsvError(_) => "Check the delimiter and encoding of the input files",
            ReportError::MissingColumnError { .. } => {
                "Make sure every data row has as many values as the header has columns"
            }
            ReportError::UnknownReportTypeError { .. } => "Pick one of the listed report types",
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
