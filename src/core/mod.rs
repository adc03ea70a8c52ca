pub mod engine;
pub mod generator;
pub mod parser;
pub mod payout;
pub mod registry;
pub mod trace;

pub use crate::domain::model::{BaseRecord, Header, PayoutRecord, ReportRecord, RowContext};
pub use crate::domain::ports::{ConfigProvider, ReportVariant, Storage};
pub use crate::utils::error::Result;
