use crate::core::parser::parse_int_or_default;
use crate::domain::model::{BaseRecord, PayoutRecord, RowContext};
use crate::domain::ports::ReportVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutExtra {
    pub rate: i64,
    pub payout: i64,
}

/// payout = hours_worked × rate，rate 取自第一個非基礎欄位。
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutReport;

impl ReportVariant for PayoutReport {
    type Record = PayoutRecord;
    type Extra = PayoutExtra;

    fn name(&self) -> &'static str {
        "payout"
    }

    fn compute_extra(&self, ctx: &RowContext<'_>) -> PayoutExtra {
        let rate = ctx.raw(ctx.extra_index).map(parse_int_or_default).unwrap_or(0);
        let payout = ctx.base.hours_worked.saturating_mul(rate);
        PayoutExtra { rate, payout }
    }

    fn assemble(&self, base: BaseRecord, extra: PayoutExtra) -> PayoutRecord {
        PayoutRecord {
            base,
            rate: extra.rate,
            payout: extra.payout,
        }
    }
}
