use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use super::value_objects::ReportType;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub uuid: Uuid,
    pub name: String,
}

/// Price inflation measured for one category over a date range.
/// Reports are produced elsewhere; this service only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct InflationReport {
    pub uuid: Uuid,
    pub report_type: ReportType,
    pub category: Category,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percentage change over the period, e.g. `3.20`.
    pub inflation_rate: BigDecimal,
}
