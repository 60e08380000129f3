use chrono::NaiveDate;
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::inflation_report::model::InflationReport;

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct InflationReportSummary {
    pub uuid: Uuid,
    pub report_type: String,
    pub category_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percentage as a decimal string
    pub inflation_rate: String,
}

impl From<&InflationReport> for InflationReportSummary {
    fn from(report: &InflationReport) -> Self {
        Self {
            uuid: report.uuid,
            report_type: report.report_type.to_string(),
            category_name: report.category.name.clone(),
            start_date: report.start_date,
            end_date: report.end_date,
            inflation_rate: report.inflation_rate.to_string(),
        }
    }
}
