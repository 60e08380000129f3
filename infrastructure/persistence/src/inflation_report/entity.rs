use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::inflation_report::model::{Category, InflationReport};

use crate::db::parse_column;

#[derive(Debug, FromRow)]
pub struct InflationReportEntity {
    pub uuid: Uuid,
    pub report_type: String,
    pub category_uuid: Uuid,
    pub category_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub inflation_rate: BigDecimal,
}

impl InflationReportEntity {
    pub fn into_domain(self) -> Result<InflationReport, RepositoryError> {
        Ok(InflationReport {
            uuid: self.uuid,
            report_type: parse_column("inflation_reports.report_type", &self.report_type)?,
            category: Category {
                uuid: self.category_uuid,
                name: self.category_name,
            },
            start_date: self.start_date,
            end_date: self.end_date,
            inflation_rate: self.inflation_rate,
        })
    }
}
