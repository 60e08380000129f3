use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::InflationReport;
use super::value_objects::ReportType;

#[async_trait]
pub trait InflationReportRepository: Send + Sync {
    /// Reports newest first, optionally restricted to one report type.
    async fn get_all(
        &self,
        report_type: Option<ReportType>,
    ) -> Result<Vec<InflationReport>, RepositoryError>;
}
