use async_trait::async_trait;

use crate::domain::inflation_report::errors::InflationReportError;
use crate::domain::inflation_report::model::InflationReport;
use crate::domain::inflation_report::value_objects::ReportType;
use crate::domain::shared::value_objects::parse_optional;

pub struct GetInflationReportsParams {
    pub report_type: Option<ReportType>,
}

impl GetInflationReportsParams {
    pub fn new(report_type: Option<&str>) -> Result<Self, InflationReportError> {
        Ok(Self {
            report_type: parse_optional(report_type, || InflationReportError::InvalidReportType)?,
        })
    }
}

#[async_trait]
pub trait GetInflationReportsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetInflationReportsParams,
    ) -> Result<Vec<InflationReport>, InflationReportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_missing_filter() {
        let params = GetInflationReportsParams::new(None).unwrap();
        assert!(params.report_type.is_none());
    }

    #[test]
    fn should_parse_filter() {
        let params = GetInflationReportsParams::new(Some("QUARTERLY")).unwrap();
        assert_eq!(params.report_type, Some(ReportType::Quarterly));
    }

    #[test]
    fn should_reject_unknown_filter() {
        assert!(matches!(
            GetInflationReportsParams::new(Some("WEEKLY")),
            Err(InflationReportError::InvalidReportType)
        ));
    }
}
