use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inflation_report::errors::InflationReportError;
use crate::domain::inflation_report::model::InflationReport;
use crate::domain::inflation_report::repository::InflationReportRepository;
use crate::domain::inflation_report::use_cases::get_all::{
    GetInflationReportsParams, GetInflationReportsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetInflationReportsUseCaseImpl {
    pub repository: Arc<dyn InflationReportRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInflationReportsUseCase for GetInflationReportsUseCaseImpl {
    async fn execute(
        &self,
        params: GetInflationReportsParams,
    ) -> Result<Vec<InflationReport>, InflationReportError> {
        match params.report_type {
            Some(report_type) => self
                .logger
                .info(&format!("Fetching {} inflation reports", report_type)),
            None => self.logger.info("Fetching all inflation reports"),
        }

        Ok(self.repository.get_all(params.report_type).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::inflation_report::model::Category;
    use crate::domain::inflation_report::value_objects::ReportType;
    use crate::test_support::{MockInflationReportRepo, mock_logger};

    fn dairy_report() -> InflationReport {
        InflationReport {
            uuid: Uuid::new_v4(),
            report_type: ReportType::Monthly,
            category: Category {
                uuid: Uuid::new_v4(),
                name: "Dairy".to_string(),
            },
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            inflation_rate: BigDecimal::from_str("2.75").unwrap(),
        }
    }

    #[tokio::test]
    async fn should_pass_filter_to_repository() {
        let mut mock_repo = MockInflationReportRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|report_type| *report_type == Some(ReportType::Monthly))
            .times(1)
            .returning(|_| Ok(vec![dairy_report()]));

        let use_case = GetInflationReportsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let reports = use_case
            .execute(GetInflationReportsParams::new(Some("MONTHLY")).unwrap())
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].category.name, "Dairy");
    }

    #[tokio::test]
    async fn should_fetch_everything_without_filter() {
        let mut mock_repo = MockInflationReportRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|report_type| report_type.is_none())
            .returning(|_| Ok(Vec::new()));

        let use_case = GetInflationReportsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let reports = use_case
            .execute(GetInflationReportsParams { report_type: None })
            .await
            .unwrap();

        assert!(reports.is_empty());
    }
}
