use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_alert::errors::PriceAlertError;
use crate::domain::price_alert::model::PriceAlert;
use crate::domain::price_alert::repository::PriceAlertRepository;
use crate::domain::price_alert::use_cases::get_all::{
    GetAllPriceAlertsParams, GetAllPriceAlertsUseCase,
};

pub struct GetAllPriceAlertsUseCaseImpl {
    pub repository: Arc<dyn PriceAlertRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPriceAlertsUseCase for GetAllPriceAlertsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllPriceAlertsParams,
    ) -> Result<Vec<PriceAlert>, PriceAlertError> {
        let owner = params
            .context
            .current_user()
            .ok_or(PriceAlertError::Unauthorized)?;
        self.logger.info(&format!("Fetching price alerts for {}", owner));

        Ok(self.repository.get_all_by_owner(owner).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::SecurityContext;
    use crate::test_support::{MockPriceAlertRepo, mock_logger, owner_context};

    #[tokio::test]
    async fn should_query_alerts_of_caller() {
        let mut mock_repo = MockPriceAlertRepo::new();
        mock_repo
            .expect_get_all_by_owner()
            .withf(|owner| owner.as_str() == "user-123")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let use_case = GetAllPriceAlertsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let alerts = use_case
            .execute(GetAllPriceAlertsParams {
                context: owner_context(),
            })
            .await
            .unwrap();

        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = GetAllPriceAlertsUseCaseImpl {
            repository: Arc::new(MockPriceAlertRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllPriceAlertsParams {
                context: SecurityContext::anonymous(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), PriceAlertError::Unauthorized));
    }
}
