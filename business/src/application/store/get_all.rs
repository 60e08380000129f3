use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::get_all::GetAllStoresUseCase;

pub struct GetAllStoresUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllStoresUseCase for GetAllStoresUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Store>, StoreError> {
        self.logger.info("Fetching all stores");
        Ok(self.repository.get_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockStoreRepo, mock_logger, sample_store};

    #[tokio::test]
    async fn should_return_all_stores() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![sample_store("Bakery"), sample_store("Market")]));

        let use_case = GetAllStoresUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_map_repository_failure() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllStoresUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            StoreError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
