use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::GetAllItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Item>, ItemError> {
        self.logger.info("Fetching all items");

        let items = self.repository.get_all().await?;

        self.logger.debug(&format!("Found {} items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockItemRepo, mock_logger, sample_item};

    #[tokio::test]
    async fn should_return_items_in_repository_order() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![sample_item("Apples"), sample_item("Bread")]));

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let items = use_case.execute().await.unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apples", "Bread"]);
    }
}
