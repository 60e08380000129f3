#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.invalid_quantity")]
    InvalidQuantity,
    #[error("shopping_list.invalid_price")]
    InvalidPrice,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.entry_not_found")]
    EntryNotFound,
    #[error("shopping_list.item_not_found")]
    ItemNotFound,
    #[error("shopping_list.store_not_found")]
    StoreNotFound,
    #[error("shopping_list.unauthorized")]
    Unauthorized,
    #[error("shopping_list.forbidden")]
    Forbidden,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
