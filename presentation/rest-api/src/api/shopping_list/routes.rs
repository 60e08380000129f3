use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::shopping_list::errors::ShoppingListError;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::use_cases::add_item::{
    AddShoppingListItemParams, AddShoppingListItemUseCase,
};
use business::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::get_all::{
    GetAllShoppingListsParams, GetAllShoppingListsUseCase,
};
use business::domain::shopping_list::use_cases::get_by_uuid::{
    GetShoppingListParams, GetShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::update_item::{
    UpdateShoppingListItemParams, UpdateShoppingListItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::security::JwtBearer;
use crate::api::shopping_list::dto::{
    AddShoppingListItemRequest, CreateShoppingListRequest, ShoppingListDetail,
    ShoppingListSummary, UpdateShoppingListItemRequest, UpdateShoppingListRequest,
};
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    create_use_case: Arc<dyn CreateShoppingListUseCase>,
    get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
    get_by_uuid_use_case: Arc<dyn GetShoppingListUseCase>,
    update_use_case: Arc<dyn UpdateShoppingListUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
    add_item_use_case: Arc<dyn AddShoppingListItemUseCase>,
    update_item_use_case: Arc<dyn UpdateShoppingListItemUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingListUseCase>,
        get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
        get_by_uuid_use_case: Arc<dyn GetShoppingListUseCase>,
        update_use_case: Arc<dyn UpdateShoppingListUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
        add_item_use_case: Arc<dyn AddShoppingListItemUseCase>,
        update_item_use_case: Arc<dyn UpdateShoppingListItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_uuid_use_case,
            update_use_case,
            delete_use_case,
            add_item_use_case,
            update_item_use_case,
        }
    }
}

/// Shopping list management API
///
/// Every list belongs to the caller that created it; other callers get 403.
#[OpenApi]
impl ShoppingListApi {
    /// List the caller's shopping lists
    #[oai(path = "/shopping-lists", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_all(&self, auth: JwtBearer) -> GetAllShoppingListsResponse {
        let params = GetAllShoppingListsParams {
            context: auth.context(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(lists) => GetAllShoppingListsResponse::Ok(Json(list_of_summaries(&lists))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllShoppingListsResponse::Unauthorized(json),
                    _ => GetAllShoppingListsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a shopping list
    #[oai(path = "/shopping-lists", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn create(
        &self,
        auth: JwtBearer,
        body: Json<CreateShoppingListRequest>,
    ) -> CreateShoppingListResponse {
        let params = CreateShoppingListParams {
            context: auth.context(),
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateShoppingListResponse::Created(Json(ShoppingListDetail::from(&list))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingListResponse::BadRequest(json),
                    401 => CreateShoppingListResponse::Unauthorized(json),
                    _ => CreateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a shopping list with its items
    #[oai(path = "/shopping-lists/:uuid", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_by_uuid(&self, auth: JwtBearer, uuid: Path<String>) -> ShoppingListDetailResponse {
        let uuid = match parse_uuid(&uuid.0, "shopping_list.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };

        let params = GetShoppingListParams {
            context: auth.context(),
            uuid,
        };
        ShoppingListDetailResponse::from_result(self.get_by_uuid_use_case.execute(params).await)
    }

    /// Update a shopping list
    ///
    /// Only the fields present in the body are changed.
    #[oai(path = "/shopping-lists/:uuid", method = "patch", tag = "ApiTags::ShoppingLists")]
    async fn update(
        &self,
        auth: JwtBearer,
        uuid: Path<String>,
        body: Json<UpdateShoppingListRequest>,
    ) -> ShoppingListDetailResponse {
        let uuid = match parse_uuid(&uuid.0, "shopping_list.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };

        let result = match body.0.into_patch() {
            Ok(patch) => {
                self.update_use_case
                    .execute(UpdateShoppingListParams {
                        context: auth.context(),
                        uuid,
                        patch,
                    })
                    .await
            }
            Err(err) => Err(err),
        };
        ShoppingListDetailResponse::from_result(result)
    }

    /// Delete a shopping list and its items
    #[oai(path = "/shopping-lists/:uuid", method = "delete", tag = "ApiTags::ShoppingLists")]
    async fn delete(&self, auth: JwtBearer, uuid: Path<String>) -> DeleteShoppingListResponse {
        let uuid = match parse_uuid(&uuid.0, "shopping_list.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return DeleteShoppingListResponse::BadRequest(json),
        };

        let params = DeleteShoppingListParams {
            context: auth.context(),
            uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteShoppingListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteShoppingListResponse::Unauthorized(json),
                    403 => DeleteShoppingListResponse::Forbidden(json),
                    404 => DeleteShoppingListResponse::NotFound(json),
                    _ => DeleteShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a shopping list
    #[oai(path = "/shopping-lists/:uuid/items", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn add_item(
        &self,
        auth: JwtBearer,
        uuid: Path<String>,
        body: Json<AddShoppingListItemRequest>,
    ) -> ShoppingListDetailResponse {
        let list_uuid = match parse_uuid(&uuid.0, "shopping_list.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };
        let item_uuid = match parse_uuid(&body.0.item_uuid, "shopping_list.invalid_item_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };
        let store_uuid = match body.0.store_uuid.as_deref() {
            Some(raw) => match parse_uuid(raw, "shopping_list.invalid_store_id") {
                Ok(uuid) => Some(uuid),
                Err(json) => return ShoppingListDetailResponse::BadRequest(json),
            },
            None => None,
        };

        let params = AddShoppingListItemParams {
            context: auth.context(),
            list_uuid,
            item_uuid,
            store_uuid,
            quantity: body.0.quantity,
        };
        ShoppingListDetailResponse::from_result(self.add_item_use_case.execute(params).await)
    }

    /// Update an item of a shopping list, e.g. mark it purchased
    #[oai(
        path = "/shopping-lists/:uuid/items/:item_uuid",
        method = "patch",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn update_item(
        &self,
        auth: JwtBearer,
        uuid: Path<String>,
        item_uuid: Path<String>,
        body: Json<UpdateShoppingListItemRequest>,
    ) -> ShoppingListDetailResponse {
        let list_uuid = match parse_uuid(&uuid.0, "shopping_list.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };
        let entry_uuid = match parse_uuid(&item_uuid.0, "shopping_list.invalid_entry_id") {
            Ok(uuid) => uuid,
            Err(json) => return ShoppingListDetailResponse::BadRequest(json),
        };

        let result = match body.0.into_patch() {
            Ok(patch) => {
                self.update_item_use_case
                    .execute(UpdateShoppingListItemParams {
                        context: auth.context(),
                        list_uuid,
                        entry_uuid,
                        patch,
                    })
                    .await
            }
            Err(err) => Err(err),
        };
        ShoppingListDetailResponse::from_result(result)
    }
}

#[derive(ApiResponse)]
pub enum GetAllShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListSummary>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListDetail>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of every endpoint that answers with the full list.
#[derive(ApiResponse)]
pub enum ShoppingListDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListDetail>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ShoppingListDetailResponse {
    fn from_result(
        result: Result<ShoppingList, ShoppingListError>,
    ) -> Self {
        match result {
            Ok(list) => Self::Ok(Json(ShoppingListDetail::from(&list))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    401 => Self::Unauthorized(json),
                    403 => Self::Forbidden(json),
                    404 => Self::NotFound(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteShoppingListResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
