use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::menu::{
        CreateMenuItemRequest, DeleteMenuItemQuery, DeleteOutcome, MenuList, MenuQuery,
        UpdateMenuItemRequest,
    },
    error::AppResult,
    models::{ItemId, MenuItem},
    response::ApiResponse,
    services::menu_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_menu).post(create_menu_item))
        .route(
            "/{id}",
            get(get_menu_item)
                .patch(update_menu_item)
                .delete(delete_menu_item),
        )
}

#[utoipa::path(
    get,
    path = "/api/menu",
    params(MenuQuery),
    responses(
        (status = 200, description = "Menu items in id order", body = ApiResponse<MenuList>)
    ),
    tag = "Menu"
)]
pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<MenuList>>> {
    let resp = menu_service::list_menu(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/menu/{id}",
    params(
        ("id" = u32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Get menu item", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu"
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let resp = menu_service::get_menu_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/menu",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item added", body = ApiResponse<MenuItem>),
        (status = 422, description = "Invalid name, price, category or stock"),
    ),
    tag = "Menu"
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<MenuItem>>)> {
    let resp = menu_service::create_menu_item(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    patch,
    path = "/api/menu/{id}",
    params(
        ("id" = u32, Path, description = "Menu item ID")
    ),
    request_body = UpdateMenuItemRequest,
    responses(
        (status = 200, description = "Updated menu item", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
        (status = 422, description = "Invalid field or value"),
    ),
    tag = "Menu"
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let resp = menu_service::update_menu_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    params(
        ("id" = u32, Path, description = "Menu item ID"),
        DeleteMenuItemQuery,
    ),
    responses(
        (status = 200, description = "Deleted, or cancelled without confirm=true", body = ApiResponse<DeleteOutcome>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu"
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Query(query): Query<DeleteMenuItemQuery>,
) -> AppResult<Json<ApiResponse<DeleteOutcome>>> {
    let resp = menu_service::delete_menu_item(&state, id, query).await?;
    Ok(Json(resp))
}
