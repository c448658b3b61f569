use crate::{
    audit::log_audit,
    dto::menu::{
        CreateMenuItemRequest, DeleteMenuItemQuery, DeleteOutcome, MenuList, MenuQuery,
        UpdateMenuItemRequest,
    },
    error::AppResult,
    models::{ItemId, MenuItem},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_menu(state: &AppState, query: MenuQuery) -> AppResult<ApiResponse<MenuList>> {
    let include_out_of_stock = query.include_out_of_stock.unwrap_or(false);
    let items = state.cafe.lock().await.list_menu(include_out_of_stock);
    let total = items.len() as i64;
    let message = if items.is_empty() && !include_out_of_stock {
        "All items are currently out of stock"
    } else {
        "Menu"
    };
    Ok(ApiResponse::success(
        message,
        MenuList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_menu_item(state: &AppState, id: ItemId) -> AppResult<ApiResponse<MenuItem>> {
    let item = state.cafe.lock().await.menu_item(id)?;
    Ok(ApiResponse::success("Menu item", item, None))
}

pub async fn create_menu_item(
    state: &AppState,
    payload: CreateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = state.cafe.lock().await.add_menu_item(
        &payload.name,
        payload.price,
        &payload.category,
        payload.stock,
    )?;

    tracing::info!(item_id = item.id, name = %item.name, "menu item added");
    log_audit(
        "menu_item_create",
        Some("menu"),
        Some(serde_json::json!({ "item_id": item.id, "name": item.name })),
    );

    Ok(ApiResponse::success(
        format!("Added {}", item.name),
        item,
        Some(Meta::empty()),
    ))
}

pub async fn update_menu_item(
    state: &AppState,
    id: ItemId,
    payload: UpdateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    let value = payload.value.as_text();
    let item = state
        .cafe
        .lock()
        .await
        .update_menu_item(id, &payload.field, &value)?;

    tracing::info!(item_id = id, field = %payload.field, "menu item updated");
    log_audit(
        "menu_item_update",
        Some("menu"),
        Some(serde_json::json!({ "item_id": id, "field": payload.field, "value": value })),
    );

    Ok(ApiResponse::success("Item updated", item, Some(Meta::empty())))
}

pub async fn delete_menu_item(
    state: &AppState,
    id: ItemId,
    query: DeleteMenuItemQuery,
) -> AppResult<ApiResponse<DeleteOutcome>> {
    let confirmed = query.confirm.unwrap_or(false);
    let removed = state.cafe.lock().await.delete_menu_item(id, confirmed)?;

    let Some(item) = removed else {
        tracing::debug!(item_id = id, "menu item deletion not confirmed");
        return Ok(ApiResponse::success(
            "Deletion cancelled",
            DeleteOutcome {
                deleted: false,
                item: None,
            },
            Some(Meta::empty()),
        ));
    };

    tracing::info!(item_id = id, name = %item.name, "menu item deleted");
    log_audit(
        "menu_item_delete",
        Some("menu"),
        Some(serde_json::json!({ "item_id": id, "name": item.name })),
    );

    Ok(ApiResponse::success(
        format!("Deleted {}", item.name),
        DeleteOutcome {
            deleted: true,
            item: Some(item),
        },
        Some(Meta::empty()),
    ))
}
