//! Public directory and menu handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use kitchen_core::domain::{Kitchen, KitchenWithRelations, Location, OrderingLink};
use kitchen_core::services::LocationKitchens;

use crate::dto::CategoryGroupDto;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct KitchenMenuResponse {
    pub kitchen: Kitchen,
    pub categories: Vec<CategoryGroupDto>,
    pub ordering_links: Vec<OrderingLink>,
}

/// GET /api/kitchens - the public index of every kitchen with its menu
/// and ordering links.
pub async fn list_kitchens(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<KitchenWithRelations>>>, ApiError> {
    let kitchens = state.catalog.list_kitchens().await?;
    Ok(Json(ApiResponse::success(kitchens)))
}

/// GET /api/kitchens/{id} - one kitchen's menu, grouped into ordered
/// categories with tags parsed for display.
pub async fn kitchen_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<KitchenMenuResponse>>, ApiError> {
    let menu = state.catalog.kitchen_menu(&id).await?;
    let categories = menu.categories.iter().map(CategoryGroupDto::from).collect();
    Ok(Json(ApiResponse::success(KitchenMenuResponse {
        kitchen: menu.kitchen,
        categories,
        ordering_links: menu.ordering_links,
    })))
}

/// GET /api/locations - active locations in listing order.
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Location>>>, ApiError> {
    let locations = state.directory.list_locations().await?;
    Ok(Json(ApiResponse::success(locations)))
}

/// GET /api/locations/{nick}/kitchens - resolve the nickname through the
/// fallback chain and list the location's active kitchens.
pub async fn location_kitchens(
    State(state): State<AppState>,
    Path(nick): Path<String>,
) -> Result<Json<ApiResponse<LocationKitchens>>, ApiError> {
    let page = state.directory.location_kitchens(Some(&nick)).await?;
    Ok(Json(ApiResponse::success(page)))
}
