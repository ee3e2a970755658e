// ============================================================================
// Kitchen API - Admin Handlers
// File: crates/kitchen-api/src/handlers/admin.rs
// Description: CRUD surface for kitchens, menu items, links, and locations
// ============================================================================

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use kitchen_core::domain::{Kitchen, Location, MenuItem, OrderingLink};
use kitchen_core::services::admin_service::KitchenDetail;

use crate::dto::{
    KitchenUpsertRequest, LocationUpsertRequest, MenuItemUpsertRequest,
    ReplaceOrderingLinksRequest,
};
use crate::error::ApiError;
use crate::middleware::CurrentAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Kitchens
// ---------------------------------------------------------------------------

/// GET /api/admin/kitchens
pub async fn list_kitchens(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Kitchen>>>, ApiError> {
    let kitchens = state.admin.list_kitchens().await?;
    Ok(Json(ApiResponse::success(kitchens)))
}

/// GET /api/admin/kitchens/{id}
pub async fn kitchen_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<KitchenDetail>>, ApiError> {
    let detail = state.admin.kitchen_detail(&id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// POST /api/admin/kitchens
pub async fn create_kitchen(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Json(payload): Json<KitchenUpsertRequest>,
) -> Result<Json<ApiResponse<Kitchen>>, ApiError> {
    payload.validate()?;
    info!("Admin {} creating kitchen '{}'", admin.email, payload.name);
    let kitchen = state.admin.upsert_kitchen(payload.into_draft(None)).await?;
    Ok(Json(ApiResponse::success(kitchen)))
}

/// PUT /api/admin/kitchens/{id}
pub async fn update_kitchen(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<KitchenUpsertRequest>,
) -> Result<Json<ApiResponse<Kitchen>>, ApiError> {
    payload.validate()?;
    info!("Admin {} updating kitchen {}", admin.email, id);
    let kitchen = state
        .admin
        .upsert_kitchen(payload.into_draft(Some(id)))
        .await?;
    Ok(Json(ApiResponse::success(kitchen)))
}

/// DELETE /api/admin/kitchens/{id}
pub async fn delete_kitchen(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    info!("Admin {} deleting kitchen {}", admin.email, id);
    state.admin.delete_kitchen(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

/// GET /api/admin/kitchens/{id}/menu-items
pub async fn list_menu_items(
    State(state): State<AppState>,
    Path(kitchen_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state.admin.list_menu_items(&kitchen_id).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/admin/menu-items
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<MenuItemUpsertRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    payload.validate()?;
    let item = state
        .admin
        .upsert_menu_item(payload.into_draft(None))
        .await?;
    Ok(Json(ApiResponse::success(item)))
}

/// PUT /api/admin/menu-items/{id}
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MenuItemUpsertRequest>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    payload.validate()?;
    let item = state
        .admin
        .upsert_menu_item(payload.into_draft(Some(id)))
        .await?;
    Ok(Json(ApiResponse::success(item)))
}

/// DELETE /api/admin/menu-items/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.admin.delete_menu_item(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

// ---------------------------------------------------------------------------
// Ordering links
// ---------------------------------------------------------------------------

/// GET /api/admin/kitchens/{id}/ordering-links
pub async fn list_ordering_links(
    State(state): State<AppState>,
    Path(kitchen_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<OrderingLink>>>, ApiError> {
    let links = state.admin.list_ordering_links(&kitchen_id).await?;
    Ok(Json(ApiResponse::success(links)))
}

/// PUT /api/admin/kitchens/{id}/ordering-links
///
/// Replace-set semantics: links missing from the submitted set are
/// deleted, the rest are updated or inserted.
pub async fn replace_ordering_links(
    State(state): State<AppState>,
    Path(kitchen_id): Path<Uuid>,
    Json(payload): Json<ReplaceOrderingLinksRequest>,
) -> Result<Json<ApiResponse<Vec<OrderingLink>>>, ApiError> {
    payload.validate()?;
    let links = state
        .admin
        .replace_ordering_links(&kitchen_id, payload.into_drafts())
        .await?;
    Ok(Json(ApiResponse::success(links)))
}

/// DELETE /api/admin/ordering-links/{id}
pub async fn delete_ordering_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.admin.delete_ordering_link(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// GET /api/admin/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Location>>>, ApiError> {
    let locations = state.admin.list_locations().await?;
    Ok(Json(ApiResponse::success(locations)))
}

/// POST /api/admin/locations
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<LocationUpsertRequest>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    payload.validate()?;
    let location = state
        .admin
        .upsert_location(payload.into_draft(None))
        .await?;
    Ok(Json(ApiResponse::success(location)))
}

/// PUT /api/admin/locations/{id}
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LocationUpsertRequest>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    payload.validate()?;
    let location = state
        .admin
        .upsert_location(payload.into_draft(Some(id)))
        .await?;
    Ok(Json(ApiResponse::success(location)))
}

/// DELETE /api/admin/locations/{id}
pub async fn delete_location(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    info!("Admin {} deleting location {}", admin.email, id);
    state.admin.delete_location(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
