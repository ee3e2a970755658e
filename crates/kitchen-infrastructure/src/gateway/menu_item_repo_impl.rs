//! Gateway menu item repository

use async_trait::async_trait;
use uuid::Uuid;

use kitchen_core::domain::MenuItem;
use kitchen_core::error::DomainError;
use kitchen_core::repositories::MenuItemRepository;
use kitchen_shared::types::SortDirection;

use super::client::GatewayClient;
use super::query::SelectQuery;
use super::rows::{MenuItemPayload, MenuItemRow};

const TABLE: &str = "menu_items";

pub struct GatewayMenuItemRepository {
    client: GatewayClient,
}

impl GatewayMenuItemRepository {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuItemRepository for GatewayMenuItemRepository {
    async fn list_by_kitchen(&self, kitchen_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = self
            .client
            .select(
                &SelectQuery::table(TABLE)
                    .eq("kitchen_id", kitchen_id)
                    .order("category", SortDirection::Ascending)
                    .order("name", SortDirection::Ascending),
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("id", id))
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: MenuItemRow = self
            .client
            .insert(TABLE, &MenuItemPayload::from(item))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: Option<MenuItemRow> = self
            .client
            .update_by_id(TABLE, &item.id, &MenuItemPayload::from(item))
            .await?;
        row.map(Into::into).ok_or(DomainError::MenuItemNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.client.delete_by_ids(TABLE, std::slice::from_ref(id)).await
    }
}
