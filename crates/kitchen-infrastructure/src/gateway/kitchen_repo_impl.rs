// ============================================================================
// Kitchen Infrastructure - Gateway Kitchen Repository
// File: crates/kitchen-infrastructure/src/gateway/kitchen_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use uuid::Uuid;

use kitchen_core::domain::{Kitchen, KitchenWithRelations};
use kitchen_core::error::DomainError;
use kitchen_core::repositories::KitchenRepository;
use kitchen_shared::types::SortDirection;

use super::client::GatewayClient;
use super::query::SelectQuery;
use super::rows::{KitchenPayload, KitchenRow, KitchenWithRelationsRow};

const TABLE: &str = "kitchens";
const WITH_RELATIONS: &str = "*,menu_items(*),ordering_links(*)";

pub struct GatewayKitchenRepository {
    client: GatewayClient,
}

impl GatewayKitchenRepository {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KitchenRepository for GatewayKitchenRepository {
    async fn list(&self) -> Result<Vec<Kitchen>, DomainError> {
        let rows: Vec<KitchenRow> = self
            .client
            .select(&SelectQuery::table(TABLE).order("sort_order", SortDirection::Ascending))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_with_relations(&self) -> Result<Vec<KitchenWithRelations>, DomainError> {
        let rows: Vec<KitchenWithRelationsRow> = self
            .client
            .select(
                &SelectQuery::table(TABLE)
                    .select(WITH_RELATIONS)
                    .order("sort_order", SortDirection::Ascending),
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active_by_location(
        &self,
        location_id: &Uuid,
    ) -> Result<Vec<KitchenWithRelations>, DomainError> {
        let rows: Vec<KitchenWithRelationsRow> = self
            .client
            .select(
                &SelectQuery::table(TABLE)
                    .select(WITH_RELATIONS)
                    .eq("location_id", location_id)
                    .eq("is_active", true)
                    .order("sort_order", SortDirection::Ascending),
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Kitchen>, DomainError> {
        let row: Option<KitchenRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("id", id))
            .await?;
        Ok(row.map(Into::into))
    }

    async fn find_with_relations(
        &self,
        id: &Uuid,
    ) -> Result<Option<KitchenWithRelations>, DomainError> {
        let row: Option<KitchenWithRelationsRow> = self
            .client
            .select_one(
                SelectQuery::table(TABLE)
                    .select(WITH_RELATIONS)
                    .eq("id", id),
            )
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, kitchen: &Kitchen) -> Result<Kitchen, DomainError> {
        let row: KitchenRow = self
            .client
            .insert(TABLE, &KitchenPayload::from(kitchen))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, kitchen: &Kitchen) -> Result<Kitchen, DomainError> {
        let row: Option<KitchenRow> = self
            .client
            .update_by_id(TABLE, &kitchen.id, &KitchenPayload::from(kitchen))
            .await?;
        row.map(Into::into).ok_or(DomainError::KitchenNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.client.delete_by_ids(TABLE, std::slice::from_ref(id)).await
    }
}
