//! Gateway ordering link repository

use async_trait::async_trait;
use uuid::Uuid;

use kitchen_core::domain::OrderingLink;
use kitchen_core::error::DomainError;
use kitchen_core::repositories::OrderingLinkRepository;
use kitchen_shared::types::SortDirection;

use super::client::GatewayClient;
use super::query::SelectQuery;
use super::rows::{OrderingLinkPayload, OrderingLinkRow};

const TABLE: &str = "ordering_links";

pub struct GatewayOrderingLinkRepository {
    client: GatewayClient,
}

impl GatewayOrderingLinkRepository {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderingLinkRepository for GatewayOrderingLinkRepository {
    async fn list_by_kitchen(&self, kitchen_id: &Uuid) -> Result<Vec<OrderingLink>, DomainError> {
        let rows: Vec<OrderingLinkRow> = self
            .client
            .select(
                &SelectQuery::table(TABLE)
                    .eq("kitchen_id", kitchen_id)
                    .order("platform_name", SortDirection::Ascending),
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OrderingLink>, DomainError> {
        let row: Option<OrderingLinkRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("id", id))
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, link: &OrderingLink) -> Result<OrderingLink, DomainError> {
        let row: OrderingLinkRow = self
            .client
            .insert(TABLE, &OrderingLinkPayload::from(link))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, link: &OrderingLink) -> Result<OrderingLink, DomainError> {
        let row: Option<OrderingLinkRow> = self
            .client
            .update_by_id(TABLE, &link.id, &OrderingLinkPayload::from(link))
            .await?;
        row.map(Into::into).ok_or(DomainError::OrderingLinkNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.client.delete_by_ids(TABLE, std::slice::from_ref(id)).await
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), DomainError> {
        self.client.delete_by_ids(TABLE, ids).await
    }
}
