//! Gateway location repository

use async_trait::async_trait;
use uuid::Uuid;

use kitchen_core::domain::Location;
use kitchen_core::error::DomainError;
use kitchen_core::repositories::LocationRepository;
use kitchen_shared::types::SortDirection;

use super::client::GatewayClient;
use super::query::SelectQuery;
use super::rows::{LocationPayload, LocationRow};

const TABLE: &str = "locations";

pub struct GatewayLocationRepository {
    client: GatewayClient,
}

impl GatewayLocationRepository {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    fn listing_order(query: SelectQuery) -> SelectQuery {
        query
            .order("is_default", SortDirection::Descending)
            .order("name", SortDirection::Ascending)
    }
}

#[async_trait]
impl LocationRepository for GatewayLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, DomainError> {
        let rows: Vec<LocationRow> = self
            .client
            .select(&Self::listing_order(SelectQuery::table(TABLE)))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> Result<Vec<Location>, DomainError> {
        let rows: Vec<LocationRow> = self
            .client
            .select(&Self::listing_order(
                SelectQuery::table(TABLE).eq("is_active", true),
            ))
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Location>, DomainError> {
        let row: Option<LocationRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("id", id))
            .await?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, location: &Location) -> Result<Location, DomainError> {
        let row: LocationRow = self
            .client
            .insert(TABLE, &LocationPayload::from(location))
            .await?;
        Ok(row.into())
    }

    async fn update(&self, location: &Location) -> Result<Location, DomainError> {
        let row: Option<LocationRow> = self
            .client
            .update_by_id(TABLE, &location.id, &LocationPayload::from(location))
            .await?;
        row.map(Into::into).ok_or(DomainError::LocationNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.client.delete_by_ids(TABLE, std::slice::from_ref(id)).await
    }
}
