//! Gateway profile repository (read-only)

use async_trait::async_trait;
use uuid::Uuid;

use kitchen_core::domain::Profile;
use kitchen_core::error::DomainError;
use kitchen_core::repositories::ProfileRepository;

use super::client::GatewayClient;
use super::query::SelectQuery;
use super::rows::ProfileRow;

const TABLE: &str = "profiles";

pub struct GatewayProfileRepository {
    client: GatewayClient,
}

impl GatewayProfileRepository {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for GatewayProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("email", email))
            .await?;
        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = self
            .client
            .select_one(SelectQuery::table(TABLE).eq("id", id))
            .await?;
        Ok(row.map(Into::into))
    }
}
