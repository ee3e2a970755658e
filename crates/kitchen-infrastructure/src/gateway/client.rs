//! HTTP client for the remote table-query gateway.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use kitchen_core::error::DomainError;
use kitchen_shared::config::GatewaySettings;

use super::query::SelectQuery;

/// The gateway answers errors with a human-readable message field; that
/// text is surfaced to the user as-is.
#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(settings: &GatewaySettings) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&settings.api_key)
            .map_err(|e| DomainError::InternalError(format!("Invalid gateway API key: {e}")))?;
        headers.insert("apikey", api_key);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|e| DomainError::InternalError(format!("Invalid gateway API key: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::InternalError(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &SelectQuery,
    ) -> Result<Vec<T>, DomainError> {
        debug!("Gateway select from {}", query.table_name());
        let response = self
            .http
            .get(self.table_url(query.table_name()))
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| DomainError::GatewayError(e.to_string()))?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| DomainError::GatewayError(format!("Malformed gateway response: {e}")))
    }

    pub async fn select_one<T: DeserializeOwned>(
        &self,
        query: SelectQuery,
    ) -> Result<Option<T>, DomainError> {
        let rows: Vec<T> = self.select(&query.single()).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        debug!("Gateway insert into {}", table);
        let response = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::GatewayError(e.to_string()))?;

        let response = Self::check(response).await?;
        let mut rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| DomainError::GatewayError(format!("Malformed gateway response: {e}")))?;
        if rows.is_empty() {
            return Err(DomainError::GatewayError(
                "Insert returned no representation".to_string(),
            ));
        }
        Ok(rows.remove(0))
    }

    /// Update the row matching `id`. `None` when no row matched.
    pub async fn update_by_id<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        id: &Uuid,
        body: &B,
    ) -> Result<Option<T>, DomainError> {
        debug!("Gateway update {} id={}", table, id);
        let response = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::GatewayError(e.to_string()))?;

        let response = Self::check(response).await?;
        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| DomainError::GatewayError(format!("Malformed gateway response: {e}")))?;
        Ok(rows.into_iter().next())
    }

    pub async fn delete_by_ids(&self, table: &str, ids: &[Uuid]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }
        debug!("Gateway delete from {} ({} rows)", table, ids.len());
        let filter = if ids.len() == 1 {
            format!("eq.{}", ids[0])
        } else {
            let joined = ids
                .iter()
                .map(Uuid::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("in.({joined})")
        };
        let response = self
            .http
            .delete(self.table_url(table))
            .query(&[("id", filter)])
            .send()
            .await
            .map_err(|e| DomainError::GatewayError(e.to_string()))?;

        Self::check(response).await.map(|_| ())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<GatewayErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.is_empty() => body,
            Err(_) => format!("Gateway returned {status}"),
        };
        Err(DomainError::GatewayError(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_shared::types::SortDirection;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct NamedRow {
        id: Uuid,
        name: String,
    }

    async fn client_for(server: &MockServer) -> GatewayClient {
        GatewayClient::new(&GatewaySettings {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_select_sends_filters_and_auth_headers() {
        let server = MockServer::start().await;
        let row_id = Uuid::new_v4();
        Mock::given(method("GET"))
            .and(path("/rest/v1/kitchens"))
            .and(header("apikey", "test-key"))
            .and(query_param("select", "*"))
            .and(query_param("is_active", "eq.true"))
            .and(query_param("order", "sort_order.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": row_id, "name": "Noodle Bar"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let query = SelectQuery::table("kitchens")
            .eq("is_active", true)
            .order("sort_order", SortDirection::Ascending);
        let rows: Vec<NamedRow> = client.select(&query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Noodle Bar");
    }

    #[tokio::test]
    async fn test_select_one_returns_none_on_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/kitchens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let row: Option<NamedRow> = client
            .select_one(SelectQuery::table("kitchens").eq("id", Uuid::new_v4()))
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_insert_returns_representation() {
        let server = MockServer::start().await;
        let row_id = Uuid::new_v4();
        Mock::given(method("POST"))
            .and(path("/rest/v1/locations"))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([
                {"id": row_id, "name": "Downtown"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let created: NamedRow = client
            .insert("locations", &json!({"id": row_id, "name": "Downtown"}))
            .await
            .unwrap();
        assert_eq!(created, NamedRow { id: row_id, name: "Downtown".to_string() });
    }

    #[tokio::test]
    async fn test_gateway_error_message_is_surfaced_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/kitchens"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!(
                {"message": "column kitchens.bogus does not exist"}
            )))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<NamedRow>, _> =
            client.select(&SelectQuery::table("kitchens")).await;
        match result {
            Err(DomainError::GatewayError(message)) => {
                assert_eq!(message, "column kitchens.bogus does not exist");
            }
            other => panic!("expected gateway error, got {other:?}"),
        }
    }
}
