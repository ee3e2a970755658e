// ============================================================================
// Kitchen Core - Directory Service
// File: crates/kitchen-core/src/services/directory_service.rs
// Description: Location listing and the nickname resolution fallback chain
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{KitchenWithRelations, Location};
use crate::error::DomainError;
use crate::repositories::{KitchenRepository, LocationRepository};

/// Outcome of the resolution chain: either the requested nickname matched,
/// or the configured default stood in for it.
#[derive(Debug, Clone, Serialize)]
pub enum ResolvedLocation {
    Matched(Location),
    Fallback(Location),
}

impl ResolvedLocation {
    pub fn location(&self) -> &Location {
        match self {
            ResolvedLocation::Matched(l) | ResolvedLocation::Fallback(l) => l,
        }
    }

    pub fn into_location(self) -> Location {
        match self {
            ResolvedLocation::Matched(l) | ResolvedLocation::Fallback(l) => l,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedLocation::Fallback(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationKitchens {
    pub location: Location,
    pub kitchens: Vec<KitchenWithRelations>,
    pub fallback_used: bool,
}

pub struct DirectoryService {
    locations: Arc<dyn LocationRepository>,
    kitchens: Arc<dyn KitchenRepository>,
    default_location_id: Option<Uuid>,
}

impl DirectoryService {
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        kitchens: Arc<dyn KitchenRepository>,
        default_location_id: Option<Uuid>,
    ) -> Self {
        Self {
            locations,
            kitchens,
            default_location_id,
        }
    }

    /// Active locations in listing order.
    pub async fn list_locations(&self) -> Result<Vec<Location>, DomainError> {
        self.locations.list_active().await
    }

    /// Resolve a requested nickname to a location. The chain is total:
    /// exact nickname match among active locations, then the configured
    /// default location, then `LocationNotFound`. No step retries.
    pub async fn resolve_location(
        &self,
        nick: Option<&str>,
    ) -> Result<ResolvedLocation, DomainError> {
        if let Some(nick) = nick.map(str::trim).filter(|n| !n.is_empty()) {
            let active = self.locations.list_active().await?;
            if let Some(location) = active.into_iter().find(|l| l.matches_nick_name(nick)) {
                return Ok(ResolvedLocation::Matched(location));
            }
            warn!("No active location matches nickname '{}', trying default", nick);
        }

        if let Some(default_id) = self.default_location_id {
            match self.locations.find_by_id(&default_id).await? {
                Some(location) if location.is_active => {
                    info!("Resolved to default location {}", default_id);
                    return Ok(ResolvedLocation::Fallback(location));
                }
                Some(_) => warn!("Default location {} is inactive", default_id),
                None => warn!("Default location {} does not exist", default_id),
            }
        }

        Err(DomainError::LocationNotFound)
    }

    /// The resolved location and its active kitchens. A failed kitchen
    /// fetch degrades to an empty list so the location still renders.
    pub async fn location_kitchens(
        &self,
        nick: Option<&str>,
    ) -> Result<LocationKitchens, DomainError> {
        let resolved = self.resolve_location(nick).await?;
        let fallback_used = resolved.is_fallback();
        let location = resolved.into_location();

        let kitchens = match self.kitchens.list_active_by_location(&location.id).await {
            Ok(kitchens) => kitchens,
            Err(e) => {
                warn!("Kitchen fetch failed for location {}: {}", location.id, e);
                Vec::new()
            }
        };

        Ok(LocationKitchens {
            location,
            kitchens,
            fallback_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::kitchen_repository::MockKitchenRepository;
    use crate::repositories::location_repository::MockLocationRepository;

    fn location(nick: &str, is_active: bool) -> Location {
        Location {
            id: Uuid::new_v4(),
            name: format!("{nick} site"),
            nick_name: nick.to_string(),
            address: "1 Test Way".to_string(),
            phone_number: None,
            sort_order: 0,
            is_default: false,
            is_active,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_nickname_match_is_case_insensitive() {
        let downtown = location("downtown", true);

        let mut locations = MockLocationRepository::new();
        let listed = downtown.clone();
        locations
            .expect_list_active()
            .returning(move || Ok(vec![listed.clone()]));
        let kitchens = MockKitchenRepository::new();

        let service = DirectoryService::new(Arc::new(locations), Arc::new(kitchens), None);
        let resolved = service.resolve_location(Some("Downtown")).await.unwrap();
        assert_eq!(resolved.location().id, downtown.id);
        assert!(!resolved.is_fallback());
    }

    #[tokio::test]
    async fn test_miss_falls_back_to_default() {
        let fallback = location("airport", true);
        let fallback_id = fallback.id;

        let mut locations = MockLocationRepository::new();
        locations.expect_list_active().returning(|| Ok(vec![]));
        locations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(fallback.clone())));
        let kitchens = MockKitchenRepository::new();

        let service =
            DirectoryService::new(Arc::new(locations), Arc::new(kitchens), Some(fallback_id));
        let resolved = service.resolve_location(Some("nowhere")).await.unwrap();
        assert!(resolved.is_fallback());
        assert_eq!(resolved.location().id, fallback_id);
    }

    #[tokio::test]
    async fn test_chain_terminates_in_not_found() {
        let mut locations = MockLocationRepository::new();
        locations.expect_list_active().times(1).returning(|| Ok(vec![]));
        let kitchens = MockKitchenRepository::new();

        // No default configured at all.
        let service = DirectoryService::new(Arc::new(locations), Arc::new(kitchens), None);
        let result = service.resolve_location(Some("nowhere")).await;
        assert!(matches!(result, Err(DomainError::LocationNotFound)));
    }

    #[tokio::test]
    async fn test_inactive_default_is_not_resolved() {
        let dead = location("closed", false);
        let dead_id = dead.id;

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(dead.clone())));
        let kitchens = MockKitchenRepository::new();

        let service =
            DirectoryService::new(Arc::new(locations), Arc::new(kitchens), Some(dead_id));
        let result = service.resolve_location(None).await;
        assert!(matches!(result, Err(DomainError::LocationNotFound)));
    }

    #[tokio::test]
    async fn test_kitchen_fetch_failure_degrades_to_empty_list() {
        let downtown = location("downtown", true);

        let mut locations = MockLocationRepository::new();
        let listed = downtown.clone();
        locations
            .expect_list_active()
            .returning(move || Ok(vec![listed.clone()]));
        let mut kitchens = MockKitchenRepository::new();
        kitchens
            .expect_list_active_by_location()
            .returning(|_| Err(DomainError::GatewayError("boom".into())));

        let service = DirectoryService::new(Arc::new(locations), Arc::new(kitchens), None);
        let page = service.location_kitchens(Some("downtown")).await.unwrap();
        assert_eq!(page.location.id, downtown.id);
        assert!(page.kitchens.is_empty());
    }
}
