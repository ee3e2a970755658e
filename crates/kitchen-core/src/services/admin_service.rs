// ============================================================================
// Kitchen Core - Admin Service
// File: crates/kitchen-core/src/services/admin_service.rs
// Description: Validated upserts and deletes for the admin console
// ============================================================================

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use kitchen_shared::constants::DEFAULT_CATEGORY_SORT_ORDER;

use crate::domain::{Kitchen, Location, MenuItem, OrderingLink};
use crate::error::DomainError;
use crate::repositories::{
    KitchenRepository, LocationRepository, MenuItemRepository, OrderingLinkRepository,
};

/// Validated form output. `id == None` means insert, `Some` means update.
#[derive(Debug, Clone)]
pub struct KitchenDraft {
    pub id: Option<Uuid>,
    pub location_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub header_image_url: Option<String>,
    pub phone_number: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub id: Option<Uuid>,
    pub kitchen_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub category_sort_order: Option<i32>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_available: bool,
    pub tags: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderingLinkDraft {
    pub id: Option<Uuid>,
    pub platform_name: String,
    pub url: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LocationDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub nick_name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub sort_order: i32,
    pub is_default: bool,
    pub is_active: bool,
}

/// One kitchen with everything the admin detail page edits.
#[derive(Debug, Clone, Serialize)]
pub struct KitchenDetail {
    pub kitchen: Kitchen,
    pub menu_items: Vec<MenuItem>,
    pub ordering_links: Vec<OrderingLink>,
}

pub struct AdminService {
    kitchens: Arc<dyn KitchenRepository>,
    menu_items: Arc<dyn MenuItemRepository>,
    ordering_links: Arc<dyn OrderingLinkRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl AdminService {
    pub fn new(
        kitchens: Arc<dyn KitchenRepository>,
        menu_items: Arc<dyn MenuItemRepository>,
        ordering_links: Arc<dyn OrderingLinkRepository>,
        locations: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            kitchens,
            menu_items,
            ordering_links,
            locations,
        }
    }

    // ------------------------------------------------------------------
    // Kitchens
    // ------------------------------------------------------------------

    pub async fn list_kitchens(&self) -> Result<Vec<Kitchen>, DomainError> {
        self.kitchens.list().await
    }

    /// Kitchen plus its menu items and ordering links. The two child
    /// fetches run concurrently; each fails independently.
    pub async fn kitchen_detail(&self, id: &Uuid) -> Result<KitchenDetail, DomainError> {
        let kitchen = self
            .kitchens
            .find_by_id(id)
            .await?
            .ok_or(DomainError::KitchenNotFound)?;

        let (menu_items, ordering_links) = tokio::join!(
            self.menu_items.list_by_kitchen(id),
            self.ordering_links.list_by_kitchen(id),
        );

        Ok(KitchenDetail {
            kitchen,
            menu_items: menu_items?,
            ordering_links: ordering_links?,
        })
    }

    pub async fn upsert_kitchen(&self, draft: KitchenDraft) -> Result<Kitchen, DomainError> {
        match draft.id {
            None => {
                let mut kitchen = Kitchen::new(
                    draft.location_id,
                    draft.name,
                    draft.description,
                    draft.logo_url,
                    draft.header_image_url,
                    draft.phone_number,
                    draft.sort_order,
                )?;
                kitchen.is_active = draft.is_active;
                info!("Creating kitchen: {}", kitchen.name);
                self.kitchens.create(&kitchen).await
            }
            Some(id) => {
                let mut kitchen = self
                    .kitchens
                    .find_by_id(&id)
                    .await?
                    .ok_or(DomainError::KitchenNotFound)?;
                kitchen.location_id = draft.location_id;
                kitchen.name = draft.name.trim().to_string();
                kitchen.description = draft.description.filter(|d| !d.trim().is_empty());
                kitchen.logo_url = draft.logo_url.filter(|u| !u.trim().is_empty());
                kitchen.header_image_url =
                    draft.header_image_url.filter(|u| !u.trim().is_empty());
                kitchen.phone_number = draft.phone_number.filter(|p| !p.trim().is_empty());
                kitchen.sort_order = draft.sort_order;
                kitchen.is_active = draft.is_active;
                kitchen.updated_at = Some(Utc::now());
                kitchen.validate()?;
                self.kitchens.update(&kitchen).await
            }
        }
    }

    pub async fn delete_kitchen(&self, id: &Uuid) -> Result<(), DomainError> {
        info!("Deleting kitchen {}", id);
        self.kitchens.delete(id).await
    }

    // ------------------------------------------------------------------
    // Menu items
    // ------------------------------------------------------------------

    pub async fn list_menu_items(&self, kitchen_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        self.menu_items.list_by_kitchen(kitchen_id).await
    }

    pub async fn upsert_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        match draft.id {
            None => {
                let item = MenuItem::new(
                    draft.kitchen_id,
                    draft.name,
                    draft.description,
                    draft.category,
                    draft.category_sort_order,
                    draft.price,
                    draft.image_url,
                    draft.is_vegetarian,
                    draft.is_available,
                    draft.tags,
                )?;
                info!("Creating menu item: {}", item.name);
                self.menu_items.create(&item).await
            }
            Some(id) => {
                let mut item = self
                    .menu_items
                    .find_by_id(&id)
                    .await?
                    .ok_or(DomainError::MenuItemNotFound)?;
                item.kitchen_id = draft.kitchen_id;
                item.name = draft.name.trim().to_string();
                item.description = draft.description.filter(|d| !d.trim().is_empty());
                item.category = draft
                    .category
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty());
                item.category_sort_order = Some(
                    draft
                        .category_sort_order
                        .unwrap_or(DEFAULT_CATEGORY_SORT_ORDER),
                );
                item.price = draft.price;
                item.image_url = draft.image_url.filter(|u| !u.trim().is_empty());
                item.is_vegetarian = draft.is_vegetarian;
                item.is_available = draft.is_available;
                item.tags = draft.tags.filter(|t| !t.trim().is_empty());
                item.updated_at = Some(Utc::now());
                item.validate()?;
                self.menu_items.update(&item).await
            }
        }
    }

    pub async fn delete_menu_item(&self, id: &Uuid) -> Result<(), DomainError> {
        info!("Deleting menu item {}", id);
        self.menu_items.delete(id).await
    }

    // ------------------------------------------------------------------
    // Ordering links
    // ------------------------------------------------------------------

    pub async fn list_ordering_links(
        &self,
        kitchen_id: &Uuid,
    ) -> Result<Vec<OrderingLink>, DomainError> {
        self.ordering_links.list_by_kitchen(kitchen_id).await
    }

    /// Replace a kitchen's link set with the submitted one: links whose id
    /// is no longer present are deleted, the rest are updated or inserted.
    pub async fn replace_ordering_links(
        &self,
        kitchen_id: &Uuid,
        drafts: Vec<OrderingLinkDraft>,
    ) -> Result<Vec<OrderingLink>, DomainError> {
        let existing = self.ordering_links.list_by_kitchen(kitchen_id).await?;

        let kept_ids: Vec<Uuid> = drafts.iter().filter_map(|d| d.id).collect();
        let to_delete: Vec<Uuid> = existing
            .iter()
            .map(|l| l.id)
            .filter(|id| !kept_ids.contains(id))
            .collect();
        if !to_delete.is_empty() {
            info!(
                "Removing {} ordering links from kitchen {}",
                to_delete.len(),
                kitchen_id
            );
            self.ordering_links.delete_many(&to_delete).await?;
        }

        let mut saved = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match draft.id {
                None => {
                    let link = OrderingLink::new(
                        *kitchen_id,
                        draft.platform_name,
                        draft.url,
                        draft.logo_url,
                    )?;
                    saved.push(self.ordering_links.create(&link).await?);
                }
                Some(id) => {
                    let mut link = existing
                        .iter()
                        .find(|l| l.id == id)
                        .cloned()
                        .ok_or(DomainError::OrderingLinkNotFound)?;
                    link.platform_name = draft.platform_name.trim().to_string();
                    link.url = draft.url.trim().to_string();
                    link.logo_url = draft
                        .logo_url
                        .map(|u| u.trim().to_string())
                        .filter(|u| !u.is_empty());
                    link.validate()?;
                    saved.push(self.ordering_links.update(&link).await?);
                }
            }
        }
        Ok(saved)
    }

    pub async fn delete_ordering_link(&self, id: &Uuid) -> Result<(), DomainError> {
        self.ordering_links.delete(id).await
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    pub async fn list_locations(&self) -> Result<Vec<Location>, DomainError> {
        self.locations.list().await
    }

    pub async fn upsert_location(&self, draft: LocationDraft) -> Result<Location, DomainError> {
        match draft.id {
            None => {
                let mut location = Location::new(
                    draft.name,
                    draft.nick_name,
                    draft.address,
                    draft.phone_number,
                    draft.sort_order,
                    draft.is_default,
                )?;
                location.is_active = draft.is_active;
                info!("Creating location: {}", location.name);
                self.locations.create(&location).await
            }
            Some(id) => {
                let mut location = self
                    .locations
                    .find_by_id(&id)
                    .await?
                    .ok_or(DomainError::LocationNotFound)?;
                location.name = draft.name.trim().to_string();
                location.nick_name = draft.nick_name.trim().to_string();
                location.address = draft.address.trim().to_string();
                location.phone_number = draft.phone_number.filter(|p| !p.trim().is_empty());
                location.sort_order = draft.sort_order;
                location.is_default = draft.is_default;
                location.is_active = draft.is_active;
                location.updated_at = Some(Utc::now());
                location.validate()?;
                self.locations.update(&location).await
            }
        }
    }

    pub async fn delete_location(&self, id: &Uuid) -> Result<(), DomainError> {
        info!("Deleting location {}", id);
        self.locations.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::kitchen_repository::MockKitchenRepository;
    use crate::repositories::location_repository::MockLocationRepository;
    use crate::repositories::menu_item_repository::MockMenuItemRepository;
    use crate::repositories::ordering_link_repository::MockOrderingLinkRepository;

    fn service_with(
        kitchens: MockKitchenRepository,
        menu_items: MockMenuItemRepository,
        ordering_links: MockOrderingLinkRepository,
        locations: MockLocationRepository,
    ) -> AdminService {
        AdminService::new(
            Arc::new(kitchens),
            Arc::new(menu_items),
            Arc::new(ordering_links),
            Arc::new(locations),
        )
    }

    #[tokio::test]
    async fn test_upsert_without_id_inserts() {
        let mut kitchens = MockKitchenRepository::new();
        kitchens
            .expect_create()
            .times(1)
            .returning(|k| Ok(k.clone()));

        let service = service_with(
            kitchens,
            MockMenuItemRepository::new(),
            MockOrderingLinkRepository::new(),
            MockLocationRepository::new(),
        );

        let created = service
            .upsert_kitchen(KitchenDraft {
                id: None,
                location_id: Uuid::new_v4(),
                name: "Taco Stand".to_string(),
                description: None,
                logo_url: None,
                header_image_url: None,
                phone_number: None,
                sort_order: 3,
                is_active: true,
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Taco Stand");
    }

    #[tokio::test]
    async fn test_upsert_with_unknown_id_is_not_found() {
        let mut kitchens = MockKitchenRepository::new();
        kitchens.expect_find_by_id().returning(|_| Ok(None));
        kitchens.expect_update().never();

        let service = service_with(
            kitchens,
            MockMenuItemRepository::new(),
            MockOrderingLinkRepository::new(),
            MockLocationRepository::new(),
        );

        let result = service
            .upsert_kitchen(KitchenDraft {
                id: Some(Uuid::new_v4()),
                location_id: Uuid::new_v4(),
                name: "Ghost Kitchen".to_string(),
                description: None,
                logo_url: None,
                header_image_url: None,
                phone_number: None,
                sort_order: 0,
                is_active: true,
            })
            .await;
        assert!(matches!(result, Err(DomainError::KitchenNotFound)));
    }

    #[tokio::test]
    async fn test_invalid_menu_item_never_reaches_gateway() {
        let mut menu_items = MockMenuItemRepository::new();
        menu_items.expect_create().never();

        let service = service_with(
            MockKitchenRepository::new(),
            menu_items,
            MockOrderingLinkRepository::new(),
            MockLocationRepository::new(),
        );

        let result = service
            .upsert_menu_item(MenuItemDraft {
                id: None,
                kitchen_id: Uuid::new_v4(),
                name: "Free Sample".to_string(),
                description: None,
                category: None,
                category_sort_order: None,
                price: 0.0,
                image_url: None,
                is_vegetarian: false,
                is_available: true,
                tags: None,
            })
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_replace_links_deletes_dropped_and_upserts_rest() {
        let kitchen_id = Uuid::new_v4();
        let kept = OrderingLink::new(
            kitchen_id,
            "DoorDash".to_string(),
            "https://doordash.example.com/s/1".to_string(),
            None,
        )
        .unwrap();
        let dropped = OrderingLink::new(
            kitchen_id,
            "GrubHub".to_string(),
            "https://grubhub.example.com/s/1".to_string(),
            None,
        )
        .unwrap();
        let kept_id = kept.id;
        let dropped_id = dropped.id;

        let mut links = MockOrderingLinkRepository::new();
        links
            .expect_list_by_kitchen()
            .returning(move |_| Ok(vec![kept.clone(), dropped.clone()]));
        links
            .expect_delete_many()
            .withf(move |ids| ids == [dropped_id])
            .times(1)
            .returning(|_| Ok(()));
        links.expect_update().times(1).returning(|l| Ok(l.clone()));
        links.expect_create().times(1).returning(|l| Ok(l.clone()));

        let service = service_with(
            MockKitchenRepository::new(),
            MockMenuItemRepository::new(),
            links,
            MockLocationRepository::new(),
        );

        let saved = service
            .replace_ordering_links(
                &kitchen_id,
                vec![
                    OrderingLinkDraft {
                        id: Some(kept_id),
                        platform_name: "DoorDash".to_string(),
                        url: "https://doordash.example.com/s/2".to_string(),
                        logo_url: None,
                    },
                    OrderingLinkDraft {
                        id: None,
                        platform_name: "UberEats".to_string(),
                        url: "https://ubereats.example.com/s/1".to_string(),
                        logo_url: None,
                    },
                ],
            )
            .await
            .unwrap();
        assert_eq!(saved.len(), 2);
    }
}
