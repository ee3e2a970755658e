//! Public catalog reads: kitchen listings and grouped menus.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::{group_by_category, CategoryGroup, Kitchen, KitchenWithRelations, OrderingLink};
use crate::error::DomainError;
use crate::repositories::KitchenRepository;

/// A kitchen's menu shaped for sequential display: ordered category groups
/// plus the outbound ordering links.
#[derive(Debug, Clone, Serialize)]
pub struct KitchenMenu {
    pub kitchen: Kitchen,
    pub categories: Vec<CategoryGroup>,
    pub ordering_links: Vec<OrderingLink>,
}

pub struct CatalogService {
    kitchens: Arc<dyn KitchenRepository>,
}

impl CatalogService {
    pub fn new(kitchens: Arc<dyn KitchenRepository>) -> Self {
        Self { kitchens }
    }

    /// Every kitchen with its menu and links, for the public index.
    pub async fn list_kitchens(&self) -> Result<Vec<KitchenWithRelations>, DomainError> {
        self.kitchens.list_with_relations().await
    }

    pub async fn kitchen_menu(&self, id: &uuid::Uuid) -> Result<KitchenMenu, DomainError> {
        let with_relations = self
            .kitchens
            .find_with_relations(id)
            .await?
            .ok_or(DomainError::KitchenNotFound)?;

        let categories = group_by_category(&with_relations.menu_items);
        debug!(
            "Menu for kitchen {} grouped into {} categories",
            id,
            categories.len()
        );

        Ok(KitchenMenu {
            kitchen: with_relations.kitchen,
            categories,
            ordering_links: with_relations.ordering_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;
    use crate::repositories::kitchen_repository::MockKitchenRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn kitchen(id: Uuid) -> Kitchen {
        Kitchen {
            id,
            location_id: Uuid::new_v4(),
            name: "Noodle Bar".to_string(),
            description: None,
            logo_url: None,
            header_image_url: None,
            phone_number: None,
            sort_order: 1,
            is_active: true,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    fn menu_item(kitchen_id: Uuid, name: &str, category: Option<&str>) -> MenuItem {
        MenuItem {
            id: Uuid::new_v4(),
            kitchen_id,
            name: name.to_string(),
            description: None,
            category: category.map(str::to_string),
            category_sort_order: None,
            price: 8.0,
            image_url: None,
            is_vegetarian: false,
            is_available: true,
            tags: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_kitchen_menu_groups_items() {
        let id = Uuid::new_v4();
        let with_relations = KitchenWithRelations {
            kitchen: kitchen(id),
            menu_items: vec![
                menu_item(id, "Udon", Some("Noodles")),
                menu_item(id, "Soda", None),
            ],
            ordering_links: vec![],
        };

        let mut repo = MockKitchenRepository::new();
        repo.expect_find_with_relations()
            .returning(move |_| Ok(Some(with_relations.clone())));

        let service = CatalogService::new(Arc::new(repo));
        let menu = service.kitchen_menu(&id).await.unwrap();

        let labels: Vec<&str> = menu.categories.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Noodles", "Uncategorized"]);
    }

    #[tokio::test]
    async fn test_kitchen_menu_not_found() {
        let mut repo = MockKitchenRepository::new();
        repo.expect_find_with_relations().returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repo));
        let result = service.kitchen_menu(&Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::KitchenNotFound)));
    }
}
