// ============================================================================
// Kitchen Core - Menu Item Entity
// File: crates/kitchen-core/src/domain/menu_item.rs
// Description: A priced, categorized product belonging to one kitchen
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kitchen_shared::constants::DEFAULT_CATEGORY_SORT_ORDER;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,
    pub kitchen_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Menu item name must be between 2 and 100 characters"))]
    pub name: String,

    pub description: Option<String>,

    /// Free-text category; `None` and `""` both render as "Uncategorized".
    pub category: Option<String>,
    pub category_sort_order: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,

    #[validate(url(message = "Image URL is not a valid URL"))]
    pub image_url: Option<String>,

    pub is_vegetarian: bool,
    pub is_available: bool,

    /// Denormalized comma-separated tag string, filtered at read time.
    pub tags: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kitchen_id: Uuid,
        name: String,
        description: Option<String>,
        category: Option<String>,
        category_sort_order: Option<i32>,
        price: f64,
        image_url: Option<String>,
        is_vegetarian: bool,
        is_available: bool,
        tags: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: Uuid::new_v4(),
            kitchen_id,
            name: name.trim().to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            category: category.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            category_sort_order: Some(category_sort_order.unwrap_or(DEFAULT_CATEGORY_SORT_ORDER)),
            price,
            image_url: image_url.filter(|u| !u.trim().is_empty()),
            is_vegetarian,
            is_available,
            tags: tags.filter(|t| !t.trim().is_empty()),
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        item.validate()?;
        Ok(item)
    }

    /// The tags string split into displayable pieces.
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(self.tags.as_deref())
    }
}

/// Split a comma-separated tag string into trimmed, non-empty pieces in
/// first-occurrence order. Duplicates are kept: the source data may repeat a
/// tag on purpose, and dropping repeats is a rendering decision we do not
/// make here.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_menu_item() {
        let item = MenuItem::new(
            Uuid::new_v4(),
            "Masala Dosa".to_string(),
            Some("Crispy rice crepe".to_string()),
            Some("Mains".to_string()),
            None,
            9.50,
            None,
            true,
            true,
            Some("Spicy, Featured".to_string()),
        );
        let item = item.unwrap();
        assert_eq!(item.category_sort_order, Some(DEFAULT_CATEGORY_SORT_ORDER));
        assert_eq!(item.tag_list(), vec!["Spicy", "Featured"]);
    }

    #[test]
    fn test_price_must_be_positive() {
        let free = MenuItem::new(
            Uuid::new_v4(),
            "Water".to_string(),
            None,
            None,
            None,
            0.0,
            None,
            false,
            true,
            None,
        );
        assert!(free.is_err());
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(
            parse_tags(Some("Spicy, Sweet, , Vegan ")),
            vec!["Spicy", "Sweet", "Vegan"]
        );
        assert_eq!(parse_tags(None), Vec::<String>::new());
        assert_eq!(parse_tags(Some("")), Vec::<String>::new());
        assert_eq!(parse_tags(Some("  ,  ,")), Vec::<String>::new());
    }

    #[test]
    fn test_parse_tags_keeps_duplicates_and_order() {
        assert_eq!(
            parse_tags(Some("Hot,Mild,Hot")),
            vec!["Hot", "Mild", "Hot"]
        );
    }
}
