// ============================================================================
// Kitchen Core - Kitchen Entity
// File: crates/kitchen-core/src/domain/kitchen.rs
// Description: A vendor/brand with its own menu and ordering links
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{MenuItem, OrderingLink, PHONE_NUMBER_RE};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Kitchen {
    pub id: Uuid,
    pub location_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Kitchen name must be between 2 and 100 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(url(message = "Logo URL is not a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(url(message = "Header image URL is not a valid URL"))]
    pub header_image_url: Option<String>,

    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Invalid phone number format"))]
    pub phone_number: Option<String>,

    pub sort_order: i32,
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Kitchen {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location_id: Uuid,
        name: String,
        description: Option<String>,
        logo_url: Option<String>,
        header_image_url: Option<String>,
        phone_number: Option<String>,
        sort_order: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let kitchen = Self {
            id: Uuid::new_v4(),
            location_id,
            name: name.trim().to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            logo_url: logo_url.filter(|u| !u.trim().is_empty()),
            header_image_url: header_image_url.filter(|u| !u.trim().is_empty()),
            phone_number: phone_number.filter(|p| !p.trim().is_empty()),
            sort_order,
            is_active: true,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        kitchen.validate()?;
        Ok(kitchen)
    }
}

/// A kitchen together with its menu and ordering links, as returned by the
/// gateway's nested-relation fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenWithRelations {
    #[serde(flatten)]
    pub kitchen: Kitchen,
    pub menu_items: Vec<MenuItem>,
    pub ordering_links: Vec<OrderingLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_kitchen() {
        let kitchen = Kitchen::new(
            Uuid::new_v4(),
            "Little Curry House".to_string(),
            Some("South Indian curries".to_string()),
            Some("https://cdn.example.com/curry.png".to_string()),
            None,
            Some("(555) 123-4567".to_string()),
            1,
        );
        assert!(kitchen.is_ok());
        assert!(kitchen.unwrap().is_active);
    }

    #[test]
    fn test_rejects_bad_phone_and_url() {
        let bad_phone = Kitchen::new(
            Uuid::new_v4(),
            "Curry House".to_string(),
            None,
            None,
            None,
            Some("call me!".to_string()),
            0,
        );
        assert!(bad_phone.is_err());

        let bad_url = Kitchen::new(
            Uuid::new_v4(),
            "Curry House".to_string(),
            None,
            Some("not a url".to_string()),
            None,
            None,
            0,
        );
        assert!(bad_url.is_err());
    }
}
