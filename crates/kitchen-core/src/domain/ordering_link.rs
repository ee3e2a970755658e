//! Ordering link entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Outbound URL to a third-party delivery platform for one kitchen. A
/// kitchen may carry many; platform_name is not unique.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderingLink {
    pub id: Uuid,
    pub kitchen_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Platform name is required"))]
    pub platform_name: String,

    #[validate(url(message = "Ordering URL is not a valid URL"))]
    pub url: String,

    #[validate(url(message = "Logo URL is not a valid URL"))]
    pub logo_url: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

impl OrderingLink {
    pub fn new(
        kitchen_id: Uuid,
        platform_name: String,
        url: String,
        logo_url: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let link = Self {
            id: Uuid::new_v4(),
            kitchen_id,
            platform_name: platform_name.trim().to_string(),
            url: url.trim().to_string(),
            logo_url: logo_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()),
            created_at: Some(Utc::now()),
        };

        link.validate()?;
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ordering_link() {
        let link = OrderingLink::new(
            Uuid::new_v4(),
            "DoorDash".to_string(),
            "https://doordash.example.com/store/1".to_string(),
            None,
        );
        assert!(link.is_ok());
    }

    #[test]
    fn test_url_is_required_and_checked() {
        let link = OrderingLink::new(
            Uuid::new_v4(),
            "DoorDash".to_string(),
            "store/1".to_string(),
            None,
        );
        assert!(link.is_err());
    }
}
