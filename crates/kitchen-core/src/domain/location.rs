//! Location entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::PHONE_NUMBER_RE;

/// A physical site hosting a subset of kitchens. `nick_name` is the
/// URL-facing identifier used by the public directory routes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Location name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Nickname is required"))]
    pub nick_name: String,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,

    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Invalid phone number format"))]
    pub phone_number: Option<String>,

    pub sort_order: i32,
    pub is_default: bool,
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Location {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        nick_name: String,
        address: String,
        phone_number: Option<String>,
        sort_order: i32,
        is_default: bool,
    ) -> Result<Self, validator::ValidationErrors> {
        let location = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            nick_name: nick_name.trim().to_string(),
            address: address.trim().to_string(),
            phone_number: phone_number.filter(|p| !p.trim().is_empty()),
            sort_order,
            is_default,
            is_active: true,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        location.validate()?;
        Ok(location)
    }

    pub fn matches_nick_name(&self, nick: &str) -> bool {
        self.nick_name.eq_ignore_ascii_case(nick.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_location() {
        let location = Location::new(
            "Downtown Commissary".to_string(),
            "downtown".to_string(),
            "41 Main St".to_string(),
            Some("555-0042".to_string()),
            1,
            true,
        );
        assert!(location.is_ok());
        assert!(location.unwrap().matches_nick_name("Downtown"));
    }
}
