// ============================================================================
// Kitchen API - Request/Response DTOs
// File: crates/kitchen-api/src/dto.rs
// Description: Schema-validated form payloads and display shapes
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use kitchen_core::domain::{CategoryGroup, MenuItem, PHONE_NUMBER_RE};
use kitchen_core::services::{KitchenDraft, LocationDraft, MenuItemDraft, OrderingLinkDraft};
use kitchen_security::Session;

/// Forms submit optional text fields as empty strings; fold those to None
/// before validation so URL and phone checks only see real input.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUserDto,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionUserDto {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl From<&Session> for AuthResponse {
    fn from(session: &Session) -> Self {
        AuthResponse {
            token: session.token.clone(),
            user: SessionUserDto {
                id: session.user_id,
                email: session.email.clone(),
                role: session.role.clone(),
            },
            expires_at: session.expires_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Kitchens
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct KitchenUpsertRequest {
    pub location_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Please enter a valid URL"))]
    pub logo_url: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Please enter a valid URL"))]
    pub header_image_url: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Invalid phone number format"))]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl KitchenUpsertRequest {
    pub fn into_draft(self, id: Option<Uuid>) -> KitchenDraft {
        KitchenDraft {
            id,
            location_id: self.location_id,
            name: self.name,
            description: self.description,
            logo_url: self.logo_url,
            header_image_url: self.header_image_url,
            phone_number: self.phone_number,
            sort_order: self.sort_order,
            is_active: self.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct MenuItemUpsertRequest {
    pub kitchen_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Menu item name must be at least 2 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,

    pub category_sort_order: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Invalid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default = "default_true")]
    pub is_available: bool,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub tags: Option<String>,
}

impl MenuItemUpsertRequest {
    pub fn into_draft(self, id: Option<Uuid>) -> MenuItemDraft {
        MenuItemDraft {
            id,
            kitchen_id: self.kitchen_id,
            name: self.name,
            description: self.description,
            category: self.category,
            category_sort_order: self.category_sort_order,
            price: self.price,
            image_url: self.image_url,
            is_vegetarian: self.is_vegetarian,
            is_available: self.is_available,
            tags: self.tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Ordering links
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct OrderingLinkEntry {
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "Platform name is required"))]
    pub platform_name: String,

    #[validate(url(message = "Please enter a valid URL"))]
    pub url: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Please enter a valid URL"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceOrderingLinksRequest {
    #[validate(nested)]
    pub links: Vec<OrderingLinkEntry>,
}

impl ReplaceOrderingLinksRequest {
    pub fn into_drafts(self) -> Vec<OrderingLinkDraft> {
        self.links
            .into_iter()
            .map(|entry| OrderingLinkDraft {
                id: entry.id,
                platform_name: entry.platform_name,
                url: entry.url,
                logo_url: entry.logo_url,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct LocationUpsertRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Nickname is required"))]
    pub nick_name: String,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Invalid phone number format"))]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl LocationUpsertRequest {
    pub fn into_draft(self, id: Option<Uuid>) -> LocationDraft {
        LocationDraft {
            id,
            name: self.name,
            nick_name: self.nick_name,
            address: self.address,
            phone_number: self.phone_number,
            sort_order: self.sort_order,
            is_default: self.is_default,
            is_active: self.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Public menu display shapes
// ---------------------------------------------------------------------------

/// Menu item as displayed, with the denormalized tag string already parsed.
#[derive(Debug, Serialize)]
pub struct MenuItemDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_available: bool,
    pub tags: Vec<String>,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        MenuItemDto {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            is_vegetarian: item.is_vegetarian,
            is_available: item.is_available,
            tags: item.tag_list(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryGroupDto {
    pub label: String,
    pub items: Vec<MenuItemDto>,
}

impl From<&CategoryGroup> for CategoryGroupDto {
    fn from(group: &CategoryGroup) -> Self {
        CategoryGroupDto {
            label: group.label.clone(),
            items: group.items.iter().map(MenuItemDto::from).collect(),
        }
    }
}
