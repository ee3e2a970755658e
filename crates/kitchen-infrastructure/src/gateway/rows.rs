//! Wire rows and write payloads for the gateway tables.
//!
//! Row structs mirror the remote columns, including the legacy nullable
//! boolean columns, and convert into the domain entities. Payload structs
//! carry exactly the writable columns for inserts and updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kitchen_core::domain::{
    Kitchen, KitchenWithRelations, Location, MenuItem, OrderingLink, Profile, UserRole,
};

// ---------------------------------------------------------------------------
// Kitchens
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct KitchenRow {
    pub id: Uuid,
    pub location_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub header_image_url: Option<String>,
    pub phone_number: Option<String>,
    pub sort_order: i32,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<KitchenRow> for Kitchen {
    fn from(row: KitchenRow) -> Self {
        Kitchen {
            id: row.id,
            location_id: row.location_id,
            name: row.name,
            description: row.description,
            logo_url: row.logo_url,
            header_image_url: row.header_image_url,
            phone_number: row.phone_number,
            sort_order: row.sort_order,
            is_active: row.is_active.unwrap_or(true),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Kitchen row with the gateway's nested relation arrays.
#[derive(Debug, Deserialize)]
pub(crate) struct KitchenWithRelationsRow {
    #[serde(flatten)]
    pub kitchen: KitchenRow,
    #[serde(default)]
    pub menu_items: Vec<MenuItemRow>,
    #[serde(default)]
    pub ordering_links: Vec<OrderingLinkRow>,
}

impl From<KitchenWithRelationsRow> for KitchenWithRelations {
    fn from(row: KitchenWithRelationsRow) -> Self {
        KitchenWithRelations {
            kitchen: row.kitchen.into(),
            menu_items: row.menu_items.into_iter().map(Into::into).collect(),
            ordering_links: row.ordering_links.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct KitchenPayload<'a> {
    pub id: Uuid,
    pub location_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub header_image_url: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl<'a> From<&'a Kitchen> for KitchenPayload<'a> {
    fn from(kitchen: &'a Kitchen) -> Self {
        KitchenPayload {
            id: kitchen.id,
            location_id: kitchen.location_id,
            name: &kitchen.name,
            description: kitchen.description.as_deref(),
            logo_url: kitchen.logo_url.as_deref(),
            header_image_url: kitchen.header_image_url.as_deref(),
            phone_number: kitchen.phone_number.as_deref(),
            sort_order: kitchen.sort_order,
            is_active: kitchen.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct MenuItemRow {
    pub id: Uuid,
    pub kitchen_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub category_sort_order: Option<i32>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_available: Option<bool>,
    pub tags: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            kitchen_id: row.kitchen_id,
            name: row.name,
            description: row.description,
            category: row.category,
            category_sort_order: row.category_sort_order,
            price: row.price,
            image_url: row.image_url,
            is_vegetarian: row.is_vegetarian.unwrap_or(false),
            is_available: row.is_available.unwrap_or(true),
            tags: row.tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MenuItemPayload<'a> {
    pub id: Uuid,
    pub kitchen_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub category_sort_order: Option<i32>,
    pub price: f64,
    pub image_url: Option<&'a str>,
    pub is_vegetarian: bool,
    pub is_available: bool,
    pub tags: Option<&'a str>,
}

impl<'a> From<&'a MenuItem> for MenuItemPayload<'a> {
    fn from(item: &'a MenuItem) -> Self {
        MenuItemPayload {
            id: item.id,
            kitchen_id: item.kitchen_id,
            name: &item.name,
            description: item.description.as_deref(),
            category: item.category.as_deref(),
            category_sort_order: item.category_sort_order,
            price: item.price,
            image_url: item.image_url.as_deref(),
            is_vegetarian: item.is_vegetarian,
            is_available: item.is_available,
            tags: item.tags.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ordering links
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OrderingLinkRow {
    pub id: Uuid,
    pub kitchen_id: Uuid,
    pub platform_name: String,
    pub url: String,
    pub logo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<OrderingLinkRow> for OrderingLink {
    fn from(row: OrderingLinkRow) -> Self {
        OrderingLink {
            id: row.id,
            kitchen_id: row.kitchen_id,
            platform_name: row.platform_name,
            url: row.url,
            logo_url: row.logo_url,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderingLinkPayload<'a> {
    pub id: Uuid,
    pub kitchen_id: Uuid,
    pub platform_name: &'a str,
    pub url: &'a str,
    pub logo_url: Option<&'a str>,
}

impl<'a> From<&'a OrderingLink> for OrderingLinkPayload<'a> {
    fn from(link: &'a OrderingLink) -> Self {
        OrderingLinkPayload {
            id: link.id,
            kitchen_id: link.kitchen_id,
            platform_name: &link.platform_name,
            url: &link.url,
            logo_url: link.logo_url.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct LocationRow {
    pub id: Uuid,
    pub name: String,
    pub nick_name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub sort_order: i32,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name: row.name,
            nick_name: row.nick_name,
            address: row.address,
            phone_number: row.phone_number,
            sort_order: row.sort_order,
            is_default: row.is_default.unwrap_or(false),
            is_active: row.is_active.unwrap_or(true),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LocationPayload<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub nick_name: &'a str,
    pub address: &'a str,
    pub phone_number: Option<&'a str>,
    pub sort_order: i32,
    pub is_default: bool,
    pub is_active: bool,
}

impl<'a> From<&'a Location> for LocationPayload<'a> {
    fn from(location: &'a Location) -> Self {
        LocationPayload {
            id: location.id,
            name: &location.name,
            nick_name: &location.nick_name,
            address: &location.address,
            phone_number: location.phone_number.as_deref(),
            sort_order: location.sort_order,
            is_default: location.is_default,
            is_active: location.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Profiles (read-only)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            full_name: row.full_name,
            role: row.role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
