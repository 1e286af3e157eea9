//! Core data types for the items catalog.
//!
//! All wire-facing types serialize with camelCase field names, matching the
//! JSON shape of the REST API.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for an item.
///
/// Wraps a UUID v4. Clients treat it as an opaque string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Creates a new random ItemId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ItemId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Current time truncated to millisecond precision.
#[must_use]
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Timestamp for a modification of a record last touched at `previous`.
///
/// Always strictly greater than `previous`, even when the clock has not
/// advanced by a full millisecond.
#[must_use]
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now_millis();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

/// Serde adapter writing timestamps as RFC 3339 with exactly three
/// fractional digits (`2024-06-15T10:00:05.000Z`).
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

// ============================================================================
// Item
// ============================================================================

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, immutable.
    pub id: ItemId,
    /// Display name (1..=100 characters).
    pub name: String,
    /// Optional free-form description (up to 500 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, always positive.
    pub price: f64,
    /// Category label, matched case-insensitively by list filters.
    pub category: String,
    /// Whether the item is in stock.
    pub in_stock: bool,
    /// Creation time, immutable.
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Time of the last modification.
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a new record from validated input.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    #[must_use]
    pub fn new(id: ItemId, input: CreateItemInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `changes` over this record.
    ///
    /// `id` and `created_at` never change; `updated_at` is left to the caller.
    pub fn apply(&mut self, changes: &UpdateItemInput) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &changes.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(category) = &changes.category {
            self.category.clone_from(category);
        }
        if let Some(in_stock) = changes.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// Case-insensitive exact match on the category.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match against name or description.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

// ============================================================================
// Inputs
// ============================================================================

fn default_in_stock() -> bool {
    true
}

/// Validated payload for creating an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Validated partial payload for updating an item.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl UpdateItemInput {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.in_stock.is_none()
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Default page number for list queries.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list queries.
pub const DEFAULT_LIMIT: u32 = 10;

/// Filters and paging for listing items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Exact category match, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Substring match over name or description, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category: None,
            search: None,
        }
    }
}

impl ListQuery {
    /// Number of filtered records skipped before this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }
}

/// Pagination metadata for a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Number of records matching the filters, before paging.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
}

impl Pagination {
    /// Compute pagination metadata for `total` filtered records.
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// A window of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> CreateItemInput {
        CreateItemInput {
            name: "Laptop".to_string(),
            description: Some("A portable computer".to_string()),
            price: 1299.99,
            category: "Electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = Item::new(ItemId::new(), laptop(), now_millis());
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("inStock").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn test_timestamps_always_carry_milliseconds() {
        let whole_second = "2024-06-15T10:00:05Z".parse::<DateTime<Utc>>().unwrap();
        let item = Item::new(ItemId::new(), laptop(), whole_second);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["createdAt"], "2024-06-15T10:00:05.000Z");
        assert_eq!(json["updatedAt"], "2024-06-15T10:00:05.000Z");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back.created_at, whole_second);
    }

    #[test]
    fn test_item_omits_missing_description() {
        let mut input = laptop();
        input.description = None;
        let item = Item::new(ItemId::new(), input, now_millis());
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_new_item_has_equal_timestamps() {
        let now = now_millis();
        let item = Item::new(ItemId::new(), laptop(), now);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut item = Item::new(ItemId::new(), laptop(), now_millis());
        let before = item.clone();

        item.apply(&UpdateItemInput {
            price: Some(1199.99),
            ..Default::default()
        });

        assert_eq!(item.price, 1199.99);
        assert_eq!(item.name, before.name);
        assert_eq!(item.category, before.category);
        assert_eq!(item.description, before.description);
        assert_eq!(item.id, before.id);
        assert_eq!(item.created_at, before.created_at);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let item = Item::new(ItemId::new(), laptop(), now_millis());
        assert!(item.in_category("electronics"));
        assert!(item.in_category("ELECTRONICS"));
        assert!(!item.in_category("Electronic"));
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let item = Item::new(ItemId::new(), laptop(), now_millis());
        assert!(item.matches_search("LAP"));
        assert!(item.matches_search("portable"));
        assert!(!item.matches_search("desk"));
    }

    #[test]
    fn test_next_timestamp_strictly_increases() {
        let future = now_millis() + Duration::seconds(5);
        let next = next_timestamp(future);
        assert!(next > future);

        let past = now_millis() - Duration::seconds(5);
        assert!(next_timestamp(past) > past);
    }

    #[test]
    fn test_pagination_total_pages() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(3, 4, 9).total_pages, 3);
    }

    #[test]
    fn test_list_query_offset() {
        let query = ListQuery {
            page: 3,
            limit: 5,
            ..Default::default()
        };
        assert_eq!(query.offset(), 10);
        assert_eq!(ListQuery::default().offset(), 0);
    }

    #[test]
    fn test_item_id_roundtrip_display() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
