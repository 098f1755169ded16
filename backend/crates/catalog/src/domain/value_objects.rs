//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for category and product display names (in characters)
pub const NAME_MIN_LENGTH: usize = 2;

/// Error returned when a display name fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayNameError {
    #[error("name must be at least {min} characters")]
    TooShort { min: usize },
}

/// Validated display name for a category
///
/// # Invariants
/// - Trimmed
/// - At least [`NAME_MIN_LENGTH`] characters (Unicode code points)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new CategoryName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.chars().count() < NAME_MIN_LENGTH {
            return Err(DisplayNameError::TooShort {
                min: NAME_MIN_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = DisplayNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.0
    }
}

// ============================================================================
// Pagination and sorting
// ============================================================================

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `_order` query parameter: `desc` sorts descending,
    /// anything else ascending (the wire contract's lenient default).
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Sort specification: a whitelisted wire-level field name plus direction
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

/// Default page size when `_limit` is absent or unparsable
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated 1-indexed pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    limit: i64,
}

impl PageParams {
    /// Build page parameters, clamping out-of-range values rather than
    /// rejecting them (pages below 1 become 1; limits are clamped to
    /// `1..=MAX_PAGE_SIZE`).
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Row offset for the current page
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Product variant data (persisted as JSONB)
// ============================================================================

/// One color offering of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    /// Filterable base color (e.g. "black")
    pub base_color: String,
    /// Rendered color value (e.g. "#1a1a1a")
    pub actual_color: String,
    /// Display name (e.g. "Charcoal")
    pub color_name: String,
}

/// Image URLs attached to a product
///
/// URLs only; uploading and hosting happen outside this backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    pub main: String,
    pub hover: String,
    #[serde(default)]
    pub product: Vec<String>,
}

/// Garment size codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCode {
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizeCode::S => "S",
            SizeCode::M => "M",
            SizeCode::L => "L",
            SizeCode::XL => "XL",
            SizeCode::XXL => "XXL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "S" => Some(SizeCode::S),
            "M" => Some(SizeCode::M),
            "L" => Some(SizeCode::L),
            "XL" => Some(SizeCode::XL),
            "XXL" => Some(SizeCode::XXL),
            _ => None,
        }
    }
}

impl fmt::Display for SizeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock level for one size of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeStock {
    pub size: SizeCode,
    pub stock: i32,
}
