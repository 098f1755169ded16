//! Domain Entities
//!
//! Core business entities for the catalog domain.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::hierarchy::{Ancestry, MAX_DEPTH};
use crate::domain::value_objects::{CategoryName, ColorVariant, ProductImages, SizeStock};

/// Category entity - one node of the three-level taxonomy tree
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// `None` for roots
    pub parent_id: Option<Uuid>,
    /// Ancestor ids, root-first, exclusive of self; length is `level - 1`
    pub ancestors: Vec<Uuid>,
    /// Depth in the tree, root = 1, bounded at [`MAX_DEPTH`]
    pub level: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category from a validated name and derived ancestry
    pub fn new(name: CategoryName, parent_id: Option<Uuid>, ancestry: Ancestry) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into_inner(),
            parent_id,
            ancestors: ancestry.ancestors,
            level: ancestry.level,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this node is a root (level 1, no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this node may accept children
    pub fn can_have_children(&self) -> bool {
        self.level < MAX_DEPTH
    }

    /// Apply an update: new name, and a (possibly re-derived) placement.
    /// Identity and creation timestamp are preserved.
    pub fn apply_update(
        &mut self,
        name: CategoryName,
        parent_id: Option<Uuid>,
        ancestry: Ancestry,
    ) {
        self.name = name.into_inner();
        self.parent_id = parent_id;
        self.ancestors = ancestry.ancestors;
        self.level = ancestry.level;
        self.updated_at = Utc::now();
    }
}

/// Product entity
///
/// `category_ancestors` is a point-in-time snapshot of the referenced
/// category's chain, taken at create/update. It is not rewritten when the
/// category later moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub category_id: Uuid,
    pub category_ancestors: Vec<Uuid>,
    pub colors: Vec<ColorVariant>,
    pub images: ProductImages,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub sizes: Vec<SizeStock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field set shared by product create and update
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub colors: Vec<ColorVariant>,
    pub images: ProductImages,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub sizes: Vec<SizeStock>,
}

impl Product {
    /// Create a new product, snapshotting the category's ancestor chain
    pub fn new(draft: ProductDraft, category: &Category) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            price: draft.price,
            sku: draft.sku,
            category_id: category.id,
            category_ancestors: category.ancestors.clone(),
            colors: draft.colors,
            images: draft.images,
            short_description: draft.short_description,
            description: draft.description,
            sizes: draft.sizes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update, re-snapshotting the (possibly new) category's chain
    pub fn apply_update(&mut self, draft: ProductDraft, category: &Category) {
        self.name = draft.name;
        self.price = draft.price;
        self.sku = draft.sku;
        self.category_id = category.id;
        self.category_ancestors = category.ancestors.clone();
        self.colors = draft.colors;
        self.images = draft.images;
        self.short_description = draft.short_description;
        self.description = draft.description;
        self.sizes = draft.sizes;
        self.updated_at = Utc::now();
    }
}
