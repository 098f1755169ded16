//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{Category, Product};
use crate::domain::repository::{
    CategoryFilter, CategoryRepository, Page, ProductFilter, ProductRepository,
};
use crate::domain::value_objects::{
    ColorVariant, PageParams, ProductImages, SizeStock, SortSpec,
};
use crate::error::CatalogResult;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a wire-level sort field to a category column.
/// Unknown fields fall back to insertion time.
fn category_sort_column(field: &str) -> &'static str {
    match field {
        "name" => "name",
        "level" => "level",
        "parentId" => "parent_id",
        "createdAt" => "created_at",
        "updatedAt" => "updated_at",
        _ => "created_at",
    }
}

/// Map a wire-level sort field to a product column.
/// Unknown fields fall back to price (the listing default).
fn product_sort_column(field: &str) -> &'static str {
    match field {
        "name" => "name",
        "price" => "price",
        "sku" => "sku",
        "categoryId" => "category_id",
        "createdAt" => "created_at",
        "updatedAt" => "updated_at",
        _ => "price",
    }
}

/// Append category filters to a query.
///
/// The wire filters `level1`/`level2` address 0-indexed positions 1 and 2
/// of the ancestor chain; Postgres arrays are 1-based, hence `[2]`/`[3]`.
fn push_category_filters<'a>(qb: &mut QueryBuilder<'a, Postgres>, filter: &'a CategoryFilter) {
    let mut sep = " WHERE ";
    if let Some(level1) = filter.level1 {
        qb.push(sep).push("ancestors[2] = ").push_bind(level1);
        sep = " AND ";
    }
    if let Some(level2) = filter.level2 {
        qb.push(sep).push("ancestors[3] = ").push_bind(level2);
    }
}

/// Append product filters to a query. `baseColor` matches any element of
/// the JSONB colors array via containment.
fn push_product_filters<'a>(qb: &mut QueryBuilder<'a, Postgres>, filter: &'a ProductFilter) {
    let mut sep = " WHERE ";
    if let Some(base_color) = &filter.base_color {
        qb.push(sep)
            .push("colors @> ")
            .push_bind(serde_json::json!([{ "baseColor": base_color }]));
        sep = " AND ";
    }
    if let Some(category_id) = filter.category_id {
        qb.push(sep).push("category_id = ").push_bind(category_id);
    }
}

const CATEGORY_COLUMNS: &str =
    "category_id, name, parent_id, ancestors, level, created_at, updated_at";

impl CategoryRepository for PgCatalogRepository {
    async fn create(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (
                category_id,
                name,
                parent_id,
                ancestors,
                level,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.parent_id)
        .bind(&category.ancestors)
        .bind(category.level)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn list(
        &self,
        filter: &CategoryFilter,
        params: &PageParams,
        sort: &SortSpec,
    ) -> CatalogResult<Page<Category>> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM categories");
        push_category_filters(&mut count_qb, filter);

        let total_docs: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories"
        ));
        push_category_filters(&mut qb, filter);
        // Stable tie-break on the primary key (natural storage order)
        qb.push(format!(
            " ORDER BY {} {}, category_id ASC",
            category_sort_column(&sort.field),
            sort.order.as_sql()
        ));
        qb.push(" LIMIT ").push_bind(params.limit());
        qb.push(" OFFSET ").push_bind(params.offset());

        let rows: Vec<CategoryRow> = qb.build_query_as().fetch_all(&self.pool).await?;
        let docs = rows.into_iter().map(CategoryRow::into_category).collect();

        Ok(Page::new(docs, total_docs, params))
    }

    async fn update(&self, category: &Category) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                parent_id = $3,
                ancestors = $4,
                level = $5,
                updated_at = $6
            WHERE category_id = $1
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.parent_id)
        .bind(&category.ancestors)
        .bind(category.level)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "DELETE FROM categories WHERE category_id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn has_children(&self, id: Uuid) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE parent_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

const PRODUCT_COLUMNS: &str = "product_id, name, price, sku, category_id, category_ancestors, \
     colors, images, short_description, description, sizes, created_at, updated_at";

impl ProductRepository for PgCatalogRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                price,
                sku,
                category_id,
                category_ancestors,
                colors,
                images,
                short_description,
                description,
                sizes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.sku)
        .bind(product.category_id)
        .bind(&product.category_ancestors)
        .bind(Json(&product.colors))
        .bind(Json(&product.images))
        .bind(&product.short_description)
        .bind(&product.description)
        .bind(Json(&product.sizes))
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        params: &PageParams,
        sort: &SortSpec,
    ) -> CatalogResult<Page<Product>> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_product_filters(&mut count_qb, filter);

        let total_docs: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        push_product_filters(&mut qb, filter);
        qb.push(format!(
            " ORDER BY {} {}, product_id ASC",
            product_sort_column(&sort.field),
            sort.order.as_sql()
        ));
        qb.push(" LIMIT ").push_bind(params.limit());
        qb.push(" OFFSET ").push_bind(params.offset());

        let rows: Vec<ProductRow> = qb.build_query_as().fetch_all(&self.pool).await?;
        let docs = rows.into_iter().map(ProductRow::into_product).collect();

        Ok(Page::new(docs, total_docs, params))
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                price = $3,
                sku = $4,
                category_id = $5,
                category_ancestors = $6,
                colors = $7,
                images = $8,
                short_description = $9,
                description = $10,
                sizes = $11,
                updated_at = $12
            WHERE product_id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.sku)
        .bind(product.category_id)
        .bind(&product.category_ancestors)
        .bind(Json(&product.colors))
        .bind(Json(&product.images))
        .bind(&product.short_description)
        .bind(&product.description)
        .bind(Json(&product.sizes))
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "DELETE FROM products WHERE product_id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn exists_by_category(&self, category_id: Uuid) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE category_id = $1)",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// Internal row types for sqlx mapping

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    parent_id: Option<Uuid>,
    ancestors: Vec<Uuid>,
    level: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: self.category_id,
            name: self.name,
            parent_id: self.parent_id,
            ancestors: self.ancestors,
            level: self.level,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    price: f64,
    sku: String,
    category_id: Uuid,
    category_ancestors: Vec<Uuid>,
    colors: Json<Vec<ColorVariant>>,
    images: Json<ProductImages>,
    short_description: Option<String>,
    description: Option<String>,
    sizes: Json<Vec<SizeStock>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: self.product_id,
            name: self.name,
            price: self.price,
            sku: self.sku,
            category_id: self.category_id,
            category_ancestors: self.category_ancestors,
            colors: self.colors.0,
            images: self.images.0,
            short_description: self.short_description,
            description: self.description,
            sizes: self.sizes.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
