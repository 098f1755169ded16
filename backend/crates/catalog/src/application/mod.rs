//! Application Layer - Use Cases

pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

pub use create_category::{CategoryInput, CreateCategoryUseCase};
pub use delete_category::DeleteCategoryUseCase;
pub use get_category::GetCategoryUseCase;
pub use list_categories::ListCategoriesUseCase;
pub use update_category::UpdateCategoryUseCase;

pub use create_product::{CreateProductUseCase, ProductInput};
pub use delete_product::DeleteProductUseCase;
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::UpdateProductUseCase;
