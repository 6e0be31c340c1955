use crate::db::{DbConnection, DbPool};
use crate::domain::media::MediaFile;
use crate::domain::order::OrderLine;
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod media;
pub mod order;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    /// Fetch a product with its list mappings, or `None` when absent.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Evaluate the filter, returning the total match count alongside the
    /// requested page. Both are computed from the same predicate.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Insert a product and its list mappings as one unit, returning the
    /// persisted entity.
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace all scalar fields of the product identified by `product_id`.
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
    /// Hard-delete the product row. `NotFound` when no row matched.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Lookup of media records scoped by module.
pub trait MediaReader {
    fn get_media_by_module_id(
        &self,
        module: &str,
        module_id: i32,
    ) -> RepositoryResult<Vec<MediaFile>>;
    /// Batched variant; callers keep batches within the upstream limit.
    fn get_media_by_module_ids(
        &self,
        module: &str,
        module_ids: &[i32],
    ) -> RepositoryResult<Vec<MediaFile>>;
}

/// Read access to order lines referencing products.
pub trait OrderLineReader {
    fn get_order_lines_for_product(&self, product_id: i32) -> RepositoryResult<Vec<OrderLine>>;
}

/// Bulk price updates over order lines.
pub trait OrderLineWriter {
    /// Persist the price carried on each line, returning how many rows changed.
    fn update_order_line_prices(&self, lines: &[OrderLine]) -> RepositoryResult<usize>;
}

pub use errors::RepositoryError;
