use std::collections::HashMap;

use serde::Serialize;

use crate::MEDIA_LOOKUP_BATCH_SIZE;
use crate::domain::media::{MediaFile, PRODUCT_MEDIA_MODULE};
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, UpdateProductForm};
use crate::repository::{
    MediaReader, OrderLineReader, OrderLineWriter, ProductReader, ProductWriter,
};
use crate::services::{ServiceError, ServiceResult};

/// Page of products together with the total number of matches, which always
/// reflects the full filtered set regardless of pagination.
#[derive(Debug, Serialize)]
pub struct PaginatedProducts {
    pub total_count: usize,
    pub products: Vec<Product>,
}

/// Outcome of a successful product update.
#[derive(Debug, Serialize)]
pub struct ProductUpdate {
    /// The product as persisted after the update.
    pub product: Product,
    /// Number of order lines rewritten with the new price.
    pub propagated_lines: usize,
}

/// Runs the filter query and attaches media records to the returned page.
pub fn list_products<R>(repo: &R, query: ProductListQuery) -> ServiceResult<PaginatedProducts>
where
    R: ProductReader + MediaReader + ?Sized,
{
    let (total_count, mut products) = repo.list_products(query).map_err(ServiceError::from)?;

    if products.is_empty() {
        return Ok(PaginatedProducts {
            total_count,
            products,
        });
    }

    let ids: Vec<i32> = products.iter().map(|product| product.id).collect();
    let mut media_by_product = fetch_media_for_products(repo, &ids)?;

    for product in &mut products {
        product.media = media_by_product.remove(&product.id).unwrap_or_default();
    }

    Ok(PaginatedProducts {
        total_count,
        products,
    })
}

/// Fetches a single product with its media records attached.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + MediaReader + ?Sized,
{
    let Some(mut product) = repo.get_product_by_id(id).map_err(ServiceError::from)? else {
        return Err(ServiceError::NotFound);
    };

    product.media = repo
        .get_media_by_module_id(PRODUCT_MEDIA_MODULE, product.id)
        .map_err(ServiceError::from)?;

    Ok(product)
}

/// Creates a product together with its list mappings.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Replaces a product's fields and, when the form flags a price change,
/// pushes the new price onto every order line referencing the product.
///
/// The row update and the propagation commit separately: a propagation
/// failure is reported as [`ServiceError::PricePropagation`] with the
/// product change already persisted. Concurrent updates to the same product
/// are only serialized by the storage layer.
pub fn update_product<R>(repo: &R, form: UpdateProductForm) -> ServiceResult<ProductUpdate>
where
    R: ProductWriter + OrderLineReader + OrderLineWriter + ?Sized,
{
    let (product_id, is_price_changed, updates) = form
        .into_update()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let product = repo
        .update_product(product_id, &updates)
        .map_err(ServiceError::from)?;

    let mut propagated_lines = 0;
    if is_price_changed {
        propagated_lines = propagate_price(repo, product_id, product.price_cents).map_err(
            |source| {
                log::error!("Price propagation failed for product {product_id}: {source}");
                ServiceError::PricePropagation { product_id, source }
            },
        )?;
    }

    Ok(ProductUpdate {
        product,
        propagated_lines,
    })
}

/// Deletes the product row. Deleting an id that does not exist returns
/// [`ServiceError::NotFound`]; a repeated delete therefore reports
/// `NotFound` rather than failing.
pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(id).map_err(ServiceError::from)
}

fn propagate_price<R>(
    repo: &R,
    product_id: i32,
    price_cents: i64,
) -> Result<usize, crate::repository::RepositoryError>
where
    R: OrderLineReader + OrderLineWriter + ?Sized,
{
    let mut lines = repo.get_order_lines_for_product(product_id)?;
    if lines.is_empty() {
        return Ok(0);
    }

    for line in &mut lines {
        line.price_cents = price_cents;
    }

    repo.update_order_line_prices(&lines)
}

/// Fetches media for the given product ids in batches bounded by the
/// upstream per-call id limit, grouped by owning product.
fn fetch_media_for_products<R>(
    repo: &R,
    ids: &[i32],
) -> ServiceResult<HashMap<i32, Vec<MediaFile>>>
where
    R: MediaReader + ?Sized,
{
    let mut media_by_product: HashMap<i32, Vec<MediaFile>> = HashMap::new();

    for batch in ids.chunks(MEDIA_LOOKUP_BATCH_SIZE) {
        let records = repo
            .get_media_by_module_ids(PRODUCT_MEDIA_MODULE, batch)
            .map_err(ServiceError::from)?;
        for record in records {
            media_by_product
                .entry(record.module_id)
                .or_default()
                .push(record);
        }
    }

    Ok(media_by_product)
}
