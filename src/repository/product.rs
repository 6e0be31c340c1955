use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, NewProductListMapping as DbNewProductListMapping,
        Product as DbProduct, ProductListMapping as DbProductListMapping,
        UpdateProduct as DbUpdateProduct,
    },
    repository::{DieselRepository, ProductReader, ProductWriter},
    repository::errors::{RepositoryError, RepositoryResult},
    schema::products,
};

type BoxedProducts<'a> = products::BoxedQuery<'a, Sqlite>;

/// Applies the filter predicate to a boxed products query.
///
/// Both the count and the page fetch go through here so the two are always
/// evaluated against the identical predicate.
///
/// Substring clauses rely on sqlite `LIKE` being ASCII case-insensitive;
/// search terms are trimmed before the pattern is built, and stored text is
/// trimmed at write time by form sanitization. The exact PLU clause uses
/// `LIKE` without wildcards for the same case-insensitive equality.
fn apply_filters<'a>(mut items: BoxedProducts<'a>, query: &ProductListQuery) -> BoxedProducts<'a> {
    items = items.filter(products::for_supplier_only.eq(query.for_supplier_only));

    if let Some(id) = query.id {
        items = items.filter(products::id.eq(id));
    }

    if let Some(term) = query.name.as_ref() {
        let pattern = format!("%{}%", term.trim());
        items = items.filter(products::name.like(pattern));
    }

    if let Some(term) = query.comment.as_ref() {
        let pattern = format!("%{}%", term.trim());
        items = items.filter(products::comment.like(pattern));
    }

    if let Some(term) = query.plu.as_ref() {
        let term = term.trim();
        if query.plu_exact {
            items = items.filter(products::plu.like(term.to_string()));
        } else {
            items = items.filter(products::plu.like(format!("%{term}%")));
        }
    }

    if let Some(from_cents) = query.from_price_cents {
        items = items.filter(products::price_cents.ge(from_cents));
    }

    if let Some(to_cents) = query.to_price_cents {
        items = items.filter(products::price_cents.le(to_cents));
    }

    if let Some(category_id) = query.category_id {
        items = items.filter(products::category_id.eq(category_id));
    }

    if let Some(product_type) = query.product_type {
        items = items.filter(products::product_type.eq(product_type.code()));
    }

    if let Some(is_active) = query.is_active {
        items = items.filter(products::is_active.eq(is_active));
    }

    if let Some(is_representation) = query.is_representation {
        items = items.filter(products::is_representation.eq(is_representation));
    }

    items
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => {
                let mappings = load_mappings(&mut conn, db_product.id)?;
                Ok(Some(db_product.into_domain(mappings)))
            }
            None => Ok(None),
        }
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        let mut conn = self.conn()?;

        let total = apply_filters(products::table.into_boxed(), &query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = apply_filters(products::table.into_boxed(), &query)
            .order((products::created_at.asc(), products::id.asc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset() as i64);
            if let Some(limit) = pagination.limit() {
                items = items.limit(limit as i64);
            }
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;
        let domain_products = db_products.into_iter().map(Into::into).collect();

        Ok((total, domain_products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::product_list_products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            // Children carry the id assigned to the parent row above.
            if !new_product.list_mappings.is_empty() {
                let rows: Vec<DbNewProductListMapping> = new_product
                    .list_mappings
                    .iter()
                    .map(|mapping| DbNewProductListMapping {
                        product_id: created.id,
                        product_list_id: mapping.product_list_id,
                    })
                    .collect();
                diesel::insert_into(product_list_products::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            let mappings = load_mappings(conn, created.id)?;
            Ok(created.into_domain(mappings))
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::product_list_products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
                .set(&db_updates)
                .get_result::<DbProduct>(conn)?;

            if let Some(mappings) = updates.list_mappings.as_ref() {
                diesel::delete(
                    product_list_products::table
                        .filter(product_list_products::product_id.eq(updated.id)),
                )
                .execute(conn)?;

                if !mappings.is_empty() {
                    let rows: Vec<DbNewProductListMapping> = mappings
                        .iter()
                        .map(|mapping| DbNewProductListMapping {
                            product_id: updated.id,
                            product_list_id: mapping.product_list_id,
                        })
                        .collect();
                    diesel::insert_into(product_list_products::table)
                        .values(&rows)
                        .execute(conn)?;
                }
            }

            let mappings = load_mappings(conn, updated.id)?;
            Ok(updated.into_domain(mappings))
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn load_mappings(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> Result<Vec<DbProductListMapping>, diesel::result::Error> {
    use crate::schema::product_list_products;

    product_list_products::table
        .filter(product_list_products::product_id.eq(product_id))
        .order(product_list_products::id.asc())
        .load::<DbProductListMapping>(conn)
}
