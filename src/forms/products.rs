use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{
    NewProduct, NewProductListMapping, ProductListQuery, ProductType, UpdateProduct,
};
use crate::pagination::Pagination;

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 200;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided unit is empty after sanitization.
    #[error("product unit cannot be empty")]
    EmptyUnit,
}

/// Payload submitted when creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1))]
    pub unit: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    pub comment: Option<String>,
    #[serde(default)]
    pub vat: i32,
    pub plu: Option<String>,
    #[serde(default)]
    pub is_packagable: bool,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub for_supplier_only: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_representation: bool,
    #[serde(default)]
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    #[serde(default)]
    pub is_pant: bool,
    #[serde(default)]
    pub account_number: i32,
    #[serde(default)]
    pub alcohol_type: i32,
    /// Product list ids the product becomes a member of.
    #[serde(default)]
    pub list_mappings: Vec<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain [`NewProduct`].
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let unit = sanitize_inline_text(&self.unit);
        if unit.is_empty() {
            return Err(ProductFormError::EmptyUnit);
        }

        Ok(NewProduct {
            name,
            unit,
            price_cents: self.price_cents,
            comment: sanitize_optional_text(self.comment),
            vat: self.vat,
            plu: sanitize_optional_text(self.plu),
            is_packagable: self.is_packagable,
            description: sanitize_optional_text(self.description),
            category_id: self.category_id,
            product_type: self.product_type,
            for_supplier_only: self.for_supplier_only,
            is_active: self.is_active,
            is_representation: self.is_representation,
            is_automatic_deposit: self.is_automatic_deposit,
            automatic_deposit_type: self.automatic_deposit_type,
            is_pant: self.is_pant,
            account_number: self.account_number,
            alcohol_type: self.alcohol_type,
            list_mappings: to_list_mappings(self.list_mappings),
        })
    }
}

/// Payload submitted when replacing a product's fields.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1))]
    pub unit: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    pub comment: Option<String>,
    #[serde(default)]
    pub vat: i32,
    pub plu: Option<String>,
    #[serde(default)]
    pub is_packagable: bool,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub for_supplier_only: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_representation: bool,
    #[serde(default)]
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    #[serde(default)]
    pub is_pant: bool,
    #[serde(default)]
    pub account_number: i32,
    #[serde(default)]
    pub alcohol_type: i32,
    /// Replacement list memberships; omit to leave the existing ones alone.
    pub list_mappings: Option<Vec<i32>>,
    /// Set when the caller changed the price and wants it pushed onto
    /// existing order lines.
    #[serde(default)]
    pub is_price_changed: bool,
}

impl UpdateProductForm {
    /// Validates and sanitizes the payload into the target product id, the
    /// price-propagation flag, and a domain [`UpdateProduct`].
    pub fn into_update(self) -> ProductFormResult<(i32, bool, UpdateProduct)> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let unit = sanitize_inline_text(&self.unit);
        if unit.is_empty() {
            return Err(ProductFormError::EmptyUnit);
        }

        let updates = UpdateProduct {
            name,
            unit,
            price_cents: self.price_cents,
            comment: sanitize_optional_text(self.comment),
            vat: self.vat,
            plu: sanitize_optional_text(self.plu),
            is_packagable: self.is_packagable,
            description: sanitize_optional_text(self.description),
            category_id: self.category_id,
            product_type: self.product_type,
            for_supplier_only: self.for_supplier_only,
            is_active: self.is_active,
            is_representation: self.is_representation,
            is_automatic_deposit: self.is_automatic_deposit,
            automatic_deposit_type: self.automatic_deposit_type,
            is_pant: self.is_pant,
            account_number: self.account_number,
            alcohol_type: self.alcohol_type,
            list_mappings: self.list_mappings.map(to_list_mappings),
            updated_at: chrono::Local::now().naive_utc(),
        };

        Ok((self.id, self.is_price_changed, updates))
    }
}

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub plu: Option<String>,
    /// Match the PLU exactly instead of as a substring.
    #[serde(default)]
    pub only_plu_prod: bool,
    pub from_price_cents: Option<i64>,
    pub to_price_cents: Option<i64>,
    pub category_id: Option<i32>,
    /// Product type as its integer storage code.
    pub product_type: Option<i32>,
    #[serde(default)]
    pub for_supplier_only: bool,
    pub is_active: Option<bool>,
    pub is_representation: Option<bool>,
    /// Requested page, 1-based.
    pub page: Option<usize>,
    /// Page size; without it the page is uncapped.
    pub per_page: Option<usize>,
}

impl ProductListParams {
    /// Convert the raw query parameters into a domain [`ProductListQuery`].
    pub fn into_query(self) -> ProductListQuery {
        ProductListQuery {
            id: self.id,
            name: self.name,
            comment: self.comment,
            plu: self.plu,
            plu_exact: self.only_plu_prod,
            from_price_cents: self.from_price_cents,
            to_price_cents: self.to_price_cents,
            category_id: self.category_id,
            product_type: self.product_type.map(ProductType::from_code),
            for_supplier_only: self.for_supplier_only,
            is_active: self.is_active,
            is_representation: self.is_representation,
            pagination: self.page.map(|page| Pagination {
                page,
                per_page: self.per_page,
            }),
        }
    }
}

fn sanitize_inline_text(value: &str) -> String {
    value.trim().to_string()
}

fn sanitize_optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}

fn to_list_mappings(list_ids: Vec<i32>) -> Vec<NewProductListMapping> {
    list_ids
        .into_iter()
        .map(|product_list_id| NewProductListMapping { product_list_id })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddProductForm {
        AddProductForm {
            name: "  Kaffe  ".to_string(),
            unit: " st ".to_string(),
            price_cents: 2500,
            comment: Some("   ".to_string()),
            vat: 12,
            plu: Some(" 4011 ".to_string()),
            is_packagable: true,
            description: None,
            category_id: 2,
            product_type: ProductType::Standard,
            for_supplier_only: false,
            is_active: true,
            is_representation: false,
            is_automatic_deposit: false,
            automatic_deposit_type: None,
            is_pant: false,
            account_number: 3001,
            alcohol_type: 0,
            list_mappings: vec![5],
        }
    }

    #[test]
    fn add_form_trims_text_fields() {
        let new_product = form().into_new_product().expect("expected success");

        assert_eq!(new_product.name, "Kaffe");
        assert_eq!(new_product.unit, "st");
        assert_eq!(new_product.plu.as_deref(), Some("4011"));
        assert_eq!(new_product.comment, None);
        assert_eq!(new_product.list_mappings.len(), 1);
        assert_eq!(new_product.list_mappings[0].product_list_id, 5);
    }

    #[test]
    fn add_form_rejects_name_over_limit() {
        let mut form = form();
        form.name = "x".repeat(NAME_MAX_LEN + 1);

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::Validation(_))));
    }

    #[test]
    fn add_form_rejects_blank_unit() {
        let mut form = form();
        form.unit = "  ".to_string();

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::EmptyUnit)));
    }

    #[test]
    fn add_form_rejects_zero_category() {
        let mut form = form();
        form.category_id = 0;

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::Validation(_))));
    }

    #[test]
    fn list_params_map_to_query() {
        let params = ProductListParams {
            plu: Some("4011".to_string()),
            only_plu_prod: true,
            from_price_cents: Some(1000),
            product_type: Some(2),
            page: Some(2),
            per_page: Some(25),
            ..Default::default()
        };

        let query = params.into_query();

        assert!(query.plu_exact);
        assert_eq!(query.plu.as_deref(), Some("4011"));
        assert_eq!(query.from_price_cents, Some(1000));
        assert_eq!(query.product_type, Some(ProductType::Deposit));
        let pagination = query.pagination.expect("pagination should be set");
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.per_page, Some(25));
    }

    #[test]
    fn list_params_page_without_size_is_preserved() {
        let params = ProductListParams {
            page: Some(3),
            ..Default::default()
        };

        let query = params.into_query();

        let pagination = query.pagination.expect("pagination should be set");
        assert_eq!(pagination.per_page, None);
        assert_eq!(pagination.offset(), 0);
    }
}
