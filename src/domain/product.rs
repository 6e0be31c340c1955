use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::media::MediaFile;
use crate::pagination::Pagination;

/// Kind of product sold through the portal.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Regular product sold to customers.
    Standard,
    /// Product reserved for internal/hospitality use.
    Representation,
    /// Deposit-related product (returnable packaging).
    Deposit,
}

impl Default for ProductType {
    fn default() -> Self {
        Self::Standard
    }
}

impl ProductType {
    /// Integer code used in storage.
    pub fn code(self) -> i32 {
        match self {
            Self::Standard => 0,
            Self::Representation => 1,
            Self::Deposit => 2,
        }
    }

    /// Decode a stored integer code, falling back to [`ProductType::Standard`]
    /// for unknown values.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Representation,
            2 => Self::Deposit,
            _ => Self::Standard,
        }
    }
}

/// Membership of a product in an external product list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductListMapping {
    /// Unique identifier of the mapping row.
    pub id: i32,
    /// Owning product identifier.
    pub product_id: i32,
    /// External product list identifier.
    pub product_list_id: i32,
    /// Timestamp for when the mapping was created.
    pub created_at: NaiveDateTime,
}

/// List membership supplied when creating or replacing a product.
///
/// The owning product id is assigned by the repository once the parent row
/// has been inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductListMapping {
    /// External product list identifier.
    pub product_list_id: i32,
}

/// Domain representation of a product managed by the portal.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Sales unit, e.g. "st" or "kg".
    pub unit: String,
    /// Price in the smallest currency unit.
    pub price_cents: i64,
    /// Free-text comment shown to operators.
    pub comment: Option<String>,
    /// VAT percentage applied on sale.
    pub vat: i32,
    /// Optional price look-up code.
    pub plu: Option<String>,
    /// Whether the product can be packaged.
    pub is_packagable: bool,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Owning category identifier.
    pub category_id: i32,
    /// Kind of product.
    pub product_type: ProductType,
    /// Whether the product is visible to suppliers only.
    pub for_supplier_only: bool,
    /// Whether the product is currently orderable.
    pub is_active: bool,
    /// Whether the product is flagged for representation use.
    pub is_representation: bool,
    /// Whether a deposit is added automatically on order.
    pub is_automatic_deposit: bool,
    /// Deposit type code when `is_automatic_deposit` is set.
    pub automatic_deposit_type: Option<i32>,
    /// Whether the product itself is a deposit-bearing container.
    pub is_pant: bool,
    /// Bookkeeping account number.
    pub account_number: i32,
    /// Alcohol classification code.
    pub alcohol_type: i32,
    /// Product list memberships owned by this product.
    pub list_mappings: Vec<ProductListMapping>,
    /// Media records attached to this product, filled in by the service layer.
    pub media: Vec<MediaFile>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Sales unit.
    pub unit: String,
    /// Price in the smallest currency unit.
    pub price_cents: i64,
    /// Free-text comment.
    pub comment: Option<String>,
    /// VAT percentage.
    pub vat: i32,
    /// Optional price look-up code.
    pub plu: Option<String>,
    /// Whether the product can be packaged.
    pub is_packagable: bool,
    /// Optional longer description.
    pub description: Option<String>,
    /// Owning category identifier.
    pub category_id: i32,
    /// Kind of product.
    pub product_type: ProductType,
    /// Supplier-only visibility flag.
    pub for_supplier_only: bool,
    /// Whether the product is orderable.
    pub is_active: bool,
    /// Representation flag.
    pub is_representation: bool,
    /// Automatic deposit flag.
    pub is_automatic_deposit: bool,
    /// Deposit type code.
    pub automatic_deposit_type: Option<i32>,
    /// Deposit-bearing container flag.
    pub is_pant: bool,
    /// Bookkeeping account number.
    pub account_number: i32,
    /// Alcohol classification code.
    pub alcohol_type: i32,
    /// List memberships created together with the product.
    pub list_mappings: Vec<NewProductListMapping>,
}

impl NewProduct {
    /// Build a new product payload with required fields and defaults for the rest.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        price_cents: i64,
        category_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            price_cents,
            comment: None,
            vat: 0,
            plu: None,
            is_packagable: false,
            description: None,
            category_id,
            product_type: ProductType::default(),
            for_supplier_only: false,
            is_active: true,
            is_representation: false,
            is_automatic_deposit: false,
            automatic_deposit_type: None,
            is_pant: false,
            account_number: 0,
            alcohol_type: 0,
            list_mappings: Vec::new(),
        }
    }

    /// Attach a PLU code to the payload.
    pub fn with_plu(mut self, plu: impl Into<String>) -> Self {
        self.plu = Some(plu.into());
        self
    }

    /// Attach a comment to the payload.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach a description to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the product type.
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    /// Restrict the product to supplier visibility.
    pub fn for_supplier_only(mut self) -> Self {
        self.for_supplier_only = true;
        self
    }

    /// Set the active flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Flag the product for representation use.
    pub fn representation(mut self, is_representation: bool) -> Self {
        self.is_representation = is_representation;
        self
    }

    /// Attach list memberships created together with the product.
    pub fn with_list_mappings(mut self, mappings: Vec<NewProductListMapping>) -> Self {
        self.list_mappings = mappings;
        self
    }
}

/// Full replacement of a product's scalar fields.
///
/// Unlike a patch, every field is written; `list_mappings` replaces the
/// existing memberships when supplied and leaves them alone when `None`.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub unit: String,
    pub price_cents: i64,
    pub comment: Option<String>,
    pub vat: i32,
    pub plu: Option<String>,
    pub is_packagable: bool,
    pub description: Option<String>,
    pub category_id: i32,
    pub product_type: ProductType,
    pub for_supplier_only: bool,
    pub is_active: bool,
    pub is_representation: bool,
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    pub is_pant: bool,
    pub account_number: i32,
    pub alcohol_type: i32,
    /// Replacement list memberships, when the caller supplies them.
    pub list_mappings: Option<Vec<NewProductListMapping>>,
    /// Timestamp captured when the replacement payload was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Build a replacement payload from required fields, stamping it with
    /// the current time.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        price_cents: i64,
        category_id: i32,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            unit: unit.into(),
            price_cents,
            comment: None,
            vat: 0,
            plu: None,
            is_packagable: false,
            description: None,
            category_id,
            product_type: ProductType::default(),
            for_supplier_only: false,
            is_active: true,
            is_representation: false,
            is_automatic_deposit: false,
            automatic_deposit_type: None,
            is_pant: false,
            account_number: 0,
            alcohol_type: 0,
            list_mappings: None,
            updated_at: now,
        }
    }
}

/// Query definition used to filter and paginate products.
///
/// Absent fields place no constraint; all present clauses are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional exact id match.
    pub id: Option<i32>,
    /// Optional case-insensitive name substring.
    pub name: Option<String>,
    /// Optional case-insensitive comment substring.
    pub comment: Option<String>,
    /// Optional PLU term, substring by default.
    pub plu: Option<String>,
    /// Match the PLU term exactly instead of as a substring.
    pub plu_exact: bool,
    /// Inclusive lower price bound, in the smallest currency unit.
    pub from_price_cents: Option<i64>,
    /// Inclusive upper price bound, in the smallest currency unit.
    pub to_price_cents: Option<i64>,
    /// Optional exact category match.
    pub category_id: Option<i32>,
    /// Optional exact product type match.
    pub product_type: Option<ProductType>,
    /// Supplier-only visibility scope; always applied, defaults to false.
    pub for_supplier_only: bool,
    /// Optional active flag match.
    pub is_active: Option<bool>,
    /// Optional representation flag match.
    pub is_representation: Option<bool>,
    /// Optional pagination options applied to the page fetch only.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct an unconstrained query over non-supplier products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact product id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Filter by a name substring.
    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    /// Filter by a comment substring.
    pub fn comment(mut self, term: impl Into<String>) -> Self {
        self.comment = Some(term.into());
        self
    }

    /// Filter by a PLU substring.
    pub fn plu(mut self, term: impl Into<String>) -> Self {
        self.plu = Some(term.into());
        self.plu_exact = false;
        self
    }

    /// Filter by an exact PLU code. Mutually exclusive with the substring
    /// mode set by [`ProductListQuery::plu`].
    pub fn plu_exact(mut self, term: impl Into<String>) -> Self {
        self.plu = Some(term.into());
        self.plu_exact = true;
        self
    }

    /// Apply an inclusive lower price bound.
    pub fn price_from(mut self, cents: i64) -> Self {
        self.from_price_cents = Some(cents);
        self
    }

    /// Apply an inclusive upper price bound.
    pub fn price_to(mut self, cents: i64) -> Self {
        self.to_price_cents = Some(cents);
        self
    }

    /// Filter by category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter by product type.
    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    /// Scope the query to supplier-only products.
    pub fn for_supplier_only(mut self) -> Self {
        self.for_supplier_only = true;
        self
    }

    /// Filter by the active flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Filter by the representation flag.
    pub fn representation(mut self, is_representation: bool) -> Self {
        self.is_representation = Some(is_representation);
        self
    }

    /// Apply pagination with the given 1-based page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination {
            page,
            per_page: Some(per_page),
        });
        self
    }

    /// Request a page without capping its size. Kept for parity with the
    /// portal's HTTP contract; [`ProductListQuery::paginate`] is what
    /// callers should normally use.
    pub fn page(mut self, page: usize) -> Self {
        self.pagination = Some(Pagination {
            page,
            per_page: None,
        });
        self
    }
}
