use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    ProductListMapping as DomainProductListMapping, ProductType,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub price_cents: i64,
    pub comment: Option<String>,
    pub vat: i32,
    pub plu: Option<String>,
    pub is_packagable: bool,
    pub description: Option<String>,
    pub category_id: i32,
    pub product_type: i32,
    pub for_supplier_only: bool,
    pub is_active: bool,
    pub is_representation: bool,
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    pub is_pant: bool,
    pub account_number: i32,
    pub alcohol_type: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_list_products)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct ProductListMapping {
    pub id: i32,
    pub product_id: i32,
    pub product_list_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub unit: &'a str,
    pub price_cents: i64,
    pub comment: Option<&'a str>,
    pub vat: i32,
    pub plu: Option<&'a str>,
    pub is_packagable: bool,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub product_type: i32,
    pub for_supplier_only: bool,
    pub is_active: bool,
    pub is_representation: bool,
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    pub is_pant: bool,
    pub account_number: i32,
    pub alcohol_type: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_list_products)]
pub struct NewProductListMapping {
    pub product_id: i32,
    pub product_list_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub unit: &'a str,
    pub price_cents: i64,
    pub comment: Option<&'a str>,
    pub vat: i32,
    pub plu: Option<&'a str>,
    pub is_packagable: bool,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub product_type: i32,
    pub for_supplier_only: bool,
    pub is_active: bool,
    pub is_representation: bool,
    pub is_automatic_deposit: bool,
    pub automatic_deposit_type: Option<i32>,
    pub is_pant: bool,
    pub account_number: i32,
    pub alcohol_type: i32,
    pub updated_at: NaiveDateTime,
}

impl Product {
    pub fn into_domain(self, mappings: Vec<ProductListMapping>) -> DomainProduct {
        DomainProduct {
            id: self.id,
            name: self.name,
            unit: self.unit,
            price_cents: self.price_cents,
            comment: self.comment,
            vat: self.vat,
            plu: self.plu,
            is_packagable: self.is_packagable,
            description: self.description,
            category_id: self.category_id,
            product_type: ProductType::from_code(self.product_type),
            for_supplier_only: self.for_supplier_only,
            is_active: self.is_active,
            is_representation: self.is_representation,
            is_automatic_deposit: self.is_automatic_deposit,
            automatic_deposit_type: self.automatic_deposit_type,
            is_pant: self.is_pant,
            account_number: self.account_number,
            alcohol_type: self.alcohol_type,
            list_mappings: mappings.into_iter().map(Into::into).collect(),
            media: Vec::new(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        value.into_domain(Vec::new())
    }
}

impl From<ProductListMapping> for DomainProductListMapping {
    fn from(value: ProductListMapping) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            product_list_id: value.product_list_id,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            unit: value.unit.as_str(),
            price_cents: value.price_cents,
            comment: value.comment.as_deref(),
            vat: value.vat,
            plu: value.plu.as_deref(),
            is_packagable: value.is_packagable,
            description: value.description.as_deref(),
            category_id: value.category_id,
            product_type: value.product_type.code(),
            for_supplier_only: value.for_supplier_only,
            is_active: value.is_active,
            is_representation: value.is_representation,
            is_automatic_deposit: value.is_automatic_deposit,
            automatic_deposit_type: value.automatic_deposit_type,
            is_pant: value.is_pant,
            account_number: value.account_number,
            alcohol_type: value.alcohol_type,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            unit: value.unit.as_str(),
            price_cents: value.price_cents,
            comment: value.comment.as_deref(),
            vat: value.vat,
            plu: value.plu.as_deref(),
            is_packagable: value.is_packagable,
            description: value.description.as_deref(),
            category_id: value.category_id,
            product_type: value.product_type.code(),
            for_supplier_only: value.for_supplier_only,
            is_active: value.is_active,
            is_representation: value.is_representation,
            is_automatic_deposit: value.is_automatic_deposit,
            automatic_deposit_type: value.automatic_deposit_type,
            is_pant: value.is_pant,
            account_number: value.account_number,
            alcohol_type: value.alcohol_type,
            updated_at: value.updated_at,
        }
    }
}
