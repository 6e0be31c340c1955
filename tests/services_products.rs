use diesel::prelude::*;

use portal_products::domain::product::{ProductListQuery, ProductType};
use portal_products::forms::products::{AddProductForm, UpdateProductForm};
use portal_products::models::media::NewMediaFile;
use portal_products::models::order::NewOrderLine;
use portal_products::repository::{DieselRepository, OrderLineReader, ProductReader};
use portal_products::schema::{media_files, order_lines};
use portal_products::services::{ServiceError, products};

mod common;

fn add_form(name: &str, price_cents: i64) -> AddProductForm {
    AddProductForm {
        name: name.to_string(),
        unit: "st".to_string(),
        price_cents,
        comment: None,
        vat: 25,
        plu: None,
        is_packagable: false,
        description: None,
        category_id: 1,
        product_type: ProductType::Standard,
        for_supplier_only: false,
        is_active: true,
        is_representation: false,
        is_automatic_deposit: false,
        automatic_deposit_type: None,
        is_pant: false,
        account_number: 3001,
        alcohol_type: 0,
        list_mappings: vec![10, 20],
    }
}

fn update_form(id: i32, price_cents: i64, is_price_changed: bool) -> UpdateProductForm {
    UpdateProductForm {
        id,
        name: "Kaffe".to_string(),
        unit: "st".to_string(),
        price_cents,
        comment: None,
        vat: 25,
        plu: None,
        is_packagable: false,
        description: None,
        category_id: 1,
        product_type: ProductType::Standard,
        for_supplier_only: false,
        is_active: true,
        is_representation: false,
        is_automatic_deposit: false,
        automatic_deposit_type: None,
        is_pant: false,
        account_number: 3001,
        alcohol_type: 0,
        list_mappings: None,
        is_price_changed,
    }
}

#[test]
fn create_product_stores_list_mappings() {
    let test_db = common::TestDb::new("service_create_product_stores_list_mappings.db");
    let repo = DieselRepository::new(test_db.pool());

    let product =
        products::create_product(&repo, add_form(" Kaffe ", 1250)).expect("create product");

    assert!(product.id > 0);
    assert_eq!(product.name, "Kaffe");
    assert_eq!(product.list_mappings.len(), 2);
    assert!(
        product
            .list_mappings
            .iter()
            .all(|mapping| mapping.product_id == product.id)
    );

    let stored = repo
        .get_product_by_id(product.id)
        .expect("get product")
        .expect("product should exist");
    assert_eq!(stored.list_mappings.len(), 2);
}

#[test]
fn create_product_rejects_invalid_form() {
    let test_db = common::TestDb::new("service_create_product_rejects_invalid_form.db");
    let repo = DieselRepository::new(test_db.pool());

    let mut form = add_form("Kaffe", 1250);
    form.category_id = 0;

    let result = products::create_product(&repo, form);

    assert!(matches!(result, Err(ServiceError::Form(_))));
}

#[test]
fn list_products_attaches_media_records() {
    let test_db = common::TestDb::new("service_list_products_attaches_media_records.db");
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let coffee = products::create_product(&repo, add_form("Kaffe", 1250)).expect("create coffee");
    let tea = products::create_product(&repo, add_form("Te", 900)).expect("create tea");

    let rows = vec![
        NewMediaFile {
            module: "Product",
            module_id: coffee.id,
            file_name: "kaffe.jpg",
            file_path: "/media/kaffe.jpg",
            content_type: Some("image/jpeg"),
        },
        NewMediaFile {
            module: "Supplier",
            module_id: tea.id,
            file_name: "logo.png",
            file_path: "/media/logo.png",
            content_type: Some("image/png"),
        },
    ];
    diesel::insert_into(media_files::table)
        .values(&rows)
        .execute(&mut conn)
        .expect("seed media");

    let page = products::list_products(&repo, ProductListQuery::new()).expect("list products");

    assert_eq!(page.total_count, 2);
    let listed_coffee = page
        .products
        .iter()
        .find(|product| product.id == coffee.id)
        .expect("coffee listed");
    assert_eq!(listed_coffee.media.len(), 1);
    assert_eq!(listed_coffee.media[0].file_name, "kaffe.jpg");

    // Media of other modules never leaks onto products.
    let listed_tea = page
        .products
        .iter()
        .find(|product| product.id == tea.id)
        .expect("tea listed");
    assert!(listed_tea.media.is_empty());
}

#[test]
fn get_product_missing_id_is_not_found() {
    let test_db = common::TestDb::new("service_get_product_missing_id_is_not_found.db");
    let repo = DieselRepository::new(test_db.pool());

    let result = products::get_product(&repo, 12345);

    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[test]
fn update_product_with_price_change_rewrites_order_lines() {
    let test_db = common::TestDb::new("service_update_product_price_change.db");
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let product =
        products::create_product(&repo, add_form("Kaffe", 1250)).expect("create product");

    let rows = vec![
        NewOrderLine {
            order_id: 1,
            product_id: product.id,
            name: "Kaffe",
            price_cents: 1250,
            quantity: 2,
        },
        NewOrderLine {
            order_id: 2,
            product_id: product.id,
            name: "Kaffe",
            price_cents: 1250,
            quantity: 1,
        },
    ];
    diesel::insert_into(order_lines::table)
        .values(&rows)
        .execute(&mut conn)
        .expect("seed order lines");

    let outcome = products::update_product(&repo, update_form(product.id, 1500, true))
        .expect("update product");

    assert_eq!(outcome.product.price_cents, 1500);
    assert_eq!(outcome.propagated_lines, 2);

    let lines = repo
        .get_order_lines_for_product(product.id)
        .expect("lines after update");
    assert!(lines.iter().all(|line| line.price_cents == 1500));
}

#[test]
fn update_product_without_price_change_keeps_order_lines() {
    let test_db = common::TestDb::new("service_update_product_no_price_change.db");
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let product =
        products::create_product(&repo, add_form("Kaffe", 1250)).expect("create product");

    diesel::insert_into(order_lines::table)
        .values(&NewOrderLine {
            order_id: 1,
            product_id: product.id,
            name: "Kaffe",
            price_cents: 1250,
            quantity: 2,
        })
        .execute(&mut conn)
        .expect("seed order line");

    let outcome = products::update_product(&repo, update_form(product.id, 1500, false))
        .expect("update product");

    assert_eq!(outcome.product.price_cents, 1500);
    assert_eq!(outcome.propagated_lines, 0);

    let lines = repo
        .get_order_lines_for_product(product.id)
        .expect("lines after update");
    assert_eq!(lines[0].price_cents, 1250);
}

#[test]
fn delete_product_is_defined_on_missing_ids() {
    let test_db = common::TestDb::new("service_delete_product_missing_ids.db");
    let repo = DieselRepository::new(test_db.pool());

    let product =
        products::create_product(&repo, add_form("Kaffe", 1250)).expect("create product");

    products::delete_product(&repo, product.id).expect("first delete");

    // The second delete reports NotFound instead of crashing.
    let result = products::delete_product(&repo, product.id);
    assert!(matches!(result, Err(ServiceError::NotFound)));

    let result = products::delete_product(&repo, 99999);
    assert!(matches!(result, Err(ServiceError::NotFound)));
}
