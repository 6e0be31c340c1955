use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::OrderLine as DomainOrderLine;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::order_lines)]
pub struct OrderLine {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_lines)]
pub struct NewOrderLine<'a> {
    pub order_id: i32,
    pub product_id: i32,
    pub name: &'a str,
    pub price_cents: i64,
    pub quantity: i32,
}

impl From<OrderLine> for DomainOrderLine {
    fn from(value: OrderLine) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            name: value.name,
            price_cents: value.price_cents,
            quantity: value.quantity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
