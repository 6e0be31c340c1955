use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An order line item referencing a product.
///
/// Lines copy the product price at order time; a price-changing product
/// update rewrites `price_cents` on every line referencing that product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderLine {
    /// Unique identifier of the line.
    pub id: i32,
    /// Owning order identifier.
    pub order_id: i32,
    /// Referenced product identifier.
    pub product_id: i32,
    /// Product name copied at order time.
    pub name: String,
    /// Line price in the smallest currency unit.
    pub price_cents: i64,
    /// Ordered quantity.
    pub quantity: i32,
    /// Timestamp for when the line was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the line.
    pub updated_at: NaiveDateTime,
}
