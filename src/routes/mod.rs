use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod products;

/// Map a service failure to the HTTP response the portal exposes.
///
/// A propagation failure reports the already-committed product update so the
/// caller can tell it apart from a failed update.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::PricePropagation { product_id, source } => {
            log::error!("Price propagation failed for product {product_id}: {source}");
            HttpResponse::InternalServerError().json(json!({
                "error": "price propagation failed",
                "product_id": product_id,
                "product_updated": true,
            }))
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
