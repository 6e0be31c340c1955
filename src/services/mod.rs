use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

/// Result type returned by service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the service layer, distinguishing the outcomes the
/// HTTP layer needs to map differently.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// The request payload failed validation or sanitization.
    #[error("invalid input: {0}")]
    Form(String),
    /// The persistence boundary failed.
    #[error(transparent)]
    Repository(RepositoryError),
    /// The product row was updated, but pushing the new price onto existing
    /// order lines failed afterwards. The product change is already
    /// committed when this is returned.
    #[error("price propagation failed for product {product_id}: {source}")]
    PricePropagation {
        product_id: i32,
        source: RepositoryError,
    },
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}
