pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Upstream limit on product ids per media lookup call.
pub const MEDIA_LOOKUP_BATCH_SIZE: usize = 500;
