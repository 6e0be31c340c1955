pub mod media;
pub mod order;
pub mod product;
