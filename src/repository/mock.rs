use mockall::mock;

use super::{MediaReader, OrderLineReader, OrderLineWriter, ProductReader, ProductWriter};
use crate::domain::{
    media::MediaFile,
    order::OrderLine,
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub MediaReader {}

    impl MediaReader for MediaReader {
        fn get_media_by_module_id(&self, module: &str, module_id: i32) -> RepositoryResult<Vec<MediaFile>>;
        fn get_media_by_module_ids(&self, module: &str, module_ids: &[i32]) -> RepositoryResult<Vec<MediaFile>>;
    }
}

mock! {
    pub OrderLineReader {}

    impl OrderLineReader for OrderLineReader {
        fn get_order_lines_for_product(&self, product_id: i32) -> RepositoryResult<Vec<OrderLine>>;
    }
}

mock! {
    pub OrderLineWriter {}

    impl OrderLineWriter for OrderLineWriter {
        fn update_order_line_prices(&self, lines: &[OrderLine]) -> RepositoryResult<usize>;
    }
}
