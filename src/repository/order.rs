use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    domain::order::OrderLine as DomainOrderLine,
    models::order::OrderLine as DbOrderLine,
    repository::{DieselRepository, OrderLineReader, OrderLineWriter},
    repository::errors::{RepositoryError, RepositoryResult},
    schema::order_lines,
};

impl OrderLineReader for DieselRepository {
    fn get_order_lines_for_product(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Vec<DomainOrderLine>> {
        let mut conn = self.conn()?;
        let rows = order_lines::table
            .filter(order_lines::product_id.eq(product_id))
            .order(order_lines::id.asc())
            .load::<DbOrderLine>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl OrderLineWriter for DieselRepository {
    fn update_order_line_prices(&self, lines: &[DomainOrderLine]) -> RepositoryResult<usize> {
        if lines.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let now: NaiveDateTime = chrono::Local::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut updated = 0usize;
            for line in lines {
                updated += diesel::update(order_lines::table.filter(order_lines::id.eq(line.id)))
                    .set((
                        order_lines::price_cents.eq(line.price_cents),
                        order_lines::updated_at.eq(now),
                    ))
                    .execute(conn)?;
            }
            Ok(updated)
        })
    }
}
