use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use orderpart_error::Result;

use crate::model::{NewUserOrder, UserOrder};
use crate::pool::DatabasePool;
use crate::sql::user_orders;

/// user_orders 저장소
#[async_trait]
pub trait UserOrderRepository: Send + Sync {
    /// 주문을 저장하고 식별자가 할당된 주문을 반환
    async fn save(&self, order: &NewUserOrder) -> Result<UserOrder>;

    /// `after <= created_at <= before` 인 주문을 생성시각 순으로 조회
    async fn find_by_created_at_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<UserOrder>>;
}

/// PostgreSQL 주문 저장소
#[derive(Clone)]
pub struct PgUserOrderRepository {
    pool: DatabasePool,
}

impl PgUserOrderRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserOrderRepository for PgUserOrderRepository {
    async fn save(&self, order: &NewUserOrder) -> Result<UserOrder> {
        let conn = self.pool.get_connection().await?;
        let row = conn
            .query_one(
                user_orders::INSERT_ORDER,
                &[&order.user_id, &order.amount, &order.created_at],
            )
            .await?;

        let saved = UserOrder::from_row(&row)?;
        debug!(
            "주문 저장 완료: order_id={}, created_at={}",
            saved.order_id, saved.created_at
        );

        Ok(saved)
    }

    async fn find_by_created_at_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<UserOrder>> {
        let conn = self.pool.get_connection().await?;
        let rows = conn
            .query(user_orders::SELECT_BY_CREATED_AT_BETWEEN, &[&after, &before])
            .await?;

        rows.iter().map(UserOrder::from_row).collect()
    }
}
