use chrono::{DateTime, Utc};
use tokio_postgres::Row;

use orderpart_error::Result;

/// 저장된 주문 (`user_orders` 한 행)
#[derive(Debug, Clone, PartialEq)]
pub struct UserOrder {
    /// 저장시 db가 할당하는 식별자
    pub order_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl UserOrder {
    /// 조회 결과 행에서 주문 생성
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            order_id: row.try_get("order_id")?,
            user_id: row.try_get("user_id")?,
            amount: row.try_get("amount")?,
            created_at: row.try_get("created_at")?,
        })
    }

    /// 저장 전 값에 할당된 식별자를 붙여 생성
    pub fn with_id(order_id: i64, order: &NewUserOrder) -> Self {
        Self {
            order_id,
            user_id: order.user_id,
            amount: order.amount,
            created_at: order.created_at,
        }
    }
}

/// 아직 저장되지 않은 주문
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserOrder {
    pub user_id: i64,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
