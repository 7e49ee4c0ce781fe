use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};

use orderpart_db::{NewUserOrder, PartitionManager, UserOrder, UserOrderRepository};
use orderpart_error::Result;

use crate::clock::Clock;
use crate::months::months_before;
use crate::sample::generate_user_order;

/// 시작시 작업 결과
#[derive(Debug, Clone)]
pub struct StartupReport {
    /// 파티션을 확인한 날짜 (이번달, 지난달, 두달전)
    pub months: Vec<NaiveDate>,
    /// 저장된 샘플 주문
    pub orders: Vec<UserOrder>,
}

/// 프로세스 시작시 파티션 확인 및 샘플 주문 저장
pub struct StartupRunner {
    partitions: Arc<dyn PartitionManager>,
    orders: Arc<dyn UserOrderRepository>,
    clock: Arc<dyn Clock>,
}

impl StartupRunner {
    pub fn new(
        partitions: Arc<dyn PartitionManager>,
        orders: Arc<dyn UserOrderRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            partitions,
            orders,
            clock,
        }
    }

    /// 이번달, 지난달, 두달전 (같은 일자)
    pub fn startup_months(&self) -> Result<Vec<NaiveDate>> {
        let now = self.clock.today();
        let prev_month = months_before(now, 1)?;
        let prev2_month = months_before(now, 2)?;

        Ok(vec![now, prev_month, prev2_month])
    }

    /// 시작 작업 실행
    ///
    /// 중간에 실패하면 즉시 에러를 반환하고, 이미 적용된 단계는 되돌리지 않는다.
    pub async fn run(&self) -> Result<StartupReport> {
        let months = self.startup_months()?;
        info!("시작 파티션 확인: {:?}", months);

        for month in &months {
            self.partitions.ensure_partition(*month).await?;
        }

        let new_orders = self.generate_orders(&months)?;

        let mut orders = Vec::with_capacity(new_orders.len());
        for order in &new_orders {
            let saved = self.orders.save(order).await?;
            debug!(
                "샘플 주문 저장: order_id={}, user_id={}, amount={:.2}, created_at={}",
                saved.order_id, saved.user_id, saved.amount, saved.created_at
            );
            orders.push(saved);
        }
        info!("샘플 주문 {} 건 저장 완료", orders.len());

        Ok(StartupReport { months, orders })
    }

    fn generate_orders(&self, months: &[NaiveDate]) -> Result<Vec<NewUserOrder>> {
        let mut rng = rand::thread_rng();
        months
            .iter()
            .map(|month| generate_user_order(&mut rng, self.clock.as_ref(), *month))
            .collect()
    }
}
