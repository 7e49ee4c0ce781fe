use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use cron::Schedule;
use tokio::sync::Notify;

use orderpart_db::{NewUserOrder, PartitionManager, UserOrder, UserOrderRepository};
use orderpart_error::{Result, db_err};

use crate::clock::{Clock, local_midnight};

/// 고정된 시각과 시간대를 갖는 시계
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// UTC+9 기준 고정 시각
    pub fn kst(y: i32, m: u32, d: u32, hour: u32, min: u32) -> Self {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        Self {
            now: offset.with_ymd_and_hms(y, m, d, hour, min, 0).unwrap(),
        }
    }

    /// 이 시계 시간대의 자정
    pub fn midnight(&self, y: i32, m: u32, d: u32) -> DateTime<Utc> {
        self.now
            .offset()
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        local_midnight(self.now.offset(), date)
    }

    fn next_fire(&self, schedule: &Schedule, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        schedule
            .after(&after.with_timezone(self.now.offset()))
            .next()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// 호출된 날짜를 기록하는 파티션 관리자
#[derive(Default)]
pub struct RecordingPartitionManager {
    calls: Mutex<Vec<NaiveDate>>,
    fail_on: Option<NaiveDate>,
    fail_all: bool,
    gate: Option<Notify>,
}

impl RecordingPartitionManager {
    /// 항상 실패하는 관리자
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// 특정 날짜에서만 실패하는 관리자
    pub fn failing_on(date: NaiveDate) -> Self {
        Self {
            fail_on: Some(date),
            ..Self::default()
        }
    }

    /// `release` 가 불릴때까지 멈춰있는 관리자
    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<NaiveDate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PartitionManager for RecordingPartitionManager {
    async fn ensure_partition(&self, month: NaiveDate) -> Result<()> {
        self.calls.lock().unwrap().push(month);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail_all || self.fail_on == Some(month) {
            return Err(db_err(format!("function create_user_orders_partition failed for {month}")));
        }
        Ok(())
    }
}

/// 메모리 주문 저장소
#[derive(Default)]
pub struct MemoryOrderRepository {
    orders: Mutex<Vec<UserOrder>>,
    next_id: AtomicI64,
    fail: bool,
}

impl MemoryOrderRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn orders(&self) -> Vec<UserOrder> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserOrderRepository for MemoryOrderRepository {
    async fn save(&self, order: &NewUserOrder) -> Result<UserOrder> {
        if self.fail {
            return Err(db_err("insert into user_orders failed"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let saved = UserOrder::with_id(id, order);
        self.orders.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn find_by_created_at_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<UserOrder>> {
        let mut found: Vec<UserOrder> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.created_at >= after && o.created_at <= before)
            .cloned()
            .collect();
        found.sort_by_key(|o| (o.created_at, o.order_id));
        Ok(found)
    }
}
