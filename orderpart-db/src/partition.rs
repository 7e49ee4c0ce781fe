use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, error, info};

use orderpart_config::DbConfig;
use orderpart_error::{PartitionError, Result};

use crate::pool::DatabasePool;
use crate::sql::user_orders;

/// user_orders 월 파티션 관리
#[async_trait]
pub trait PartitionManager: Send + Sync {
    /// `month`가 속한 달의 파티션이 존재하도록 보장
    ///
    /// 연, 월만 의미가 있고 날짜는 그대로 db 함수에 전달된다.
    /// 멱등성은 db의 `create_user_orders_partition` 함수에 달려있다.
    async fn ensure_partition(&self, month: NaiveDate) -> Result<()>;
}

/// `create_user_orders_partition` 함수를 호출하는 파티션 관리자
#[derive(Clone)]
pub struct PgPartitionManager {
    pool: DatabasePool,
    timeout: Duration,
}

impl PgPartitionManager {
    /// 새 PgPartitionManager 생성
    pub fn new(pool: DatabasePool, config: &DbConfig) -> Self {
        Self {
            pool,
            timeout: Duration::from_secs(config.partitioning.timeout_seconds),
        }
    }
}

#[async_trait]
impl PartitionManager for PgPartitionManager {
    async fn ensure_partition(&self, month: NaiveDate) -> Result<()> {
        debug!("user_orders 파티션 생성 요청: {month}");

        // 커넥션은 구문 하나 동안만 사용
        let conn = self.pool.get_connection().await?;

        match tokio::time::timeout(
            self.timeout,
            conn.execute(user_orders::CALL_CREATE_PARTITION, &[&month]),
        )
        .await
        {
            Ok(Ok(_)) => {
                info!("user_orders 파티션 생성 함수 실행 완료: {month}");
                Ok(())
            }
            Ok(Err(e)) => {
                error!("user_orders 파티션 생성 함수 실행 실패 ({month}): {e}");
                Err(e.into())
            }
            Err(_) => {
                error!("user_orders 파티션 생성 함수 실행 타임아웃: {month}");
                Err(PartitionError::Timeout(format!(
                    "파티션 생성 함수 실행 타임아웃 ({month}, {}초)",
                    self.timeout.as_secs()
                )))
            }
        }
    }
}
