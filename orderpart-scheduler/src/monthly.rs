use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use cron::Schedule;
use log::{debug, error, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use orderpart_config::SchedulerConfig;
use orderpart_db::PartitionManager;
use orderpart_error::Result;

use crate::clock::Clock;
use crate::months::first_day_of_next_month;

/// 다음달 user_orders 파티션을 미리 만드는 월간 작업
pub struct PartitionScheduler {
    partitions: Arc<dyn PartitionManager>,
    clock: Arc<dyn Clock>,
    cron: String,
    schedule: Schedule,
    running: AtomicBool,
}

impl PartitionScheduler {
    /// cron 표현식이 잘못되면 생성 실패
    pub fn new(
        partitions: Arc<dyn PartitionManager>,
        clock: Arc<dyn Clock>,
        config: &SchedulerConfig,
    ) -> Result<Self> {
        let schedule = config.cron.parse::<Schedule>()?;

        Ok(Self {
            partitions,
            clock,
            cron: config.cron.clone(),
            schedule,
            running: AtomicBool::new(false),
        })
    }

    /// 다음달 1일 파티션 생성
    pub async fn schedule_user_order_next_month_partition(&self) -> Result<NaiveDate> {
        let next_month = first_day_of_next_month(self.clock.today())?;
        self.partitions.ensure_partition(next_month).await?;

        Ok(next_month)
    }

    /// 한번 실행, 에러는 로그만 남긴다
    ///
    /// 이전 실행이 아직 진행중이면 건너뛰고 `false` 를 반환한다.
    pub async fn run_once(&self) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("이전 파티션 작업이 진행중이라 이번 실행은 건너뜀");
            return false;
        }

        match self.schedule_user_order_next_month_partition().await {
            Ok(month) => info!("다음달 파티션 확인 완료: {month}"),
            Err(e) => error!("다음달 파티션 생성 실패: {e}"),
        }

        self.running.store(false, Ordering::SeqCst);
        true
    }

    /// cron 에 맞춰 취소될때까지 반복 실행
    pub async fn run(self: Arc<Self>, cancel: CancellationToken) {
        info!("파티션 스케줄러 시작 (cron: {})", self.cron);

        let mut cursor = self.clock.now();
        loop {
            let now = self.clock.now();
            let from = cursor.max(now);
            let Some(next) = self.clock.next_fire(&self.schedule, from) else {
                warn!("다음 실행 시각이 없어 파티션 스케줄러 종료");
                break;
            };

            let until = (next - now).to_std().unwrap_or(Duration::from_secs(1));
            debug!(
                "다음 파티션 생성 예정: {} ({}초 후)",
                next.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                until.as_secs()
            );

            tokio::select! {
                _ = tokio::time::sleep(until) => {
                    self.run_once().await;
                    cursor = next;
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }

        info!("파티션 스케줄러 종료");
    }

    /// 백그라운드 태스크로 시작
    pub fn spawn(self: Arc<Self>, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }
}
