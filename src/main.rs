use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use env_logger::Builder;
use log::{LevelFilter, info, warn};
use once_cell::sync::Lazy;
use tokio_util::sync::CancellationToken;

use orderpart_config::Settings;
use orderpart_db::{PgPartitionManager, PgUserOrderRepository, initialize_db, initialize_dbpool};
use orderpart_error::Result;
use orderpart_scheduler::{PartitionScheduler, StartupRunner, SystemClock};

/// 설정파일 디렉토리
static CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("ORDERPART_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".")) // 기본값 현재 디렉토리
});

/// 로거 세팅
fn setup_logger() {
    #[cfg(debug_assertions)]
    {
        Builder::new()
            .filter(None, LevelFilter::Debug)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {} {}:{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init()
    }

    #[cfg(not(debug_assertions))]
    {
        Builder::new()
            .filter(None, LevelFilter::Info)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 로거 세팅
    setup_logger();

    info!("orderpart 시작");

    // 통합 설정 로드
    let settings = Settings::from_dir(CONFIG_DIR.as_path())?;

    // db 세팅
    let db_pool = initialize_dbpool(&settings.database).await?;
    initialize_db(&settings.database, &db_pool).await?;

    let clock = Arc::new(SystemClock);
    let partitions = Arc::new(PgPartitionManager::new(db_pool.clone(), &settings.database));
    let orders = Arc::new(PgUserOrderRepository::new(db_pool.clone()));

    // 스케줄러 생성, cron 오류는 시작 전에 확인
    let scheduler = Arc::new(PartitionScheduler::new(
        partitions.clone(),
        clock.clone(),
        &settings.scheduler,
    )?);

    // 시작 작업, 실패하면 종료
    let report = StartupRunner::new(partitions, orders, clock).run().await?;
    info!(
        "시작 작업 완료: 파티션 {} 개월, 샘플 주문 {} 건",
        report.months.len(),
        report.orders.len()
    );

    let status = db_pool.pool_status();
    info!(
        "db 풀 상태: size={}, available={}, waiting={}",
        status.size, status.available, status.waiting
    );

    let cancel = CancellationToken::new();
    let handle = if settings.scheduler.enabled {
        Some(scheduler.spawn(cancel.clone()))
    } else {
        warn!("파티션 스케줄러 비활성화");
        None
    };

    // 종료 신호 대기
    tokio::signal::ctrl_c().await?;
    info!("종료 신호 수신");

    cancel.cancel();
    if let Some(handle) = handle {
        if let Err(e) = handle.await {
            warn!("파티션 스케줄러 종료 대기 실패: {e}");
        }
    }

    info!("orderpart 종료");
    Ok(())
}
