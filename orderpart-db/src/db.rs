use log::{debug, error, info};

use orderpart_config::DbConfig;
use orderpart_error::Result;

use crate::pool::DatabasePool;
use crate::sql::user_orders;

/// 데이터베이스 초기화
///
/// `partitioning.bootstrap_schema`가 켜져 있을때만 user_orders 테이블과
/// 파티션 생성 함수를 만든다. 꺼져 있으면 db에 이미 있다고 가정한다.
pub async fn initialize_db(config: &DbConfig, pool: &DatabasePool) -> Result<()> {
    if !config.partitioning.bootstrap_schema {
        debug!("스키마 부트스트랩 비활성화, 기존 스키마 사용");
        return Ok(());
    }

    let conn = pool.get_connection().await?;

    if let Err(e) = conn.batch_execute(user_orders::CREATE_TABLE).await {
        error!("user_orders 테이블 생성중 오류 발생: {}", e);
        return Err(e.into());
    }
    info!("user_orders 테이블 확인 완료");

    if let Err(e) = conn.batch_execute(user_orders::CREATE_PARTITION_FUNCTION).await {
        error!("create_user_orders_partition 함수 생성중 오류 발생: {}", e);
        return Err(e.into());
    }
    info!("create_user_orders_partition 함수 확인 완료");

    Ok(())
}
