use std::error::Error as StdError;
use std::fmt;
use std::io;

use cron::error::Error as CronError;
use deadpool_postgres::PoolError;
use serde_yml::Error as YmlError;
use tokio::time::error::Elapsed;
use tokio_postgres::Error as PgError;

/// 파티션 관리 서비스의 모든 에러 타입을 정의합니다.
#[derive(Debug)]
pub enum PartitionError {
    /// 설정 관련 에러
    Config(String),

    /// 파일 입출력 에러
    Io(io::Error),

    /// 데이터베이스 관련 에러
    Database(String),

    /// 타임아웃 에러
    Timeout(String),

    /// 스케줄(cron) 관련 에러
    Schedule(String),

    /// 내부 상태 관련 에러
    Internal(String),

    /// 기타 에러
    Other(String),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::Config(msg) => write!(f, "설정 에러: {}", msg),
            PartitionError::Io(err) => write!(f, "I/O 에러: {}", err),
            PartitionError::Database(msg) => write!(f, "데이터베이스 에러: {}", msg),
            PartitionError::Timeout(msg) => write!(f, "타임아웃 에러: {}", msg),
            PartitionError::Schedule(msg) => write!(f, "스케줄 에러: {}", msg),
            PartitionError::Internal(msg) => write!(f, "내부 에러: {}", msg),
            PartitionError::Other(msg) => write!(f, "기타 에러: {}", msg),
        }
    }
}

impl StdError for PartitionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            PartitionError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Result 타입 별칭 정의
pub type Result<T> = std::result::Result<T, PartitionError>;

impl From<io::Error> for PartitionError {
    fn from(err: io::Error) -> Self {
        PartitionError::Io(err)
    }
}

impl From<PoolError> for PartitionError {
    fn from(err: PoolError) -> Self {
        PartitionError::Database(format!("DB 풀 에러: {}", err))
    }
}

impl From<PgError> for PartitionError {
    fn from(err: PgError) -> Self {
        PartitionError::Database(format!("PostgreSQL 에러: {}", err))
    }
}

impl From<Elapsed> for PartitionError {
    fn from(err: Elapsed) -> Self {
        PartitionError::Timeout(format!("작업 타임아웃: {}", err))
    }
}

impl From<YmlError> for PartitionError {
    fn from(err: YmlError) -> Self {
        PartitionError::Config(format!("YAML 파싱 에러: {}", err))
    }
}

impl From<CronError> for PartitionError {
    fn from(err: CronError) -> Self {
        PartitionError::Schedule(format!("cron 표현식 에러: {}", err))
    }
}

impl From<String> for PartitionError {
    fn from(err: String) -> Self {
        PartitionError::Other(err)
    }
}

impl From<&str> for PartitionError {
    fn from(err: &str) -> Self {
        PartitionError::Other(err.to_string())
    }
}

/// 에러 처리 유틸리티 함수
pub fn config_err<E: fmt::Display>(err: E) -> PartitionError {
    PartitionError::Config(format!("{}", err))
}

pub fn db_err<E: fmt::Display>(err: E) -> PartitionError {
    PartitionError::Database(format!("{}", err))
}

pub fn internal_err<E: fmt::Display>(err: E) -> PartitionError {
    PartitionError::Internal(format!("{}", err))
}
