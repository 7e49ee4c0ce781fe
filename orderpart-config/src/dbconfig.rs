use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use orderpart_error::Result;

/// 데이터베이스 설정
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// 데이터베이스 연결 설정
    pub connection: ConnectionConfig,
    /// 파티셔닝 설정
    pub partitioning: PartitionConfig,
    /// 연결 풀 설정
    pub pool: PoolConfig,
}

impl DbConfig {
    /// 설정파일에서 db 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml(&contents)
    }

    /// yml 문자열에서 db 설정 로드
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: DbConfig = serde_yml::from_str(contents)?;

        Ok(config)
    }
}

/// db 연결설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub sslmode: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            sslmode: "disable".to_string(),
        }
    }
}

/// user_orders 파티셔닝 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// 파티션 생성 함수 호출 타임아웃(초)
    pub timeout_seconds: u64,
    /// 시작시 테이블, 파티션 생성 함수 생성 여부
    pub bootstrap_schema: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            bootstrap_schema: false,
        }
    }
}

/// 데이터베이스 연결 풀 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// 최대 연결 수
    pub max_connections: usize,
    /// 연결 타임아웃(초)
    pub connection_timeout_seconds: u64,
    /// 연결 재사용 전 대기 시간(초)
    pub recycle_seconds: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 4, // 작업이 순차적이라 소수면 충분
            connection_timeout_seconds: 30, // 연결 시도 타임아웃 30초
            recycle_seconds: 21_600, // 6시간마다 연결 갱신
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let yaml = "
connection:
  host: db.internal
  password: secret
partitioning:
  bootstrap_schema: true
";
        let config = DbConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.connection.host, "db.internal");
        assert_eq!(config.connection.password, "secret");
        assert_eq!(config.connection.port, 5432);
        assert_eq!(config.connection.sslmode, "disable");
        assert!(config.partitioning.bootstrap_schema);
        assert_eq!(config.partitioning.timeout_seconds, 10);
        assert_eq!(config.pool.max_connections, 4);
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = DbConfig::from_yaml("connection: [1, 2").unwrap_err();
        assert!(matches!(err, orderpart_error::PartitionError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DbConfig::from_file("/nonexistent/orderpart/db.yml").unwrap_err();
        assert!(matches!(err, orderpart_error::PartitionError::Io(_)));
    }
}
