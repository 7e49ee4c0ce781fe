use std::path::{Path, PathBuf};

use log::info;

use orderpart_error::{PartitionError, Result};

use crate::dbconfig::DbConfig;
use crate::schedconfig::SchedulerConfig;

/// db 설정파일 이름
pub const DB_CONFIG_FILE: &str = "db.yml";
/// 스케줄러 설정파일 이름
pub const SCHEDULER_CONFIG_FILE: &str = "scheduler.yml";

/// 통합 세팅 인스턴스
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub database: DbConfig,
    pub scheduler: SchedulerConfig,
}

impl Settings {
    /// 현재 디렉토리 기준 Setting 생성
    pub fn new() -> Result<Self> {
        Self::from_dir(".")
    }

    /// 지정한 디렉토리의 설정파일로 Setting 생성
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let database = Self::load_db_config(dir.join(DB_CONFIG_FILE))?;
        let scheduler = Self::load_scheduler_config(dir.join(SCHEDULER_CONFIG_FILE))?;

        Ok(Self {
            database,
            scheduler,
        })
    }

    /// db 설정 로드
    fn load_db_config(path: PathBuf) -> Result<DbConfig> {
        // yml 파일 유무 확인
        if path.exists() {
            info!("DB 설정파일 로드: {}", path.display());
            match DbConfig::from_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => Err(PartitionError::Config(format!(
                    "DB 설정파일 로드 실패: {}",
                    e
                ))),
            }
        } else {
            // 기본설정사용
            info!("DB 기본설정 사용");
            Ok(DbConfig::default())
        }
    }

    /// 스케줄러 설정 로드
    fn load_scheduler_config(path: PathBuf) -> Result<SchedulerConfig> {
        if path.exists() {
            info!("스케줄러 설정파일 로드: {}", path.display());
            match SchedulerConfig::from_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => Err(PartitionError::Config(format!(
                    "스케줄러 설정파일 로드 실패: {}",
                    e
                ))),
            }
        } else {
            info!("스케줄러 기본설정 사용");
            Ok(SchedulerConfig::new())
        }
    }
}
