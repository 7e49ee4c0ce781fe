use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use orderpart_error::Result;

/// 다음달 파티션 생성 cron (초 분 시 일 월 요일), 매월 3일 03:00
pub const DEFAULT_PARTITION_CRON: &str = "0 0 3 3 * *";

/// 스케줄러 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 월간 파티션 작업 사용 여부
    pub enabled: bool,
    /// 로컬 시간대 기준 cron 표현식
    pub cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulerConfig {
    /// 기본설정으로 생성
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            cron: DEFAULT_PARTITION_CRON.to_string(),
        }
    }

    /// 설정파일에서 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_monthly_cron() {
        let config = SchedulerConfig::default();
        assert!(config.enabled);
        assert_eq!(config.cron, "0 0 3 3 * *");
    }

    #[test]
    fn yaml_overrides_enabled_only() {
        let config: SchedulerConfig = serde_yml::from_str("enabled: false").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.cron, DEFAULT_PARTITION_CRON);
    }
}
