// ==========================================
// ABC 排单系统 - 排期配置
// ==========================================
// 主力池 / 替补池 / 周期 / 替补模式 / 随机种子
// 默认值: 主力 1-180，替补 181 起 20 个，周一至周六，双替补
// ==========================================

use crate::domain::pool::{BackupPool, PrimaryPool};
use crate::domain::task::{Period, ProductTask};
use crate::domain::types::BackupMode;
use crate::engine::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_PRIMARY_START: i64 = 1;
pub const DEFAULT_PRIMARY_END: i64 = 180;
pub const DEFAULT_BACKUP_START: i64 = 181;
pub const DEFAULT_BACKUP_COUNT: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub primary_pool: PrimaryPool,
    pub backup_pool: BackupPool,
    pub period: Period,
    #[serde(default)]
    pub backup_mode: BackupMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            primary_pool: PrimaryPool::new(DEFAULT_PRIMARY_START, DEFAULT_PRIMARY_END),
            backup_pool: BackupPool::new(DEFAULT_BACKUP_START, DEFAULT_BACKUP_COUNT),
            period: Period::weekly(),
            backup_mode: BackupMode::Double,
            random_seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// 校验池边界与周期（任何运行状态创建之前）
    pub fn validate(&self) -> Result<(), ConfigError> {
        let primary = &self.primary_pool;
        if primary.checked_len().is_none() {
            return Err(ConfigError::PrimaryPoolOutOfRange {
                start: primary.start,
                end: primary.end,
            });
        }
        if primary.is_empty() {
            return Err(ConfigError::EmptyPrimaryPool {
                start: primary.start,
                end: primary.end,
            });
        }

        let backup = &self.backup_pool;
        if backup.count < 0 {
            return Err(ConfigError::NegativeBackupCount(backup.count));
        }
        if backup.is_empty() {
            return Err(ConfigError::EmptyBackupPool);
        }
        if backup.checked_end_exclusive().is_none() {
            return Err(ConfigError::BackupPoolOutOfRange {
                start: backup.start,
                count: backup.count,
            });
        }
        if backup.overlaps(primary) {
            return Err(ConfigError::OverlappingPools {
                primary_start: primary.start,
                primary_end: primary.end,
                backup_start: backup.start,
                backup_end: backup.end_exclusive(),
            });
        }

        if self.period.is_empty() {
            return Err(ConfigError::EmptyPeriod);
        }
        let mut seen = HashSet::new();
        for day in self.period.iter() {
            if !seen.insert(day) {
                return Err(ConfigError::DuplicateDay(day.to_string()));
            }
        }

        Ok(())
    }
}

// ==========================================
// PlanRequest - 引擎输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub config: PlannerConfig,
    pub tasks: Vec<ProductTask>,
}

impl PlanRequest {
    pub fn new(config: PlannerConfig, tasks: Vec<ProductTask>) -> Self {
        Self { config, tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(primary: (i64, i64), backup: (i64, i64), days: usize) -> PlannerConfig {
        PlannerConfig {
            primary_pool: PrimaryPool::new(primary.0, primary.1),
            backup_pool: BackupPool::new(backup.0, backup.1),
            period: Period::from_labels((1..=days).map(|d| format!("D{}", d))),
            backup_mode: BackupMode::Double,
            random_seed: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let cfg = PlannerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.primary_pool.len(), 180);
        assert_eq!(cfg.backup_pool.len(), 20);
        assert_eq!(cfg.period.len(), 6);
    }

    #[test]
    fn test_validate_pool_errors() {
        assert_eq!(
            config((10, 9), (20, 2), 1).validate(),
            Err(ConfigError::EmptyPrimaryPool { start: 10, end: 9 })
        );
        assert_eq!(
            config((1, 9), (20, -1), 1).validate(),
            Err(ConfigError::NegativeBackupCount(-1))
        );
        assert_eq!(
            config((1, 9), (20, 0), 1).validate(),
            Err(ConfigError::EmptyBackupPool)
        );
        assert!(matches!(
            config((1, 9), (9, 2), 1).validate(),
            Err(ConfigError::OverlappingPools { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_pools_beyond_i64() {
        assert_eq!(
            config((i64::MIN, i64::MAX), (0, 0), 1).validate(),
            Err(ConfigError::PrimaryPoolOutOfRange {
                start: i64::MIN,
                end: i64::MAX,
            })
        );
        assert_eq!(
            config((1, 9), (i64::MAX - 1, 20), 1).validate(),
            Err(ConfigError::BackupPoolOutOfRange {
                start: i64::MAX - 1,
                count: 20,
            })
        );
        // 恰好落在 i64::MAX 的池仍然合法
        assert!(config((i64::MIN, i64::MIN + 8), (i64::MAX - 1, 1), 1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_period_errors() {
        assert_eq!(config((1, 9), (10, 2), 0).validate(), Err(ConfigError::EmptyPeriod));

        let mut cfg = config((1, 9), (10, 2), 2);
        cfg.period = Period::from_labels(["周一", "周一"]);
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicateDay("周一".to_string())));
    }

    #[test]
    fn test_plan_request_json_shape() {
        let json = r#"{
            "primary_pool": {"start": 1, "end": 9},
            "backup_pool": {"start": 10, "count": 2},
            "period": ["D1", "D2", "D3"],
            "random_seed": 5,
            "tasks": [{"id": "P1", "total": 9}]
        }"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.config.backup_mode, BackupMode::Double);
        assert_eq!(request.config.random_seed, Some(5));
        assert_eq!(request.tasks, vec![ProductTask::new("P1", 9)]);
        assert!(request.config.validate().is_ok());
    }
}
