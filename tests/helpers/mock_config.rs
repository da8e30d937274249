// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use abc_dispatch::config::{PlannerConfig, PlannerConfigReader};
use abc_dispatch::domain::{BackupMode, BackupPool, Period, PrimaryPool};
use async_trait::async_trait;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub config: PlannerConfig,
    /// 模拟配置源不可用
    pub fail: bool,
}

impl MockConfig {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            config: PlannerConfig::default(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), BoxError> {
        if self.fail {
            return Err("配置源不可用".into());
        }
        Ok(())
    }
}

#[async_trait]
impl PlannerConfigReader for MockConfig {
    async fn get_primary_pool(&self) -> Result<PrimaryPool, BoxError> {
        self.check()?;
        Ok(self.config.primary_pool)
    }

    async fn get_backup_pool(&self) -> Result<BackupPool, BoxError> {
        self.check()?;
        Ok(self.config.backup_pool)
    }

    async fn get_period(&self) -> Result<Period, BoxError> {
        self.check()?;
        Ok(self.config.period.clone())
    }

    async fn get_backup_mode(&self) -> Result<BackupMode, BoxError> {
        self.check()?;
        Ok(self.config.backup_mode)
    }

    async fn get_random_seed(&self) -> Result<Option<u64>, BoxError> {
        self.check()?;
        Ok(self.config.random_seed)
    }
}
