// ==========================================
// ABC 排单系统 - 排期配置读取 Trait
// ==========================================
// 职责: 定义排期所需的配置读取接口（不包含实现）
// 实现者: ConfigManager（JSON 键值配置）、测试 Mock
// ==========================================

use crate::config::planner_config::PlannerConfig;
use crate::domain::pool::{BackupPool, PrimaryPool};
use crate::domain::task::Period;
use crate::domain::types::BackupMode;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
pub trait PlannerConfigReader: Send + Sync {
    /// 获取主力账号池
    ///
    /// # 默认值
    /// - [1, 180]
    async fn get_primary_pool(&self) -> Result<PrimaryPool, Box<dyn Error + Send + Sync>>;

    /// 获取替补账号池
    ///
    /// # 默认值
    /// - 起始 181，数量 20
    async fn get_backup_pool(&self) -> Result<BackupPool, Box<dyn Error + Send + Sync>>;

    /// 获取排期周期
    ///
    /// # 逻辑
    /// 1. period_days（JSON 数组）优先
    /// 2. 否则 period_start_date + period_length 按日期生成
    /// 3. 都没有则为周一至周六
    async fn get_period(&self) -> Result<Period, Box<dyn Error + Send + Sync>>;

    /// 获取替补模式
    ///
    /// # 默认值
    /// - double
    async fn get_backup_mode(&self) -> Result<BackupMode, Box<dyn Error + Send + Sync>>;

    /// 获取固定随机种子（未配置返回 None）
    async fn get_random_seed(&self) -> Result<Option<u64>, Box<dyn Error + Send + Sync>>;

    /// 组装完整排期配置（不做校验，校验在引擎入口）
    async fn load_planner_config(&self) -> Result<PlannerConfig, Box<dyn Error + Send + Sync>> {
        Ok(PlannerConfig {
            primary_pool: self.get_primary_pool().await?,
            backup_pool: self.get_backup_pool().await?,
            period: self.get_period().await?,
            backup_mode: self.get_backup_mode().await?,
            random_seed: self.get_random_seed().await?,
        })
    }
}
