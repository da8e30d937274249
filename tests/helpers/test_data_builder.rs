// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use abc_dispatch::config::{PlanRequest, PlannerConfig};
use abc_dispatch::domain::{BackupMode, BackupPool, Period, PrimaryPool, ProductTask};

// ==========================================
// PlannerConfig 构建器
// ==========================================

pub struct ConfigBuilder {
    primary: (i64, i64),
    backup: (i64, i64),
    days: usize,
    mode: BackupMode,
    seed: Option<u64>,
}

impl ConfigBuilder {
    /// 主力 1-9，替补 10 起 2 个，3 天，双替补，种子 1
    pub fn new() -> Self {
        Self {
            primary: (1, 9),
            backup: (10, 2),
            days: 3,
            mode: BackupMode::Double,
            seed: Some(1),
        }
    }

    pub fn primary(mut self, start: i64, end: i64) -> Self {
        self.primary = (start, end);
        self
    }

    pub fn backup(mut self, start: i64, count: i64) -> Self {
        self.backup = (start, count);
        self
    }

    pub fn days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    pub fn mode(mut self, mode: BackupMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> PlannerConfig {
        PlannerConfig {
            primary_pool: PrimaryPool::new(self.primary.0, self.primary.1),
            backup_pool: BackupPool::new(self.backup.0, self.backup.1),
            period: Period::from_labels((1..=self.days).map(|d| format!("D{}", d))),
            backup_mode: self.mode,
            random_seed: self.seed,
        }
    }

    pub fn request(self, tasks: &[(&str, i64)]) -> PlanRequest {
        PlanRequest::new(self.build(), tasks_of(tasks))
    }
}

pub fn tasks_of(tasks: &[(&str, i64)]) -> Vec<ProductTask> {
    tasks
        .iter()
        .map(|(id, total)| ProductTask::new(*id, *total))
        .collect()
}

/// 生产规模配置：主力 1-180，替补 181 起 20 个，6 天
pub fn production_config(seed: u64) -> PlannerConfig {
    ConfigBuilder::new()
        .primary(1, 180)
        .backup(181, 20)
        .days(6)
        .seed(seed)
        .build()
}

/// 一组确定的产品任务（总量均不超过 180）
pub fn production_tasks(count: usize) -> Vec<ProductTask> {
    (0..count)
        .map(|i| ProductTask::new(format!("C{:03}", i + 1), ((i * 37 + 5) % 181) as i64))
        .collect()
}
