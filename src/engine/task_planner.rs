// ==========================================
// ABC 排单系统 - 任务规划器
// ==========================================
// 职责: 任务校验/规范化 + 每日配额计算 + 一次性任务乱序
// 红线: 任何任务不可行则立即失败，不创建任何分配状态
// ==========================================

use crate::domain::pool::PrimaryPool;
use crate::domain::task::ProductTask;
use crate::engine::error::{ConfigError, EngineError, EngineResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

// ==========================================
// PlannedTask - 规范化后的任务
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub product_id: String,
    pub total: i64,
    /// 每日配额，下标与周期顺序一致
    pub quotas: Vec<u32>,
}

impl PlannedTask {
    pub fn quota_for(&self, day_index: usize) -> u32 {
        self.quotas.get(day_index).copied().unwrap_or(0)
    }
}

// ==========================================
// TaskPlanner - 任务规划器
// ==========================================
pub struct TaskPlanner {
    // 无状态
}

impl TaskPlanner {
    pub fn new() -> Self {
        Self {}
    }

    /// 第 `day_index` 天（0 起）的配额
    ///
    /// base = total / D, remainder = total % D；
    /// 前 remainder 天各多 1 单，保证总和等于 total 且日间差不超过 1
    pub fn daily_quota(total: u32, period_len: usize, day_index: usize) -> u32 {
        if period_len == 0 {
            return 0;
        }
        let days = period_len as u32;
        let base = total / days;
        let remainder = (total % days) as usize;
        base + u32::from(day_index < remainder)
    }

    /// 整个周期的配额列表
    pub fn quotas(total: u32, period_len: usize) -> Vec<u32> {
        (0..period_len)
            .map(|day_index| Self::daily_quota(total, period_len, day_index))
            .collect()
    }

    /// 校验并规范化任务列表
    ///
    /// # 规则
    /// 1) 产品编号去除首尾空白，不能为空
    /// 2) 0 ≤ total ≤ 主力池大小，否则 InfeasibleTask
    /// 3) 重复编号不去重，各自独立排期
    pub fn validate(
        &self,
        tasks: &[ProductTask],
        primary_pool: &PrimaryPool,
        period_len: usize,
    ) -> EngineResult<Vec<PlannedTask>> {
        let pool_size = primary_pool.len();
        let mut planned = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let product_id = task.id.trim();
            if product_id.is_empty() {
                return Err(ConfigError::EmptyProductId { index }.into());
            }

            if task.total < 0 || task.total as u64 > pool_size as u64 {
                return Err(EngineError::InfeasibleTask {
                    product_id: product_id.to_string(),
                    total: task.total,
                    pool_size,
                });
            }

            planned.push(PlannedTask {
                product_id: product_id.to_string(),
                total: task.total,
                quotas: Self::quotas(task.total as u32, period_len),
            });
        }

        debug!(task_count = planned.len(), pool_size, "任务校验完成");
        Ok(planned)
    }

    /// 打乱任务顺序（整次运行只做一次，所有天复用）
    pub fn shuffle<R: Rng + ?Sized>(&self, tasks: &mut [PlannedTask], rng: &mut R) {
        tasks.shuffle(rng);
    }
}

impl Default for TaskPlanner {
    fn default() -> Self {
        Self::new()
    }
}
