// ==========================================
// ABC 排单系统 - 主力账号分配器
// ==========================================
// 规则: 本周期未关联该产品 + 当日负载最低 + 同负载随机
// 红线: 主力无降级路径，找不到可用主力则整次排期失败
// ==========================================

use crate::domain::pool::PrimaryPool;
use crate::domain::task::DayMarker;
use crate::domain::types::AccountId;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::state::{AllocationHistory, DailyLoad};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

pub struct PrimaryAllocator {
    pool: PrimaryPool,
}

impl PrimaryAllocator {
    pub fn new(pool: PrimaryPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PrimaryPool {
        &self.pool
    }

    /// 可接该产品的主力账号（按编号顺序）
    pub fn eligible_accounts(&self, product_id: &str, history: &AllocationHistory) -> Vec<AccountId> {
        self.pool
            .accounts()
            .filter(|&account| !history.has(account, product_id))
            .collect()
    }

    /// 为 (day, product) 的一单选择主力账号
    ///
    /// 副作用：产品写入所选账号历史，当日负载 +1
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        day: &DayMarker,
        product_id: &str,
        history: &mut AllocationHistory,
        load: &mut DailyLoad,
        rng: &mut R,
    ) -> EngineResult<AccountId> {
        let exhausted = || EngineError::AllocationExhausted {
            day: day.clone(),
            product_id: product_id.to_string(),
            eligible_checked: self.pool.len(),
        };

        let candidates = self.eligible_accounts(product_id, history);
        let min_load = candidates
            .iter()
            .map(|&account| load.get(account))
            .min()
            .ok_or_else(exhausted)?;

        let best: Vec<AccountId> = candidates
            .into_iter()
            .filter(|&account| load.get(account) == min_load)
            .collect();

        let chosen = *best.choose(rng).ok_or_else(exhausted)?;

        history.record(chosen, product_id);
        load.increment(chosen);

        trace!(
            day = %day,
            product_id,
            chosen,
            min_load,
            tied = best.len(),
            "主力账号已分配"
        );
        Ok(chosen)
    }
}
