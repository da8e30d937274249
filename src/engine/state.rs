// ==========================================
// ABC 排单系统 - 排期运行状态
// ==========================================
// AllocationHistory: 账号 → 本周期已关联产品集合（全周期单调增长）
// DailyLoad: 主力账号 → 当日主力分配次数（每天清零）
// 两者只归 ScheduleGenerator 所有，每次运行重新创建
// ==========================================

use crate::domain::types::AccountId;
use std::collections::{HashMap, HashSet};

// ==========================================
// AllocationHistory - 全局历史记录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AllocationHistory {
    products_by_account: HashMap<AccountId, HashSet<String>>,
}

impl AllocationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 账号是否已关联过该产品
    pub fn has(&self, account: AccountId, product_id: &str) -> bool {
        self.products_by_account
            .get(&account)
            .map_or(false, |products| products.contains(product_id))
    }

    /// 记录关联；返回 false 表示该关联已存在（被迫复用）
    pub fn record(&mut self, account: AccountId, product_id: &str) -> bool {
        self.products_by_account
            .entry(account)
            .or_default()
            .insert(product_id.to_string())
    }

    pub fn products_of(&self, account: AccountId) -> Option<&HashSet<String>> {
        self.products_by_account.get(&account)
    }

    /// 已有关联记录的账号数
    pub fn account_count(&self) -> usize {
        self.products_by_account.len()
    }
}

// ==========================================
// DailyLoad - 当日负载
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DailyLoad {
    counts: HashMap<AccountId, u32>,
}

impl DailyLoad {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未出现的账号负载为 0
    pub fn get(&self, account: AccountId) -> u32 {
        self.counts.get(&account).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, account: AccountId) {
        *self.counts.entry(account).or_insert(0) += 1;
    }

    /// 新的一天开始
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_keyed_per_product() {
        let mut history = AllocationHistory::new();
        assert!(history.record(7, "P1"));
        assert!(history.has(7, "P1"));
        assert!(!history.has(7, "P2"));
        assert!(!history.has(8, "P1"));
        // 重复关联返回 false
        assert!(!history.record(7, "P1"));
        assert!(history.record(7, "P2"));
        assert_eq!(history.products_of(7).map(|p| p.len()), Some(2));
        assert_eq!(history.account_count(), 1);
    }

    #[test]
    fn test_daily_load_reset() {
        let mut load = DailyLoad::new();
        load.increment(3);
        load.increment(3);
        load.increment(4);
        assert_eq!(load.get(3), 2);
        assert_eq!(load.get(5), 0);
        assert_eq!(load.total(), 3);

        load.reset();
        assert_eq!(load.get(3), 0);
        assert_eq!(load.total(), 0);
    }
}
