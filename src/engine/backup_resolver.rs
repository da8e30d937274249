// ==========================================
// ABC 排单系统 - 替补账号解析器
// ==========================================
// 首选位: (主力账号 - 主力起始) / 9，按替补池大小取模
// 查找: 从起点环形扫描整个替补池，取第一个未关联该产品的账号
// 降级: 扫描一圈无果时被迫复用固定位置（记录告警，不中断排期）
// ==========================================

use crate::domain::pool::{BackupPool, PrimaryPool};
use crate::domain::types::{AccountId, BackupMode, BackupSlot, ACCOUNTS_PER_BACKUP_SLOT};
use crate::engine::state::AllocationHistory;
use tracing::warn;

// ==========================================
// BackupPick - 单个替补位的选择结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupPick {
    pub account: AccountId,
    pub index: usize,       // 在替补池中的位置
    pub forced_reuse: bool, // 是否为被迫复用
}

/// 一条主力分配对应的替补结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupResolution {
    pub first: BackupPick,
    pub second: Option<BackupPick>,
}

impl BackupResolution {
    /// 被迫复用的替补位
    pub fn forced_slots(&self) -> Vec<BackupSlot> {
        let mut slots = Vec::new();
        if self.first.forced_reuse {
            slots.push(BackupSlot::First);
        }
        if self.second.map_or(false, |p| p.forced_reuse) {
            slots.push(BackupSlot::Second);
        }
        slots
    }
}

// ==========================================
// BackupResolver - 替补解析器
// ==========================================
pub struct BackupResolver {
    primary_start: AccountId,
    pool: BackupPool,
    mode: BackupMode,
}

impl BackupResolver {
    /// 替补池必须非空（由配置校验保证）
    pub fn new(primary_pool: &PrimaryPool, pool: BackupPool, mode: BackupMode) -> Self {
        Self {
            primary_start: primary_pool.start,
            pool,
            mode,
        }
    }

    pub fn mode(&self) -> BackupMode {
        self.mode
    }

    /// 主力账号对应的首选替补位
    pub fn preferred_index(&self, primary_account: AccountId) -> usize {
        let block = primary_account.saturating_sub(self.primary_start).max(0) / ACCOUNTS_PER_BACKUP_SLOT;
        let len = self.pool.len().max(1);
        (block as usize) % len
    }

    /// 环形查找可用替补
    ///
    /// 从 `start_index` 开始最多扫描整个替补池；
    /// 返回第一个未关联 `product_id` 且不等于 `exclude` 的账号
    pub fn find_available(
        &self,
        start_index: usize,
        product_id: &str,
        history: &AllocationHistory,
        exclude: Option<AccountId>,
    ) -> Option<(usize, AccountId)> {
        let len = self.pool.len();
        (0..len)
            .map(|offset| (start_index + offset) % len)
            .filter_map(|index| self.pool.account_at(index).map(|account| (index, account)))
            .find(|&(_, account)| Some(account) != exclude && !history.has(account, product_id))
    }

    /// 为一条主力分配解析替补（写入历史）
    pub fn resolve(
        &self,
        primary_account: AccountId,
        product_id: &str,
        history: &mut AllocationHistory,
    ) -> BackupResolution {
        let preferred = self.preferred_index(primary_account);

        // 替补1: 从首选位查找，无果则复用首选位
        let first = self.pick(preferred, product_id, history, None);
        history.record(first.account, product_id);
        if first.forced_reuse {
            warn!(
                product_id,
                primary_account,
                reused_account = first.account,
                "替补资源耗尽，替补1被迫复用"
            );
        }

        // 替补2: 从替补1实际位置的下一位查找，排除替补1
        let second = match self.mode {
            BackupMode::Single => None,
            BackupMode::Double => {
                let pick = self.pick(first.index + 1, product_id, history, Some(first.account));
                history.record(pick.account, product_id);
                if pick.forced_reuse {
                    warn!(
                        product_id,
                        primary_account,
                        reused_account = pick.account,
                        "替补资源耗尽，替补2被迫复用"
                    );
                }
                Some(pick)
            }
        };

        BackupResolution { first, second }
    }

    fn pick(
        &self,
        start_index: usize,
        product_id: &str,
        history: &AllocationHistory,
        exclude: Option<AccountId>,
    ) -> BackupPick {
        match self.find_available(start_index, product_id, history, exclude) {
            Some((index, account)) => BackupPick {
                account,
                index,
                forced_reuse: false,
            },
            None => {
                let len = self.pool.len().max(1);
                let index = start_index % len;
                BackupPick {
                    account: self.pool.start.saturating_add(index as i64),
                    index,
                    forced_reuse: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(backup_count: i64, mode: BackupMode) -> BackupResolver {
        BackupResolver::new(
            &PrimaryPool::new(1, 180),
            BackupPool::new(181, backup_count),
            mode,
        )
    }

    #[test]
    fn test_preferred_index_groups_by_nine() {
        let r = resolver(20, BackupMode::Double);
        assert_eq!(r.preferred_index(1), 0);
        assert_eq!(r.preferred_index(9), 0);
        assert_eq!(r.preferred_index(10), 1);
        assert_eq!(r.preferred_index(180), 19);

        // 替补池较小时取模
        let small = resolver(3, BackupMode::Double);
        assert_eq!(small.preferred_index(28), 0);
        assert_eq!(small.preferred_index(37), 1);
    }

    #[test]
    fn test_find_available_wraps_and_excludes() {
        let r = resolver(4, BackupMode::Double);
        let mut history = AllocationHistory::new();
        history.record(184, "P1");
        history.record(181, "P1");

        // 从位置 3 (184) 开始: 184 已关联 → 回绕到 181 已关联 → 182
        assert_eq!(r.find_available(3, "P1", &history, None), Some((1, 182)));
        assert_eq!(r.find_available(3, "P1", &history, Some(182)), Some((2, 183)));
        assert_eq!(r.find_available(0, "P2", &history, None), Some((0, 181)));
    }

    #[test]
    fn test_find_available_exhausted() {
        let r = resolver(2, BackupMode::Double);
        let mut history = AllocationHistory::new();
        history.record(181, "P1");
        history.record(182, "P1");
        assert_eq!(r.find_available(1, "P1", &history, None), None);
    }

    #[test]
    fn test_resolve_fresh_pair() {
        let r = resolver(20, BackupMode::Double);
        let mut history = AllocationHistory::new();

        let res = r.resolve(10, "P1", &mut history);
        assert_eq!(res.first.account, 182);
        assert_eq!(res.second.map(|p| p.account), Some(183));
        assert!(res.forced_slots().is_empty());
        assert!(history.has(182, "P1"));
        assert!(history.has(183, "P1"));
    }

    #[test]
    fn test_backup2_starts_after_backup1_actual_position() {
        let r = resolver(5, BackupMode::Double);
        let mut history = AllocationHistory::new();
        history.record(181, "P1");
        history.record(182, "P1");

        // 首选位 0 已用 → 替补1 落在位置 2 (183)，替补2 从位置 3 开始
        let res = r.resolve(1, "P1", &mut history);
        assert_eq!(res.first.account, 183);
        assert_eq!(res.first.index, 2);
        assert_eq!(res.second.map(|p| p.account), Some(184));
    }

    #[test]
    fn test_forced_reuse_when_pool_exhausted() {
        let r = resolver(2, BackupMode::Double);
        let mut history = AllocationHistory::new();
        history.record(181, "P1");
        history.record(182, "P1");

        let res = r.resolve(10, "P1", &mut history);
        // 首选位 = 1 % 2 = 1 → 182；替补2 复用下一位 181
        assert_eq!(res.first, BackupPick { account: 182, index: 1, forced_reuse: true });
        assert_eq!(
            res.second,
            Some(BackupPick { account: 181, index: 0, forced_reuse: true })
        );
        assert_eq!(res.forced_slots(), vec![BackupSlot::First, BackupSlot::Second]);
    }

    #[test]
    fn test_single_backup_pool_second_slot_coincides() {
        let r = resolver(1, BackupMode::Double);
        let mut history = AllocationHistory::new();

        let res = r.resolve(5, "P1", &mut history);
        assert!(!res.first.forced_reuse);
        let second = res.second.unwrap();
        assert!(second.forced_reuse);
        assert_eq!(second.account, res.first.account);
    }

    #[test]
    fn test_single_mode_skips_second() {
        let r = resolver(20, BackupMode::Single);
        let mut history = AllocationHistory::new();
        let res = r.resolve(1, "P1", &mut history);
        assert!(res.second.is_none());
        assert!(!history.has(182, "P1"));
    }
}
