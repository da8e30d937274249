// ==========================================
// ABC 排单系统 - 账号池领域模型
// ==========================================
// 主力池: 闭区间 [start, end]
// 替补池: 半开区间 [start, start + count)
// 单次排期内不可变
// ==========================================

use crate::domain::types::AccountId;
use serde::{Deserialize, Serialize};

// ==========================================
// PrimaryPool - 主力账号池
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryPool {
    pub start: AccountId, // 起始账号（含）
    pub end: AccountId,   // 结束账号（含）
}

impl PrimaryPool {
    pub fn new(start: AccountId, end: AccountId) -> Self {
        Self { start, end }
    }

    /// 账号数量（end < start 时为 0；区间跨度无法表示时为 None）
    pub fn checked_len(&self) -> Option<usize> {
        if self.end < self.start {
            return Some(0);
        }
        let span = self.end.checked_sub(self.start)?.checked_add(1)?;
        usize::try_from(span).ok()
    }

    /// 账号数量（跨度溢出时饱和，配置校验会先拒绝这种池）
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, account: AccountId) -> bool {
        account >= self.start && account <= self.end
    }

    /// 按编号顺序遍历账号
    pub fn accounts(&self) -> impl Iterator<Item = AccountId> {
        self.start..=self.end
    }
}

// ==========================================
// BackupPool - 替补账号池
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPool {
    pub start: AccountId, // 起始账号
    pub count: i64,       // 账号数量（配置层校验非负）
}

impl BackupPool {
    pub fn new(start: AccountId, count: i64) -> Self {
        Self { start, count }
    }

    pub fn len(&self) -> usize {
        self.count.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 结束账号（不含）；超出 i64 时为 None
    pub fn checked_end_exclusive(&self) -> Option<AccountId> {
        self.start.checked_add(self.count.max(0))
    }

    /// 结束账号（不含，溢出时饱和）
    pub fn end_exclusive(&self) -> AccountId {
        self.start.saturating_add(self.count.max(0))
    }

    pub fn contains(&self, account: AccountId) -> bool {
        account >= self.start && account < self.end_exclusive()
    }

    /// 池内位置 → 账号（位置按池大小取模）
    pub fn account_at(&self, index: usize) -> Option<AccountId> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let offset = i64::try_from(index % len).ok()?;
        self.start.checked_add(offset)
    }

    pub fn accounts(&self) -> impl Iterator<Item = AccountId> {
        self.start..self.end_exclusive()
    }

    /// 与主力池是否有交集
    pub fn overlaps(&self, primary: &PrimaryPool) -> bool {
        !self.is_empty()
            && !primary.is_empty()
            && self.start <= primary.end
            && primary.start < self.end_exclusive()
    }
}
