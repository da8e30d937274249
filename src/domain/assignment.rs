// ==========================================
// ABC 排单系统 - 分配结果领域模型
// ==========================================
// AssignmentRecord: 某天某任务的一单分配（创建后不可变）
// Schedule: 按周期顺序排列的每日分配列表
// ==========================================

use crate::domain::summary::ScheduleSummary;
use crate::domain::task::DayMarker;
use crate::domain::types::{AccountId, BackupSlot};
use serde::{Deserialize, Serialize};

// ==========================================
// AssignmentRecord - 单条分配记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub product_id: String,       // 产品编号
    pub total_quantity: i64,      // 周期总单量
    pub primary_account: AccountId, // 主力账号
    pub backup_account_1: AccountId, // 替补账号1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_account_2: Option<AccountId>, // 替补账号2（单替补模式为空）

    /// 被迫复用的替补位
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forced_reuse: Vec<BackupSlot>,
}

impl AssignmentRecord {
    /// 是否存在替补降级
    pub fn is_degraded(&self) -> bool {
        !self.forced_reuse.is_empty()
    }

    pub fn backups(&self) -> impl Iterator<Item = AccountId> {
        std::iter::once(self.backup_account_1).chain(self.backup_account_2)
    }
}

// ==========================================
// BackupDegraded - 替补降级告警（非致命）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDegraded {
    pub day: DayMarker,
    pub product_id: String,
    pub primary_account: AccountId,
    pub slot: BackupSlot,
    pub reused_account: AccountId,
}

// ==========================================
// DaySchedule / Schedule
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: DayMarker,
    pub assignments: Vec<AssignmentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub days: Vec<DaySchedule>,
}

impl Schedule {
    /// 指定日期的分配列表
    pub fn get(&self, day: &DayMarker) -> Option<&[AssignmentRecord]> {
        self.days
            .iter()
            .find(|d| &d.day == day)
            .map(|d| d.assignments.as_slice())
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// 分配记录总数
    pub fn total_assignments(&self) -> usize {
        self.days.iter().map(|d| d.assignments.len()).sum()
    }

    /// 按周期顺序遍历 (日期, 记录)
    pub fn records(&self) -> impl Iterator<Item = (&DayMarker, &AssignmentRecord)> {
        self.days
            .iter()
            .flat_map(|d| d.assignments.iter().map(move |r| (&d.day, r)))
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_schedule(self)
    }
}

// ==========================================
// PlanOutcome - 一次排期的完整输出
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub run_id: String,               // 本次运行标识
    pub seed: u64,                    // 实际使用的随机种子（可复现）
    pub schedule: Schedule,
    pub warnings: Vec<BackupDegraded>, // 替补降级记录
}

impl PlanOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
