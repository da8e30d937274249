// ==========================================
// ABC 排单系统 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 致命错误: 立即终止整次排期，不返回部分结果
// 非致命降级（替补复用）不在此处，见 BackupDegraded
// ==========================================

use crate::domain::task::DayMarker;
use crate::domain::types::AccountId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// ConfigError - 配置错误（创建任何状态之前抛出）
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("主力账号池为空: 起始 {start} > 结束 {end}")]
    EmptyPrimaryPool { start: AccountId, end: AccountId },

    #[error("主力账号池 [{start}, {end}] 跨度超出可表示范围")]
    PrimaryPoolOutOfRange { start: AccountId, end: AccountId },

    #[error("替补账号池起始 {start} 加数量 {count} 超出账号编号可表示范围")]
    BackupPoolOutOfRange { start: AccountId, count: i64 },

    #[error("替补账号数量不能为负: {0}")]
    NegativeBackupCount(i64),

    #[error("替补账号池为空: 至少需要 1 个替补账号")]
    EmptyBackupPool,

    #[error("替补账号池 [{backup_start}, {backup_end}) 与主力账号池 [{primary_start}, {primary_end}] 重叠")]
    OverlappingPools {
        primary_start: AccountId,
        primary_end: AccountId,
        backup_start: AccountId,
        backup_end: AccountId,
    },

    #[error("排期周期为空: 至少需要 1 天")]
    EmptyPeriod,

    #[error("排期周期存在重复日期标记: {0}")]
    DuplicateDay(String),

    #[error("第 {index} 个任务的产品编号为空")]
    EmptyProductId { index: usize },
}

// ==========================================
// EngineError - 引擎致命错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("产品 {product_id} 的周期总单量 ({total}) 超出主力账号可分配范围 [0, {pool_size}]，无法分配不重复主力")]
    InfeasibleTask {
        product_id: String,
        total: i64,
        pool_size: usize,
    },

    #[error("无法分配: 在 {day} 为产品 {product_id} 找不到可用主力账号（已检查 {eligible_checked} 个）")]
    AllocationExhausted {
        day: DayMarker,
        product_id: String,
        eligible_checked: usize,
    },
}

/// 错误分类（对外结构化报告使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    ConfigError,
    InfeasibleTaskError,
    AllocationExhaustedError,
}

/// 结构化错误报告 `{kind, day?, product_id, detail}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DayMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub detail: String,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Config(_) => ErrorKind::ConfigError,
            EngineError::InfeasibleTask { .. } => ErrorKind::InfeasibleTaskError,
            EngineError::AllocationExhausted { .. } => ErrorKind::AllocationExhaustedError,
        }
    }

    pub fn day(&self) -> Option<&DayMarker> {
        match self {
            EngineError::AllocationExhausted { day, .. } => Some(day),
            _ => None,
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        match self {
            EngineError::InfeasibleTask { product_id, .. }
            | EngineError::AllocationExhausted { product_id, .. } => Some(product_id),
            EngineError::Config(_) => None,
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            day: self.day().cloned(),
            product_id: self.product_id().map(str::to_string),
            detail: self.to_string(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
