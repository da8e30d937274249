// ==========================================
// ABC 排单系统 - 领域类型定义
// ==========================================
// 依据: 排单规则 - 主力/替补同产品本周期不重复
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 账号编号（主力与替补共用同一编号空间）
pub type AccountId = i64;

/// 每个替补首选位对应的主力账号数（9 个主力共享 1 个名义替补）
pub const ACCOUNTS_PER_BACKUP_SLOT: i64 = 9;

// ==========================================
// 替补模式 (Backup Mode)
// ==========================================
// 部分报表只需要一个替补列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupMode {
    Single, // 仅替补1
    Double, // 替补1 + 替补2
}

impl BackupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupMode::Single => "single",
            BackupMode::Double => "double",
        }
    }

    /// 每条主力分配需要的替补数量
    pub fn slot_count(&self) -> usize {
        match self {
            BackupMode::Single => 1,
            BackupMode::Double => 2,
        }
    }
}

impl Default for BackupMode {
    fn default() -> Self {
        BackupMode::Double
    }
}

impl fmt::Display for BackupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" | "one" => Ok(BackupMode::Single),
            "double" | "2" | "two" => Ok(BackupMode::Double),
            other => Err(format!("未知替补模式: {}", other)),
        }
    }
}

// ==========================================
// 替补位 (Backup Slot)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackupSlot {
    First,  // 替补1
    Second, // 替补2
}

impl fmt::Display for BackupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupSlot::First => write!(f, "BACKUP_1"),
            BackupSlot::Second => write!(f, "BACKUP_2"),
        }
    }
}
