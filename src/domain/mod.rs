// ==========================================
// ABC 排单系统 - 领域模型层
// ==========================================
// 职责: 定义账号池、任务、周期、分配结果
// 红线: 不含分配逻辑,不含配置读取
// ==========================================

pub mod assignment;
pub mod pool;
pub mod summary;
pub mod task;
pub mod types;

// 重导出核心类型
pub use assignment::{AssignmentRecord, BackupDegraded, DaySchedule, PlanOutcome, Schedule};
pub use pool::{BackupPool, PrimaryPool};
pub use summary::{ProductDailyCount, ScheduleSummary};
pub use task::{DayMarker, Period, ProductTask};
pub use types::{AccountId, BackupMode, BackupSlot, ACCOUNTS_PER_BACKUP_SLOT};
