// ==========================================
// ABC 排单系统 - 引擎层
// ==========================================
// 职责: 主力/替补账号分配规则
// 红线: 同一账号本周期内不重复关联同一产品（替补耗尽时降级复用）
// ==========================================

pub mod backup_resolver;
pub mod error;
pub mod primary_allocator;
pub mod schedule_generator;
pub mod state;
pub mod task_planner;

// 重导出核心引擎
pub use backup_resolver::{BackupPick, BackupResolution, BackupResolver};
pub use error::{ConfigError, EngineError, EngineResult, ErrorKind, ErrorReport};
pub use primary_allocator::PrimaryAllocator;
pub use schedule_generator::{plan, GeneratorPhase, ScheduleGenerator};
pub use state::{AllocationHistory, DailyLoad};
pub use task_planner::{PlannedTask, TaskPlanner};
