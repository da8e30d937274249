// ==========================================
// ABC 排单系统 - 核心库
// ==========================================
// 职责: 主力/替补账号按周期防重分配
// 输入: 产品任务列表 + 周期 + 主力池 + 替补池
// 输出: 每日分配记录 + 替补降级告警
// 说明: 表格读写、界面、报表样式不在本库范围内
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配规则
pub mod engine;

// 配置层 - 账号池与周期配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AccountId, AssignmentRecord, BackupDegraded, BackupMode, BackupPool, BackupSlot, DayMarker,
    DaySchedule, Period, PlanOutcome, PrimaryPool, ProductTask, Schedule, ScheduleSummary,
};

pub use engine::{
    plan, BackupResolver, ConfigError, EngineError, EngineResult, ErrorKind, ErrorReport,
    PrimaryAllocator, ScheduleGenerator, TaskPlanner,
};

pub use config::{ConfigManager, PlanRequest, PlannerConfig, PlannerConfigReader};

pub use api::{ApiError, ApiResult, PlanApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "ABC 排单系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
