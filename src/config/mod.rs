// ==========================================
// ABC 排单系统 - 配置层
// ==========================================
// 职责: 账号池/周期/替补模式/随机种子配置
// 存储: 键值配置（JSON 文件或内存）
// ==========================================

pub mod config_manager;
pub mod config_reader_trait;
pub mod planner_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, default_config_path, ConfigManager, ConfigValueError};
pub use config_reader_trait::PlannerConfigReader;
pub use planner_config::{PlanRequest, PlannerConfig};
