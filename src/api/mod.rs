// ==========================================
// ABC 排单系统 - API 层
// ==========================================
// 职责: 对外业务接口，错误转换为用户可读消息
// ==========================================

pub mod error;
pub mod plan_api;

pub use error::{ApiError, ApiResult};
pub use plan_api::PlanApi;
