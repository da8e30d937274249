// ==========================================
// ABC 排单系统 - API层错误类型
// ==========================================
// 职责: 将引擎/配置错误转换为用户可读的错误消息
// 所有错误必须带出原因（产品、日期、配置键）
// ==========================================

use crate::config::ConfigValueError;
use crate::engine::error::{EngineError, ErrorReport};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置读取失败 (key: {}): {message}", .key.as_deref().unwrap_or("-"))]
    ConfigReadError {
        key: Option<String>, // 配置源能定位到的键
        message: String,
    },

    // ==========================================
    // 排期错误（来自引擎）
    // ==========================================
    #[error("排期配置错误: {}", .0.detail)]
    InvalidConfig(ErrorReport),

    #[error("任务不可行: {}", .0.detail)]
    InfeasibleTask(ErrorReport),

    #[error("主力账号耗尽: {}", .0.detail)]
    AllocationExhausted(ErrorReport),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 引擎结构化错误报告（非引擎错误返回 None）
    pub fn engine_report(&self) -> Option<&ErrorReport> {
        match self {
            ApiError::InvalidConfig(report)
            | ApiError::InfeasibleTask(report)
            | ApiError::AllocationExhausted(report) => Some(report),
            _ => None,
        }
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let report = err.to_report();
        match err {
            EngineError::Config(_) => ApiError::InvalidConfig(report),
            EngineError::InfeasibleTask { .. } => ApiError::InfeasibleTask(report),
            EngineError::AllocationExhausted { .. } => ApiError::AllocationExhausted(report),
        }
    }
}

// ==========================================
// 从配置读取错误转换
// ==========================================
impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        let key = err.downcast_ref::<ConfigValueError>().map(|e| e.key.clone());
        ApiError::ConfigReadError {
            key,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput(format!("JSON 解析失败: {}", err))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
