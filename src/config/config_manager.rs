// ==========================================
// ABC 排单系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写、快照
// 存储: 键值表（可从 JSON 对象文件加载）
// ==========================================

use crate::config::config_reader_trait::PlannerConfigReader;
use crate::config::planner_config::{
    DEFAULT_BACKUP_COUNT, DEFAULT_BACKUP_START, DEFAULT_PRIMARY_END, DEFAULT_PRIMARY_START,
};
use crate::domain::pool::{BackupPool, PrimaryPool};
use crate::domain::task::Period;
use crate::domain::types::BackupMode;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

type BoxError = Box<dyn Error + Send + Sync>;

/// 默认周期长度（周一至周六）
const DEFAULT_PERIOD_LENGTH: usize = 6;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const PRIMARY_START: &str = "primary_start";
    pub const PRIMARY_END: &str = "primary_end";
    pub const BACKUP_START: &str = "backup_start";
    pub const BACKUP_COUNT: &str = "backup_count";
    pub const BACKUP_MODE: &str = "backup_mode";
    pub const PERIOD_DAYS: &str = "period_days";
    pub const PERIOD_START_DATE: &str = "period_start_date";
    pub const PERIOD_LENGTH: &str = "period_length";
    pub const RANDOM_SEED: &str = "random_seed";
}

/// 配置值格式错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
pub struct ConfigValueError {
    pub key: String,
    pub value: String,
    pub message: String,
}

impl ConfigValueError {
    fn new(key: &str, value: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

/// 默认配置文件路径
///
/// 优先级：环境变量 ABC_DISPATCH_CONFIG → 用户配置目录 → 当前目录
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ABC_DISPATCH_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("abc-dispatch").join("config.json"),
        None => PathBuf::from("./abc_dispatch_config.json"),
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl ConfigManager {
    /// 空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// 从 JSON 对象文件加载
    ///
    /// 字符串值原样保存；数字/数组等保存为其 JSON 文本
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoxError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("配置文件读取失败 ({}): {}", path.display(), e))?;
        let parsed: serde_json::Map<String, JsonValue> = serde_json::from_str(&raw)?;

        let values: HashMap<String, String> = parsed
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let text = match v {
                    JsonValue::String(s) => s,
                    other => other.to_string(),
                };
                (k, text)
            })
            .collect();

        debug!(path = %path.display(), keys = values.len(), "配置文件已加载");
        Ok(Self::from_map(values))
    }

    /// 读取配置值
    fn get_config_value(&self, key: &str) -> Result<Option<String>, BoxError> {
        let values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        Ok(values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, BoxError> {
        self.get_config_value(key)
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, BoxError> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// 写入/覆盖配置值
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), BoxError> {
        let mut values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 全部配置快照（JSON，键有序）
    pub fn get_config_snapshot(&self) -> Result<String, BoxError> {
        let values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        let ordered: BTreeMap<&String, &String> = values.iter().collect();
        Ok(serde_json::to_string(&ordered)?)
    }

    /// 从快照恢复配置（覆盖同名键，跳过 __meta_ 元信息）
    ///
    /// # 返回
    /// 恢复的配置项数量
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, BoxError> {
        let snapshot: HashMap<String, String> = serde_json::from_str(snapshot_json)?;
        let mut values = self.values.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut count = 0;
        for (key, value) in snapshot {
            if key.starts_with("__meta_") {
                continue;
            }
            values.insert(key, value);
            count += 1;
        }
        Ok(count)
    }

    fn get_i64_or(&self, key: &str, default: i64) -> Result<i64, BoxError> {
        match self.get_config_value(key)? {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| ConfigValueError::new(key, &raw, e.to_string()).into()),
            None => Ok(default),
        }
    }
}

#[async_trait]
impl PlannerConfigReader for ConfigManager {
    async fn get_primary_pool(&self) -> Result<PrimaryPool, BoxError> {
        let start = self.get_i64_or(config_keys::PRIMARY_START, DEFAULT_PRIMARY_START)?;
        let end = self.get_i64_or(config_keys::PRIMARY_END, DEFAULT_PRIMARY_END)?;
        Ok(PrimaryPool::new(start, end))
    }

    async fn get_backup_pool(&self) -> Result<BackupPool, BoxError> {
        let start = self.get_i64_or(config_keys::BACKUP_START, DEFAULT_BACKUP_START)?;
        let count = self.get_i64_or(config_keys::BACKUP_COUNT, DEFAULT_BACKUP_COUNT)?;
        Ok(BackupPool::new(start, count))
    }

    async fn get_period(&self) -> Result<Period, BoxError> {
        if let Some(raw) = self.get_config_value(config_keys::PERIOD_DAYS)? {
            let labels: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
                ConfigValueError::new(config_keys::PERIOD_DAYS, &raw, format!("期望字符串数组: {}", e))
            })?;
            return Ok(Period::from_labels(labels));
        }

        if let Some(raw) = self.get_config_value(config_keys::PERIOD_START_DATE)? {
            let start = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                ConfigValueError::new(config_keys::PERIOD_START_DATE, &raw, format!("期望 YYYY-MM-DD: {}", e))
            })?;
            let length = self.get_i64_or(config_keys::PERIOD_LENGTH, DEFAULT_PERIOD_LENGTH as i64)?;
            if length < 0 {
                return Err(ConfigValueError::new(
                    config_keys::PERIOD_LENGTH,
                    &length.to_string(),
                    "周期长度不能为负",
                )
                .into());
            }
            return Period::from_start_date(start, length as usize).ok_or_else(|| {
                ConfigValueError::new(config_keys::PERIOD_LENGTH, &length.to_string(), "周期超出日期范围").into()
            });
        }

        Ok(Period::weekly())
    }

    async fn get_backup_mode(&self) -> Result<BackupMode, BoxError> {
        let raw = self.get_config_or_default(config_keys::BACKUP_MODE, BackupMode::default().as_str())?;
        raw.parse::<BackupMode>()
            .map_err(|msg| ConfigValueError::new(config_keys::BACKUP_MODE, &raw, msg).into())
    }

    async fn get_random_seed(&self) -> Result<Option<u64>, BoxError> {
        match self.get_config_value(config_keys::RANDOM_SEED)? {
            Some(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigValueError::new(config_keys::RANDOM_SEED, &raw, e.to_string()).into()),
            None => Ok(None),
        }
    }
}
