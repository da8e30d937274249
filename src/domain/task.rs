// ==========================================
// ABC 排单系统 - 任务与周期领域模型
// ==========================================
// ProductTask: 每个产品在整个周期内的总单量
// Period: 有序日期标记（仅作输出键与配额分配顺序）
// ==========================================

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ProductTask - 产品任务
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTask {
    pub id: String, // 产品编号
    pub total: i64, // 周期总单量
}

impl ProductTask {
    pub fn new(id: impl Into<String>, total: i64) -> Self {
        Self {
            id: id.into(),
            total,
        }
    }
}

// ==========================================
// DayMarker - 日期标记
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayMarker(pub String);

impl DayMarker {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DayMarker {
    fn from(s: &str) -> Self {
        DayMarker(s.to_string())
    }
}

// ==========================================
// Period - 排期周期
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(pub Vec<DayMarker>);

impl Period {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Period(labels.into_iter().map(|l| DayMarker(l.into())).collect())
    }

    /// 默认周期：周一至周六（按当前语言）
    pub fn weekly() -> Self {
        Self::from_labels(crate::i18n::weekday_labels())
    }

    /// 从起始日期生成连续 `days` 天（标记格式 YYYY-MM-DD）
    ///
    /// 末日超出 chrono 可表示日期范围时返回 None
    pub fn from_start_date(start: NaiveDate, days: usize) -> Option<Self> {
        let last_offset = u64::try_from(days.saturating_sub(1)).ok()?;
        start.checked_add_days(Days::new(last_offset))?;

        (0..days)
            .map(|offset| {
                let date = start.checked_add_days(Days::new(offset as u64))?;
                Some(DayMarker(date.format("%Y-%m-%d").to_string()))
            })
            .collect::<Option<Vec<_>>>()
            .map(Period)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> &[DayMarker] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayMarker> {
        self.0.iter()
    }
}
