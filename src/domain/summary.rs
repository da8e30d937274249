// ==========================================
// ABC 排单系统 - 排期汇总
// ==========================================
// 每产品每日单量 + 每日合计（汇总报表的数据源）
// ==========================================

use crate::domain::assignment::Schedule;
use crate::domain::task::DayMarker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDailyCount {
    pub product_id: String,
    pub counts: Vec<usize>, // 与 ScheduleSummary.days 一一对应
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub days: Vec<DayMarker>,
    pub products: Vec<ProductDailyCount>, // 按产品编号排序
    pub day_totals: Vec<usize>,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let day_count = schedule.days.len();
        let mut per_product: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

        for (day_idx, day) in schedule.days.iter().enumerate() {
            for record in &day.assignments {
                let counts = per_product
                    .entry(record.product_id.as_str())
                    .or_insert_with(|| vec![0; day_count]);
                counts[day_idx] += 1;
            }
        }

        let day_totals = schedule
            .days
            .iter()
            .map(|d| d.assignments.len())
            .collect();

        let products = per_product
            .into_iter()
            .map(|(product_id, counts)| ProductDailyCount {
                product_id: product_id.to_string(),
                total: counts.iter().sum(),
                counts,
            })
            .collect();

        Self {
            days: schedule.days.iter().map(|d| d.day.clone()).collect(),
            products,
            day_totals,
        }
    }

    pub fn product(&self, product_id: &str) -> Option<&ProductDailyCount> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    pub fn grand_total(&self) -> usize {
        self.day_totals.iter().sum()
    }
}
