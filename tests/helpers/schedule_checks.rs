// ==========================================
// 排期结果校验 - 按分配顺序回放
// ==========================================
// 每日记录按分配顺序追加，可据此回放历史与当日负载
// ==========================================

use abc_dispatch::domain::{BackupSlot, PrimaryPool, Schedule};
use std::collections::{HashMap, HashSet};

/// 同一产品的主力账号在整个周期内不重复
pub fn assert_primary_no_repeat(schedule: &Schedule) {
    let mut seen: HashSet<(String, i64)> = HashSet::new();
    for (day, record) in schedule.records() {
        assert!(
            seen.insert((record.product_id.clone(), record.primary_account)),
            "{} 产品 {} 主力 {} 重复",
            day,
            record.product_id,
            record.primary_account
        );
    }
}

/// 非降级的替补位不得复用已关联该产品的账号
pub fn assert_history_respected(schedule: &Schedule) {
    let mut history: HashSet<(String, i64)> = HashSet::new();
    for (day, record) in schedule.records() {
        let product = record.product_id.clone();
        assert!(history.insert((product.clone(), record.primary_account)));

        let fresh_1 = history.insert((product.clone(), record.backup_account_1));
        if !record.forced_reuse.contains(&BackupSlot::First) {
            assert!(fresh_1, "{} 产品 {} 替补1 {} 未标记降级却已关联", day, product, record.backup_account_1);
        }

        if let Some(b2) = record.backup_account_2 {
            let fresh_2 = history.insert((product.clone(), b2));
            if !record.forced_reuse.contains(&BackupSlot::Second) {
                assert!(fresh_2, "{} 产品 {} 替补2 {} 未标记降级却已关联", day, product, b2);
            }
        }
    }
}

/// 每单主力分配前的负载等于当时可选主力中的最低负载
pub fn assert_greedy_load_balance(schedule: &Schedule, pool: &PrimaryPool) {
    let mut primary_history: HashSet<(String, i64)> = HashSet::new();

    for day in &schedule.days {
        let mut load: HashMap<i64, u32> = HashMap::new();

        for record in &day.assignments {
            let min_eligible = pool
                .accounts()
                .filter(|a| !primary_history.contains(&(record.product_id.clone(), *a)))
                .map(|a| load.get(&a).copied().unwrap_or(0))
                .min()
                .expect("至少有一个可选主力");
            let chosen_load = load.get(&record.primary_account).copied().unwrap_or(0);
            assert_eq!(
                chosen_load, min_eligible,
                "{} 产品 {} 选中主力 {} 负载 {} 高于最低负载 {}",
                day.day, record.product_id, record.primary_account, chosen_load, min_eligible
            );

            primary_history.insert((record.product_id.clone(), record.primary_account));
            *load.entry(record.primary_account).or_insert(0) += 1;
        }
    }
}

/// 同一条记录的两个替补互不相同（替补池 ≥ 2 时）
pub fn assert_backups_distinct(schedule: &Schedule) {
    for (day, record) in schedule.records() {
        if let Some(b2) = record.backup_account_2 {
            assert_ne!(record.backup_account_1, b2, "{} 产品 {} 替补重复", day, record.product_id);
        }
    }
}
