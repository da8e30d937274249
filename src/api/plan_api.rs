// ==========================================
// ABC 排单系统 - 排期 API
// ==========================================
// 职责: 读取配置 → 执行排期 → 转换错误
// 说明: 引擎本身同步无 I/O；配置读取为异步接口
// ==========================================

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::config::planner_config::PlanRequest;
use crate::config::PlannerConfigReader;
use crate::domain::assignment::PlanOutcome;
use crate::domain::task::ProductTask;
use crate::engine::plan;

// ==========================================
// PlanApi - 排期 API
// ==========================================
pub struct PlanApi<C>
where
    C: PlannerConfigReader,
{
    config: Arc<C>,
}

impl<C> PlanApi<C>
where
    C: PlannerConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// 组装引擎输入（种子覆盖优先于配置）
    pub async fn build_request(
        &self,
        tasks: Vec<ProductTask>,
        seed_override: Option<u64>,
    ) -> ApiResult<PlanRequest> {
        let mut config = self
            .config
            .load_planner_config()
            .await
            .map_err(ApiError::from)?;

        if seed_override.is_some() {
            config.random_seed = seed_override;
        }
        Ok(PlanRequest::new(config, tasks))
    }

    /// 生成排期
    ///
    /// # 返回
    /// - Ok(PlanOutcome): 完整排期 + 替补降级告警
    /// - Err(ApiError): 配置/任务/分配错误（不返回部分结果）
    pub async fn generate_plan(
        &self,
        tasks: Vec<ProductTask>,
        seed_override: Option<u64>,
    ) -> ApiResult<PlanOutcome> {
        if tasks.is_empty() {
            warn!("任务列表为空，将生成空排期");
        }

        let request = self.build_request(tasks, seed_override).await?;
        let outcome = plan(&request)?;

        info!(
            run_id = %outcome.run_id,
            seed = outcome.seed,
            days = outcome.schedule.day_count(),
            assignments = outcome.schedule.total_assignments(),
            degraded = outcome.warnings.len(),
            "排期 API 调用完成"
        );
        Ok(outcome)
    }

    /// 从 JSON 任务列表生成排期（`[{"id": "C001", "total": 12}, ...]`）
    pub async fn generate_plan_from_json(
        &self,
        tasks_json: &str,
        seed_override: Option<u64>,
    ) -> ApiResult<PlanOutcome> {
        let tasks: Vec<ProductTask> = serde_json::from_str(tasks_json)?;
        self.generate_plan(tasks, seed_override).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{config_keys, ConfigManager};
    use std::collections::HashMap;

    fn small_manager() -> ConfigManager {
        let values: HashMap<String, String> = [
            (config_keys::PRIMARY_START, "1"),
            (config_keys::PRIMARY_END, "9"),
            (config_keys::BACKUP_START, "10"),
            (config_keys::BACKUP_COUNT, "3"),
            (config_keys::PERIOD_DAYS, r#"["D1","D2","D3"]"#),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ConfigManager::from_map(values)
    }

    #[tokio::test]
    async fn test_seed_override_wins() {
        let api = PlanApi::new(Arc::new(small_manager()));
        let outcome = api
            .generate_plan(vec![ProductTask::new("P1", 4)], Some(77))
            .await
            .unwrap();
        assert_eq!(outcome.seed, 77);
        assert_eq!(outcome.schedule.total_assignments(), 4);
    }

    #[tokio::test]
    async fn test_infeasible_task_is_reported() {
        let api = PlanApi::new(Arc::new(small_manager()));
        let err = api
            .generate_plan_from_json(r#"[{"id":"P1","total":10}]"#, Some(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InfeasibleTask(_)));
        assert_eq!(
            err.engine_report().and_then(|r| r.product_id.clone()),
            Some("P1".to_string())
        );
    }

    #[tokio::test]
    async fn test_bad_json_is_invalid_input() {
        let api = PlanApi::new(Arc::new(small_manager()));
        let err = api.generate_plan_from_json("not json", None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
