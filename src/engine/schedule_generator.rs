// ==========================================
// ABC 排单系统 - 排期生成器
// ==========================================
// 状态机: Idle → Validating → Planning(day) → Allocating(day, task, unit) → Complete
//         Validating / Allocating 可进入 Aborted(reason)
// 遍历顺序: 天 → 任务（整次运行固定的乱序顺序）→ 当日配额内每一单
// 红线: 单线程顺序执行；致命错误丢弃全部状态，不返回部分结果
// ==========================================

use crate::config::planner_config::{PlanRequest, PlannerConfig};
use crate::domain::assignment::{AssignmentRecord, BackupDegraded, DaySchedule, PlanOutcome, Schedule};
use crate::domain::task::ProductTask;
use crate::domain::types::{AccountId, BackupSlot};
use crate::engine::backup_resolver::{BackupResolution, BackupResolver};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::primary_allocator::PrimaryAllocator;
use crate::engine::state::{AllocationHistory, DailyLoad};
use crate::engine::task_planner::TaskPlanner;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// GeneratorPhase - 生成器状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorPhase {
    Idle,
    Validating,
    Planning { day_index: usize },
    Allocating { day_index: usize, task_index: usize, unit: u32 },
    Complete,
    Aborted(String),
}

impl GeneratorPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GeneratorPhase::Complete | GeneratorPhase::Aborted(_))
    }
}

impl fmt::Display for GeneratorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorPhase::Idle => write!(f, "IDLE"),
            GeneratorPhase::Validating => write!(f, "VALIDATING"),
            GeneratorPhase::Planning { day_index } => write!(f, "PLANNING({})", day_index),
            GeneratorPhase::Allocating {
                day_index,
                task_index,
                unit,
            } => write!(f, "ALLOCATING({}, {}, {})", day_index, task_index, unit),
            GeneratorPhase::Complete => write!(f, "COMPLETE"),
            GeneratorPhase::Aborted(reason) => write!(f, "ABORTED({})", reason),
        }
    }
}

// ==========================================
// ScheduleGenerator - 排期生成器
// ==========================================
pub struct ScheduleGenerator<R: Rng = StdRng> {
    config: PlannerConfig,
    planner: TaskPlanner,
    rng: R,
    seed: u64,
    phase: GeneratorPhase,
}

impl ScheduleGenerator<StdRng> {
    /// 使用配置中的种子；未配置时从系统熵取一个并记录到结果中
    pub fn new(config: PlannerConfig) -> Self {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        Self::with_rng(config, rng, seed)
    }
}

impl<R: Rng> ScheduleGenerator<R> {
    /// 注入随机源（`seed` 仅用于结果记录）
    pub fn with_rng(config: PlannerConfig, rng: R, seed: u64) -> Self {
        Self {
            config,
            planner: TaskPlanner::new(),
            rng,
            seed,
            phase: GeneratorPhase::Idle,
        }
    }

    pub fn phase(&self) -> &GeneratorPhase {
        &self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn transition(&mut self, next: GeneratorPhase) {
        debug!(from = %self.phase, to = %next, "生成器状态切换");
        self.phase = next;
    }

    fn abort(&mut self, err: EngineError) -> EngineError {
        error!(
            kind = ?err.kind(),
            day = ?err.day().map(|d| d.to_string()),
            product_id = ?err.product_id(),
            "排期终止: {}",
            err
        );
        self.phase = GeneratorPhase::Aborted(err.to_string());
        err
    }

    /// 执行一次完整排期
    ///
    /// 历史记录与当日负载在此处新建，仅存活于本次调用
    #[instrument(skip(self, tasks), fields(
        task_count = tasks.len(),
        period_len = self.config.period.len(),
        seed = self.seed
    ))]
    pub fn run(&mut self, tasks: &[ProductTask]) -> EngineResult<PlanOutcome> {
        let config = self.config.clone();

        // ===== 校验 =====
        self.transition(GeneratorPhase::Validating);
        if let Err(e) = config.validate() {
            return Err(self.abort(e.into()));
        }
        let mut planned = match self
            .planner
            .validate(tasks, &config.primary_pool, config.period.len())
        {
            Ok(planned) => planned,
            Err(e) => return Err(self.abort(e)),
        };
        self.planner.shuffle(&mut planned, &mut self.rng);

        info!(
            primary_pool = config.primary_pool.len(),
            backup_pool = config.backup_pool.len(),
            backup_mode = %config.backup_mode,
            "开始生成排期"
        );

        let primary = PrimaryAllocator::new(config.primary_pool);
        let backup = BackupResolver::new(&config.primary_pool, config.backup_pool, config.backup_mode);

        let mut history = AllocationHistory::new();
        let mut load = DailyLoad::new();
        let mut days = Vec::with_capacity(config.period.len());
        let mut warnings = Vec::new();

        // ===== 按天分配 =====
        for (day_index, day) in config.period.iter().enumerate() {
            self.transition(GeneratorPhase::Planning { day_index });
            load.reset();
            let mut assignments = Vec::new();

            for (task_index, task) in planned.iter().enumerate() {
                let quota = task.quota_for(day_index);

                for unit in 0..quota {
                    self.phase = GeneratorPhase::Allocating {
                        day_index,
                        task_index,
                        unit,
                    };

                    let primary_account = match primary.allocate(
                        day,
                        &task.product_id,
                        &mut history,
                        &mut load,
                        &mut self.rng,
                    ) {
                        Ok(account) => account,
                        Err(e) => return Err(self.abort(e)),
                    };

                    let resolution = backup.resolve(primary_account, &task.product_id, &mut history);
                    let forced_reuse = resolution.forced_slots();
                    for &slot in &forced_reuse {
                        warnings.push(BackupDegraded {
                            day: day.clone(),
                            product_id: task.product_id.clone(),
                            primary_account,
                            slot,
                            reused_account: reused_account(&resolution, slot),
                        });
                    }

                    assignments.push(AssignmentRecord {
                        product_id: task.product_id.clone(),
                        total_quantity: task.total,
                        primary_account,
                        backup_account_1: resolution.first.account,
                        backup_account_2: resolution.second.map(|p| p.account),
                        forced_reuse,
                    });
                }
            }

            debug!(day = %day, assignments = assignments.len(), "当日分配完成");
            days.push(DaySchedule {
                day: day.clone(),
                assignments,
            });
        }

        self.transition(GeneratorPhase::Complete);

        let outcome = PlanOutcome {
            run_id: uuid::Uuid::new_v4().to_string(),
            seed: self.seed,
            schedule: Schedule { days },
            warnings,
        };

        if outcome.has_warnings() {
            warn!(degraded = outcome.warnings.len(), "排期完成，存在替补被迫复用");
        }
        info!(
            run_id = %outcome.run_id,
            assignments = outcome.schedule.total_assignments(),
            "排期生成完成"
        );
        Ok(outcome)
    }
}

fn reused_account(resolution: &BackupResolution, slot: BackupSlot) -> AccountId {
    match slot {
        BackupSlot::First => resolution.first.account,
        BackupSlot::Second => resolution
            .second
            .map_or(resolution.first.account, |p| p.account),
    }
}

/// 引擎入口: `plan(config) -> schedule | error`
pub fn plan(request: &PlanRequest) -> EngineResult<PlanOutcome> {
    ScheduleGenerator::new(request.config.clone()).run(&request.tasks)
}
