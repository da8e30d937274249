// ==========================================
// ABC 排单系统 - 命令行入口
// ==========================================
// 用法:
//   abc-dispatch <tasks.json> [config.json] [seed]
//
// tasks.json: [{"id": "C001", "total": 12}, ...]
// config.json: 键值配置（见 config::config_keys），缺省时读取默认路径
// stdout 输出排期结果 JSON；日志与告警写 stderr
// ==========================================

use abc_dispatch::config::{default_config_path, ConfigManager};
use abc_dispatch::i18n::t_with_args;
use abc_dispatch::{logging, ApiError, PlanApi, PlanOutcome};
use anyhow::Context;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ConfigManager> {
    let path = match path {
        Some(p) => p,
        None => {
            let default_path = default_config_path();
            if !default_path.exists() {
                tracing::info!(path = %default_path.display(), "未找到配置文件，使用默认配置");
                return Ok(ConfigManager::new());
            }
            default_path
        }
    };

    tracing::info!(path = %path.display(), "加载配置文件");
    ConfigManager::from_file(&path).map_err(|e| anyhow::anyhow!(e.to_string()))
}

fn print_degradations(outcome: &PlanOutcome) {
    for w in &outcome.warnings {
        eprintln!(
            "{}",
            t_with_args(
                "cli.degraded",
                &[
                    ("day", w.day.as_str()),
                    ("product", &w.product_id),
                    ("primary", &w.primary_account.to_string()),
                    ("slot", &w.slot.to_string()),
                    ("account", &w.reused_account.to_string()),
                ],
            )
        );
    }
}

async fn run() -> anyhow::Result<Result<PlanOutcome, ApiError>> {
    let mut args = std::env::args().skip(1);
    let tasks_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => anyhow::bail!("{}", abc_dispatch::i18n::t("cli.usage")),
    };
    let config_path = args.next().map(PathBuf::from);
    let seed = args
        .next()
        .map(|s| s.trim().parse::<u64>())
        .transpose()
        .context("随机种子必须为非负整数")?;

    let tasks_json = std::fs::read_to_string(&tasks_path).with_context(|| {
        t_with_args("cli.read_failed", &[("path", &tasks_path.display().to_string())])
    })?;

    let config = load_config(config_path)?;
    let api = PlanApi::new(Arc::new(config));
    Ok(api.generate_plan_from_json(&tasks_json, seed).await)
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    abc_dispatch::i18n::init_from_env();

    tracing::info!("{} v{}", abc_dispatch::APP_NAME, abc_dispatch::VERSION);

    match run().await {
        Ok(Ok(outcome)) => {
            print_degradations(&outcome);
            match serde_json::to_string_pretty(&outcome) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("结果序列化失败: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            eprintln!(
                "{}",
                t_with_args(
                    "cli.done",
                    &[
                        ("days", &outcome.schedule.day_count().to_string()),
                        ("count", &outcome.schedule.total_assignments().to_string()),
                        ("degraded", &outcome.warnings.len().to_string()),
                    ],
                )
            );
            ExitCode::SUCCESS
        }
        Ok(Err(api_err)) => {
            match api_err.engine_report().map(serde_json::to_string) {
                Some(Ok(report)) => eprintln!("{}", report),
                _ => eprintln!("{}", api_err),
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
