// ==========================================
// ABC 排单系统 - 多语言文案
// ==========================================
// 文案文件: locales/zh-CN.yml, locales/en.yml
// 覆盖: 默认周期的星期标签、命令行提示
// 语言为进程级全局状态，排期前确定
// ==========================================

/// 已提供文案的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 选择语言的环境变量
pub const LOCALE_ENV: &str = "ABC_DISPATCH_LANG";

const WEEKDAY_KEYS: [&str; 6] = [
    "period.weekday.mon",
    "period.weekday.tue",
    "period.weekday.wed",
    "period.weekday.thu",
    "period.weekday.fri",
    "period.weekday.sat",
];

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换语言；不支持的语言保持原设置并返回 false
pub fn set_locale(locale: &str) -> bool {
    match SUPPORTED_LOCALES.iter().find(|l| l.eq_ignore_ascii_case(locale.trim())) {
        Some(supported) => {
            rust_i18n::set_locale(supported);
            true
        }
        None => false,
    }
}

/// 按 ABC_DISPATCH_LANG 设置语言（未设置或不支持时沿用 zh-CN）
pub fn init_from_env() {
    if let Ok(lang) = std::env::var(LOCALE_ENV) {
        if !set_locale(&lang) {
            tracing::warn!(lang = %lang, "不支持的语言，沿用默认 zh-CN");
        }
    }
}

/// 周一至周六标签（默认周期的日期标记）
pub fn weekday_labels() -> Vec<String> {
    WEEKDAY_KEYS.iter().map(|key| t(key)).collect()
}

pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译并替换 `%{name}` 占位符
///
/// ```no_run
/// use abc_dispatch::i18n::t_with_args;
/// let msg = t_with_args("cli.read_failed", &[("path", "/tmp/tasks.json")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |text, (name, value)| {
        text.replace(&format!("%{{{}}}", name), value)
    })
}
