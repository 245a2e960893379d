//! 应用配置
//!
//! 浏览器里没有运行时环境变量，配置在构建时通过 `option_env!` 注入
//! （例如 `JOBTRACK_API_URL=https://api.example.com trunk build`）。
//! 每一项都有默认值，缺失或非法时记录日志并回退。

use jobtrack_shared::DEFAULT_SESSION_COOKIE;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{Level, info, warn};

pub const ENV_API_URL: &str = "JOBTRACK_API_URL";
pub const ENV_SESSION_COOKIE: &str = "JOBTRACK_SESSION_COOKIE";
pub const ENV_CONFIRM_DELETE: &str = "JOBTRACK_CONFIRM_DELETE";
pub const ENV_SESSION_RECHECK_SECS: &str = "JOBTRACK_SESSION_RECHECK_SECS";
pub const ENV_LOG_LEVEL: &str = "JOBTRACK_LOG_LEVEL";

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_CONFIRM_DELETE: bool = true;
const DEFAULT_SESSION_RECHECK_SECS: u32 = 300;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// 构建时注入的环境变量
fn build_env(key: &str) -> Option<&'static str> {
    match key {
        ENV_API_URL => option_env!("JOBTRACK_API_URL"),
        ENV_SESSION_COOKIE => option_env!("JOBTRACK_SESSION_COOKIE"),
        ENV_CONFIRM_DELETE => option_env!("JOBTRACK_CONFIRM_DELETE"),
        ENV_SESSION_RECHECK_SECS => option_env!("JOBTRACK_SESSION_RECHECK_SECS"),
        ENV_LOG_LEVEL => option_env!("JOBTRACK_LOG_LEVEL"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API 根地址（不含结尾的 `/`）
    pub api_base_url: String,
    /// 会话 Cookie 名称
    pub session_cookie: String,
    /// 删除前是否弹出确认框
    pub confirm_before_delete: bool,
    /// 会话重新校验的间隔（秒），0 表示关闭
    pub session_recheck_secs: u32,
}

impl AppConfig {
    /// 读取构建时配置
    pub fn load() -> Self {
        Self::from_lookup(build_env)
    }

    /// 日志级别单独读取：日志系统要在其余配置之前初始化
    pub fn log_level() -> Level {
        try_load(&build_env, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL)
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let api_base_url: String = try_load(&lookup, ENV_API_URL, DEFAULT_API_URL.to_string());
        let session_cookie: String =
            try_load(&lookup, ENV_SESSION_COOKIE, DEFAULT_SESSION_COOKIE.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_cookie,
            confirm_before_delete: try_load(&lookup, ENV_CONFIRM_DELETE, DEFAULT_CONFIRM_DELETE),
            session_recheck_secs: try_load(
                &lookup,
                ENV_SESSION_RECHECK_SECS,
                DEFAULT_SESSION_RECHECK_SECS,
            ),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn try_load<'a, T>(lookup: &impl Fn(&str) -> Option<&'a str>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let raw = lookup(key).map(str::trim).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let map: HashMap<&str, &'static str> = pairs.iter().copied().collect();
        AppConfig::from_lookup(|key| map.get(key).copied())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base_url, "http://localhost:5000");
        assert_eq!(cfg.session_cookie, "jwt");
        assert!(cfg.confirm_before_delete);
        assert_eq!(cfg.session_recheck_secs, 300);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            (ENV_API_URL, "https://jobs.example.com/"),
            (ENV_SESSION_COOKIE, "sid"),
            (ENV_CONFIRM_DELETE, "false"),
            (ENV_SESSION_RECHECK_SECS, "0"),
        ]);
        assert_eq!(cfg.api_base_url, "https://jobs.example.com");
        assert_eq!(cfg.session_cookie, "sid");
        assert!(!cfg.confirm_before_delete);
        assert_eq!(cfg.session_recheck_secs, 0);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config_from(&[
            (ENV_CONFIRM_DELETE, "sometimes"),
            (ENV_SESSION_RECHECK_SECS, "-5"),
            (ENV_SESSION_COOKIE, "   "),
        ]);
        assert!(cfg.confirm_before_delete);
        assert_eq!(cfg.session_recheck_secs, 300);
        assert_eq!(cfg.session_cookie, "jwt");
    }

    #[test]
    fn typed_defaults_are_returned_unchanged() {
        let unset = |_: &str| -> Option<&'static str> { None };
        let secs: u32 = try_load(&unset, ENV_SESSION_RECHECK_SECS, 42);
        assert_eq!(secs, 42);

        let garbage = |_: &str| -> Option<&'static str> { Some("not-a-bool") };
        let confirm: bool = try_load(&garbage, ENV_CONFIRM_DELETE, false);
        assert!(!confirm);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let lookup = |key: &str| (key == ENV_LOG_LEVEL).then_some("DEBUG");
        let level: Level = try_load(&lookup, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
        assert_eq!(level, Level::DEBUG);

        let unset = |_: &str| -> Option<&'static str> { None };
        let level: Level = try_load(&unset, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
        assert_eq!(level, Level::INFO);
    }
}
