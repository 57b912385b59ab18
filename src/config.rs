//! 通知配置 - 启动时从环境变量读取一次，之后只读

use std::path::Path;
use tracing::{debug, warn};

pub const IOS_PUSH_URL: &str = "IOS_PUSH_URL";
pub const IOS_PUSH_KEY: &str = "IOS_PUSH_KEY";
pub const SERVER_CHAN_KEY: &str = "SERVER_CHAN_KEY";
pub const SERVER_CHAN_TURBO_KEY: &str = "SERVER_CHAN_TURBO_KEY";

/// Bark 类推送配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarkConfig {
    /// 完整 URL（https://api.day.app/KEY）或裸 key
    pub url: String,
    /// 当 `url` 不是 http(s) 地址时使用的 key
    pub key: Option<String>,
}

/// 各渠道的启用状态和凭据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifierConfig {
    /// 本地桌面通知（默认启用）
    pub desktop: bool,
    pub bark: Option<BarkConfig>,
    /// Server酱 SendKey
    pub server_chan_key: Option<String>,
    /// Server酱 Turbo SendKey
    pub server_chan_turbo_key: Option<String>,
}

impl NotifierConfig {
    /// 从进程环境变量读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key 查询函数读取（空白值视为未配置）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bark = value(IOS_PUSH_URL).map(|url| BarkConfig {
            url,
            key: value(IOS_PUSH_KEY),
        });

        Self {
            desktop: true,
            bark,
            server_chan_key: value(SERVER_CHAN_KEY),
            server_chan_turbo_key: value(SERVER_CHAN_TURBO_KEY),
        }
    }

    /// 全部渠道关闭
    pub fn disabled() -> Self {
        Self::default()
    }

    /// 关闭本地桌面通知
    pub fn without_desktop(mut self) -> Self {
        self.desktop = false;
        self
    }

    /// 已启用渠道名称（按发送顺序）
    pub fn enabled_transports(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.desktop {
            names.push("desktop");
        }
        if self.bark.is_some() {
            names.push("bark");
        }
        if self.server_chan_key.is_some() {
            names.push("server_chan");
        }
        if self.server_chan_turbo_key.is_some() {
            names.push("server_chan_turbo");
        }
        names
    }
}

/// 加载 dotenv 文件（不会覆盖已存在的环境变量）
///
/// 显式指定的文件不存在时打印警告；默认的 `.env` 不存在则静默跳过。
pub fn load_env_file(explicit: Option<&Path>) {
    match explicit {
        Some(path) => match dotenvy::from_path(path) {
            Ok(()) => debug!(path = %path.display(), "Loaded env file"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to load env file"),
        },
        None => match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => warn!(error = %e, "Failed to load .env"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_only_desktop_by_default() {
        let config = NotifierConfig::from_lookup(lookup(&[]));
        assert!(config.desktop);
        assert_eq!(config.enabled_transports(), vec!["desktop"]);
    }

    #[test]
    fn test_all_transports_enabled_in_order() {
        let config = NotifierConfig::from_lookup(lookup(&[
            (SERVER_CHAN_TURBO_KEY, "SCT-turbo"),
            (SERVER_CHAN_KEY, "SCT-plain"),
            (IOS_PUSH_URL, "https://api.day.app/abc"),
            (IOS_PUSH_KEY, "abc"),
        ]));

        assert_eq!(
            config.enabled_transports(),
            vec!["desktop", "bark", "server_chan", "server_chan_turbo"]
        );
        assert_eq!(
            config.bark,
            Some(BarkConfig {
                url: "https://api.day.app/abc".to_string(),
                key: Some("abc".to_string()),
            })
        );
    }

    #[test]
    fn test_blank_values_disable_transport() {
        let config = NotifierConfig::from_lookup(lookup(&[
            (IOS_PUSH_URL, "   "),
            (IOS_PUSH_KEY, "abc"),
            (SERVER_CHAN_KEY, ""),
        ]));
        assert!(config.bark.is_none());
        assert!(config.server_chan_key.is_none());
    }

    #[test]
    fn test_push_key_alone_does_not_enable_bark() {
        let config = NotifierConfig::from_lookup(lookup(&[(IOS_PUSH_KEY, "abc")]));
        assert!(config.bark.is_none());
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = NotifierConfig::from_lookup(lookup(&[(SERVER_CHAN_KEY, " SCT123 \n")]));
        assert_eq!(config.server_chan_key.as_deref(), Some("SCT123"));
    }

    #[test]
    fn test_disabled_and_without_desktop() {
        assert!(NotifierConfig::disabled().enabled_transports().is_empty());

        let config = NotifierConfig::from_lookup(lookup(&[])).without_desktop();
        assert!(config.enabled_transports().is_empty());
    }
}
