// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含Redis连接、演示场景和日志等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Redis配置
    pub redis: RedisSettings,
    /// 演示场景配置
    pub demo: DemoSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// Redis配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    /// Redis连接URL
    pub url: String,
    /// 协议版本 (resp2, resp3)
    pub protocol: String,
}

impl RedisSettings {
    /// 生成最终的连接URL
    ///
    /// 协议为 resp3 时追加 `protocol=resp3` 查询参数
    pub fn connection_url(&self) -> String {
        if !self.protocol.eq_ignore_ascii_case("resp3") || self.url.contains("protocol=") {
            return self.url.clone();
        }

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}protocol=resp3", self.url, separator)
    }
}

/// 演示场景配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    /// 需要运行的场景名称，按顺序执行
    pub scenarios: Vec<String>,
    /// 所有演示键的前缀
    pub key_prefix: String,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 日志格式 (text, json)
    pub format: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次读取默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("redis.url", "redis://127.0.0.1:6379")?
            .set_default("redis.protocol", "resp2")?
            .set_default(
                "demo.scenarios",
                vec!["string", "hash", "list", "set", "zset", "other"],
            )?
            .set_default("demo.key_prefix", "")?
            .set_default("logging.format", "text")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("REDIS_DEMO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("demo.scenarios")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
