// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认服务地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9099";

/// 默认请求超时时间（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 远程接口配置
    pub api: ApiSettings,
}

/// 远程接口配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// 服务根地址，可以带路径前缀（如 `http://host/dev-api`）
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 访问令牌，配置后以 Bearer 方式携带
    pub token: Option<String>,
    /// User-Agent
    pub user_agent: String,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
            user_agent: default_user_agent().to_string(),
        }
    }
}

fn default_user_agent() -> &'static str {
    concat!("spider-task-client/", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 加载配置，可额外指定一个必须存在的配置文件
    ///
    /// 优先级从低到高：默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 指定文件、`SPIDER_CLIENT__` 前缀的环境变量
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("api.user_agent", default_user_agent())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("SPIDER_CLIENT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
