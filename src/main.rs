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

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use spider_task_client::config::settings::Settings;
use spider_task_client::utils::telemetry;
use spider_task_client::{ReqwestDispatcher, SpiderTaskClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// 采集任务管理命令行
#[derive(Debug, Parser)]
#[command(name = "spiderctl", version, about = "Manage crawl spider tasks")]
struct Cli {
    /// 额外加载的配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 覆盖服务根地址
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// 覆盖访问令牌
    #[arg(long, global = true, env = "SPIDERCTL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 查询采集任务列表
    List {
        /// 查询条件（JSON 或 @文件）
        #[arg(long)]
        query: Option<String>,
    },
    /// 新增采集任务
    Create {
        /// 任务内容（JSON 或 @文件）
        #[arg(long)]
        data: String,
    },
    /// 修改采集任务
    Update {
        #[arg(long)]
        data: String,
    },
    /// 删除采集任务
    Delete { id: String },
    /// 启动采集任务
    Start { id: String },
    /// 停止采集任务
    Stop { id: String },
    /// 保存采集任务配置
    SaveConfig {
        id: String,
        #[arg(long)]
        data: String,
    },
    /// 获取采集任务详情
    Detail { id: String },
    /// 测试爬虫配置
    TestConfig {
        #[arg(long)]
        data: String,
    },
}

/// 解析 JSON 参数，以 `@` 开头时从文件读取
fn read_json(arg: &str) -> anyhow::Result<Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text).with_context(|| format!("invalid JSON: {}", text))
}

/// 主函数
///
/// 加载配置、创建客户端并执行子命令，结果以 JSON 输出到标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    if let Some(token) = cli.token {
        settings.api.token = Some(token);
    }
    debug!(base_url = %settings.api.base_url, "Configuration loaded");

    let dispatcher = ReqwestDispatcher::new(&settings.api)?;
    let client = SpiderTaskClient::new(Arc::new(dispatcher));

    let response = match cli.command {
        Command::List { query } => {
            let query = query.as_deref().map(read_json).transpose()?.unwrap_or(Value::Null);
            client.list_spiders(&query).await?
        }
        Command::Create { data } => client.create_spider(&read_json(&data)?).await?,
        Command::Update { data } => client.update_spider(&read_json(&data)?).await?,
        Command::Delete { id } => client.delete_spider(id).await?,
        Command::Start { id } => client.start_spider(id).await?,
        Command::Stop { id } => client.stop_spider(id).await?,
        Command::SaveConfig { id, data } => {
            client.save_spider_config(id, &read_json(&data)?).await?
        }
        Command::Detail { id } => client.get_spider_detail(id).await?,
        Command::TestConfig { data } => client.test_spider_config(&read_json(&data)?).await?,
    };

    info!("Request completed");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
