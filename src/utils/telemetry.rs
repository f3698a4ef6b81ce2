// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// 日志写入标准错误，标准输出留给命令的结果。已有全局订阅者时保留原订阅者。
pub fn init_telemetry() {
    if let Err(e) = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,spider_task_client=debug,spiderctl=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        tracing::debug!(error = %e, "Tracing subscriber already initialized");
    }
}
