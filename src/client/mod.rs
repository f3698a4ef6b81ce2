// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 接口表：调用参数到请求描述的映射
pub mod endpoints;

/// 采集任务客户端
pub mod spider_client;

pub use spider_client::SpiderTaskClient;
