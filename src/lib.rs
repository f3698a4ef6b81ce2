// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// 采集任务接口表以及对应的客户端
pub mod client;

/// 配置模块
///
/// 处理客户端的配置设置和环境变量
pub mod config;

/// 分发模块
///
/// 请求分发器特质及其基于reqwest的实现
pub mod dispatch;

/// 领域模块
///
/// 请求描述、任务标识和请求体模型
pub mod domain;

/// 工具模块
///
/// 提供日志初始化和URL拼接等辅助功能
pub mod utils;

pub use client::SpiderTaskClient;
pub use dispatch::{DispatchError, ReqwestDispatcher, RequestDispatcher};
pub use domain::models::request::{HttpMethod, RequestDescriptor, TaskId};
