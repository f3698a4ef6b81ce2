// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求描述与任务标识
pub mod request;

/// 采集任务相关的请求体模型
pub mod spider;
