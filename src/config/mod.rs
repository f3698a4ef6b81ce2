// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理客户端的配置设置，包括服务地址、超时和访问令牌
pub mod settings;
