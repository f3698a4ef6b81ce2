// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::request::RequestDescriptor;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// 分发错误类型
#[derive(Error, Debug)]
pub enum DispatchError {
    /// 无法拼接出合法的请求地址
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    /// 查询参数无法展开为键值对
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    /// 请求头取值非法
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    /// 请求体或查询参数序列化失败
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 请求失败（连接、超时、解码等）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 的 HTTP 状态
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 服务端返回未授权
    #[error("Unauthorized: {msg}")]
    Unauthorized { msg: String },
    /// 服务端返回的业务错误码
    #[error("Business error {code}: {msg}")]
    Business { code: i64, msg: String },
}

/// 请求分发器特质
///
/// 负责执行请求描述并返回远程响应。客户端层不关心响应的结构，
/// 认证、超时和错误归一化都由分发器实现决定。
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// 执行请求
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, DispatchError>;
}
