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

use crate::config::settings::ApiSettings;
use crate::dispatch::traits::{DispatchError, RequestDispatcher};
use crate::domain::models::request::{HttpMethod, RequestDescriptor};
use crate::utils::url_utils;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

/// 业务成功码
const CODE_SUCCESS: i64 = 200;

/// 业务未授权码
const CODE_UNAUTHORIZED: i64 = 401;

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// 请求分发器
///
/// 基于reqwest实现：拼接服务地址、携带令牌、发送请求，
/// 并将HTTP状态和响应中的业务码归一化为 `DispatchError`。
/// 不做重试，也不缓存响应。
pub struct ReqwestDispatcher {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestDispatcher {
    /// 根据接口配置创建分发器
    pub fn new(settings: &ApiSettings) -> Result<Self, DispatchError> {
        // 校验服务地址
        url_utils::join_api_path(&settings.base_url, "/")
            .map_err(|e| DispatchError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = settings.token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| DispatchError::InvalidHeader(format!("authorization: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, settings.base_url.clone()))
    }

    /// 使用已有的reqwest客户端创建分发器
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RequestDispatcher for ReqwestDispatcher {
    /// 执行请求
    ///
    /// # 参数
    ///
    /// * `request` - 请求描述
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 响应体（空响应为 `Null`，非JSON响应为字符串）
    /// * `Err(DispatchError)` - 请求失败、非2xx状态或业务错误
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, DispatchError> {
        let url = url_utils::join_api_path(&self.base_url, &request.url)
            .map_err(|e| DispatchError::InvalidUrl(format!("{}{}: {}", self.base_url, request.url, e)))?;

        let mut builder = self.client.request(request.method.into(), url.clone());
        if let Some(params) = &request.params {
            builder = builder.query(&query_pairs(params)?);
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        debug!(method = %request.method, url = %url, "Dispatching request");
        let start = Instant::now();

        let response = builder.send().await.map_err(|e| {
            warn!(method = %request.method, url = %url, error = %e, "Request failed");
            DispatchError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Non-success HTTP status");
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value = parse_body(body);
        check_business_code(&value)?;
        Ok(value)
    }
}

/// 将查询参数展开为键值对
///
/// 字符串原样输出，数字和布尔使用其JSON文本，数组展开为重复的键，`null` 被忽略
fn query_pairs(params: &Value) -> Result<Vec<(String, String)>, DispatchError> {
    let map = params.as_object().ok_or_else(|| {
        DispatchError::InvalidParams(format!("expected an object, got {}", params))
    })?;

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(key, item)? {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(key, other)? {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(key: &str, value: &Value) -> Result<Option<String>, DispatchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(DispatchError::InvalidParams(format!(
            "nested value for key '{}' cannot be encoded as a query parameter",
            key
        ))),
    }
}

fn parse_body(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

/// 检查响应中的业务码
///
/// 只有带数字 `code` 字段的对象才会被检查
fn check_business_code(value: &Value) -> Result<(), DispatchError> {
    let Some(code) = value.get("code").and_then(Value::as_i64) else {
        return Ok(());
    };
    let msg = value
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match code {
        CODE_SUCCESS => Ok(()),
        CODE_UNAUTHORIZED => {
            warn!(msg = %msg, "Request unauthorized");
            Err(DispatchError::Unauthorized { msg })
        }
        _ => {
            warn!(code, msg = %msg, "Business error");
            Err(DispatchError::Business { code, msg })
        }
    }
}

#[cfg(test)]
#[path = "reqwest_dispatcher_test.rs"]
mod tests;
