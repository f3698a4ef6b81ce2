// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// HTTP 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求描述
///
/// 对一次远程调用的声明式描述：目标路径、HTTP 方法、可选的查询参数以及可选的请求体。
/// 描述本身不包含服务地址，由分发器负责解析为完整 URL。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    /// 相对于服务根地址的路径
    pub url: String,
    /// HTTP 方法
    pub method: HttpMethod,
    /// 查询参数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// 请求体
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            params: None,
            data: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.method.as_str().to_uppercase(), self.url)
    }
}

/// 任务标识
///
/// 远程服务使用数字主键，但调用方也可以传入字符串形式的标识。
/// 标识在拼接进路径时会作为单个路径段进行百分号编码。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 编码为单个路径段
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! task_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TaskId {
                fn from(id: $t) -> Self {
                    TaskId(id.to_string())
                }
            }
        )*
    };
}

task_id_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId(id)
    }
}

impl From<&String> for TaskId {
    fn from(id: &String) -> Self {
        TaskId(id.clone())
    }
}
