// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 采集任务接口表
//!
//! 每个函数把调用参数映射为一个请求描述，不做任何 I/O。
//!
//! | 操作 | 路径 | 方法 | 参数位置 |
//! |---|---|---|---|
//! | 列表 | `/crawl/spider/list` | GET | 查询参数 |
//! | 新增 | `/crawl/spider` | POST | 请求体 |
//! | 修改 | `/crawl/spider` | PUT | 请求体 |
//! | 删除 | `/crawl/spider/{id}` | DELETE | 路径 |
//! | 启动 | `/crawl/spider/start/{id}` | PUT | 路径 |
//! | 停止 | `/crawl/spider/stop/{id}` | PUT | 路径 |
//! | 保存配置 | `/crawl/spider/save-config/{id}` | PUT | 路径 + 请求体 |
//! | 详情 | `/crawl/spider/{id}` | GET | 路径 |
//! | 测试配置 | `/crawl/spider/test-config` | POST | 请求体 |

use crate::dispatch::traits::DispatchError;
use crate::domain::models::request::{HttpMethod, RequestDescriptor, TaskId};
use serde::Serialize;
use serde_json::Value;

pub const SPIDER_PATH: &str = "/crawl/spider";

fn spider_path(suffix: &str) -> String {
    format!("{}/{}", SPIDER_PATH, suffix)
}

/// 把任务标识编码为路径段
///
/// 空串、`.` 和 `..` 会在URL规范化时被折叠，从而指向其他接口，直接拒绝
fn id_segment(id: impl Into<TaskId>) -> Result<String, DispatchError> {
    let id = id.into();
    match id.as_str() {
        "" | "." | ".." => Err(DispatchError::InvalidUrl(format!(
            "task id '{}' cannot be used as a path segment",
            id
        ))),
        _ => Ok(id.to_path_segment()),
    }
}

/// 查询采集任务列表
///
/// 查询条件原样放入查询参数；序列化结果为 `null` 时不携带查询参数
pub fn list<Q>(query: &Q) -> Result<RequestDescriptor, DispatchError>
where
    Q: Serialize + ?Sized,
{
    let descriptor = RequestDescriptor::new(spider_path("list"), HttpMethod::Get);
    Ok(match serde_json::to_value(query)? {
        Value::Null => descriptor,
        params => descriptor.with_params(params),
    })
}

/// 新增采集任务
pub fn create<T>(task: &T) -> Result<RequestDescriptor, DispatchError>
where
    T: Serialize + ?Sized,
{
    Ok(RequestDescriptor::new(SPIDER_PATH, HttpMethod::Post).with_data(serde_json::to_value(task)?))
}

/// 修改采集任务
pub fn update<T>(task: &T) -> Result<RequestDescriptor, DispatchError>
where
    T: Serialize + ?Sized,
{
    Ok(RequestDescriptor::new(SPIDER_PATH, HttpMethod::Put).with_data(serde_json::to_value(task)?))
}

/// 删除采集任务
pub fn delete(id: impl Into<TaskId>) -> Result<RequestDescriptor, DispatchError> {
    Ok(RequestDescriptor::new(spider_path(&id_segment(id)?), HttpMethod::Delete))
}

/// 启动采集任务
pub fn start(id: impl Into<TaskId>) -> Result<RequestDescriptor, DispatchError> {
    Ok(RequestDescriptor::new(
        spider_path(&format!("start/{}", id_segment(id)?)),
        HttpMethod::Put,
    ))
}

/// 停止采集任务
pub fn stop(id: impl Into<TaskId>) -> Result<RequestDescriptor, DispatchError> {
    Ok(RequestDescriptor::new(
        spider_path(&format!("stop/{}", id_segment(id)?)),
        HttpMethod::Put,
    ))
}

/// 保存采集任务配置
pub fn save_config<C>(id: impl Into<TaskId>, config: &C) -> Result<RequestDescriptor, DispatchError>
where
    C: Serialize + ?Sized,
{
    Ok(RequestDescriptor::new(
        spider_path(&format!("save-config/{}", id_segment(id)?)),
        HttpMethod::Put,
    )
    .with_data(serde_json::to_value(config)?))
}

/// 获取采集任务详情
pub fn detail(id: impl Into<TaskId>) -> Result<RequestDescriptor, DispatchError> {
    Ok(RequestDescriptor::new(spider_path(&id_segment(id)?), HttpMethod::Get))
}

/// 测试爬虫配置
pub fn test_config<C>(config: &C) -> Result<RequestDescriptor, DispatchError>
where
    C: Serialize + ?Sized,
{
    Ok(RequestDescriptor::new(spider_path("test-config"), HttpMethod::Post)
        .with_data(serde_json::to_value(config)?))
}
