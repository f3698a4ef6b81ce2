// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::client::endpoints;
use crate::dispatch::traits::{DispatchError, RequestDispatcher};
use crate::domain::models::request::TaskId;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// 采集任务客户端
///
/// 每个方法对应远程服务的一个接口：构造请求描述后交给分发器执行，
/// 分发器的返回值和错误都原样交还调用方。客户端本身不持有任何状态。
#[derive(Clone)]
pub struct SpiderTaskClient {
    dispatcher: Arc<dyn RequestDispatcher>,
}

impl SpiderTaskClient {
    pub fn new(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// 查询采集任务列表
    pub async fn list_spiders<Q>(&self, query: &Q) -> Result<Value, DispatchError>
    where
        Q: Serialize + ?Sized,
    {
        self.dispatcher.dispatch(endpoints::list(query)?).await
    }

    /// 新增采集任务
    pub async fn create_spider<T>(&self, task: &T) -> Result<Value, DispatchError>
    where
        T: Serialize + ?Sized,
    {
        self.dispatcher.dispatch(endpoints::create(task)?).await
    }

    /// 修改采集任务
    pub async fn update_spider<T>(&self, task: &T) -> Result<Value, DispatchError>
    where
        T: Serialize + ?Sized,
    {
        self.dispatcher.dispatch(endpoints::update(task)?).await
    }

    /// 删除采集任务
    pub async fn delete_spider(&self, id: impl Into<TaskId>) -> Result<Value, DispatchError> {
        self.dispatcher.dispatch(endpoints::delete(id)?).await
    }

    /// 启动采集任务
    pub async fn start_spider(&self, id: impl Into<TaskId>) -> Result<Value, DispatchError> {
        self.dispatcher.dispatch(endpoints::start(id)?).await
    }

    /// 停止采集任务
    pub async fn stop_spider(&self, id: impl Into<TaskId>) -> Result<Value, DispatchError> {
        self.dispatcher.dispatch(endpoints::stop(id)?).await
    }

    /// 保存采集任务配置
    pub async fn save_spider_config<C>(
        &self,
        id: impl Into<TaskId>,
        config: &C,
    ) -> Result<Value, DispatchError>
    where
        C: Serialize + ?Sized,
    {
        self.dispatcher
            .dispatch(endpoints::save_config(id, config)?)
            .await
    }

    /// 获取采集任务详情
    pub async fn get_spider_detail(&self, id: impl Into<TaskId>) -> Result<Value, DispatchError> {
        self.dispatcher.dispatch(endpoints::detail(id)?).await
    }

    /// 测试爬虫配置
    pub async fn test_spider_config<C>(&self, config: &C) -> Result<Value, DispatchError>
    where
        C: Serialize + ?Sized,
    {
        self.dispatcher.dispatch(endpoints::test_config(config)?).await
    }
}

#[cfg(test)]
#[path = "spider_client_test.rs"]
mod tests;
