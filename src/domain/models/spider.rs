// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 采集任务
///
/// 新增、修改接口使用的请求体。字段名与管理端保持一致（camelCase），
/// 客户端不对字段做任何校验，原样交给服务端处理。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderTask {
    /// 任务ID，新增时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 任务名称（网站名称），兼容历史字段 taskName；为空时不序列化，避免部分更新清空名称
    #[serde(
        rename = "siteName",
        alias = "taskName",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub task_name: String,
    /// 栏目名称
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// 域名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// 主域名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_host: Option<String>,
    /// 配置人，由服务端按当前登录用户填充
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_user: Option<String>,
    /// 更新时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// 采集启动时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_start_at: Option<String>,
    /// 任务状态
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 任务配置（JSON 文本）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

/// 采集任务分页查询条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderPageQuery {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_user: Option<String>,
    /// 更新时间范围（开始）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    /// 更新时间范围（结束）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl Default for SpiderPageQuery {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 10,
            id: None,
            site_name: None,
            column_name: None,
            domain: None,
            status: None,
            config_user: None,
            begin_time: None,
            end_time: None,
        }
    }
}

/// 爬虫配置测试请求
///
/// 服务端使用 `config_data` 抓取 `test_url` 并返回抽取结果，不会修改任务本身。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderConfigTest {
    pub task_id: i64,
    pub test_url: String,
    pub config_data: Map<String, Value>,
}

/// 爬虫配置测试结果
///
/// 测试配置接口响应中 `data` 字段的结构，供调用方自行解析
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderConfigTestResult {
    pub success: bool,
    pub message: String,
    /// 按配置抽取到的数据
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    /// 执行耗时（秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}
