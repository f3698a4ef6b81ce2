// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 客户端经由reqwest分发器访问模拟服务的端到端测试

use serde_json::json;
use spider_task_client::config::settings::ApiSettings;
use spider_task_client::domain::models::spider::{
    SpiderConfigTest, SpiderConfigTestResult, SpiderPageQuery, SpiderTask,
};
use spider_task_client::{DispatchError, ReqwestDispatcher, SpiderTaskClient};
use std::sync::Arc;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/dev-api";

async fn setup() -> (MockServer, SpiderTaskClient) {
    let server = MockServer::start().await;
    let settings = ApiSettings {
        base_url: format!("{}{}", server.uri(), PREFIX),
        timeout_secs: 5,
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    let dispatcher = ReqwestDispatcher::new(&settings).expect("dispatcher");
    (server, SpiderTaskClient::new(Arc::new(dispatcher)))
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn test_list_spiders() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/dev-api/crawl/spider/list"))
        .and(query_param("pageNum", "2"))
        .and(query_param("pageSize", "20"))
        .and(query_param("domain", "example.com"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ok(json!({
            "code": 200,
            "msg": "操作成功",
            "rows": [{"id": 1, "siteName": "示例站"}],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = SpiderPageQuery {
        page_num: 2,
        page_size: 20,
        domain: Some("example.com".to_string()),
        ..Default::default()
    };
    let response = client.list_spiders(&query).await.unwrap();

    assert_eq!(response["total"], 1);
    assert_eq!(response["rows"][0]["siteName"], "示例站");
}

#[tokio::test]
async fn test_create_and_update_spider() {
    let (server, client) = setup().await;
    let task = SpiderTask {
        task_name: "新闻站".to_string(),
        domain: Some("news.example.com".to_string()),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/dev-api/crawl/spider"))
        .and(body_json(json!({"siteName": "新闻站", "domain": "news.example.com"})))
        .respond_with(ok(json!({"code": 200, "msg": "新增成功", "id": 12})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/dev-api/crawl/spider"))
        .and(body_json(
            json!({"id": 12, "siteName": "新闻站", "domain": "news.example.com"}),
        ))
        .respond_with(ok(json!({"code": 200, "msg": "修改成功"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_spider(&task).await.unwrap();
    assert_eq!(created["id"], 12);

    let updated = SpiderTask {
        id: Some(12),
        ..task
    };
    let response = client.update_spider(&updated).await.unwrap();
    assert_eq!(response["msg"], "修改成功");
}

#[tokio::test]
async fn test_task_lifecycle_operations() {
    let (server, client) = setup().await;
    for (verb, route, msg) in [
        ("PUT", "/dev-api/crawl/spider/start/12", "启动成功"),
        ("PUT", "/dev-api/crawl/spider/stop/12", "停止成功"),
        ("DELETE", "/dev-api/crawl/spider/12", "删除成功"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ok(json!({"code": 200, "msg": msg})))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(client.start_spider(12).await.unwrap()["msg"], "启动成功");
    assert_eq!(client.stop_spider(12).await.unwrap()["msg"], "停止成功");
    assert_eq!(client.delete_spider(12).await.unwrap()["msg"], "删除成功");
}

#[tokio::test]
async fn test_save_config_and_detail() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/dev-api/crawl/spider/save-config/7"))
        .and(body_json(json!({"depth": 3})))
        .respond_with(ok(json!({"code": 200, "msg": "配置保存成功"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dev-api/crawl/spider/7"))
        .respond_with(ok(json!({
            "code": 200,
            "data": {"id": 7, "status": "stopped", "config": "{\"depth\":3}"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .save_spider_config(7, &json!({"depth": 3}))
        .await
        .unwrap();
    let detail = client.get_spider_detail(7).await.unwrap();

    assert_eq!(detail["data"]["status"], "stopped");
}

#[tokio::test]
async fn test_spider_config_test() {
    let (server, client) = setup().await;
    let mut config_data = serde_json::Map::new();
    config_data.insert("titleSelector".to_string(), json!("h1"));
    let payload = SpiderConfigTest {
        task_id: 7,
        test_url: "https://news.example.com/a.html".to_string(),
        config_data,
    };

    Mock::given(method("POST"))
        .and(path("/dev-api/crawl/spider/test-config"))
        .and(body_json(json!({
            "taskId": 7,
            "testUrl": "https://news.example.com/a.html",
            "configData": {"titleSelector": "h1"}
        })))
        .respond_with(ok(json!({
            "code": 200,
            "data": {"success": true, "message": "配置测试成功", "extractedData": {"title": "标题"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.test_spider_config(&payload).await.unwrap();
    let result: SpiderConfigTestResult =
        serde_json::from_value(response["data"].clone()).unwrap();

    assert!(result.success);
    assert_eq!(result.message, "配置测试成功");
    assert_eq!(result.extracted_data.unwrap()["title"], "标题");
}

#[tokio::test]
async fn test_partial_update_keeps_task_name_off_the_wire() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/dev-api/crawl/spider"))
        .and(body_json(json!({"id": 3, "status": "stopped"})))
        .respond_with(ok(json!({"code": 200, "msg": "修改成功"})))
        .expect(1)
        .mount(&server)
        .await;

    let partial = SpiderTask {
        id: Some(3),
        status: Some("stopped".to_string()),
        ..Default::default()
    };
    client.update_spider(&partial).await.unwrap();
}

#[tokio::test]
async fn test_dot_ids_send_no_request() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ok(json!({"code": 200})))
        .expect(0)
        .mount(&server)
        .await;

    for id in ["", ".", ".."] {
        assert!(matches!(
            client.stop_spider(id).await,
            Err(DispatchError::InvalidUrl(_))
        ));
        assert!(matches!(
            client.delete_spider(id).await,
            Err(DispatchError::InvalidUrl(_))
        ));
    }
}

#[tokio::test]
async fn test_missing_task_surfaces_business_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/dev-api/crawl/spider/404"))
        .respond_with(ok(json!({"code": 500, "msg": "任务不存在"})))
        .mount(&server)
        .await;

    let result = client.get_spider_detail(404).await;
    assert!(matches!(
        result,
        Err(DispatchError::Business { code: 500, ref msg }) if msg == "任务不存在"
    ));
}

#[tokio::test]
async fn test_unreachable_server_surfaces_request_error() {
    let server = MockServer::start().await;
    let settings = ApiSettings {
        base_url: server.uri(),
        timeout_secs: 2,
        ..Default::default()
    };
    drop(server);

    let client = SpiderTaskClient::new(Arc::new(ReqwestDispatcher::new(&settings).unwrap()));
    let result = client.start_spider(1).await;

    assert!(matches!(result, Err(DispatchError::RequestFailed(_))));
}
