// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{self, WEB_BASE};
use scoutrs::domain::notes::api::NoteApi;
use scoutrs::domain::session::{SessionProbe, SessionStatus};
use scoutrs::infrastructure::search::XhsClient;
use scoutrs::utils::errors::XhsError;
use scoutrs::utils::url_utils::NoteLink;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn link() -> NoteLink {
    NoteLink {
        note_id: "64f1a2b3c4d5e6f708192a3b".to_string(),
        xsec_token: Some("ABtok1=".to_string()),
    }
}

/// 搜索请求体与默认请求头
#[tokio::test]
async fn search_posts_keyword_with_session_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sns/web/v1/search/notes"))
        .and(header("cookie", "a1=test; web_session=abc"))
        .and(header("origin", WEB_BASE))
        .and(body_partial_json(json!({
            "keyword": "露营",
            "page": 1,
            "page_size": 20,
            "sort": "general",
            "note_type": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    let body = client.search_notes("露营").await.unwrap();

    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let search_id = sent["search_id"].as_str().unwrap();
    assert_eq!(search_id.len(), 32);
    assert!(search_id.chars().all(|c| c.is_ascii_hexdigit()));
}

/// 详情请求携带笔记 ID 和令牌
#[tokio::test]
async fn note_detail_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sns/web/v1/feed"))
        .and(body_partial_json(json!({
            "source_note_id": "64f1a2b3c4d5e6f708192a3b",
            "xsec_source": "pc_search",
            "xsec_token": "ABtok1=",
            "image_formats": ["jpg", "webp", "avif"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::detail_body("作者", "正文")))
        .expect(1)
        .mount(&server)
        .await;

    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    let body = client.note_detail(&link()).await.unwrap();

    assert_eq!(body["data"]["items"][0]["note_card"]["desc"], "正文");
}

/// 评论请求参数
#[tokio::test]
async fn note_comments_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sns/web/v2/comment/page"))
        .and(query_param("note_id", "64f1a2b3c4d5e6f708192a3b"))
        .and(query_param("cursor", ""))
        .and(query_param("top_comment_id", ""))
        .and(query_param("image_formats", "jpg,webp,avif"))
        .and(query_param("xsec_token", "ABtok1="))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::comments_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    let body = client.note_comments(&link()).await.unwrap();

    assert_eq!(body["data"]["comments"].as_array().unwrap().len(), 2);
}

/// 非 2xx 状态仍按 JSON 解析
#[tokio::test]
async fn error_status_with_json_body_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sns/web/v1/search/notes"))
        .respond_with(ResponseTemplate::new(461).set_body_json(helpers::empty_body()))
        .mount(&server)
        .await;

    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    let body = client.search_notes("露营").await.unwrap();

    assert_eq!(body["code"], -100);
}

/// 非 JSON 响应是解析错误
#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sns/web/v1/search/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .mount(&server)
        .await;

    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    let err = client.search_notes("露营").await.unwrap_err();

    assert!(matches!(err, XhsError::Decode(_)));
    assert!(err.to_string().starts_with("JSON解析错误"));
}

/// 会话探测的三种结果
#[tokio::test]
async fn probe_reports_session_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sns/web/v2/user/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"nickname": "me"}})),
        )
        .mount(&server)
        .await;
    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    assert_eq!(client.probe().await, SessionStatus::Valid);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sns/web/v2/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::empty_body()))
        .mount(&server)
        .await;
    // 只看 `data` 键是否存在
    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    assert_eq!(client.probe().await, SessionStatus::Valid);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sns/web/v2/user/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": -100, "success": false})),
        )
        .mount(&server)
        .await;
    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    assert_eq!(client.probe().await, SessionStatus::Invalid);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sns/web/v2/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;
    let client = XhsClient::new(&helpers::xhs_settings(&server.uri())).unwrap();
    assert_eq!(client.probe().await, SessionStatus::Valid);

    let client = XhsClient::new(&helpers::xhs_settings("http://127.0.0.1:1")).unwrap();
    match client.probe().await {
        SessionStatus::Unknown(reason) => assert!(reason.starts_with("请求错误: ")),
        other => panic!("expected unknown session, got {:?}", other),
    }
}
