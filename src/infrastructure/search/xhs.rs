// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::XhsSettings;
use crate::domain::notes::api::NoteApi;
use crate::domain::session::{SessionProbe, SessionStatus};
use crate::utils::errors::XhsError;
use crate::utils::url_utils::NoteLink;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, ORIGIN, REFERER};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const SEARCH_PATH: &str = "/api/sns/web/v1/search/notes";
const FEED_PATH: &str = "/api/sns/web/v1/feed";
const COMMENTS_PATH: &str = "/api/sns/web/v2/comment/page";
const ME_PATH: &str = "/api/sns/web/v2/user/me";

/// 单次搜索返回的条目数
pub const SEARCH_PAGE_SIZE: u32 = 20;

const IMAGE_FORMATS: [&str; 3] = ["jpg", "webp", "avif"];

/// 小红书网页端接口客户端
///
/// 会话 Cookie 在构造时写入默认请求头，之后不再改变
pub struct XhsClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl XhsClient {
    pub fn new(settings: &XhsSettings) -> Result<Self, XhsError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        let web_base = settings.web_base_url.trim_end_matches('/');
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(web_base)
                .map_err(|e| XhsError::InvalidHeader(format!("origin: {}", e)))?,
        );
        headers.insert(
            REFERER,
            HeaderValue::from_str(&format!("{}/", web_base))
                .map_err(|e| XhsError::InvalidHeader(format!("referer: {}", e)))?,
        );
        if !settings.cookie.is_empty() {
            let mut cookie = HeaderValue::from_str(&settings.cookie)
                .map_err(|e| XhsError::InvalidHeader(format!("cookie: {}", e)))?;
            cookie.set_sensitive(true);
            headers.insert(COOKIE, cookie);
        } else {
            warn!("xhs cookie is not configured, requests will be anonymous");
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, XhsError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, XhsError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    /// 上游在会话失效时仍返回 JSON，因此不按状态码报错
    async fn decode(path: &str, response: reqwest::Response) -> Result<Value, XhsError> {
        let status = response.status();
        let text = response.text().await?;
        debug!(path, status = status.as_u16(), bytes = text.len(), "xhs response");
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl NoteApi for XhsClient {
    async fn search_notes(&self, keyword: &str) -> Result<Value, XhsError> {
        let body = json!({
            "keyword": keyword,
            "page": 1,
            "page_size": SEARCH_PAGE_SIZE,
            "search_id": uuid::Uuid::new_v4().simple().to_string(),
            "sort": "general",
            "note_type": 0,
        });
        self.post_json(SEARCH_PATH, &body).await
    }

    async fn note_detail(&self, link: &NoteLink) -> Result<Value, XhsError> {
        let body = json!({
            "source_note_id": link.note_id,
            "image_formats": IMAGE_FORMATS,
            "extra": { "need_body_topic": "1" },
            "xsec_source": "pc_search",
            "xsec_token": link.token(),
        });
        self.post_json(FEED_PATH, &body).await
    }

    async fn note_comments(&self, link: &NoteLink) -> Result<Value, XhsError> {
        let formats = IMAGE_FORMATS.join(",");
        let query = [
            ("note_id", link.note_id.as_str()),
            ("cursor", ""),
            ("top_comment_id", ""),
            ("image_formats", formats.as_str()),
            ("xsec_token", link.token()),
        ];
        self.get_json(COMMENTS_PATH, &query).await
    }

    async fn current_user(&self) -> Result<Value, XhsError> {
        self.get_json(ME_PATH, &[]).await
    }
}

#[async_trait]
impl SessionProbe for XhsClient {
    async fn probe(&self) -> SessionStatus {
        match self.current_user().await {
            Ok(body) => session_status(&body),
            Err(e) => {
                warn!(error = %e, "session probe failed");
                SessionStatus::Unknown(e.to_string())
            }
        }
    }
}

/// "我是谁" 接口的响应带有 `data` 键即视为会话有效，不看键值
pub fn session_status(body: &Value) -> SessionStatus {
    if body.get("data").is_some() {
        SessionStatus::Valid
    } else {
        SessionStatus::Invalid
    }
}
