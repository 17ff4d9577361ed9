// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::IqiyiSettings;
use crate::domain::models::video::{VideoSearchData, VideoSearchEnvelope};
use crate::infrastructure::search::iqiyi_extract::extract_album;
use crate::utils::errors::VideoSearchError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

const SEARCH_PATH: &str = "/portal/lw/search/homePageV3";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 25;

// 搜索联想来源标记，接口只校验格式
const SUGGEST: &str = "1_6007921387195201_0_0_0";

/// 查询参数模板
pub const BASE_PARAMS: [(&str, &str); 18] = [
    ("mode", "1"),
    ("source", "default"),
    ("pcv", "13.092.23164"),
    ("version", "13.092.23164"),
    ("pageSize", "25"),
    ("pu", ""),
    ("u", ""),
    ("scale", "100"),
    ("token", ""),
    ("userVip", "0"),
    ("conduit", ""),
    ("vipType", "-1"),
    ("os", ""),
    ("osShortName", "win10"),
    ("dataType", ""),
    ("appMode", ""),
    ("ad", r#"{"lm":3,"azd":1000000000951,"azt":733,"position":"feed"}"#),
    ("adExt", r#"{"r":"2.3.5-ares6-pure"}"#),
];

/// 内置请求头
pub const DEFAULT_HEADERS: [(&str, &str); 12] = [
    ("accept", "*/*"),
    ("accept-language", "zh-CN,zh;q=0.9"),
    ("origin", "https://www.iqiyi.com"),
    ("priority", "u=1, i"),
    ("referer", "https://www.iqiyi.com/"),
    ("sec-ch-ua", r#""Not;A=Brand";v="99", "Google Chrome";v="139", "Chromium";v="139""#),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""Windows""#),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36"),
];

/// 视频搜索请求
///
/// `cookies` 和 `headers` 非空时整体替换配置中的值
#[derive(Debug, Clone)]
pub struct VideoSearchRequest {
    pub keyword: String,
    pub page: u32,
    pub page_size: u32,
    pub cookies: Option<BTreeMap<String, String>>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl VideoSearchRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            cookies: None,
            headers: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_cookies(mut self, cookies: BTreeMap<String, String>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// 在参数表上覆盖或追加一个参数，保持原有顺序
pub fn overlay(params: &mut Vec<(String, String)>, key: &str, value: String) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value,
        None => params.push((key.to_string(), value)),
    }
}

/// 构建查询参数：模板 + 关键词和分页
pub fn build_params(request: &VideoSearchRequest, device_id: Option<&str>) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = BASE_PARAMS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    overlay(&mut params, "key", request.keyword.clone());
    overlay(&mut params, "current_page", request.page.to_string());
    overlay(&mut params, "pageNum", request.page.to_string());
    overlay(&mut params, "pageSize", request.page_size.to_string());
    overlay(&mut params, "suggest", SUGGEST.to_string());
    if let Some(device_id) = device_id.filter(|d| !d.is_empty()) {
        overlay(&mut params, "u", device_id.to_string());
    }
    params
}

/// 爱奇艺搜索客户端
///
/// 每次请求单独构建 HTTP 客户端，构建失败同样进入结果信封
pub struct IqiyiClient {
    settings: IqiyiSettings,
}

impl IqiyiClient {
    pub fn new(settings: &IqiyiSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// 搜索视频
    ///
    /// 永远返回结果信封，不会返回错误
    pub async fn search_videos(&self, request: &VideoSearchRequest) -> VideoSearchEnvelope {
        let result = self.try_search(request).await;
        match &result {
            Ok(data) => info!(
                keyword = %request.keyword,
                total_count = data.total_count,
                "iqiyi search finished"
            ),
            Err(e) => warn!(keyword = %request.keyword, error = %e, "iqiyi search failed"),
        }
        result.into()
    }

    async fn try_search(
        &self,
        request: &VideoSearchRequest,
    ) -> Result<VideoSearchData, VideoSearchError> {
        let headers = self.headers(request)?;
        let params = build_params(request, self.settings.device_id.as_deref());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .build()?;

        let url = format!(
            "{}{}",
            self.settings.api_base_url.trim_end_matches('/'),
            SEARCH_PATH
        );
        let response = client
            .get(url)
            .query(&params)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;
        Ok(extract_album(body))
    }

    fn headers(&self, request: &VideoSearchRequest) -> Result<HeaderMap, VideoSearchError> {
        let pairs: Vec<(String, String)> = match &request.headers {
            Some(custom) if !custom.is_empty() => pairs_of(custom.iter()),
            _ if !self.settings.headers.is_empty() => pairs_of(self.settings.headers.iter()),
            _ => DEFAULT_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };

        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| VideoSearchError::Other(format!("invalid header name {}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| VideoSearchError::Other(format!("invalid header {}: {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let cookie = cookie_header(request.cookies.as_ref(), &self.settings.cookie);
        if !cookie.is_empty() {
            let value = HeaderValue::from_str(&cookie)
                .map_err(|e| VideoSearchError::Other(format!("invalid cookie: {}", e)))?;
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }
}

fn pairs_of<'a>(iter: impl Iterator<Item = (&'a String, &'a String)>) -> Vec<(String, String)> {
    iter.map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// 自定义 Cookie 非空时拼成请求头，否则使用配置中的原文
pub fn cookie_header(custom: Option<&BTreeMap<String, String>>, configured: &str) -> String {
    match custom {
        Some(cookies) if !cookies.is_empty() => cookies
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; "),
        _ => configured.to_string(),
    }
}
