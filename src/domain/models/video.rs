// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::VideoSearchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 视频时长
///
/// 上游有时给秒数，有时给 "45:12" 这样的文本，原样保留
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VideoDuration {
    Seconds(i64),
    Text(String),
}

impl Default for VideoDuration {
    fn default() -> Self {
        VideoDuration::Seconds(0)
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoDuration::Seconds(s) => write!(f, "{}", s),
            VideoDuration::Text(t) => f.write_str(t),
        }
    }
}

/// 单个视频的关键信息，固定 11 个字段
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRecord {
    pub title: String,
    pub number: String,
    pub qipu_id: String,
    pub play_url: String,
    pub page_url: String,
    pub subtitle: String,
    pub duration: VideoDuration,
    pub subscript_content: String,
    pub img: String,
    pub year: String,
    pub pay_mark_url: String,
}

impl VideoRecord {
    /// 按输出顺序列出字段名和展示值
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("number", self.number.clone()),
            ("qipu_id", self.qipu_id.clone()),
            ("play_url", self.play_url.clone()),
            ("page_url", self.page_url.clone()),
            ("subtitle", self.subtitle.clone()),
            ("duration", self.duration.to_string()),
            ("subscript_content", self.subscript_content.clone()),
            ("img", self.img.clone()),
            ("year", self.year.clone()),
            ("pay_mark_url", self.pay_mark_url.clone()),
        ]
    }
}

/// 视频搜索数据
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSearchData {
    /// 第一个模板的专辑信息，缺失时为空对象
    pub album_info: Value,
    /// 专辑下的原始视频对象
    pub videos: Vec<Value>,
    pub total_count: usize,
    /// 完整的上游响应
    pub raw_response: Value,
}

/// 视频搜索结果信封
///
/// 成功和失败都使用同一结构：`{success, data, error}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSearchEnvelope {
    pub success: bool,
    pub data: Option<VideoSearchData>,
    pub error: Option<String>,
}

impl VideoSearchEnvelope {
    pub fn ok(data: VideoSearchData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: &VideoSearchError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<VideoSearchData, VideoSearchError>> for VideoSearchEnvelope {
    fn from(result: Result<VideoSearchData, VideoSearchError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(&e),
        }
    }
}
