// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::video::{VideoDuration, VideoRecord, VideoSearchData};
use crate::utils::json_path::{array_at, str_at};
use serde_json::{Map, Value};

/// 从搜索响应中取第一个模板的专辑视频列表
///
/// 原始响应整体保存在 `raw_response` 中
pub fn extract_album(body: Value) -> VideoSearchData {
    let album_info = array_at(&body, &["data", "templates"])
        .first()
        .and_then(|template| template.get("albumInfo"))
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let videos = array_at(&album_info, &["videos"]).to_vec();

    VideoSearchData {
        total_count: videos.len(),
        album_info,
        videos,
        raw_response: body,
    }
}

/// 提取单个视频的关键信息，缺失字段取空值
pub fn extract_video_info(video: &Value) -> VideoRecord {
    VideoRecord {
        title: str_at(video, &["title"]),
        number: str_at(video, &["number"]),
        qipu_id: str_at(video, &["qipuId"]),
        play_url: str_at(video, &["playUrl"]),
        page_url: str_at(video, &["pageUrl"]),
        subtitle: str_at(video, &["subtitle"]),
        duration: duration(video),
        subscript_content: str_at(video, &["subscriptContent"]),
        img: str_at(video, &["img"]),
        year: str_at(video, &["year"]),
        pay_mark_url: str_at(video, &["payMarkUrl"]),
    }
}

/// 批量提取
pub fn video_records(videos: &[Value]) -> Vec<VideoRecord> {
    videos.iter().map(extract_video_info).collect()
}

fn duration(video: &Value) -> VideoDuration {
    match video.get("duration") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(VideoDuration::Seconds)
            .unwrap_or_default(),
        Some(Value::String(s)) => VideoDuration::Text(s.clone()),
        _ => VideoDuration::default(),
    }
}
