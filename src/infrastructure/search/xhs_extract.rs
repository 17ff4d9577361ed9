// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 小红书响应整理
//!
//! 纯函数，把接口返回的 JSON 树投影为扁平记录。缺少结构的条目会被跳过，
//! 缺少的字段取默认值。

use crate::domain::models::note::{Comment, NoteDetail, NoteSearchResult};
use crate::utils::json_path::{array_at, at, has_entries, i64_at, str_at};
use crate::utils::timestamp::format_millis;
use crate::utils::url_utils::NoteLink;
use serde_json::Value;

const ITEMS: [&str; 2] = ["data", "items"];
const COMMENTS: [&str; 2] = ["data", "comments"];

/// 响应中含有笔记条目
pub fn has_items(body: &Value) -> bool {
    has_entries(body, &ITEMS)
}

/// 响应中含有评论
pub fn has_comments(body: &Value) -> bool {
    has_entries(body, &COMMENTS)
}

/// 整理搜索结果
///
/// 只保留带 `note_card.display_title` 的条目，其余（广告、推荐词等）跳过
pub fn search_results(body: &Value, web_base: &str) -> Vec<NoteSearchResult> {
    array_at(body, &ITEMS)
        .iter()
        .filter(|item| at(item, &["note_card", "display_title"]).is_some())
        .map(|item| {
            let link = NoteLink {
                note_id: str_at(item, &["id"]),
                xsec_token: Some(str_at(item, &["xsec_token"])),
            };
            NoteSearchResult {
                title: str_at(item, &["note_card", "display_title"]),
                liked_count: str_at(item, &["note_card", "interact_info", "liked_count"]),
                url: link.to_url(web_base),
                note_id: link.note_id,
            }
        })
        .collect()
}

/// 整理笔记详情
///
/// 只看第一个条目，且要求带 `note_card.user`
pub fn note_details(body: &Value) -> Vec<NoteDetail> {
    array_at(body, &ITEMS)
        .first()
        .and_then(|item| item.get("note_card"))
        .filter(|card| card.get("user").is_some())
        .map(|card| vec![note_detail(card)])
        .unwrap_or_default()
}

fn note_detail(card: &Value) -> NoteDetail {
    let images = array_at(card, &["image_list"])
        .first()
        .map(|first| {
            array_at(first, &["info_list"])
                .iter()
                .filter_map(|info| info.get("url").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    NoteDetail {
        author: str_at(card, &["user", "nickname"]),
        publish_time: format_millis(i64_at(card, &["time"])),
        content: str_at(card, &["desc"]),
        images,
    }
}

/// 整理评论列表
pub fn comments(body: &Value) -> Vec<Comment> {
    array_at(body, &COMMENTS)
        .iter()
        .map(|item| Comment {
            author: str_at(item, &["user_info", "nickname"]),
            content: str_at(item, &["content"]),
            create_time: format_millis(i64_at(item, &["create_time"])),
        })
        .collect()
}

#[cfg(test)]
#[path = "xhs_extract_test.rs"]
mod tests;
