// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 命令行输出
//!
//! JSON 直接序列化领域记录；文本格式供人阅读。

use std::fmt::Write;

use crate::domain::models::note::{NoteBundle, NoteSearchResult};
use crate::domain::models::video::VideoSearchEnvelope;
use crate::domain::session::Listing;
use crate::infrastructure::search::iqiyi_extract::video_records;

/// 搜索结果文本
pub fn render_search_text(listing: &Listing<NoteSearchResult>, keywords: &str) -> String {
    if let Some(message) = listing
        .status
        .describe(&format!("未找到与\"{}\"相关的笔记", keywords))
    {
        return message;
    }

    let mut out = String::from("搜索结果：\n\n");
    for (i, note) in listing.items.iter().enumerate() {
        let _ = write!(
            out,
            "{}. {}  \n 点赞数:{} \n   链接: {}  \n id:{}\n\n",
            i, note.title, note.liked_count, note.url, note.note_id
        );
    }
    out
}

/// 聚合结果文本
pub fn render_bundles_text(bundles: &[NoteBundle]) -> String {
    let mut out = String::new();
    for bundle in bundles {
        let _ = writeln!(out, "标题: {}", bundle.title);
        let _ = writeln!(out, "链接: {}", bundle.url);
        for detail in &bundle.content {
            let _ = writeln!(out, "作者: {}", detail.author);
            let _ = writeln!(out, "发布时间: {}", detail.publish_time);
            let _ = writeln!(out, "内容:\n{}", detail.content);
            if !detail.images.is_empty() {
                let _ = writeln!(out, "图片:");
                for image in &detail.images {
                    let _ = writeln!(out, "  {}", image);
                }
            }
        }
        if bundle.comments.is_empty() {
            let _ = writeln!(out, "暂无评论");
        } else {
            let _ = writeln!(out, "评论:");
            for (i, comment) in bundle.comments.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}. {}（{}）: {}",
                    i, comment.author, comment.create_time, comment.content
                );
            }
        }
        out.push('\n');
    }
    out
}

/// 视频搜索摘要，列出前 `max_videos` 个视频
pub fn render_video_summary(envelope: &VideoSearchEnvelope, max_videos: usize) -> String {
    let data = match (&envelope.data, envelope.success) {
        (Some(data), true) => data,
        _ => {
            return format!(
                "搜索失败: {}\n",
                envelope.error.as_deref().unwrap_or_default()
            )
        }
    };

    let mut out = String::from("搜索成功!\n");
    let _ = writeln!(out, "找到 {} 个视频", data.total_count);
    let shown = &data.videos[..data.videos.len().min(max_videos)];
    for (i, record) in video_records(shown).iter().enumerate() {
        let _ = writeln!(out, "\n视频 {}:", i + 1);
        for (key, value) in record.fields() {
            let _ = writeln!(out, "  {}: {}", key, value);
        }
    }
    out
}
