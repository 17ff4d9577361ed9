// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 笔记搜索结果
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteSearchResult {
    pub title: String,
    /// 点赞数，上游返回的是展示文本（如 "1.2万"）
    pub liked_count: String,
    pub url: String,
    pub note_id: String,
}

/// 笔记详情
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteDetail {
    pub author: String,
    pub publish_time: String,
    pub content: String,
    pub images: Vec<String>,
}

/// 笔记评论
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub create_time: String,
}

/// 一条笔记的完整信息：搜索标题、链接、详情和评论
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteBundle {
    pub title: String,
    pub url: String,
    pub content: Vec<NoteDetail>,
    pub comments: Vec<Comment>,
}
