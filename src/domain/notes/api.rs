// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::XhsError;
use crate::utils::url_utils::NoteLink;
use async_trait::async_trait;
use serde_json::Value;

/// 笔记接口
///
/// 每个方法对应一个上游接口，返回未经整理的 JSON 树
#[async_trait]
pub trait NoteApi: Send + Sync {
    /// 关键词搜索笔记
    async fn search_notes(&self, keyword: &str) -> Result<Value, XhsError>;

    /// 笔记详情
    async fn note_detail(&self, link: &NoteLink) -> Result<Value, XhsError>;

    /// 笔记评论
    async fn note_comments(&self, link: &NoteLink) -> Result<Value, XhsError>;

    /// 当前登录用户
    async fn current_user(&self) -> Result<Value, XhsError>;
}
