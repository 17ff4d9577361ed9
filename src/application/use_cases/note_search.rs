// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::models::note::{Comment, NoteBundle, NoteDetail, NoteSearchResult};
use crate::domain::notes::api::NoteApi;
use crate::domain::session::{classify_empty, Listing, ListingStatus, SessionProbe};
use crate::infrastructure::search::xhs_extract;
use crate::utils::errors::XhsError;
use crate::utils::url_utils::NoteLink;

// === Section: Use Case Definition ===

/// 笔记搜索用例
///
/// 搜索、详情、评论，以及三者按顺序组合的聚合抓取
pub struct NoteSearchUseCase {
    api: Arc<dyn NoteApi>,
    probe: Arc<dyn SessionProbe>,
    web_base_url: String,
    limit: Option<usize>,
}

// === Section: Implementation ===

impl NoteSearchUseCase {
    pub fn new(
        api: Arc<dyn NoteApi>,
        probe: Arc<dyn SessionProbe>,
        web_base_url: impl Into<String>,
    ) -> Self {
        Self {
            api,
            probe,
            web_base_url: web_base_url.into(),
            limit: None,
        }
    }

    /// 限制搜索结果条数
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// 根据关键词搜索笔记
    ///
    /// 上游没有返回条目时，通过会话探测区分 "没有结果" 和 "Cookie 过期"
    pub async fn search_notes(&self, keywords: &str) -> Result<Listing<NoteSearchResult>, XhsError> {
        let body = self.api.search_notes(keywords).await?;
        debug!(keywords, body = %body, "search response");

        if !xhs_extract::has_items(&body) {
            let status = classify_empty(self.probe.as_ref()).await;
            self.log_empty(&status, &format!("未找到与\"{}\"相关的笔记", keywords));
            return Ok(Listing::empty(status));
        }

        let mut results = xhs_extract::search_results(&body, &self.web_base_url);
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
        info!(keywords, count = results.len(), "notes found");
        Ok(Listing::found(results))
    }

    /// 获取笔记内容，链接需带 `xsec_token`
    pub async fn get_note_content(&self, url: &str) -> Result<Listing<NoteDetail>, XhsError> {
        let link = NoteLink::parse(url);
        let body = self.api.note_detail(&link).await?;
        debug!(url, body = %body, "detail response");

        if !xhs_extract::has_items(&body) {
            let status = classify_empty(self.probe.as_ref()).await;
            self.log_empty(&status, "获取失败");
            return Ok(Listing::empty(status));
        }
        Ok(Listing::found(xhs_extract::note_details(&body)))
    }

    /// 获取笔记评论，链接需带 `xsec_token`
    pub async fn get_note_comments(&self, url: &str) -> Result<Listing<Comment>, XhsError> {
        let link = NoteLink::parse(url);
        let body = self.api.note_comments(&link).await?;
        debug!(url, body = %body, "comments response");

        if !xhs_extract::has_comments(&body) {
            let status = classify_empty(self.probe.as_ref()).await;
            self.log_empty(&status, "暂无评论");
            return Ok(Listing::empty(status));
        }
        Ok(Listing::found(xhs_extract::comments(&body)))
    }

    /// 搜索笔记并依次获取每条笔记的内容和评论
    ///
    /// 严格顺序执行；任意一次调用失败都会中止整个聚合
    pub async fn get_all_notes_details(&self, keywords: &str) -> Result<Vec<NoteBundle>, XhsError> {
        let notes = self.search_notes(keywords).await?.into_items();

        let mut bundles = Vec::with_capacity(notes.len());
        for note in notes {
            let content = self.get_note_content(&note.url).await?.into_items();
            let comments = self.get_note_comments(&note.url).await?.into_items();
            bundles.push(NoteBundle {
                title: note.title,
                url: note.url,
                content,
                comments,
            });
        }
        Ok(bundles)
    }

    fn log_empty(&self, status: &ListingStatus, empty_message: &str) {
        if let Some(message) = status.describe(empty_message) {
            match status {
                ListingStatus::Empty => info!("{}", message),
                _ => warn!("{}", message),
            }
        }
    }
}

#[cfg(test)]
#[path = "note_search_test.rs"]
mod tests;
