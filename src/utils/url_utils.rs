// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use url::{form_urlencoded, Url};

/// 笔记 ID 的固定长度
pub const NOTE_ID_LEN: usize = 24;

/// 笔记链接中的标识
///
/// `xsec_token` 是详情和评论接口需要的访问令牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLink {
    pub note_id: String,
    pub xsec_token: Option<String>,
}

impl NoteLink {
    /// 解析拼接串：前 24 个字符是笔记 ID，其余是令牌
    pub fn from_combined(ids: &str) -> Self {
        let split = ids
            .char_indices()
            .nth(NOTE_ID_LEN)
            .map(|(i, _)| i)
            .unwrap_or(ids.len());
        let (note_id, token) = ids.split_at(split);
        Self {
            note_id: note_id.to_string(),
            xsec_token: Some(token.to_string()),
        }
    }

    /// 解析详情页链接
    ///
    /// 最后一段路径是笔记 ID，`xsec_token` 取第一个值。不校验协议和主机，
    /// 无法解析的输入按原样切分，尽量给出部分结果。
    pub fn from_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => {
                let note_id = parsed
                    .path_segments()
                    .and_then(|mut segments| segments.next_back())
                    .unwrap_or_default()
                    .to_string();
                let xsec_token = parsed
                    .query_pairs()
                    .find(|(k, _)| k == "xsec_token")
                    .map(|(_, v)| v.into_owned());
                Self {
                    note_id,
                    xsec_token,
                }
            }
            Err(_) => Self::from_relative(url),
        }
    }

    /// 自动判断输入形式
    ///
    /// 令牌是 base64 文本，可能带 `/`、`+`、`=`，因此只有像链接的输入
    /// (绝对地址、带查询串或 `explore/` 路径) 才按链接解析，其余长度
    /// 不少于 24 的输入按拼接串处理
    pub fn parse(input: &str) -> Self {
        if !Self::looks_like_url(input) && input.chars().count() >= NOTE_ID_LEN {
            Self::from_combined(input)
        } else {
            Self::from_url(input)
        }
    }

    fn looks_like_url(input: &str) -> bool {
        input.contains("://")
            || input.contains('?')
            || input.contains("explore/")
            || Url::parse(input).is_ok()
    }

    /// 令牌，缺失时为空串
    pub fn token(&self) -> &str {
        self.xsec_token.as_deref().unwrap_or_default()
    }

    /// 生成 `<web_base>/explore/<id>?xsec_token=<token>` 形式的规范链接
    pub fn to_url(&self, web_base: &str) -> String {
        let token: String = form_urlencoded::byte_serialize(self.token().as_bytes()).collect();
        format!(
            "{}/explore/{}?xsec_token={}",
            web_base.trim_end_matches('/'),
            self.note_id,
            token
        )
    }

    fn from_relative(input: &str) -> Self {
        let without_fragment = input.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };
        let note_id = path.rsplit('/').next().unwrap_or_default().to_string();
        let xsec_token = form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "xsec_token")
            .map(|(_, v)| v.into_owned());
        Self {
            note_id,
            xsec_token,
        }
    }
}
