// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Serialize;

/// 会话探测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// 会话有效
    Valid,
    /// 会话无效或已过期
    Invalid,
    /// 探测本身失败，附带失败原因
    Unknown(String),
}

/// 会话探测
///
/// 上游在 Cookie 过期时只返回空列表，需要再调用一次 "我是谁" 接口区分
/// "没有结果" 和 "登录失效"
#[async_trait]
pub trait SessionProbe: Send + Sync {
    async fn probe(&self) -> SessionStatus;
}

/// 列表结果的分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// 上游返回了条目
    Found,
    /// 会话有效但没有条目
    Empty,
    /// 会话已过期
    SessionExpired,
    /// 无法判断会话状态，附带探测失败原因
    SessionUnknown(String),
}

impl ListingStatus {
    /// 根据会话探测结果对空列表分类
    pub fn from_probe(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Valid => ListingStatus::Empty,
            SessionStatus::Invalid => ListingStatus::SessionExpired,
            SessionStatus::Unknown(reason) => ListingStatus::SessionUnknown(reason),
        }
    }

    /// 面向用户的说明，`Found` 没有说明
    pub fn describe(&self, empty_message: &str) -> Option<String> {
        match self {
            ListingStatus::Found => None,
            ListingStatus::Empty => Some(empty_message.to_string()),
            ListingStatus::SessionExpired => Some("Cookie无效或已过期".to_string()),
            ListingStatus::SessionUnknown(reason) => Some(format!("Cookie检查失败: {}", reason)),
        }
    }
}

/// 带分类的列表结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub status: ListingStatus,
}

impl<T> Listing<T> {
    pub fn found(items: Vec<T>) -> Self {
        Self {
            items,
            status: ListingStatus::Found,
        }
    }

    pub fn empty(status: ListingStatus) -> Self {
        Self {
            items: Vec::new(),
            status,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// 对空结果调用探测并分类
pub async fn classify_empty(probe: &dyn SessionProbe) -> ListingStatus {
    ListingStatus::from_probe(probe.probe().await)
}
