// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, SecondsFormat};

/// 将毫秒时间戳格式化为 RFC 3339 (UTC，毫秒精度)
///
/// 缺失或越界的时间戳返回空串
pub fn format_millis(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
