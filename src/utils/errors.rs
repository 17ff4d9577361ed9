// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 小红书接口错误类型
///
/// 结构缺失不属于错误，只有传输和解码失败会走到这里
#[derive(Error, Debug)]
pub enum XhsError {
    #[error("请求错误: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析错误: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("无效的请求头: {0}")]
    InvalidHeader(String),
}

/// 视频搜索错误类型
///
/// 在公开边界处统一转换为结果信封，不会继续向上抛出
#[derive(Error, Debug)]
pub enum VideoSearchError {
    #[error("请求错误: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析错误: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("未知错误: {0}")]
    Other(String),
}
