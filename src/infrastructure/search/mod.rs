// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 上游接口客户端（xhs、iqiyi）以及各自的响应整理函数
pub mod iqiyi;
pub mod iqiyi_extract;
pub mod xhs;
pub mod xhs_extract;

pub use iqiyi::{IqiyiClient, VideoSearchRequest};
pub use xhs::XhsClient;
