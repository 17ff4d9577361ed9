// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 所有记录都只存在于一次调用之内，不做持久化：
/// - 笔记（note）：搜索结果、详情、评论和聚合结果
/// - 视频（video）：视频记录、搜索数据和结果信封
pub mod note;
pub mod video;
