// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含与具体 HTTP 实现无关的部分：
/// - 领域模型（models）：笔记、评论、视频等扁平记录
/// - 笔记接口（notes）：上游笔记接口的抽象
/// - 会话探测（session）：区分空结果和登录失效
pub mod models;
pub mod notes;
pub mod session;
