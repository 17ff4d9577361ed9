// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 笔记搜索、详情、评论和聚合抓取用例
pub mod application;

/// 配置模块
///
/// 处理接口地址、会话凭据和超时配置
pub mod config;

/// 领域模块
///
/// 包含领域记录、上游接口抽象和会话探测
pub mod domain;

/// 基础设施模块
///
/// 上游 HTTP 接口客户端和响应整理
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数、错误输出和文本渲染
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
