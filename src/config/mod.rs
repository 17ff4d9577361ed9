// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理两个抓取工具的接口地址、会话凭据和超时配置
pub mod settings;
