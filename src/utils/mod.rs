// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括错误类型、日志初始化、JSON 防御式访问、链接解析等
pub mod errors;
pub mod json_path;
pub mod telemetry;
pub mod timestamp;
pub mod url_utils;
