// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含把上游接口、响应整理和会话探测串起来的用例
pub mod use_cases;
