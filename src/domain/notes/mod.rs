// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 笔记领域模块
///
/// 定义笔记接口的抽象，具体实现位于基础设施层
pub mod api;
