// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 命令行参数、错误输出和结果渲染
pub mod cli;
pub mod errors;
pub mod output;
