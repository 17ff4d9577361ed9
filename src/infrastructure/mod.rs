// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部 HTTP 接口交互，实现领域层定义的抽象接口
/// （`NoteApi`、`SessionProbe`），并把上游 JSON 整理为领域记录。
pub mod search;
