// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;

/// 命令行错误类型
///
/// 命令执行过程中的任何错误都汇集到这里，由入口统一输出到 stderr
#[derive(Debug)]
pub struct CliError(anyhow::Error);

impl CliError {
    /// 失败退出码
    pub const EXIT_CODE: i32 = 1;

    /// 输出为 `{"success": false, "error": "..."}`
    pub fn to_envelope(&self) -> String {
        json!({ "success": false, "error": self.0.to_string() }).to_string()
    }
}

impl<E> From<E> for CliError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
