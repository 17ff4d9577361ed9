// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// 默认浏览器 UA
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";

/// 应用程序配置设置
///
/// 会话 Cookie 等凭据只从配置文件或环境变量读取，进程运行期间不修改
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 小红书配置
    pub xhs: XhsSettings,
    /// 爱奇艺配置
    pub iqiyi: IqiyiSettings,
}

/// 小红书配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct XhsSettings {
    /// 接口地址
    pub api_base_url: String,
    /// 网页地址，用于拼接笔记链接
    pub web_base_url: String,
    /// 会话 Cookie 原文
    #[serde(default)]
    pub cookie: String,
    /// User-Agent
    pub user_agent: String,
    /// 请求超时（秒），不设置时使用 HTTP 客户端默认值
    pub timeout_secs: Option<u64>,
}

/// 爱奇艺配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct IqiyiSettings {
    /// 接口地址
    pub api_base_url: String,
    /// Cookie 原文
    #[serde(default)]
    pub cookie: String,
    /// 请求头，非空时整体替换内置请求头
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// 设备 ID，填入查询参数 `u`
    pub device_id: Option<String>,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `SCOUTRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCOUTRS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置，未给出的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("xhs.api_base_url", "https://edith.xiaohongshu.com")?
            .set_default("xhs.web_base_url", "https://www.xiaohongshu.com")?
            .set_default("xhs.cookie", "")?
            .set_default("xhs.user_agent", DEFAULT_USER_AGENT)?
            .set_default("iqiyi.api_base_url", "https://mesh.if.iqiyi.com")?
            .set_default("iqiyi.cookie", "")?
            .set_default("iqiyi.timeout_secs", 10)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
