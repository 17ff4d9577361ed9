// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Parser, ValueEnum};

use crate::infrastructure::search::iqiyi::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// 小红书操作类型
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum XhsAction {
    /// 搜索笔记
    Search,
    /// 搜索并获取详情
    Details,
}

/// 输出格式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "xhs-search", author, version, about = "小红书内容搜索工具")]
pub struct XhsArgs {
    /// 操作类型：search-搜索笔记，details-获取详情
    #[arg(long, value_enum)]
    pub action: XhsAction,

    /// 搜索关键词
    #[arg(long)]
    pub keywords: String,

    /// 搜索结果数量限制
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "iqiyi-search", author, version, about = "爱奇艺视频搜索工具")]
pub struct IqiyiArgs {
    /// 搜索关键词，省略时运行示例搜索
    pub keyword: Option<String>,

    /// 页码
    #[arg(default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// 每页数量
    #[arg(default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}
