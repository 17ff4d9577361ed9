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

use clap::Parser;
use scoutrs::config::settings::Settings;
use scoutrs::infrastructure::search::{IqiyiClient, VideoSearchRequest};
use scoutrs::presentation::cli::IqiyiArgs;
use scoutrs::presentation::output;
use scoutrs::utils::telemetry;

/// 不带参数运行时使用的示例关键词
const DEMO_KEYWORD: &str = "王牌对王牌第9季";
const DEMO_VIDEOS_SHOWN: usize = 3;

/// 主函数
///
/// 搜索失败也会输出结果信封，只有配置错误会让进程以非零退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let args = IqiyiArgs::parse();

    let settings = Settings::new()?;
    let client = IqiyiClient::new(&settings.iqiyi);

    match args.keyword {
        Some(keyword) => {
            let request = VideoSearchRequest::new(keyword)
                .page(args.page)
                .page_size(args.page_size);
            let envelope = client.search_videos(&request).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        None => {
            let envelope = client
                .search_videos(&VideoSearchRequest::new(DEMO_KEYWORD))
                .await;
            print!("{}", output::render_video_summary(&envelope, DEMO_VIDEOS_SHOWN));
        }
    }

    Ok(())
}
