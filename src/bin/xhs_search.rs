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

use std::sync::Arc;

use clap::Parser;
use scoutrs::application::use_cases::note_search::NoteSearchUseCase;
use scoutrs::config::settings::Settings;
use scoutrs::infrastructure::search::XhsClient;
use scoutrs::presentation::cli::{OutputFormat, XhsAction, XhsArgs};
use scoutrs::presentation::errors::CliError;
use scoutrs::presentation::output;
use scoutrs::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 成功时结果写到 stdout；失败时错误信封写到 stderr 并以 1 退出
#[tokio::main]
async fn main() {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Parse arguments
    let args = XhsArgs::parse();

    match run(args).await {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("{}", err.to_envelope());
            std::process::exit(CliError::EXIT_CODE);
        }
    }
}

async fn run(args: XhsArgs) -> Result<String, CliError> {
    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 4. Initialize components
    let client = Arc::new(XhsClient::new(&settings.xhs)?);
    let use_case = NoteSearchUseCase::new(client.clone(), client, settings.xhs.web_base_url.as_str())
        .with_limit(Some(args.limit));

    // 5. Execute action
    let out = match args.action {
        XhsAction::Search => {
            let listing = use_case.search_notes(&args.keywords).await?;
            match args.format {
                OutputFormat::Json => serde_json::to_string(&listing.items)?,
                OutputFormat::Text => output::render_search_text(&listing, &args.keywords),
            }
        }
        XhsAction::Details => {
            let bundles = use_case.get_all_notes_details(&args.keywords).await?;
            match args.format {
                OutputFormat::Json => serde_json::to_string_pretty(&bundles)?,
                OutputFormat::Text => output::render_bundles_text(&bundles),
            }
        }
    };
    Ok(out)
}
