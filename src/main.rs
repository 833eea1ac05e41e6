use clap::Parser;
use crop_advisor::core::page::ResultsContainer;
use crop_advisor::core::{render, ConfigProvider, SubmitOutcome};
use crop_advisor::utils::{logger, validation::Validate};
use crop_advisor::{AdvisorError, CliConfig, FormPage, HttpRecommendationClient, SubmissionHandler, TomlConfig};
use std::sync::Arc;

fn fail(e: AdvisorError) -> ! {
    tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 先讀檔，日誌格式可能由檔案決定
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                logger::init_cli_logger(cli.verbose);
                fail(e);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting crop-advisor CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let provider: &dyn ConfigProvider = match &file_config {
        Some(config) => {
            if let Err(e) = config.validate() {
                fail(e);
            }
            config
        }
        None => {
            if let Err(e) = cli.validate() {
                fail(e);
            }
            &cli
        }
    };

    let client = match HttpRecommendationClient::from_config(provider) {
        Ok(client) => client,
        Err(e) => fail(e),
    };
    tracing::info!("🌐 Endpoint: {}", client.endpoint());

    let page = FormPage::new(provider.field_ids());
    cli.form.apply_to(&page);

    let results: ResultsContainer = page.results();
    let handler = SubmissionHandler::new(client, results, provider.field_ids());
    if let Err(e) = page.bind_submit(Arc::new(handler)) {
        fail(e);
    }

    match page.submit().settle().await {
        Some(SubmitOutcome::Rendered { recommendations }) => {
            for line in render::render_text(&recommendations) {
                println!("{}", line);
            }
        }
        Some(SubmitOutcome::Interrupted {
            recommendations,
            reason,
        }) => {
            for line in render::render_text(&recommendations) {
                println!("{}", line);
            }
            eprintln!("⚠️  Response was cut short: {}", reason);
        }
        Some(SubmitOutcome::Failed { reason }) => {
            eprintln!("⚠️  Request failed, results unchanged: {}", reason);
        }
        None => {
            eprintln!("⚠️  Nothing was submitted, results unchanged");
        }
    }
}
