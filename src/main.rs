use clap::Parser;
use portfolio_site::server;
use portfolio_site::utils::logger::{self, LogFormat};
use portfolio_site::utils::validation::Validate;
use portfolio_site::{CliConfig, GitHubClient, LocalStorage, PageBuilder, PortfolioError};
use std::sync::Arc;

fn exit_with(e: &PortfolioError) -> ! {
    tracing::error!("❌ Startup failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("Starting portfolio-site");

    let config = cli.resolve().unwrap_or_else(|e| exit_with(&e));
    if cli.verbose {
        tracing::debug!("Site config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let storage = LocalStorage::new(config.data.base_dir.clone());
    let source = GitHubClient::new(&config.github).unwrap_or_else(|e| exit_with(&e));

    let page = PageBuilder::new(storage, source, &config)
        .build()
        .await
        .unwrap_or_else(|e| exit_with(&e));
    tracing::info!(
        "✅ Page data ready: {} projects, {} experience entries, {} skills",
        page.projects.len(),
        page.experience.len(),
        page.skills.len()
    );

    server::serve(&config, Arc::new(page)).await?;
    Ok(())
}
