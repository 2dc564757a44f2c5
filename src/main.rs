use anyhow::Context;
use cafe_service::utils::logger;
use cafe_service::{CafeError, CafeServer, CliConfig, Resolver};
use clap::Parser;

fn report(e: &CafeError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 配置檔要先讀，日誌等級與格式可能來自檔案
    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file {:?}: {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let level = file.as_ref().and_then(|f| f.logging.level.as_deref());
    if cli.json_logs(file.as_ref()) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting cafe-service");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.settings(file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => report(&e),
    };

    tracing::info!(
        "Serving {} cities: {}",
        settings.dataset.len(),
        settings.dataset.cities().join(", ")
    );

    if cli.check {
        let summary = serde_json::to_string_pretty(&settings.dataset.summary())
            .context("failed to render dataset summary")?;
        println!("{}", summary);
        println!("✅ Configuration is valid (listen: {})", settings.listen);
        return Ok(());
    }

    let server = CafeServer::new(Resolver::new(settings.dataset));
    if let Err(e) = server.run(settings.listen).await {
        report(&e);
    }

    Ok(())
}
