use clap::{CommandFactory, Parser};
use f1_results::output::{self, Tabular};
use f1_results::utils::logger;
use f1_results::{AppConfig, Category, CliConfig, F1Error, ResultsService, TracingSink};
use serde::Serialize;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    let Some(category) = cli.category() else {
        CliConfig::command().print_help()?;
        return Ok(());
    };

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(category, config).await {
        exit_with(&e);
    }
    Ok(())
}

async fn run(category: Category, config: AppConfig) -> f1_results::Result<()> {
    let format = config.format;
    let service = ResultsService::over_http(config.query, TracingSink)?;

    match category {
        Category::Drivers => show(category, &service.drivers().await, format),
        Category::Constructors => show(category, &service.constructors().await, format),
        Category::Races => show(category, &service.races().await, format),
    }
}

fn show<T: Tabular + Serialize>(
    category: Category,
    records: &[T],
    format: output::OutputFormat,
) -> f1_results::Result<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    output::present(
        &mut stdout.lock(),
        &mut stderr.lock(),
        category,
        records,
        format,
        &chrono::Local::now(),
    )
}

fn exit_with(e: &F1Error) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
