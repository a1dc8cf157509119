use anyhow::Context;
use clap::Parser;
use job_aggregator::config::TomlConfig;
use job_aggregator::utils::{logger, validation::Validate};
use job_aggregator::{
    AggregationPipeline, AggregatorError, CliConfig, ConfigProvider, LocationTable,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!(
        "Search term {:?}, location {:?}, {} extra filters",
        cli.search_term,
        cli.location,
        cli.filters.len()
    );

    if let Err(e) = run(cli).await {
        let exit_code = match e.downcast_ref::<AggregatorError>() {
            Some(err) => {
                tracing::error!("❌ Aggregation failed: {:#} ({:?})", e, err.category());
                err.exit_code()
            }
            None => {
                tracing::error!("❌ Aggregation failed: {:#}", e);
                1
            }
        };
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    let provider: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            config.validate()?;
            tracing::info!("Loaded settings from {}", path.display());
            Box::new(config)
        }
        None => Box::new(cli.clone()),
    };

    // Built once, then shared read-only.
    let table = Arc::new(LocationTable::swedish());
    let pipeline = AggregationPipeline::new(provider.as_ref(), table)?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            on_ctrl_c.cancel();
        }
    });

    let result = if cli.recommended {
        pipeline.recommended(&cancel).await?
    } else {
        pipeline
            .aggregate(
                &cancel,
                cli.search_term.as_deref().unwrap_or_default(),
                cli.location.as_deref(),
                cli.filters.clone(),
                cli.max_items,
            )
            .await?
    };

    tracing::info!(
        "✅ {} jobs enriched ({} found, {} dropped)",
        result.total_enriched,
        result.total_raw_found,
        result.total_enrichment_failures
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
