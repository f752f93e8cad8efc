use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fipe_scraper::config::{RunConfig, Selection, SelectionPlan};
use fipe_scraper::export;
use fipe_scraper::scraper::FipeScraper;

const LOG_FILE: &str = "fipe_scraper.log";

#[derive(Parser, Debug)]
#[command(
    name = "fipe_scraper",
    version,
    about = "Automated FIPE vehicle price lookup"
)]
struct Cli {
    /// Reference month to pick: a zero-based index, or text to search for
    #[arg(long)]
    reference_month: Option<Selection>,

    /// Brand to pick: a zero-based index, or text to search for
    #[arg(long)]
    brand: Option<Selection>,

    /// Model to pick: a zero-based index, or text to search for
    #[arg(long)]
    model: Option<Selection>,

    /// Model year to pick: a zero-based index, or text to search for
    #[arg(long)]
    model_year: Option<Selection>,

    /// Run the browser without a visible window
    #[arg(long)]
    headless: bool,

    /// Where the extracted table is written
    #[arg(long)]
    output: Option<String>,

    /// WebDriver endpoint to connect to
    #[arg(long, env = "FIPE_WEBDRIVER_URL")]
    webdriver_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut config = RunConfig::load().unwrap_or_else(|e| {
        tracing::warn!("could not load config file ({}), using defaults", e);
        RunConfig::default()
    });

    if cli.headless {
        config.headless = true;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(url) = cli.webdriver_url {
        config.webdriver_url = url;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }

    let mut plan = SelectionPlan::from_indices(&config.indices);
    if let Some(selection) = cli.reference_month {
        plan.reference_month = selection;
    }
    if let Some(selection) = cli.brand {
        plan.brand = selection;
    }
    if let Some(selection) = cli.model {
        plan.model = selection;
    }
    if let Some(selection) = cli.model_year {
        plan.model_year = selection;
    }

    tracing::info!("starting FIPE price lookup");
    let scraper = FipeScraper::new(config.clone()).await?;
    let record = scraper.run_query(&plan).await;

    export::save_result(record.as_ref(), &config.output_path)?;

    Ok(())
}

fn init_logging() -> Result<()> {
    let log_file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(())
}
