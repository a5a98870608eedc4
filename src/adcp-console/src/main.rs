//! AdCP Campaign Console — command-line client for the campaign
//! generation service.
//!
//! Collects campaign input, validates it, submits it to the generation
//! service, and renders the result as overview, signal, product, and
//! strategy views, with optional clipboard copy and file export.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use adcp_client::GenerationClient;
use adcp_core::config::AppConfig;
use adcp_core::types::{default_flight_dates, CampaignDraft, CampaignResult};
use adcp_session::{Session, SystemClipboard};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tabled::Table;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "adcp-console")]
#[command(about = "Generate advertising campaign strategies via the AdCP agent service")]
#[command(version)]
struct Cli {
    /// Advertiser name
    #[arg(long)]
    advertiser: Option<String>,

    /// Campaign name
    #[arg(long)]
    campaign: Option<String>,

    /// Campaign brief describing objectives and audience
    #[arg(long)]
    brief: Option<String>,

    /// Campaign budget in USD (minimum $1,000)
    #[arg(long)]
    budget: Option<f64>,

    /// Flight start date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Flight end date, YYYY-MM-DD (defaults to one month from today)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Generation service base URL (overrides config)
    #[arg(long, env = "ADCP__SERVICE__BASE_URL")]
    base_url: Option<String>,

    /// Copy the result JSON to the system clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,

    /// Write the result JSON to the output directory
    #[arg(long, default_value_t = false)]
    save: bool,

    /// Output directory for saved results (overrides config)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the raw result JSON instead of the formatted views
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Check generation service health and exit
    #[arg(long, default_value_t = false)]
    health: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adcp_console=info,adcp_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load().unwrap_or_else(|err| {
        warn!(error = %err, "failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }
    if let Some(out_dir) = cli.out_dir {
        config.export.output_dir = out_dir.display().to_string();
    }

    let client = GenerationClient::new(&config.service)?;

    if cli.health {
        let health = client.health().await?;
        println!("service status: {}", health.status);
        for (name, state) in &health.services {
            println!("  {name}: {state}");
        }
        return Ok(());
    }

    let (default_start, default_end) = default_flight_dates(Local::now().date_naive());
    let draft = CampaignDraft {
        advertiser_name: cli.advertiser.unwrap_or_default(),
        campaign_name: cli.campaign.unwrap_or_default(),
        campaign_brief: cli.brief.unwrap_or_default(),
        budget: cli.budget,
        start_date: Some(cli.start_date.unwrap_or(default_start)),
        end_date: Some(cli.end_date.unwrap_or(default_end)),
    };
    let request = draft.validate()?;

    info!(
        advertiser = %request.advertiser_name,
        campaign = %request.campaign_name,
        base_url = %config.service.base_url,
        "generating campaign strategy"
    );
    let result = client.generate(&request).await?;

    if cli.json {
        println!("{}", result.to_pretty_json()?);
    } else {
        render(&result);
    }

    let mut session = Session::new();
    session.store(result);

    if cli.copy {
        let copied = SystemClipboard::new()
            .and_then(|mut clipboard| session.copy_to_clipboard(&mut clipboard));
        match copied {
            Ok(()) => println!("\nResults copied to clipboard!"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if cli.save {
        match session.export_to_file(Path::new(&config.export.output_dir)) {
            Ok(path) => println!("\nResults saved to {}", path.display()),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(())
}

fn render(result: &CampaignResult) {
    let overview = adcp_views::overview(result);
    println!("Campaign Overview");
    println!("  Advertiser:        {}", overview.advertiser);
    println!("  Campaign:          {}", overview.campaign);
    println!("  Budget:            {}", overview.budget);
    println!("  Flight Dates:      {}", overview.flight_dates);
    println!("  Status:            {}", overview.status);
    println!("  Signals Found:     {}", overview.signals_found);
    println!("  Products Available: {}", overview.products_available);
    println!("  Platform Coverage: {}", overview.platform_coverage);
    println!("  Targeting:         {}", overview.targeting);
    println!("  Recommendations:");
    for recommendation in &overview.recommendations {
        println!("    - {recommendation}");
    }

    let signals = adcp_views::signal_cards(result);
    println!("\nDiscovered Signals ({})", signals.len());
    if !signals.is_empty() {
        println!("{}", Table::new(&signals));
    }

    let products = adcp_views::product_cards(result);
    println!("\nAvailable Products ({})", products.len());
    if !products.is_empty() {
        println!("{}", Table::new(&products));
    }

    let strategy = adcp_views::strategy(result);
    println!("\nCampaign Strategy");
    println!("  Geographic:   {}", strategy.geographic);
    println!("  Audience:     {}", strategy.audience);
    println!("  Devices:      {}", strategy.devices);
    println!("  Content:      {}", strategy.content);
    println!("  Total Budget: {}", strategy.total_budget);
    println!("  Duration:     {}", strategy.duration);
    println!("  Pacing:       {}", strategy.pacing);
    println!("  Status:       {}", strategy.status);
}
