use anyhow::{bail, Context};
use api_client::{HttpRecommendationClient, RecommendationClient, RecommendationResponse};
use calculator::compute_sip;
use charts::DonutLayout;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use configuration::{init_tracing, load_config_from, Config, LogLevel};
use core_types::{AllocationSlice, SipInput, Theme};
use preferences::{DisclaimerGate, JsonFileStore, PreferenceStore, ThemeIcons, ThemeManager};
use presentation::{
    abbreviate_inr, allocation_explanation, fund_sections, legend_entries,
    recommendation_header, render_donut_svg, RecommendationForm, SipSummary,
    GENERIC_FAILURE_MESSAGE,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The main entry point for the FundWise command-line tool.
#[tokio::main]
async fn main() {
    // FUNDWISE__* overrides may live in a .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(2);
        }
    };

    let mut logging = config.logging.clone();
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    // Keep the guard alive so buffered file logs are flushed on exit.
    let _log_guard = match init_tracing(&logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };

    // Execute the appropriate command
    let outcome = match cli.command {
        Commands::Sip(args) => handle_sip(args, &config),
        Commands::Donut(args) => handle_donut(args, &config),
        Commands::Recommend(args) => handle_recommend(args, &config).await,
        Commands::Theme { action } => handle_theme(action, &config),
        Commands::Disclaimer { action } => handle_disclaimer(action, &config),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// SIP projections, allocation donuts and fund recommendations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides `logging.level` from the configuration.
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the value of a monthly SIP.
    Sip(SipArgs),
    /// Lay out an arbitrary allocation as a donut.
    Donut(DonutArgs),
    /// Ask the recommendation service for an allocation and fund shortlist.
    Recommend(RecommendArgs),
    /// Show or change the colour theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Show or accept the legal disclaimer.
    Disclaimer {
        #[command(subcommand)]
        action: DisclaimerAction,
    },
}

#[derive(Parser)]
struct SipArgs {
    /// Monthly contribution (defaults to `calculator.monthly_contribution`).
    #[arg(long)]
    monthly: Option<String>,

    /// Expected annual return in percent (defaults to `calculator.annual_rate_percent`).
    #[arg(long)]
    rate: Option<String>,

    /// Duration in whole years (defaults to `calculator.years`).
    #[arg(long)]
    years: Option<String>,

    /// Write the invested/returns donut to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser)]
struct DonutArgs {
    /// A slice as `Label=Percent`, e.g. `--slice Equity=65`. Repeat in drawing order.
    #[arg(long = "slice", required = true)]
    slices: Vec<String>,

    /// Ring radius (defaults to `chart.radius`).
    #[arg(long)]
    radius: Option<f64>,

    /// Text in the middle of the donut.
    #[arg(long, default_value = "Your Mix")]
    label: String,

    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser)]
struct RecommendArgs {
    /// Monthly SIP amount.
    #[arg(long)]
    sip: f64,

    /// Investment duration in years.
    #[arg(long)]
    years: u32,

    /// The investment goal, e.g. `retirement`.
    #[arg(long, default_value = "")]
    goal: String,

    /// Write the allocation donut to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
    Set { theme: Theme },
}

#[derive(Subcommand)]
enum DisclaimerAction {
    /// Whether the popup would be shown on `path`.
    Status {
        #[arg(long, default_value = "/")]
        path: String,
    },
    Accept,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_sip(args: SipArgs, config: &Config) -> anyhow::Result<()> {
    let defaults = &config.calculator;
    let input = SipInput::from_fields(
        &args.monthly.unwrap_or_else(|| defaults.monthly_contribution.to_string()),
        &args.rate.unwrap_or_else(|| defaults.annual_rate_percent.to_string()),
        &args.years.unwrap_or_else(|| defaults.years.to_string()),
    );
    input.validate()?;

    let result = compute_sip(&input)?;
    let summary = SipSummary::new(&input, &result);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["", "Amount", "Short"])
        .add_row(vec!["Monthly investment", summary.monthly.as_str(), ""])
        .add_row(vec!["Expected return", summary.rate.as_str(), ""])
        .add_row(vec!["Time period", summary.period.as_str(), ""])
        .add_row(vec![
            "Invested amount".to_string(),
            summary.invested.clone(),
            abbreviate_inr(result.invested_amount),
        ])
        .add_row(vec![
            "Estimated returns".to_string(),
            summary.returns.clone(),
            abbreviate_inr(result.estimated_returns),
        ])
        .add_row(vec![
            "Total value".to_string(),
            summary.total.clone(),
            abbreviate_inr(result.future_value),
        ]);
    println!("{table}");

    if let Some(path) = args.svg {
        let layout = DonutLayout::new(config.chart.radius)?;
        let arcs = layout.layout(&summary.shares)?;
        write_svg(&path, &render_donut_svg(&arcs, &config.chart, &summary.total))?;
    }
    Ok(())
}

fn parse_slice(raw: &str) -> anyhow::Result<AllocationSlice> {
    let Some((label, percent)) = raw.split_once('=') else {
        bail!("slice '{}' is not in Label=Percent form", raw);
    };
    let percent: f64 = percent
        .trim()
        .parse()
        .with_context(|| format!("slice '{}' has a non-numeric percent", raw))?;
    Ok(AllocationSlice::new(label.trim(), percent))
}

fn handle_donut(args: DonutArgs, config: &Config) -> anyhow::Result<()> {
    let slices = args
        .slices
        .iter()
        .map(|raw| parse_slice(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let layout = DonutLayout::new(args.radius.unwrap_or(config.chart.radius))?;
    let arcs = layout.layout(&slices)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Label", "Percent", "Arc length", "Offset", "Colour"]);
    for arc in &arcs {
        table.add_row(vec![
            arc.label.clone(),
            format!("{}%", arc.percent),
            format!("{:.2}", arc.arc_length),
            format!("{:.2}", arc.rotation_offset),
            format!("{:?}", arc.color),
        ]);
    }
    println!("{table}");
    println!("Circumference: {:.2}", layout.circumference());

    if let Some(path) = args.svg {
        let mut chart = config.chart.clone();
        chart.radius = layout.radius();
        write_svg(&path, &render_donut_svg(&arcs, &chart, &args.label))?;
    }
    Ok(())
}

/// Submits the form through `client`.
///
/// A missing goal is reported as-is, before any call is made. Any service
/// failure is logged and surfaces only as `GENERIC_FAILURE_MESSAGE`, leaving
/// the form on its input view.
async fn request_recommendation(
    form: &mut RecommendationForm,
    args: &RecommendArgs,
    client: &dyn RecommendationClient,
) -> anyhow::Result<RecommendationResponse> {
    if !args.goal.trim().is_empty() {
        form.select_goal(&args.goal);
    }
    let request = form.submit(args.sip, args.years)?;

    match client.recommend(&request).await {
        Ok(response) => {
            form.show_results();
            Ok(response)
        }
        Err(e) => {
            tracing::error!(error = %e, "Fund recommendation failed.");
            bail!(GENERIC_FAILURE_MESSAGE);
        }
    }
}

async fn handle_recommend(args: RecommendArgs, config: &Config) -> anyhow::Result<()> {
    let client = HttpRecommendationClient::new(&config.recommendation)?;
    let mut form = RecommendationForm::new();
    let response = request_recommendation(&mut form, &args, &client).await?;

    println!("{}", recommendation_header(&response));
    println!();
    for entry in legend_entries(&response.allocation) {
        println!("  {}", entry.text);
    }
    println!();
    println!("{}", allocation_explanation(&response.allocation));

    for section in fund_sections(&response) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec![section.title.as_str(), "Sub-category", "Metric"]);
        for card in &section.cards {
            table.add_row(vec![
                card.scheme_name.as_str(),
                card.sub_category.as_str(),
                card.metric.as_str(),
            ]);
        }
        println!();
        println!("{table}");
    }

    if let Some(path) = args.svg {
        let layout = DonutLayout::new(config.chart.radius)?;
        let arcs = layout.layout(&response.allocation.to_slices())?;
        write_svg(&path, &render_donut_svg(&arcs, &config.chart, "Your Mix"))?;
    }
    Ok(())
}

fn open_store(config: &Config) -> anyhow::Result<Arc<dyn PreferenceStore>> {
    let store = JsonFileStore::open(&config.preferences.path).with_context(|| {
        format!(
            "could not open preferences at {}",
            config.preferences.path.display()
        )
    })?;
    Ok(Arc::new(store))
}

fn handle_theme(action: ThemeAction, config: &Config) -> anyhow::Result<()> {
    let mut themes = ThemeManager::new(open_store(config)?);
    themes.subscribe(|theme| {
        let icons = ThemeIcons::for_theme(theme);
        tracing::debug!(sun = icons.sun_visible, moon = icons.moon_visible, "Theme icons updated.");
    });

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            themes.toggle()?;
        }
        ThemeAction::Set { theme } => themes.set(theme)?,
    }
    println!("{}", themes.current());
    Ok(())
}

fn handle_disclaimer(action: DisclaimerAction, config: &Config) -> anyhow::Result<()> {
    let gate = DisclaimerGate::new(open_store(config)?);
    match action {
        DisclaimerAction::Status { path } => {
            let accepted = gate.is_accepted()?;
            let shown = gate.should_show(&path)?;
            println!("accepted: {}, shown on '{}': {}", accepted, path, shown);
        }
        DisclaimerAction::Accept => {
            gate.accept()?;
            println!("Disclaimer accepted.");
        }
    }
    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    std::fs::write(path, svg).with_context(|| format!("could not write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Donut chart written.");
    println!("Chart written to {}", path.display());
    Ok(())
}
