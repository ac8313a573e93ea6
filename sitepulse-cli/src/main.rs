mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sitepulse_state::{node, Seed, SiteState};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::{OutputFormat, SitePulseConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cfg = SitePulseConfig::load()?;
    init_tracing(&cfg.log_filter);

    if let Commands::ConfigPath = cli.command {
        return print_config_path(&cfg);
    }

    let seed = match cli.seed.as_ref().or(cfg.seed_path.as_ref()) {
        Some(path) => Seed::load(path)
            .with_context(|| format!("Failed to load seed from {}", path.display()))?,
        None => Seed::mock(),
    };
    let mut state = SiteState::new(seed);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        cfg.output
    };

    if cli.command.is_mutation() {
        watch_changes(&mut state);
    }

    match cli.command {
        Commands::Dashboard => emit(format, state.dashboard_metrics(), render::dashboard),
        Commands::Analytics => emit(format, state.ai_analytics(), render::analytics),
        Commands::Recommendations => {
            emit(format, state.recommendations(), render::recommendations)
        }
        Commands::Projects => emit(format, state.projects(), render::projects),
        Commands::Alerts => emit(format, state.safety_alerts(), render::alerts),
        Commands::Issues => emit(format, state.quality_issues(), render::issues),
        Commands::Equipment => emit(format, state.equipment(), render::equipment),
        Commands::ResolveAlert { id } => {
            state.resolve_alert(&id);
            emit(format, state.dashboard_metrics(), render::dashboard)
        }
        Commands::ReviewIssue { id } => {
            state.review_quality_issue(&id);
            emit(format, state.dashboard_metrics(), render::dashboard)
        }
        Commands::FixIssue { id } => {
            state.fix_quality_issue(&id);
            emit(format, state.dashboard_metrics(), render::dashboard)
        }
        Commands::ConfigPath => print_config_path(&cfg),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs analytics updates caused by a mutating command.
fn watch_changes(state: &mut SiteState) {
    state.subscribe::<node::SafetyAnalytics>(|s| {
        tracing::info!(
            safety_score = s.safety_score,
            critical = s.critical_alerts,
            incident_risk = s.incident_risk,
            "safety analytics"
        )
    });
    state.subscribe::<node::QualityAnalytics>(|q| {
        tracing::info!(
            quality_score = q.quality_score,
            compliance = q.compliance_score,
            outstanding_critical = q.critical_issues,
            "quality analytics"
        )
    });
}

fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}

fn print_config_path(cfg: &SitePulseConfig) -> Result<()> {
    let path = SitePulseConfig::config_path()?;
    if !path.exists() {
        cfg.save()?;
        tracing::info!(path = %path.display(), "created default config");
    }
    println!("{}", path.display());
    Ok(())
}
