use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sitepulse")]
#[command(about = "Construction site dashboard state from the terminal")]
pub struct Cli {
    /// Load records from a JSON seed file instead of the built-in demo data
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dashboard overview: totals, trends, active projects, recent alerts
    Dashboard,
    /// Combined analytics across all four domains
    Analytics,
    /// The six AI recommendations
    Recommendations,
    /// Projects with predicted delay and budget outlook
    Projects,
    /// Safety alerts
    Alerts,
    /// Quality issues
    Issues,
    /// Equipment with maintenance advice
    Equipment,
    /// Resolve a safety alert, then show the dashboard
    ResolveAlert { id: String },
    /// Move a quality issue to review, then show the dashboard
    ReviewIssue { id: String },
    /// Mark a quality issue fixed, then show the dashboard
    FixIssue { id: String },
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Commands {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Commands::ResolveAlert { .. } | Commands::ReviewIssue { .. } | Commands::FixIssue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["sitepulse", "resolve-alert", "SA002", "--json"]).unwrap();
        assert!(cli.json);
        assert!(cli.command.is_mutation());
        assert!(matches!(cli.command, Commands::ResolveAlert { ref id } if id == "SA002"));
    }

    #[test]
    fn seed_path_is_optional() {
        let cli = Cli::try_parse_from(["sitepulse", "--seed", "site.json", "dashboard"]).unwrap();
        assert_eq!(cli.seed, Some(PathBuf::from("site.json")));
        assert!(!cli.command.is_mutation());
    }
}
