//! TaskRank CLI - rank tasks by priority and explain the ranking.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use taskrank_analysis::{AnalyzerConfig, TaskAnalyzer};
use taskrank_core::input::DATE_FORMAT;
use taskrank_core::{Strategy, TaskPayload};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(about = "Rank tasks by priority and explain why", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every task and report circular dependencies
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the top tasks to work on next
    Suggest {
        #[command(flatten)]
        input: InputArgs,
        /// Number of suggestions (1-3)
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=3))]
        limit: u8,
    },
    /// List the available strategies and their weights
    Strategies,
}

#[derive(Args)]
struct InputArgs {
    /// JSON payload file; omit or use `-` for stdin
    file: Option<PathBuf>,
    /// Strategy name, overriding the payload's
    #[arg(long)]
    strategy: Option<String>,
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

impl InputArgs {
    fn config(&self) -> AnalyzerConfig {
        match self.today {
            Some(today) => AnalyzerConfig::new().with_today(today),
            None => AnalyzerConfig::new(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the JSON response
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input } => {
            let payload = load_payload(&input).await?;
            let analyzer = TaskAnalyzer::new().with_config(input.config());
            let report = analyzer.analyze_payload(&payload)?;

            if report.has_cycles() {
                info!("{} circular dependencies found", report.circular_dependencies.len());
            }
            println!("{}", render(&report, input.compact)?);
        }
        Commands::Suggest { input, limit } => {
            let payload = load_payload(&input).await?;
            let analyzer = TaskAnalyzer::new()
                .with_config(input.config().with_suggest_limit(limit.into()));
            let suggestion = analyzer.suggest_payload(&payload);

            println!("{}", render(&suggestion, input.compact)?);
        }
        Commands::Strategies => {
            println!("{}", strategy_table());
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

async fn load_payload(input: &InputArgs) -> Result<TaskPayload> {
    let text = read_input(input.file.as_deref()).await?;
    let payload = parse_payload(&text, input.strategy.clone())?;
    debug!("Loaded payload with {} task entries", payload.tasks.len());
    Ok(payload)
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn parse_payload(text: &str, strategy: Option<String>) -> Result<TaskPayload> {
    let mut payload = TaskPayload::from_json(text).context("Failed to parse task payload")?;
    if strategy.is_some() {
        payload.strategy = strategy;
    }
    Ok(payload)
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

fn strategy_table() -> String {
    let mut lines = vec![format!(
        "{:<16} {:>8} {:>10} {:>7} {:>12}  {}",
        "STRATEGY", "URGENCY", "IMPORTANCE", "EFFORT", "DEPENDENCIES", "DESCRIPTION"
    )];
    for strategy in Strategy::ALL {
        let w = strategy.weights();
        lines.push(format!(
            "{:<16} {:>8.2} {:>10.2} {:>7.2} {:>12.2}  {}",
            strategy.as_str(),
            w.urgency,
            w.importance,
            w.effort,
            w.dependencies,
            strategy.description(),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_suggest_args() {
        let cli = Cli::try_parse_from([
            "taskrank", "suggest", "tasks.json", "--strategy", "fastest_wins", "--today", "2025-01-31",
            "--limit", "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Suggest { input, limit } => {
                assert_eq!(limit, 2);
                assert_eq!(input.file, Some(PathBuf::from("tasks.json")));
                assert_eq!(input.strategy.as_deref(), Some("fastest_wins"));
                assert_eq!(input.today, NaiveDate::from_ymd_opt(2025, 1, 31));
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["taskrank", "suggest", "--limit", "4"]).is_err());
        assert!(Cli::try_parse_from(["taskrank", "analyze", "--today", "tomorrow"]).is_err());
    }

    #[test]
    fn test_parse_payload_strategy_override() {
        let text = r#"{"tasks": [{"id": 1}], "strategy": "high_impact"}"#;

        let kept = parse_payload(text, None).unwrap();
        assert_eq!(kept.strategy.as_deref(), Some("high_impact"));

        let overridden = parse_payload(text, Some("deadline_driven".to_string())).unwrap();
        assert_eq!(overridden.strategy.as_deref(), Some("deadline_driven"));
    }

    #[test]
    fn test_parse_payload_error_message() {
        let err = parse_payload("{oops", None).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse task payload"));
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "title": "From disk"}}]"#).unwrap();

        let text = read_input(Some(file.path())).await.unwrap();
        let payload = parse_payload(&text, None).unwrap();
        assert_eq!(payload.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/definitely/not/here.json"))).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_end_to_end_analyze() {
        let payload = parse_payload(
            r#"{"tasks": [
                {"id": 1, "title": "Overdue", "due_date": "2025-01-01", "importance": 8},
                {"id": 2, "title": "Later", "due_date": "2025-12-31", "importance": 3}
            ]}"#,
            None,
        )
        .unwrap();
        let config = AnalyzerConfig::new().with_today(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let report = TaskAnalyzer::new().with_config(config).analyze_payload(&payload).unwrap();

        let compact = render(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["tasks"][0]["title"], "Overdue");
        assert_eq!(value["tasks"][0]["score_components"]["urgency"], 10.0);
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_strategy_table_lists_all() {
        let table = strategy_table();
        for strategy in Strategy::ALL {
            assert!(table.contains(strategy.as_str()));
        }
        assert!(table.contains("0.70"));
    }
}
