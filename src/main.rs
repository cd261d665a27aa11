// Sideline assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, env-filtered)
// 2. Seed and load config
// 3. Dispatch the subcommand: one decision, or a batch report from CSV

use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

use fourth_down_assistant::config;
use fourth_down_assistant::decision::engine;
use fourth_down_assistant::decision::values;
use fourth_down_assistant::report;

const USAGE: &str = "\
Usage:
  sideline decide <our-score> <opp-score> <minutes-left> <distance> <field-pos> [--json]
  sideline report [situations.csv] [--json]

Field position is measured from your own goal line (1-99).
";

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "config loaded: net punt {} yds, kickoff start {}",
        config.special_teams.avg_net_punt_yards, config.special_teams.kickoff_start_position
    );

    match positional.first().copied() {
        Some("decide") => run_decide(&positional[1..], &config, json),
        Some("report") => run_report(&positional[1..], &config, json),
        _ => {
            eprint!("{USAGE}");
            bail!("expected a subcommand: decide or report");
        }
    }
}

fn run_decide(args: &[&str], config: &config::Config, json: bool) -> anyhow::Result<()> {
    if args.len() != 5 {
        eprint!("{USAGE}");
        bail!("decide takes exactly 5 arguments, got {}", args.len());
    }
    let our_score = parse(args[0], "our-score")?;
    let opponent_score = parse(args[1], "opp-score")?;
    let minutes: f64 = parse(args[2], "minutes-left")?;
    let distance = parse(args[3], "distance")?;
    let field_position = parse(args[4], "field-pos")?;

    let situation = config
        .special_teams
        .situation(our_score, opponent_score, minutes, distance, field_position)
        .context("invalid situation")?;
    let action_values = values::compute_action_values(&situation);
    let recommendation = engine::decide(&situation)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        println!(
            "{}",
            report::render_decision(&situation, &action_values, &recommendation)
        );
    }
    Ok(())
}

fn run_report(args: &[&str], config: &config::Config, json: bool) -> anyhow::Result<()> {
    if args.len() > 1 {
        eprint!("{USAGE}");
        bail!("report takes at most 1 argument, got {}", args.len());
    }
    let path = args
        .first()
        .copied()
        .unwrap_or(config.data_paths.situations.as_str());

    let rows = report::evaluate_file(Path::new(path), &config.special_teams)
        .with_context(|| format!("failed to evaluate situations from {path}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", report::render_report(&rows));
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(raw: &str, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid {name}: {raw}"))
}

/// Initialize tracing to stderr so stdout stays clean for report output.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fourth_down_assistant=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
