// Batch situation evaluation: CSV in, decision table out.
//
// One row per fourth-down decision point, with an optional label and
// optional special-teams overrides that fall back to the configured
// defaults. The rendered report is plain text; machine consumers take the
// same rows as JSON through the CLI flag.

use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::SpecialTeamsConfig;
use crate::decision::engine::{self, Recommendation};
use crate::decision::situation::{GameSituation, SituationError};
use crate::decision::values::ActionValues;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read situations file {path}: {source}")]
    Read { path: String, source: csv::Error },

    #[error("invalid situation in row {row} of {path}: {source}")]
    InvalidSituation {
        row: usize,
        path: String,
        source: SituationError,
    },
}

// ---------------------------------------------------------------------------
// CSV records
// ---------------------------------------------------------------------------

/// One CSV row. Empty tunable cells fall back to the configured defaults.
#[derive(Debug, Clone, Deserialize)]
struct SituationRecord {
    #[serde(default)]
    label: String,
    our_score: u32,
    opponent_score: u32,
    time_remaining_minutes: f64,
    distance_to_first_down: u32,
    field_position: u32,
    #[serde(default)]
    avg_net_punt_yards: Option<f64>,
    #[serde(default)]
    kickoff_start_position: Option<u32>,
}

/// A labeled situation with its recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedSituation {
    pub label: String,
    pub situation: GameSituation,
    pub recommendation: Recommendation,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Load every situation from `path` and run the engine over each row.
///
/// Rows are numbered from 1 (excluding the header) in error messages. A bad
/// row aborts the whole report; a batch with a typo'd field position should
/// be fixed, not silently truncated.
pub fn evaluate_file(
    path: &Path,
    defaults: &SpecialTeamsConfig,
) -> Result<Vec<EvaluatedSituation>, ReportError> {
    let shown_path = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|e| ReportError::Read {
        path: shown_path.clone(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<SituationRecord>().enumerate() {
        let row = index + 1;
        let record = record.map_err(|e| ReportError::Read {
            path: shown_path.clone(),
            source: e,
        })?;

        let mut situation = GameSituation::new(
            record.our_score,
            record.opponent_score,
            record.time_remaining_minutes,
            record.distance_to_first_down,
            record.field_position,
        )
        .map_err(|e| ReportError::InvalidSituation {
            row,
            path: shown_path.clone(),
            source: e,
        })?;
        situation.average_net_punt_yards = record
            .avg_net_punt_yards
            .unwrap_or(defaults.avg_net_punt_yards);
        situation.kickoff_start_position = record
            .kickoff_start_position
            .unwrap_or(defaults.kickoff_start_position);

        let recommendation =
            engine::decide(&situation).map_err(|e| ReportError::InvalidSituation {
                row,
                path: shown_path.clone(),
                source: e,
            })?;

        rows.push(EvaluatedSituation {
            label: record.label,
            situation,
            recommendation,
        });
    }

    info!("evaluated {} situations from {}", rows.len(), shown_path);
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the batch report as a plain-text table.
pub fn render_report(rows: &[EvaluatedSituation]) -> String {
    let generated = Local::now().format("%Y-%m-%d %H:%M");
    let mut out = String::new();
    out.push_str(&format!(
        "Fourth-down decision report (generated {generated})\n\n"
    ));
    out.push_str(&format!(
        "{:<28} {:>7} {:>6} {:>5} {:>9}  {:<5} {}\n",
        "SITUATION", "SCORE", "TIME", "DIST", "BALL ON", "CALL", "THRESHOLD"
    ));

    for row in rows {
        let s = &row.situation;
        out.push_str(&format!(
            "{:<28} {:>7} {:>6.1} {:>5} {:>9}  {:<5} {}\n",
            clipped(&row.label, 28),
            format!("{}-{}", s.our_score, s.opponent_score),
            s.time_remaining_minutes,
            s.distance_to_first_down,
            field_position_label(s.field_position),
            row.recommendation.decision().label(),
            threshold_label(&row.recommendation),
        ));
    }

    out
}

/// Render a single decision with its action values, for the CLI.
pub fn render_decision(
    situation: &GameSituation,
    values: &ActionValues,
    recommendation: &Recommendation,
) -> String {
    format!(
        "{}  (EP: go {:+.3}, punt {:+.3}, kick {:+.3})\n{}",
        recommendation.decision().label(),
        values.go,
        values.punt,
        values.kick,
        threshold_sentence(recommendation),
    )
}

/// Sideline phrasing: positions short of midfield are "own", past it "opp".
fn field_position_label(field_position: u32) -> String {
    match field_position {
        50 => "midfield".to_string(),
        fp if fp < 50 => format!("own {fp}"),
        fp => format!("opp {}", 100 - fp),
    }
}

fn threshold_label(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Go => "-".to_string(),
        Recommendation::Punt { needed_net_yards } if needed_net_yards.is_infinite() => {
            "unreachable".to_string()
        }
        Recommendation::Punt { needed_net_yards } => {
            format!("{needed_net_yards:.1} net yds")
        }
        Recommendation::Kick { needed_make_pct } => format!("{needed_make_pct:.1}% make"),
    }
}

fn threshold_sentence(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Go => "Keep the offense on the field.".to_string(),
        Recommendation::Punt { needed_net_yards } if needed_net_yards.is_infinite() => {
            "No net punt distance matches the best alternative here.".to_string()
        }
        Recommendation::Punt { needed_net_yards } => format!(
            "Punting needs at least {needed_net_yards:.1} net yards to match the best \
             alternative."
        ),
        Recommendation::Kick { needed_make_pct } => format!(
            "Kicking needs at least a {needed_make_pct:.1}% make probability to match \
             the best alternative."
        ),
    }
}

fn clipped(label: &str, max: usize) -> String {
    label.chars().take(max).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
