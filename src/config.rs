// Configuration loading and parsing (special_teams.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decision::situation::{
    GameSituation, SituationError, DEFAULT_KICKOFF_START, DEFAULT_NET_PUNT_YARDS,
};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to seed config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub special_teams: SpecialTeamsConfig,
    pub data_paths: DataPaths,
}

/// Special-teams assumptions applied to situations that do not override
/// them. Evaluating a specific punter or kicker means editing one file
/// instead of every call site.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialTeamsConfig {
    /// Expected net punt yardage (gross distance minus expected return).
    pub avg_net_punt_yards: f64,
    /// Opponent starting field position after a made field goal and kickoff.
    pub kickoff_start_position: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    /// Default situations CSV for the `report` subcommand.
    pub situations: String,
}

impl Default for SpecialTeamsConfig {
    fn default() -> Self {
        SpecialTeamsConfig {
            avg_net_punt_yards: DEFAULT_NET_PUNT_YARDS,
            kickoff_start_position: DEFAULT_KICKOFF_START,
        }
    }
}

impl SpecialTeamsConfig {
    /// Build a validated situation that inherits this config's tunables.
    pub fn situation(
        &self,
        our_score: u32,
        opponent_score: u32,
        time_remaining_minutes: f64,
        distance_to_first_down: u32,
        field_position: u32,
    ) -> Result<GameSituation, SituationError> {
        let mut situation = GameSituation::new(
            our_score,
            opponent_score,
            time_remaining_minutes,
            distance_to_first_down,
            field_position,
        )?;
        situation.average_net_punt_yards = self.avg_net_punt_yards;
        situation.kickoff_start_position = self.kickoff_start_position;
        Ok(situation)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/special_teams.toml` relative
/// to the given `base_dir`.
///
/// This is the lower-level loading primitive that does not seed defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("special_teams.toml");
    let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
        path: path.clone(),
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure `config/special_teams.toml` exists by copying it from `defaults/`
/// when missing. Returns whether a copy was made.
pub fn ensure_config_files(base_dir: &Path) -> Result<bool, ConfigError> {
    let default_path = base_dir.join("defaults").join("special_teams.toml");
    let config_dir = base_dir.join("config");
    let target = config_dir.join("special_teams.toml");

    if target.exists() {
        return Ok(false);
    }
    if !default_path.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither {} nor {} found; run from the project root or ensure \
                 defaults/ is present",
                target.display(),
                default_path.display()
            ),
        });
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create {}: {e}", config_dir.display()),
    })?;
    std::fs::copy(&default_path, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "failed to copy {} to {}: {e}",
            default_path.display(),
            target.display()
        ),
    })?;

    Ok(true)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, seeding missing files from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let st = &config.special_teams;

    if !st.avg_net_punt_yards.is_finite()
        || st.avg_net_punt_yards <= 0.0
        || st.avg_net_punt_yards >= 100.0
    {
        return Err(ConfigError::ValidationError {
            field: "special_teams.avg_net_punt_yards".into(),
            message: format!(
                "must be between 0 and 100 exclusive, got {}",
                st.avg_net_punt_yards
            ),
        });
    }

    if st.kickoff_start_position < 1 || st.kickoff_start_position > 99 {
        return Err(ConfigError::ValidationError {
            field: "special_teams.kickoff_start_position".into(),
            message: format!("must be between 1 and 99, got {}", st.kickoff_start_position),
        });
    }

    if config.data_paths.situations.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data_paths.situations".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_TOML: &str = r#"
[special_teams]
avg_net_punt_yards = 42.5
kickoff_start_position = 25

[data_paths]
situations = "data/situations.csv"
"#;

    /// Helper: create a temp base dir with the given config text written to
    /// config/special_teams.toml.
    fn temp_base_with_config(name: &str, text: &str) -> PathBuf {
        let base = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(base.join("config")).unwrap();
        fs::write(base.join("config/special_teams.toml"), text).unwrap();
        base
    }

    #[test]
    fn loads_valid_config() {
        let base = temp_base_with_config("fd_config_valid", VALID_TOML);
        let config = load_config_from(&base).expect("should load valid config");
        assert_eq!(config.special_teams.avg_net_punt_yards, 42.5);
        assert_eq!(config.special_teams.kickoff_start_position, 25);
        assert_eq!(config.data_paths.situations, "data/situations.csv");
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn shipped_defaults_load_and_validate() {
        // Seed a temp dir from the repository's defaults/ and load it, so the
        // file we ship is known-good without touching the working tree.
        let root = std::env::current_dir().unwrap();
        let base = std::env::temp_dir().join("fd_config_shipped_defaults");
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(base.join("defaults")).unwrap();
        fs::copy(
            root.join("defaults/special_teams.toml"),
            base.join("defaults/special_teams.toml"),
        )
        .unwrap();

        assert!(ensure_config_files(&base).expect("should seed config"));
        let config = load_config_from(&base).expect("shipped defaults should load");
        assert_eq!(config.special_teams.avg_net_punt_yards, 40.0);
        assert_eq!(config.special_teams.kickoff_start_position, 27);

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn ensure_skips_existing_config() {
        let base = temp_base_with_config("fd_config_ensure_skips", VALID_TOML);
        // No defaults/ dir at all: existing config short-circuits the copy.
        let copied = ensure_config_files(&base).expect("should succeed");
        assert!(!copied);
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn ensure_errors_when_both_missing() {
        let base = std::env::temp_dir().join("fd_config_both_missing");
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(&base).unwrap();

        let err = ensure_config_files(&base).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("defaults"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let base = std::env::temp_dir().join("fd_config_missing");
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(base.join("config")).unwrap();

        let err = load_config_from(&base).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => {
                assert!(path.ends_with("special_teams.toml"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let base = temp_base_with_config("fd_config_bad_toml", "not valid [[[ toml");
        let err = load_config_from(&base).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn rejects_non_positive_punt_yards() {
        let text = VALID_TOML.replace("avg_net_punt_yards = 42.5", "avg_net_punt_yards = 0.0");
        let base = temp_base_with_config("fd_config_zero_punt", &text);
        let err = load_config_from(&base).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "special_teams.avg_net_punt_yards");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn rejects_out_of_range_kickoff_start() {
        let text =
            VALID_TOML.replace("kickoff_start_position = 25", "kickoff_start_position = 0");
        let base = temp_base_with_config("fd_config_bad_kickoff", &text);
        let err = load_config_from(&base).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "special_teams.kickoff_start_position");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn rejects_empty_situations_path() {
        let text = VALID_TOML.replace("\"data/situations.csv\"", "\"\"");
        let base = temp_base_with_config("fd_config_empty_path", &text);
        let err = load_config_from(&base).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "data_paths.situations");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn situation_helper_applies_tunables() {
        let special_teams = SpecialTeamsConfig {
            avg_net_punt_yards: 44.0,
            kickoff_start_position: 30,
        };
        let situation = special_teams.situation(7, 3, 12.0, 4, 45).unwrap();
        assert_eq!(situation.average_net_punt_yards, 44.0);
        assert_eq!(situation.kickoff_start_position, 30);
        assert_eq!(situation.field_position, 45);
    }

    #[test]
    fn situation_helper_still_validates() {
        let special_teams = SpecialTeamsConfig::default();
        assert!(special_teams.situation(0, 0, 10.0, 4, 0).is_err());
    }
}
