//! Settings validation CLI tool
//!
//! Validates a studymate settings file and reports any errors.

use std::path::PathBuf;
use std::process::ExitCode;
use studymate_util::default_config_path;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            eprintln!("Usage: validate-settings [settings-file]");
            eprintln!();
            eprintln!("Validates a studymate settings file.");
            eprintln!();
            eprintln!("If no path is provided, uses: {}", default_path.display());
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-settings {}", default_path.display());
            eprintln!("  validate-settings config.example.toml");
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Settings file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match studymate_config::load_settings(&config_path) {
        Ok(settings) => {
            println!("✓ Settings are valid");
            println!();
            println!("Summary:");
            println!(
                "  Settings version: {}",
                studymate_config::CURRENT_CONFIG_VERSION
            );
            println!(
                "  Pomodoro: {}m work / {}m break / {}m long break, long break every {} sessions",
                settings.pomodoro.work_minutes,
                settings.pomodoro.short_break_minutes,
                settings.pomodoro.long_break_minutes,
                settings.pomodoro.sessions_before_long_break,
            );
            println!(
                "  Snapshot max age: {}m, autosave every {}s",
                settings.timer.snapshot_max_age.as_secs() / 60,
                settings.timer.autosave_interval.as_secs(),
            );
            println!(
                "  Plan defaults: {} min/day across {} slot(s), weekends {}",
                settings.plan.daily_study_minutes,
                settings.plan.time_slots.len(),
                if settings.plan.study_on_weekends {
                    "on"
                } else {
                    "off"
                },
            );

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Settings validation failed");
            eprintln!();
            match &e {
                studymate_config::ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                studymate_config::ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                studymate_config::ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                studymate_config::ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported settings version: {} (expected {})",
                        ver,
                        studymate_config::CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}
