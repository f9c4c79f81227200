//! studymate - terminal study session runner
//!
//! Wires the core components together for a single focused session:
//! - Settings loading
//! - Store initialization
//! - Timer engine with a console notifier
//! - A 1 Hz tick loop, then the day's summary

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use studymate_api::Subject;
use studymate_config::Settings;
use studymate_core::{Notifier, TimerEngine, TimerEvent};
use studymate_store::{SqliteStore, Store};
use studymate_util::{
    MonotonicInstant, default_config_path, default_data_dir, format_hms, format_minutes,
    format_mmss,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Run a focused study session from the terminal
#[derive(Parser, Debug)]
#[command(name = "studymate")]
#[command(about = "Run a focused study session from the terminal", long_about = None)]
struct Args {
    /// Subject to study: korean, math, english, science, social, other
    #[arg(short, long)]
    subject: Subject,

    /// Session length in minutes
    #[arg(short, long, default_value_t = 25)]
    minutes: u64,

    /// Run the session in pomodoro mode
    #[arg(short, long)]
    pomodoro: bool,

    /// Note to attach to the study record
    #[arg(short, long)]
    note: Option<String>,

    /// Settings file path (default: ~/.config/studymate/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Data directory override (or set STUDYMATE_DATA_DIR env var)
    #[arg(short, long, env = "STUDYMATE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

/// Notifier that prints to the terminal
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        println!("\n[{}] {}", title, body);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    // Load settings; a missing file just means defaults
    let settings = if args.config.exists() {
        let settings = studymate_config::load_settings(&args.config)
            .with_context(|| format!("Failed to load settings from {:?}", args.config))?;
        info!(config_path = %args.config.display(), "Settings loaded");
        settings
    } else {
        info!("No settings file found, using defaults");
        Settings::default()
    };

    // Initialize store
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

    let db_path = data_dir.join("studymate.db");
    let store: Arc<dyn Store> = Arc::new(
        SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open database {:?}", db_path))?,
    );

    info!(db_path = %db_path.display(), "Store initialized");

    let mut engine = TimerEngine::new(settings, store, Arc::new(ConsoleNotifier));

    // A leftover snapshot belongs to an interactive UI session; the
    // one-shot runner starts fresh
    let now = Local::now();
    engine.restore_from_storage(now);
    if engine.is_active() {
        warn!("Discarding an interrupted session snapshot");
        engine.reset();
    }

    if args.pomodoro {
        engine.toggle_pomodoro(now);
    }

    let t0 = MonotonicInstant::now();
    engine.start(args.subject, None, now, t0);
    if let Some(note) = &args.note {
        engine.set_note(note.clone());
    }

    println!(
        "{} 학습을 시작합니다 ({})",
        args.subject.label(),
        format_minutes(args.minutes as u32)
    );

    let target = Duration::from_secs(args.minutes * 60);
    loop {
        std::thread::sleep(Duration::from_secs(1));

        let now = Local::now();
        let now_mono = MonotonicInstant::now();
        for event in engine.tick(now, now_mono) {
            if let TimerEvent::PhaseChanged {
                next,
                completed_sessions,
                ..
            } = event
            {
                info!(next = ?next, completed_sessions, "Pomodoro phase changed");
            }
        }

        print!("\r{} {}", args.subject.label(), format_hms(engine.elapsed_seconds()));
        if engine.pomodoro().enabled {
            print!(" (남은 시간 {})", format_mmss(engine.phase_remaining_seconds()));
        }
        std::io::stdout().flush().ok();

        if now_mono.saturating_duration_since(t0) >= target {
            break;
        }
    }
    println!();

    let now = Local::now();
    engine.stop(now, MonotonicInstant::now());

    if let Some(record) = engine.complete_session(now) {
        println!(
            "학습 완료: {} {}",
            record.subject.label(),
            format_minutes((record.duration_seconds / 60) as u32)
        );

        let summary = engine.today_summary(now.date_naive());
        println!(
            "오늘 총 학습: {} ({}회)",
            format_minutes((summary.total_seconds / 60) as u32),
            summary.total_sessions
        );
        for entry in &summary.subjects {
            println!(
                "  {}: {}",
                entry.subject.label(),
                format_minutes((entry.seconds / 60) as u32)
            );
        }
    }

    Ok(())
}
