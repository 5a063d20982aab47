use clap::Parser;
use lexicount::analysis::analyze;
use lexicount::app::{App, AppEvent};
use lexicount::config::Config;
use lexicount::input::load_path;
use lexicount::ui::view::report_text;
use lexicount::ui::TuiManager;
use std::path::PathBuf;
use tracing::info;

/// Text statistics and pronoun, preposition and article counts
#[derive(Parser, Debug)]
#[command(name = "lexicount", version)]
struct Cli {
    /// Text, PDF or EPUB file to load
    path: Option<String>,

    /// Print a report for PATH and exit instead of starting the TUI
    #[arg(long, requires = "path")]
    report: bool,

    /// Print the report as JSON (implies --report)
    #[arg(long, requires = "path")]
    json: bool,

    /// Log file (default: lexicount.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error, or a filter directive
    #[arg(long)]
    log_level: Option<String>,

    /// Show the activity console at startup
    #[arg(long)]
    activity: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(file) = cli.log_file {
        config.logging.file = file;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.display.show_activity = cli.activity;

    lexicount::logging::init(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    if cli.report || cli.json {
        // `requires = "path"` guarantees a path here
        let path = cli.path.unwrap_or_default();
        let document = load_path(&path)?;
        let report = analyze(&document.text)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report_text(&report));
        }
        return Ok(());
    }

    let mut app = App::new(config);
    if let Some(path) = cli.path {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    info!("exiting");
    Ok(())
}
