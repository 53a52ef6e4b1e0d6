use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use timeline::config::Config;
use timeline::script::{self, DEMO_SCRIPT};
use timeline::services::tracing_setup;
use timeline::Editor;

/// Replay edit scripts against a text buffer with bounded undo/redo
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "A text buffer with linear undo/redo history", long_about = None)]
#[command(version)]
struct Args {
    /// Script to run, one command per line. Use "-" for stdin. Runs the demo when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Number of history entries to keep (0 selects the default)
    #[arg(long, value_name = "N")]
    max_history: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log every history transition
    #[arg(long)]
    verbose: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the retained snapshots after the script finishes
    #[arg(long)]
    show_history: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(max_history) = args.max_history {
        config.history.max_history = max_history;
    }
    if args.verbose {
        config.log.verbose = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn read_script(path: Option<&Path>) -> AnyhowResult<String> {
    match path {
        None => Ok(DEMO_SCRIPT.to_string()),
        Some(path) if path == Path::new("-") => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
    }
}

fn print_history(editor: &Editor, out: &mut impl Write) -> io::Result<()> {
    let current = editor.info().position;
    writeln!(out, "--- history ({} snapshots) ---", editor.history().len())?;
    for (idx, snapshot) in editor.history().snapshots().enumerate() {
        let marker = if Some(idx) == current { '>' } else { ' ' };
        writeln!(
            out,
            "{marker} {idx}: {:?} ({})",
            snapshot.text(),
            snapshot.operation()
        )?;
    }
    Ok(())
}

fn main() -> AnyhowResult<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let config = load_config(&args)?;

    // Handle --dump-config early
    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    tracing_setup::init_global(args.log_file.as_deref(), config.log.verbose)
        .context("Failed to initialize logging")?;

    let source = read_script(args.script.as_deref())?;
    let commands = script::parse_script(&source).context("Failed to parse script")?;

    let mut editor = Editor::from_config(&config);
    tracing::info!(
        max_history = editor.history().max_history(),
        commands = commands.len(),
        "running script"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    script::run_script(&mut editor, &commands, &mut out).context("Failed to write transcript")?;

    if args.show_history {
        print_history(&editor, &mut out).context("Failed to write history")?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
