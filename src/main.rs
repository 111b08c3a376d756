mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use canvas_agenda_core::{AgendaError, EventsByDay, ics};
use clap::Parser;
use render::Render;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Export file looked for in the current directory when no path is given
const DEFAULT_FILE: &str = "canvas_export.ics";

#[derive(Parser)]
#[command(name = "canvas-agenda", version)]
#[command(about = "List the assignments in a Canvas calendar export, grouped by day")]
struct Cli {
    /// Path to the exported .ics file
    #[arg(default_value = DEFAULT_FILE)]
    file: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let Err(err) = run(&cli.file, &mut stdout) else {
        return ExitCode::SUCCESS;
    };

    if is_broken_pipe(&err) {
        debug!("stdout closed, stopping");
        return ExitCode::FAILURE;
    }

    if let Err(report_err) = report_error(&mut stdout, &err) {
        debug!(error = %report_err, "Could not report error");
    }
    ExitCode::FAILURE
}

fn run(path: &Path, out: &mut impl Write) -> Result<()> {
    let events = ics::load_events(path)?;
    let agenda = EventsByDay::from_events(events);

    if agenda.is_empty() {
        debug!(path = %path.display(), "No assignments to show");
    } else {
        debug!(days = agenda.len(), "Rendering agenda");
    }

    out.write_all(agenda.render().as_bytes())?;
    out.flush()?;

    Ok(())
}

/// Print `Error: ...`, plus a hint when the default export is missing
fn report_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    if is_missing_default_file(err) {
        writeln!(
            out,
            "Specify a file or rename it to '{}' and place in this directory.",
            DEFAULT_FILE
        )?;
    }
    out.flush()
}

/// Logs go to stderr so they never mix with the agenda on stdout
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn is_missing_default_file(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<AgendaError>(),
        Some(AgendaError::NotFound(path)) if path == Path::new(DEFAULT_FILE)
    )
}
