mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use keycalc::calculator::copy_to_clipboard;
use keycalc::storage::FileStorage;
use keycalc::ui::{render, render_history, run_repl};
use keycalc::{Config, Session, parse_script};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = cli.storage {
        config.storage_path = Some(path);
    }
    if cli.no_color {
        config.color = false;
    }

    let storage_path = config.storage_path()?;
    let storage = FileStorage::open(&storage_path)
        .with_context(|| format!("Failed to open storage {}", storage_path.display()))?;
    let mut session = Session::new(storage, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            tracing::info!("starting interactive mode");
            let stdin = std::io::stdin();
            run_repl(&mut session, stdin.lock(), &mut out, config.color)
                .context("Interactive session failed")?;
        }
        Some(Command::Eval { script, copy }) => {
            let inputs = parse_script(&script.join(" "))?;
            for input in inputs {
                session.dispatch(input).context("Failed to save history")?;
            }

            let frame = session.frame();
            writeln!(out, "{}", render(&frame, session.theme(), config.color))?;

            if copy {
                copy_to_clipboard(&frame.current).context("Failed to copy result")?;
            }
        }
        Some(Command::History { clear }) => {
            if clear {
                session.clear_history().context("Failed to clear history")?;
            } else {
                writeln!(out, "{}", render_history(session.history().entries()))?;
            }
        }
        Some(Command::Theme { next }) => {
            let theme = if next {
                session.cycle_theme().context("Failed to save theme")?
            } else {
                session.theme()
            };
            writeln!(out, "{theme}")?;
        }
    }

    Ok(())
}
