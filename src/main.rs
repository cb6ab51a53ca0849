//! CLI entry point for missive.

mod cli;

use std::fs;
use std::sync::Arc;

use clap::Parser;
use missive::clipboard::{ClipboardAccess, SystemClipboard};
use missive::commands::CommandRegistry;
use missive::config::{load_config, Config};
use missive::error::{DispatchError, MissiveError};
use missive::markdown;
use missive::process::{ProcessRunner, SystemRunner};
use missive::render::Renderer;
use missive::segment::segment;
use missive::staging::Staging;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let color = config.display.color && !args.no_color;
    let renderer = Renderer::new(color);

    if let Err(e) = run(&args, &config, &renderer) {
        renderer.error(&e.to_string());
        if matches!(
            e,
            MissiveError::Dispatch(DispatchError::Unknown(_) | DispatchError::Ambiguous(_))
        ) {
            renderer.warn("Run `missive --help` for the subcommand list.");
        }
        std::process::exit(1);
    }
}

fn run(args: &cli::Args, config: &Config, renderer: &Renderer) -> Result<(), MissiveError> {
    let runner: Arc<dyn ProcessRunner> = Arc::new(SystemRunner);
    let clipboard: Arc<dyn ClipboardAccess> = Arc::new(SystemClipboard);

    // The staging directory lives for exactly this scope; dropping the last
    // handle on any exit path removes it.
    let staging = Staging::new(&config.remote.copy_program, Arc::clone(&runner))
        .map_err(MissiveError::Staging)?;
    let registry = CommandRegistry::builtin(staging, runner, Arc::clone(&clipboard));

    let segments = segment(&args.tokens)?;
    let mut entries = Vec::new();
    for seg in &segments {
        entries.extend(registry.dispatch(seg)?);
    }

    let document = markdown::render(&entries);
    deliver(args, renderer, &clipboard, &document)
}

/// Send the finished document to its single destination.
fn deliver(
    args: &cli::Args,
    renderer: &Renderer,
    clipboard: &Arc<dyn ClipboardAccess>,
    document: &str,
) -> Result<(), MissiveError> {
    if args.clipboard {
        clipboard
            .write_text(document)
            .map_err(|e| MissiveError::Clipboard(e.to_string()))?;
        renderer.section("markdown copied to the clipboard");
        return Ok(());
    }

    // clap guarantees exactly one destination, so `output` is set here.
    let Some(dest) = args.output.as_deref() else {
        return Ok(());
    };
    if dest == "-" {
        print!("{document}");
        return Ok(());
    }

    fs::write(dest, document).map_err(|e| MissiveError::Output {
        dest: dest.to_string(),
        source: e,
    })?;
    renderer.section("markdown written");
    renderer.field("path", dest);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MISSIVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
