//! Narrative Planner CLI Application
//!
//! Command-line interface for planning narrative responses.

mod args;
mod cli;
mod mcp;
mod renderer;
mod repl;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands, SessionArgs, ShowArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, NarrativeMcpServer};
use narrative_core::{Session, SessionBuilder};
use renderer::TerminalRenderer;

fn build_session(playbook_dir: Option<std::path::PathBuf>, args: SessionArgs) -> Result<Session> {
    SessionBuilder::new()
        .with_playbook_dir(playbook_dir)
        .with_operation_name(args.name)
        .with_import(args.import)
        .build()
        .context("Failed to initialize session")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        playbook_dir,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Commands::Show(ShowArgs { file, summary })) => {
            let session = SessionBuilder::new()
                .with_import(Some(&file))
                .build()
                .with_context(|| format!("Failed to open playbook {}", file.display()))?;
            if summary {
                renderer.render(&session.store().summary())
            } else {
                renderer.render(session.store())
            }
        }
        Some(Commands::Serve(args)) => {
            let session = build_session(playbook_dir, args)?;
            info!("Starting narrative planner MCP server");
            run_stdio_server(NarrativeMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Commands::Session(args)) => {
            let session = build_session(playbook_dir, args)?;
            run_session(Cli::new(session, renderer))
        }
        None => {
            let session = build_session(playbook_dir, SessionArgs::default())?;
            run_session(Cli::new(session, renderer))
        }
    }
}

fn run_session(mut cli: Cli) -> Result<()> {
    info!("Session started");
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    repl::run(&mut cli, stdin.lock(), interactive)
}
