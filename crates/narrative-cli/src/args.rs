use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Narrative response planner
///
/// Organize anticipated adversary narratives into the phases of an operation,
/// draft a narrative response package (press release, social posts, imagery
/// tasking) for each of them, and exchange the whole plan as a portable JSON
/// playbook. Runs as an interactive line session or as an MCP (Model Context
/// Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "np")]
pub struct Args {
    /// Directory exported playbooks are written to. Defaults to
    /// $XDG_DATA_HOME/narrative-planner/
    #[arg(long, global = true)]
    pub playbook_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the narrative planner
///
/// Without a command, `np` starts an interactive session on a fresh plan.
#[derive(Subcommand)]
pub enum Commands {
    /// Plan interactively, one command per line on stdin
    #[command(alias = "s")]
    Session(SessionArgs),
    /// Render a playbook file
    Show(ShowArgs),
    /// Start the MCP server
    Serve(SessionArgs),
}

/// How the plan of a session or server starts out.
#[derive(ClapArgs, Default)]
pub struct SessionArgs {
    /// Playbook file to import at start
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Operation name of the initial plan; an imported playbook's name wins
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Playbook file to render
    pub file: PathBuf,

    /// Show phase and package tallies instead of the full plan
    #[arg(long)]
    pub summary: bool,
}
