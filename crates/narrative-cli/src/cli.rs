//! Session command definitions and handlers
//!
//! Every line typed into a session is parsed with clap's derive API into a
//! [`LineCommand`]. Argument wrappers convert into the core parameter types,
//! keeping clap attributes out of the core crate:
//!
//! ```text
//! Input line → tokens → Line (clap) → Core Params → PlanStore
//! ```
//!
//! [`Cli`] applies each command to the session's store and renders the
//! outcome followed by the updated plan.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use narrative_core::{
    params::*, CreateResult, DeleteResult, NarrativeId, OperationStatus, ResponsePackageUpdate,
    Session, UpdateResult,
};

use crate::renderer::TerminalRenderer;

/// One command line of an interactive session
#[derive(Parser)]
#[command(
    name = "np>",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

/// Commands available inside a session
#[derive(Subcommand)]
pub enum LineCommand {
    /// Rename the operation
    Name(SetOperationNameArgs),
    /// Add or remove phases
    #[command(alias = "p")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Add, edit or remove narratives
    #[command(alias = "n")]
    Narr {
        #[command(subcommand)]
        command: NarrativeCommands,
    },
    /// Edit narrative response packages
    Nrp {
        #[command(subcommand)]
        command: PackageCommands,
    },
    /// Show the plan
    #[command(alias = "ls")]
    Show,
    /// Show phase and package tallies
    Summary,
    /// Write the plan to a playbook file
    Export(ExportArgs),
    /// Replace the plan with a playbook file
    Import(ImportArgs),
    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

// ============================================================================
// Argument wrappers
// ============================================================================

/// Rename the operation
///
/// The remaining words form the new name, so quoting is optional. An empty
/// name is allowed.
#[derive(Args)]
pub struct SetOperationNameArgs {
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "New operation name"
    )]
    pub name: Vec<String>,
}

impl From<SetOperationNameArgs> for SetOperationName {
    fn from(val: SetOperationNameArgs) -> Self {
        SetOperationName {
            name: val.name.join(" "),
        }
    }
}

/// Refer to a phase by name; quote names containing spaces
#[derive(Args)]
pub struct PhaseArgs {
    #[arg(help = "Phase name, e.g. \"Phase 0: Shaping\"")]
    pub phase: String,
}

impl From<PhaseArgs> for PhaseRef {
    fn from(val: PhaseArgs) -> Self {
        PhaseRef { phase: val.phase }
    }
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Append a new generated phase
    #[command(alias = "a")]
    Add,
    /// Remove a phase with all of its narratives
    #[command(aliases = ["remove", "d"])]
    Rm(PhaseArgs),
}

/// Refer to a narrative by its ID
#[derive(Args)]
pub struct NarrativeArgs {
    #[arg(help = "Narrative ID, e.g. narr_3")]
    pub id: String,
}

impl From<NarrativeArgs> for NarrativeRef {
    fn from(val: NarrativeArgs) -> Self {
        NarrativeRef { id: val.id }
    }
}

/// Replace a narrative's text with the remaining words
#[derive(Args)]
pub struct SetTextArgs {
    #[arg(help = "Narrative ID, e.g. narr_3")]
    pub id: String,
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "New narrative text"
    )]
    pub text: Vec<String>,
}

impl From<SetTextArgs> for SetNarrativeText {
    fn from(val: SetTextArgs) -> Self {
        SetNarrativeText {
            id: val.id,
            text: val.text.join(" "),
        }
    }
}

#[derive(Args)]
pub struct RemoveNarrativeArgs {
    #[arg(help = "Name of the phase holding the narrative")]
    pub phase: String,
    #[arg(help = "Narrative ID, e.g. narr_3")]
    pub id: String,
}

impl From<RemoveNarrativeArgs> for RemoveNarrative {
    fn from(val: RemoveNarrativeArgs) -> Self {
        RemoveNarrative {
            phase: val.phase,
            id: val.id,
        }
    }
}

#[derive(Subcommand)]
pub enum NarrativeCommands {
    /// Add a narrative to the end of a phase
    #[command(alias = "a")]
    Add(PhaseArgs),
    /// Replace a narrative's text
    #[command(alias = "t")]
    Text(SetTextArgs),
    /// Remove a narrative and its response package
    #[command(aliases = ["remove", "d"])]
    Rm(RemoveNarrativeArgs),
}

/// Update fields of a narrative's response package
///
/// Only the given fields change. Imagery tasks are a comma-separated list
/// that replaces the current selection.
#[derive(Args)]
pub struct SetPackageArgs {
    #[arg(help = "Narrative ID, e.g. narr_3")]
    pub id: String,
    #[arg(short, long, help = "Press release text")]
    pub press_release: Option<String>,
    #[arg(short, long, help = "Social media posts")]
    pub social_posts: Option<String>,
    #[arg(
        short,
        long = "imagery",
        value_enum,
        value_delimiter = ',',
        help = "Imagery tasking as comma-separated list"
    )]
    pub imagery: Option<Vec<ImageryTaskArg>>,
    #[arg(long, conflicts_with = "imagery", help = "Clear the imagery tasking")]
    pub no_imagery: bool,
    #[arg(long, value_enum, help = "New package status")]
    pub status: Option<PackageStatusArg>,
}

impl From<SetPackageArgs> for UpdateResponsePackage {
    fn from(val: SetPackageArgs) -> Self {
        let imagery_tasks = if val.no_imagery {
            Some(Vec::new())
        } else {
            val.imagery
                .map(|tasks| tasks.iter().map(ToString::to_string).collect())
        };

        UpdateResponsePackage {
            id: val.id,
            press_release: val.press_release,
            social_posts: val.social_posts,
            imagery_tasks,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum PackageCommands {
    /// Open the editor, creating a draft package if there is none
    #[command(alias = "o")]
    Open(NarrativeArgs),
    /// Point the editor at a narrative without creating a package
    #[command(alias = "e")]
    Edit(NarrativeArgs),
    /// Update package fields
    #[command(alias = "s")]
    Set(SetPackageArgs),
    /// Close the editor
    #[command(alias = "c")]
    Close,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "Destination file; defaults to <playbook dir>/<Operation_Name>_Playbook.json")]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "Playbook file to import")]
    pub path: PathBuf,
}

/// Command-line representation of response package statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PackageStatusArg {
    Draft,
    #[value(name = "for-review", alias = "review")]
    ForReview,
    Approved,
    Executed,
}

impl std::fmt::Display for PackageStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageStatusArg::Draft => write!(f, "Draft"),
            PackageStatusArg::ForReview => write!(f, "For Review"),
            PackageStatusArg::Approved => write!(f, "Approved"),
            PackageStatusArg::Executed => write!(f, "Executed"),
        }
    }
}

/// Command-line representation of the imagery tasking options
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageryTaskArg {
    #[value(name = "overhead-shot", alias = "overhead")]
    OverheadShot,
    #[value(name = "on-the-ground-video", alias = "video")]
    OnTheGroundVideo,
    #[value(name = "personnel-interviews", alias = "interviews")]
    PersonnelInterviews,
    #[value(name = "b-roll-footage", alias = "b-roll")]
    BRollFootage,
}

impl std::fmt::Display for ImageryTaskArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageryTaskArg::OverheadShot => write!(f, "Overhead shot"),
            ImageryTaskArg::OnTheGroundVideo => write!(f, "On-the-ground video"),
            ImageryTaskArg::PersonnelInterviews => write!(f, "Personnel interviews"),
            ImageryTaskArg::BRollFootage => write!(f, "B-roll footage"),
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies session commands to one plan and renders the results.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub fn handle(&mut self, command: LineCommand) -> Result<Flow> {
        match command {
            LineCommand::Name(args) => self.set_operation_name(args.into())?,
            LineCommand::Phase { command } => self.handle_phase_command(command)?,
            LineCommand::Narr { command } => self.handle_narrative_command(command)?,
            LineCommand::Nrp { command } => self.handle_package_command(command)?,
            LineCommand::Show => self.show_plan()?,
            LineCommand::Summary => self.show_summary()?,
            LineCommand::Export(args) => self.export(args.path.as_deref())?,
            LineCommand::Import(args) => self.import(&args.path)?,
            LineCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_phase_command(&mut self, command: PhaseCommands) -> Result<()> {
        match command {
            PhaseCommands::Add => self.add_phase(),
            PhaseCommands::Rm(args) => self.remove_phase(&args.into()),
        }
    }

    fn handle_narrative_command(&mut self, command: NarrativeCommands) -> Result<()> {
        match command {
            NarrativeCommands::Add(args) => self.add_narrative(&args.into()),
            NarrativeCommands::Text(args) => self.set_narrative_text(args.into()),
            NarrativeCommands::Rm(args) => self.remove_narrative(&args.into()),
        }
    }

    fn handle_package_command(&mut self, command: PackageCommands) -> Result<()> {
        match command {
            PackageCommands::Open(args) => self.open_package(&args.into()),
            PackageCommands::Edit(args) => self.edit_package(args.into()),
            PackageCommands::Set(args) => self.update_package(args.into()),
            PackageCommands::Close => self.close_package(),
        }
    }

    /// Render the plan, followed by the package editor when one is open.
    pub fn show_plan(&self) -> Result<()> {
        self.renderer.render(self.session.store())
    }

    fn show_summary(&self) -> Result<()> {
        self.renderer.render(&self.session.store().summary())
    }

    fn set_operation_name(&mut self, params: SetOperationName) -> Result<()> {
        debug!("set_operation_name: {params:?}");
        let status = OperationStatus::success(format!("Operation renamed to '{}'", params.name));
        self.session.store_mut().set_operation_name(params.name);
        self.renderer.render(&status)?;
        self.show_plan()
    }

    fn add_phase(&mut self) -> Result<()> {
        let name = self.session.store_mut().add_phase();
        self.renderer.render(&CreateResult::new(name))?;
        self.show_plan()
    }

    fn remove_phase(&mut self, params: &PhaseRef) -> Result<()> {
        debug!("remove_phase: {params:?}");
        let removed = self.session.store_mut().remove_phase(&params.phase)?;
        self.renderer
            .render(&DeleteResult::new(&params.phase, removed))?;
        self.show_plan()
    }

    fn add_narrative(&mut self, params: &PhaseRef) -> Result<()> {
        debug!("add_narrative: {params:?}");
        let id = self.session.store_mut().add_narrative(&params.phase)?;
        self.renderer.render(&CreateResult::new(id))?;
        self.show_plan()
    }

    fn set_narrative_text(&mut self, params: SetNarrativeText) -> Result<()> {
        debug!("set_narrative_text: {params:?}");
        self.session
            .store_mut()
            .set_narrative_text(&params.id, params.text)?;
        self.renderer.render(&OperationStatus::success(format!(
            "Updated text of narrative {}",
            params.id
        )))?;
        self.show_plan()
    }

    fn remove_narrative(&mut self, params: &RemoveNarrative) -> Result<()> {
        debug!("remove_narrative: {params:?}");
        let removed = self
            .session
            .store_mut()
            .remove_narrative(&params.phase, &params.id)?;
        self.renderer
            .render(&DeleteResult::new(&params.id, removed))?;
        self.show_plan()
    }

    fn open_package(&mut self, params: &NarrativeRef) -> Result<()> {
        debug!("open_package: {params:?}");
        self.session
            .store_mut()
            .open_response_package_editor(&params.id)?;
        self.show_plan()
    }

    fn edit_package(&mut self, params: NarrativeRef) -> Result<()> {
        debug!("edit_package: {params:?}");
        let store = self.session.store_mut();
        store.begin_edit_response_package(params.id);
        if store.editing_narrative().is_none() {
            self.renderer.render(&OperationStatus::failure(
                "The narrative being edited does not exist",
            ))?;
        }
        self.show_plan()
    }

    fn update_package(&mut self, params: UpdateResponsePackage) -> Result<()> {
        debug!("update_package: {params:?}");
        let id = NarrativeId::from(params.id.as_str());
        let update = ResponsePackageUpdate::try_from(params)?;
        if update.is_empty() {
            return self
                .renderer
                .render(&OperationStatus::failure("No package fields given"));
        }

        let (package, changes) = self
            .session
            .store_mut()
            .update_response_package(id.as_str(), update)?;
        let result = UpdateResult::with_changes(id, package.clone(), changes);
        self.renderer.render(&result)?;
        self.show_plan()
    }

    fn close_package(&mut self) -> Result<()> {
        self.session.store_mut().close_edit();
        self.renderer
            .render(&OperationStatus::success("Closed the response package editor"))?;
        self.show_plan()
    }

    fn export(&self, path: Option<&Path>) -> Result<()> {
        let result = self.session.save(path)?;
        self.renderer.render(&result)
    }

    fn import(&mut self, path: &Path) -> Result<()> {
        self.session.load(path)?;
        self.renderer.render(&OperationStatus::success(format!(
            "Imported playbook from {}",
            path.display()
        )))?;
        self.show_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &[&str]) -> LineCommand {
        Line::try_parse_from(line).expect("valid command").command
    }

    #[test]
    fn test_name_joins_words() {
        let LineCommand::Name(args) = parse(&["name", "Operation", "Harbor"]) else {
            panic!("expected name command");
        };
        let params: SetOperationName = args.into();
        assert_eq!(params.name, "Operation Harbor");

        let LineCommand::Name(args) = parse(&["name"]) else {
            panic!("expected name command");
        };
        assert_eq!(SetOperationName::from(args).name, "");
    }

    #[test]
    fn test_set_package_args_into_params() {
        let LineCommand::Nrp {
            command: PackageCommands::Set(args),
        } = parse(&[
            "nrp",
            "set",
            "narr_2",
            "--imagery",
            "b-roll-footage,overhead",
            "--status",
            "for-review",
        ])
        else {
            panic!("expected nrp set");
        };

        let params: UpdateResponsePackage = args.into();
        assert_eq!(params.id, "narr_2");
        assert_eq!(
            params.imagery_tasks,
            Some(vec!["B-roll footage".to_string(), "Overhead shot".to_string()])
        );
        assert_eq!(params.status.as_deref(), Some("For Review"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_no_imagery_clears_selection() {
        let LineCommand::Nrp {
            command: PackageCommands::Set(args),
        } = parse(&["nrp", "set", "narr_1", "--no-imagery"])
        else {
            panic!("expected nrp set");
        };

        let params: UpdateResponsePackage = args.into();
        assert_eq!(params.imagery_tasks, Some(Vec::new()));
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(Line::try_parse_from(["nrp", "set", "narr_1", "--status", "shipped"]).is_err());
    }

    #[test]
    fn test_quit_aliases() {
        for word in ["quit", "exit", "q"] {
            assert!(matches!(parse(&[word]), LineCommand::Quit));
        }
    }
}
