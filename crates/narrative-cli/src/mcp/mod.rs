//! MCP server implementation for the narrative planner
//!
//! Exposes one plan per server process to AI assistants over the Model
//! Context Protocol. Each tool call locks the session for its whole duration,
//! so every call is one atomic step against the plan.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use narrative_core::{params as core, Session};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

use handlers::{McpHandlers, McpResult};

/// MCP server for the narrative planner
#[derive(Clone)]
pub struct NarrativeMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NarrativeMcpServer {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "show_plan",
        description = "Show the whole plan: the operation name, every phase in order with its narratives (ID, text and response package status), and the response package editor when one is open."
    )]
    async fn show_plan(&self) -> McpResult {
        self.handlers().show_plan().await
    }

    #[tool(
        name = "plan_summary",
        description = "Summarize the plan: narratives per phase and how many response packages are not started, in each status, or malformed."
    )]
    async fn plan_summary(&self) -> McpResult {
        self.handlers().plan_summary().await
    }

    #[tool(
        name = "set_operation_name",
        description = "Rename the operation. Any text is accepted, including an empty name. The name also determines the playbook file name."
    )]
    async fn set_operation_name(&self, params: Parameters<core::SetOperationName>) -> McpResult {
        self.handlers().set_operation_name(params).await
    }

    #[tool(
        name = "add_phase",
        description = "Append a new phase with a generated name ('Phase 2', 'Phase 3', ...). Returns the new phase name."
    )]
    async fn add_phase(&self) -> McpResult {
        self.handlers().add_phase().await
    }

    #[tool(
        name = "remove_phase",
        description = "Delete a phase together with all of its narratives and response packages. A plan always keeps at least one phase, so removing the last phase fails."
    )]
    async fn remove_phase(&self, params: Parameters<core::PhaseRef>) -> McpResult {
        self.handlers().remove_phase(params).await
    }

    #[tool(
        name = "add_narrative",
        description = "Add an adversary narrative with placeholder text to the end of the named phase. Returns the new narrative ID (e.g. 'narr_4'); IDs are unique across all phases."
    )]
    async fn add_narrative(&self, params: Parameters<core::PhaseRef>) -> McpResult {
        self.handlers().add_narrative(params).await
    }

    #[tool(
        name = "set_narrative_text",
        description = "Replace the text of a narrative, identified by its ID alone."
    )]
    async fn set_narrative_text(&self, params: Parameters<core::SetNarrativeText>) -> McpResult {
        self.handlers().set_narrative_text(params).await
    }

    #[tool(
        name = "remove_narrative",
        description = "Delete a narrative and its response package from the named phase."
    )]
    async fn remove_narrative(&self, params: Parameters<core::RemoveNarrative>) -> McpResult {
        self.handlers().remove_narrative(params).await
    }

    #[tool(
        name = "open_response_package",
        description = "Open the response package editor for a narrative, creating an empty Draft package if it has none. Opening an existing package leaves it unchanged."
    )]
    async fn open_response_package(&self, params: Parameters<core::NarrativeRef>) -> McpResult {
        self.handlers().open_response_package(params).await
    }

    #[tool(
        name = "update_response_package",
        description = "Update fields of a narrative's existing response package; omitted fields are left unchanged. status is one of 'Draft', 'For Review', 'Approved', 'Executed'. imagery_tasks replaces the selection with any of 'Overhead shot', 'On-the-ground video', 'Personnel interviews', 'B-roll footage'. Fails when the narrative has no package yet: call open_response_package first."
    )]
    async fn update_response_package(
        &self,
        params: Parameters<core::UpdateResponsePackage>,
    ) -> McpResult {
        self.handlers().update_response_package(params).await
    }

    #[tool(
        name = "close_response_package",
        description = "Close the response package editor. Packages are kept."
    )]
    async fn close_response_package(&self) -> McpResult {
        self.handlers().close_response_package().await
    }

    #[tool(
        name = "export_playbook",
        description = "Export the plan as a playbook JSON document with operation_name, phases and an exported_on timestamp. The document can be passed back to import_playbook."
    )]
    async fn export_playbook(&self) -> McpResult {
        self.handlers().export_playbook().await
    }

    #[tool(
        name = "save_playbook",
        description = "Write the playbook JSON document to the server's playbook directory as <Operation_Name>_Playbook.json and return the path."
    )]
    async fn save_playbook(&self) -> McpResult {
        self.handlers().save_playbook().await
    }

    #[tool(
        name = "import_playbook",
        description = "Replace the whole plan with a playbook JSON document. A missing operation_name becomes 'Imported Operation' and missing phases become the single default phase. The plan is unchanged when the document is not a JSON object."
    )]
    async fn import_playbook(&self, params: Parameters<core::ImportPlaybook>) -> McpResult {
        self.handlers().import_playbook(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for NarrativeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "narrative-planner".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"The narrative planner organizes anticipated adversary narratives for an operation and the responses prepared for them.

## Core Concepts
- **Plan**: an operation name and an ordered list of phases; there is always at least one phase
- **Phase**: a named, ordered group of narratives ("Phase 0: Shaping", "Phase 2", ...)
- **Narrative**: an anticipated adversary storyline with a unique ID such as narr_3
- **Response package**: press release, social posts, imagery tasking and a status (Draft, For Review, Approved, Executed) attached to one narrative

## Workflow
1. Name the operation with `set_operation_name`
2. Add phases with `add_phase` and narratives with `add_narrative`
3. Describe each narrative with `set_narrative_text`
4. Call `open_response_package` to create a Draft package, then fill it in with `update_response_package`
5. Review with `show_plan` or `plan_summary`
6. Hand the plan over with `export_playbook` or `save_playbook`; load one with `import_playbook`"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: NarrativeMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting narrative planner MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use narrative_core::SessionBuilder;

    use super::*;

    #[test]
    fn test_every_operation_has_a_tool() {
        let session = SessionBuilder::new().build().expect("build session");
        let server = NarrativeMcpServer::new(session);

        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        for expected in [
            "show_plan",
            "plan_summary",
            "set_operation_name",
            "add_phase",
            "remove_phase",
            "add_narrative",
            "set_narrative_text",
            "remove_narrative",
            "open_response_package",
            "update_response_package",
            "close_response_package",
            "export_playbook",
            "save_playbook",
            "import_playbook",
        ] {
            assert!(names.iter().any(|name| name == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_server_info() {
        let session = SessionBuilder::new().build().expect("build session");
        let info = NarrativeMcpServer::new(session).get_info();

        assert_eq!(info.server_info.name, "narrative-planner");
        assert!(info.capabilities.tools.is_some());
    }
}
