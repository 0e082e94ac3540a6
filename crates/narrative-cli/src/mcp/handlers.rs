//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use narrative_core::{
    display::PackageEditor, params as core, CreateResult, DeleteResult, NarrativeId,
    OperationStatus, ResponsePackageUpdate, Session, UpdateResult,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(content: impl ToString) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.to_string())])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn show_plan(&self) -> McpResult {
        let session = self.session.lock().await;
        Ok(text(session.store()))
    }

    pub async fn plan_summary(&self) -> McpResult {
        let session = self.session.lock().await;
        Ok(text(session.store().summary()))
    }

    pub async fn set_operation_name(
        &self,
        Parameters(params): Parameters<core::SetOperationName>,
    ) -> McpResult {
        debug!("set_operation_name: {params:?}");
        let status = OperationStatus::success(format!("Operation renamed to '{}'", params.name));
        self.session
            .lock()
            .await
            .store_mut()
            .set_operation_name(params.name);
        Ok(text(status))
    }

    pub async fn add_phase(&self) -> McpResult {
        let name = self.session.lock().await.store_mut().add_phase();
        Ok(text(CreateResult::new(name)))
    }

    pub async fn remove_phase(&self, Parameters(params): Parameters<core::PhaseRef>) -> McpResult {
        debug!("remove_phase: {params:?}");
        let removed = self
            .session
            .lock()
            .await
            .store_mut()
            .remove_phase(&params.phase)
            .map_err(|e| to_mcp_error("Failed to remove phase", &e))?;
        Ok(text(DeleteResult::new(params.phase, removed)))
    }

    pub async fn add_narrative(&self, Parameters(params): Parameters<core::PhaseRef>) -> McpResult {
        debug!("add_narrative: {params:?}");
        let id = self
            .session
            .lock()
            .await
            .store_mut()
            .add_narrative(&params.phase)
            .map_err(|e| to_mcp_error("Failed to add narrative", &e))?;
        Ok(text(CreateResult::new(id)))
    }

    pub async fn set_narrative_text(
        &self,
        Parameters(params): Parameters<core::SetNarrativeText>,
    ) -> McpResult {
        debug!("set_narrative_text: {params:?}");
        self.session
            .lock()
            .await
            .store_mut()
            .set_narrative_text(&params.id, params.text)
            .map_err(|e| to_mcp_error("Failed to set narrative text", &e))?;
        Ok(text(OperationStatus::success(format!(
            "Updated text of narrative {}",
            params.id
        ))))
    }

    pub async fn remove_narrative(
        &self,
        Parameters(params): Parameters<core::RemoveNarrative>,
    ) -> McpResult {
        debug!("remove_narrative: {params:?}");
        let removed = self
            .session
            .lock()
            .await
            .store_mut()
            .remove_narrative(&params.phase, &params.id)
            .map_err(|e| to_mcp_error("Failed to remove narrative", &e))?;
        Ok(text(DeleteResult::new(params.id, removed)))
    }

    pub async fn open_response_package(
        &self,
        Parameters(params): Parameters<core::NarrativeRef>,
    ) -> McpResult {
        debug!("open_response_package: {params:?}");
        let mut session = self.session.lock().await;
        let store = session.store_mut();
        store
            .open_response_package_editor(&params.id)
            .map_err(|e| to_mcp_error("Failed to open response package", &e))?;

        let narrative = store
            .narrative(&params.id)
            .map_err(|e| to_mcp_error("Failed to open response package", &e))?;
        let id = NarrativeId::from(params.id.as_str());
        Ok(text(PackageEditor {
            id: &id,
            narrative,
        }))
    }

    pub async fn update_response_package(
        &self,
        Parameters(params): Parameters<core::UpdateResponsePackage>,
    ) -> McpResult {
        debug!("update_response_package: {params:?}");
        let id = NarrativeId::from(params.id.as_str());
        let update = ResponsePackageUpdate::try_from(params)
            .map_err(|e| to_mcp_error("Invalid response package update", &e))?;

        let mut session = self.session.lock().await;
        let (package, changes) = session
            .store_mut()
            .update_response_package(id.as_str(), update)
            .map_err(|e| to_mcp_error("Failed to update response package", &e))?;
        Ok(text(UpdateResult::with_changes(id, package.clone(), changes)))
    }

    pub async fn close_response_package(&self) -> McpResult {
        self.session.lock().await.store_mut().close_edit();
        Ok(text(OperationStatus::success(
            "Closed the response package editor",
        )))
    }

    pub async fn export_playbook(&self) -> McpResult {
        let bytes = self
            .session
            .lock()
            .await
            .store()
            .export_json()
            .map_err(|e| to_mcp_error("Failed to export playbook", &e))?;
        Ok(text(String::from_utf8_lossy(&bytes)))
    }

    pub async fn save_playbook(&self) -> McpResult {
        let result = self
            .session
            .lock()
            .await
            .save(None)
            .map_err(|e| to_mcp_error("Failed to save playbook", &e))?;
        Ok(text(result))
    }

    pub async fn import_playbook(
        &self,
        Parameters(params): Parameters<core::ImportPlaybook>,
    ) -> McpResult {
        let mut session = self.session.lock().await;
        session
            .store_mut()
            .import_json(params.document.as_bytes())
            .map_err(|e| to_mcp_error("Failed to import playbook", &e))?;
        Ok(text(session.store()))
    }
}
