//! Error handling utilities for MCP server

use narrative_core::PlaybookError;
use rmcp::ErrorData;

/// Convert a playbook error into an MCP error.
///
/// Errors caused by the request itself (unknown phase or narrative, a
/// violated precondition, bad input or a malformed document) are reported as
/// invalid parameters; file and directory failures as internal errors.
pub fn to_mcp_error(message: &str, error: &PlaybookError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlaybookError::FileSystem { .. } | PlaybookError::XdgDirectory(_) => {
            ErrorData::internal_error(text, None)
        }
        _ => ErrorData::invalid_params(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_request_errors_are_invalid_params() {
        let error = to_mcp_error(
            "Failed to remove phase",
            &PlaybookError::phase_not_found("Phase 9"),
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("Phase 9"));

        let error = to_mcp_error(
            "Failed to remove phase",
            &PlaybookError::precondition("a plan keeps at least one phase"),
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_file_errors_are_internal() {
        let error = to_mcp_error(
            "Failed to save playbook",
            &PlaybookError::XdgDirectory("no home".to_string()),
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
