// src/mcp/mod.rs
// MCP server exposing the export engine as a single tool

pub mod responses;

use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;

use crate::export::{self, ExportParams};

/// Serve the export tool over stdio until the client disconnects.
pub async fn serve_stdio() -> crate::Result<()> {
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(ExportServer::new(), transport)
        .await
        .map_err(|e| crate::ExportError::Other(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| crate::ExportError::Other(e.to_string()))?;
    Ok(())
}

/// MCP server state. The engine is stateless, so the server only
/// carries its tool router; every call is independent.
#[derive(Clone)]
pub struct ExportServer {
    tool_router: ToolRouter<Self>,
}

impl ExportServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ExportServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the `export_files` tool — a string/bool parameter map
/// interpreted according to `mode`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportFilesRequest {
    #[schemars(description = "Operating mode: 'passthrough' re-emits files_json, anything else composes from csv_text/result/audit (default: compose)")]
    pub mode: Option<String>,
    #[schemars(description = "JSON array of {name, mime_type, b64_content} file descriptors (passthrough only)")]
    pub files_json: Option<String>,
    #[schemars(description = "Raw CSV body to emit as a file (compose only)")]
    pub csv_text: Option<String>,
    #[schemars(description = "Filename for the CSV file (default: export.csv)")]
    pub csv_filename: Option<String>,
    #[schemars(description = "JSON or plain-text result payload")]
    pub result: Option<String>,
    #[schemars(description = "JSON or plain-text audit payload")]
    pub audit: Option<String>,
    #[schemars(description = "Also materialize result/audit as result.json/audit.json files (default: true)")]
    pub make_json_files: Option<bool>,
}

impl From<ExportFilesRequest> for ExportParams {
    fn from(req: ExportFilesRequest) -> Self {
        ExportParams {
            mode: req.mode,
            files_json: req.files_json,
            csv_text: req.csv_text,
            csv_filename: req.csv_filename,
            result: req.result,
            audit: req.audit,
            make_json_files: req.make_json_files,
        }
    }
}

#[tool_router]
impl ExportServer {
    #[tool(
        description = "Turn workflow outputs into downloadable files. mode=passthrough re-emits a files_json array of pre-encoded files verbatim; mode=compose builds a CSV file from csv_text and JSON files from the result/audit payloads. Malformed input degrades instead of failing."
    )]
    async fn export_files(
        &self,
        Parameters(req): Parameters<ExportFilesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = ExportParams::from(req);
        let mut contents = Vec::new();
        export::emit(&params, &mut |artifact| {
            contents.push(responses::artifact_content(artifact));
        });
        Ok(CallToolResult::success(contents))
    }
}

#[tool_handler]
impl ServerHandler for ExportServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "file-export".into(),
                title: Some("File Export - workflow output to downloadable files".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Exposes export_files: converts workflow parameters into file, text and JSON artifacts.".into(),
            ),
        }
    }
}
