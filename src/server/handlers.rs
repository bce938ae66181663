//! MCP tool handlers for the contact desk.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::Field;
use crate::error::SubmissionError;
use crate::models::{ContactForm, StudioProfile};
use crate::services::{CatalogService, SubmissionService};
use crate::session::ContactSession;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the studio's contact form and portfolio.
#[derive(Clone)]
pub struct ContactDeskServer {
    submission_service: Arc<dyn SubmissionService>,
    catalog_service: Arc<dyn CatalogService>,
    session: Arc<ContactSession>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactDeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-desk".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact desk for a furniture design studio - fill in and submit the contact form (captured by the site, then handed off to WhatsApp) and browse the project portfolio.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Default, Deserialize, JsonSchema)]
struct ContactFormParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ContactFormParams {
    fn supplied(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Phone, &self.phone),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditFieldParams {
    /// One of: name, email, phone, message
    field: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListProjectsParams {
    /// Category name, or "Todos" for every project
    #[serde(default)]
    category: Option<String>,
    /// Only projects highlighted on the home page
    #[serde(default)]
    featured_only: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ProjectSlugParams {
    slug: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchProjectsParams {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
    #[serde(default)]
    min_confidence: Option<u8>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl ContactDeskServer {
    /// Create a new contact desk server.
    pub fn new(
        submission_service: Arc<dyn SubmissionService>,
        catalog_service: Arc<dyn CatalogService>,
    ) -> Self {
        let session = Arc::new(ContactSession::new(submission_service.clone()));

        Self {
            submission_service,
            catalog_service,
            session,
            tool_router: Self::tool_router(),
        }
    }

    /// The visitor session backing the form tools.
    pub fn session(&self) -> &Arc<ContactSession> {
        &self.session
    }

    /// Validate contact form values without touching the session.
    #[tool(
        description = "Check contact form values (name, email, optional phone, message) and return the message shown next to each invalid field. Does not submit anything."
    )]
    async fn validate_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut form = ContactForm::default();
        for (field, value) in params.supplied() {
            form.set(field, value);
        }

        let errors = self.submission_service.validate(&form);

        json_result(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
        }))
    }

    /// Edit one field of the session's contact form.
    #[tool(
        description = "Set one field (name, email, phone or message) of the contact form being filled in. Clears the error previously shown for that field."
    )]
    async fn edit_contact_field(
        &self,
        params: Parameters<EditFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let field: Field = params.field.parse().map_err(invalid_params)?;

        self.session.edit(field, params.value).await;
        let snapshot = self.session.snapshot().await;

        json_result(&serde_json::to_value(&snapshot).map_err(to_mcp_error)?)
    }

    /// Show the session's current contact form.
    #[tool(
        description = "Show the contact form being filled in, its field errors, and whether a submission is in progress"
    )]
    async fn get_contact_form(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.session.snapshot().await;
        json_result(&serde_json::to_value(&snapshot).map_err(to_mcp_error)?)
    }

    /// Submit the session's contact form.
    #[tool(
        description = "Submit the contact form. Any fields given here are filled in first. On success the form is recorded by the site and a WhatsApp link with the message pre-filled is returned; on failure the form is kept for another try."
    )]
    async fn submit_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: submit_contact_form called");
        for (field, value) in params.supplied() {
            self.session.edit(field, value).await;
        }

        let outcome = self.session.submit().await;
        let notices = self.session.take_notices().await;

        match outcome {
            Ok(receipt) => json_result(&serde_json::json!({
                "status": "submitted",
                "receipt": receipt,
                "notices": notices,
            })),
            Err(SubmissionError::SubmissionInFlight) => Err(McpError {
                code: ErrorCode::INVALID_REQUEST,
                message: Cow::from(SubmissionError::SubmissionInFlight.to_string()),
                data: None,
            }),
            Err(SubmissionError::ValidationFailed(errors)) => {
                let body = serde_json::json!({
                    "status": "invalid",
                    "errors": errors,
                    "notices": notices,
                });
                Ok(CallToolResult::error(vec![Content::text(
                    serde_json::to_string_pretty(&body).map_err(to_mcp_error)?,
                )]))
            }
            Err(e @ SubmissionError::SubmissionFailed(_)) => {
                tracing::error!("Failed to submit contact form: {:?}", e);
                let body = serde_json::json!({
                    "status": "failed",
                    "error": e.to_string(),
                    "notices": notices,
                });
                Ok(CallToolResult::error(vec![Content::text(
                    serde_json::to_string_pretty(&body).map_err(to_mcp_error)?,
                )]))
            }
        }
    }

    /// List portfolio projects, optionally filtered by category.
    #[tool(
        description = "List the studio's portfolio projects, optionally filtered by category (Cozinhas, Quartos, Salas, Escritórios, Banheiros, or Todos) and to featured projects only"
    )]
    async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let projects = self
            .catalog_service
            .list_projects(params.category.as_deref(), params.featured_only)
            .map_err(invalid_params)?;

        json_result(&serde_json::json!({
            "count": projects.len(),
            "projects": projects,
        }))
    }

    /// Retrieve one project by slug.
    #[tool(description = "Retrieve a portfolio project, with its technical sheet, by slug")]
    async fn get_project(
        &self,
        params: Parameters<ProjectSlugParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = self
            .catalog_service
            .get_project(&params.0.slug)
            .map_err(to_mcp_error)?;

        json_result(&serde_json::to_value(&project).map_err(to_mcp_error)?)
    }

    /// Search portfolio projects.
    #[tool(
        description = "Search portfolio projects by title, tags, category and description using fuzzy matching. Returns ranked results with confidence scores."
    )]
    async fn search_projects(
        &self,
        params: Parameters<SearchProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let matches = self
            .catalog_service
            .search_projects(&params.query, params.max_results, params.min_confidence)
            .map_err(invalid_params)?;

        json_result(&serde_json::json!({
            "query": params.query,
            "result_count": matches.len(),
            "results": matches,
        }))
    }

    /// List gallery categories.
    #[tool(description = "List the portfolio categories, starting with Todos (all projects)")]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&serde_json::json!({
            "categories": self.catalog_service.list_categories(),
        }))
    }

    /// Show the studio's contact channels.
    #[tool(description = "Show the studio's phone, email, location, social links and business hours")]
    async fn get_studio_info(&self) -> Result<CallToolResult, McpError> {
        json_result(&serde_json::to_value(StudioProfile::builtin()).map_err(to_mcp_error)?)
    }
}
