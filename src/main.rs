//! Contact Desk - Main entry point
//!
//! Runs the contact desk MCP server over stdio.

use anyhow::Result;
use contact_desk::client::{AsyncFormCaptureClient, AsyncFormCaptureClientImpl};
use contact_desk::messaging::{DeepLinkTarget, LinkOpener, LoggedLinkOpener, SystemLinkOpener};
use contact_desk::services::{
    CatalogService, CatalogServiceImpl, SubmissionService, SubmissionServiceImpl,
};
use contact_desk::{Config, ContactDeskServer, FormCaptureClient, ProjectCatalog};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config.log_level);
    info!(
        "Starting Contact Desk with form endpoint: {}",
        config.form_endpoint_url
    );

    // Initialize form-capture client
    let sync_client = FormCaptureClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client =
        Arc::new(AsyncFormCaptureClientImpl::new(sync_client)) as Arc<dyn AsyncFormCaptureClient>;

    let opener: Arc<dyn LinkOpener> = if config.open_links {
        Arc::new(SystemLinkOpener)
    } else {
        Arc::new(LoggedLinkOpener)
    };

    let submission_service = Arc::new(SubmissionServiceImpl::new(
        client,
        opener,
        config.form_name.clone(),
        DeepLinkTarget::from_config(&config),
        metrics.clone(),
    )) as Arc<dyn SubmissionService>;

    let catalog = Arc::new(ProjectCatalog::builtin());
    info!("Project catalog loaded: {} projects", catalog.len());
    let catalog_service =
        Arc::new(CatalogServiceImpl::new(catalog)) as Arc<dyn CatalogService>;

    let server = ContactDeskServer::new(submission_service, catalog_service);
    info!("Contact Desk initialized (form: {})", config.form_name);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contact_desk::server::run_server(server).await?;

    info!("Contact Desk shutdown complete: {:?}", metrics.summary());
    Ok(())
}

/// Log to stderr only; stdout carries MCP traffic.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
