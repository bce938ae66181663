//! Tests for the MCP server surface.
//!
//! Each tool's result mapping is covered by the unit tests next to the
//! handlers; these tests cover the server metadata and the shared session.

use contact_desk::catalog::ProjectCatalog;
use contact_desk::domain::Field;
use contact_desk::messaging::DeepLinkTarget;
use contact_desk::metrics::Metrics;
use contact_desk::services::{
    CatalogService, CatalogServiceImpl, SubmissionService, SubmissionServiceImpl,
};
use contact_desk::ContactDeskServer;
use rmcp::ServerHandler;
use std::sync::Arc;

mod mocks;
use mocks::{MockFormCaptureClient, MockLinkOpener};

fn server() -> ContactDeskServer {
    let submission_service = Arc::new(SubmissionServiceImpl::new(
        Arc::new(MockFormCaptureClient::new()),
        Arc::new(MockLinkOpener::new()),
        "contato",
        DeepLinkTarget::default(),
        Metrics::new(),
    )) as Arc<dyn SubmissionService>;
    let catalog_service = Arc::new(CatalogServiceImpl::new(Arc::new(ProjectCatalog::builtin())))
        as Arc<dyn CatalogService>;

    ContactDeskServer::new(submission_service, catalog_service)
}

#[test]
fn test_server_info() {
    let info = server().get_info();

    assert_eq!(info.server_info.name, "contact-desk");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("WhatsApp"));
}

#[tokio::test]
async fn test_clones_share_one_session() {
    let server = server();
    let clone = server.clone();

    server.session().edit(Field::Name, "Ana").await;

    assert_eq!(clone.session().snapshot().await.form.name, "Ana");
}

#[tokio::test]
async fn test_new_session_is_empty() {
    let snapshot = server().session().snapshot().await;
    assert!(snapshot.form.is_empty());
    assert!(snapshot.errors.is_empty());
    assert!(!snapshot.submitting);
}
