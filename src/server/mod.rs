//! MCP server for the contact desk.
//!
//! This module provides the MCP protocol server that exposes the contact
//! form and the project portfolio to AI assistants through the Model
//! Context Protocol.

pub mod handlers;

pub use handlers::ContactDeskServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact desk server with stdio transport.
///
/// Communicates over stdin/stdout until the client disconnects.
pub async fn run_server(server: ContactDeskServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
