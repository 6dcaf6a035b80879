//! Template catalog endpoint.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::transport::Transport;

/// List the OS templates available for new instances.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/templates", None).await
}
