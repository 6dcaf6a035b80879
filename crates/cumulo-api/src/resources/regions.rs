//! Region catalog endpoint.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::transport::Transport;

/// List the regions instances can be placed in.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/regions", None).await
}
