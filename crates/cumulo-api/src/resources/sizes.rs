//! Size catalog endpoint.

use reqwest::Method;

use crate::document::Document;
use crate::error::Result;
use crate::transport::Transport;

/// List the instance sizes on offer.
pub async fn list(transport: &Transport) -> Result<Document> {
    transport.request(Method::GET, "/v1/sizes", None).await
}
