//! Endpoint functions, one module per API resource.
//!
//! Every function composes the same three pieces for one REST call: build
//! the versioned URL, optionally encode a parameter record into a form
//! body, and parse the JSON response into a [`Document`](crate::Document).
//! List and get operations hand the document back; create operations
//! extract the handful of fields the caller needs. Errors propagate
//! unchanged — no endpoint retries, recovers, or partially succeeds.

pub mod accounts;
pub mod dns;
pub mod firewalls;
pub mod instances;
pub mod networks;
pub mod quota;
pub mod regions;
pub mod sizes;
pub mod snapshots;
pub mod ssh_keys;
pub mod templates;

use crate::document::Document;
use crate::error::Result;

/// Fields extracted from a create response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// Service-assigned resource ID.
    pub id: String,
    /// Human-readable name echoed by the service.
    pub name: String,
}

impl Created {
    /// Extract `id` plus the given name field from a create response.
    pub(crate) fn from_document(doc: &Document, name_field: &str) -> Result<Self> {
        Ok(Self {
            id: doc.string("id")?,
            name: doc.string(name_field)?,
        })
    }
}

/// Match a list entry by ID, ID prefix, exact name, or name fragment.
/// Returns the first match in server order.
pub(crate) fn find_by(doc: &Document, query: &str, name_field: &str) -> Option<Document> {
    doc.children().into_iter().find(|item| {
        let id = item.text("id");
        let name = item.text(name_field);
        id == query || id.starts_with(query) || name == query || name.contains(query)
    })
}
