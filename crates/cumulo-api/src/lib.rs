//! Client library for the Cumulo cloud API.
//!
//! The API is plain REST over HTTPS: requests are GETs with query parameters
//! or POST/PUT calls with a form-encoded body, responses are JSON documents.
//! This crate provides the pieces a command composes for one round trip:
//!
//! - [`ApiConfig`] — base URL, token and defaults, built once at startup
//! - [`Transport`] — a single authenticated request/response exchange
//! - [`Document`] — generic path-addressed view of a JSON response
//! - [`params`] — explicit field-to-wire-name mapping for request bodies
//! - [`resources`] — one endpoint function per API operation
//!
//! # Example
//!
//! ```rust,no_run
//! use cumulo_api::{resources::instances, ApiConfig, Transport};
//!
//! # async fn example() -> Result<(), cumulo_api::ApiError> {
//! let config = ApiConfig::load(None).unwrap_or_default();
//! let transport = Transport::new(config);
//! let doc = instances::list(&transport).await?;
//! for instance in doc.children() {
//!     println!("{}", instance.text("hostname"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod params;
pub mod resources;
pub mod transport;

pub use config::{ApiConfig, ConfigError};
pub use document::Document;
pub use error::{ApiError, Result};
pub use transport::Transport;
