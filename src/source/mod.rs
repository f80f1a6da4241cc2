//! Data source for the member list.
//!
//! The list is loaded exactly once per plugin instance, either from a remote JSON
//! endpoint (through the host's web request capability) or from the in-process
//! sample generator.
//!
//! # Modules
//!
//! - [`config`]: Where records come from ([`SourceConfig`])
//! - [`fetch`]: Load lifecycle ([`LoadStatus`]) and response decoding
//!
//! ```
//! use memberdesk::source::{decode_response, SourceConfig};
//!
//! let body = br#"[{"id":"1","name":"Aaron","email":"aaron@x.com","role":"admin"}]"#;
//! let records = decode_response(200, body)?;
//! assert_eq!(records.len(), 1);
//! assert!(matches!(SourceConfig::default(), SourceConfig::Remote { .. }));
//! # Ok::<(), memberdesk::MemberdeskError>(())
//! ```

pub mod config;
pub mod fetch;

pub use config::{SourceConfig, DEFAULT_ENDPOINT};
pub use fetch::{decode_response, LoadStatus};
