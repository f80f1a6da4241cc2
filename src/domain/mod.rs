//! Domain layer for the memberdesk plugin.
//!
//! Holds the member record model, the error type, and the sample fixture generator.
//! Nothing in here knows about Zellij or about rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Member record, role and edit buffer types
//! - [`sample`]: Deterministic fixture records
//!
//! # Examples
//!
//! ```
//! use memberdesk::domain::{Record, Role};
//!
//! let record = Record::new("7", "Ada", "ada@example.com", Role::Admin);
//! assert!(record.matches("ADA"));
//! ```

pub mod error;
pub mod record;
pub mod sample;

pub use error::{MemberdeskError, Result};
pub use record::{EditBuffer, EditField, Record, Role};
pub use sample::generate_sample_records;
