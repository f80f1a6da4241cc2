//! Record source selection.

/// Endpoint used when the plugin configuration does not name one.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Where the member list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// HTTP GET of a JSON array of records.
    Remote {
        /// Endpoint url.
        url: String,
    },

    /// Generated fixture records; no network access needed.
    Sample {
        /// Number of records to generate.
        count: usize,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Remote {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Short description for logs and the header.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Remote { url } => url.clone(),
            Self::Sample { count } => format!("sample data ({count} records)"),
        }
    }
}
