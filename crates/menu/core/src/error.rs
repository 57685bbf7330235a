//! Build-time error types.
//!
//! Runtime input never fails: every navigation call clamps or ignores. The
//! only fallible step is [`MenuNode::build`](crate::MenuNode::build), which
//! rejects trees whose containers cannot be laid out.

/// Reasons a menu tree cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("menu '{name}' has children but no table size")]
    MissingTable { name: String },

    #[error("menu '{name}' has an invalid table size {columns}x{rows}")]
    InvalidTable {
        name: String,
        columns: i32,
        rows: i32,
    },

    #[error("menu '{name}' table {columns}x{rows} is too large to lay out")]
    TableTooLarge {
        name: String,
        columns: i32,
        rows: i32,
    },
}

impl BuildError {
    /// Name of the node that failed to build.
    pub fn node(&self) -> &str {
        match self {
            Self::MissingTable { name }
            | Self::InvalidTable { name, .. }
            | Self::TableTooLarge { name, .. } => name,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTable { .. } => "missing_table",
            Self::InvalidTable { .. } => "invalid_table",
            Self::TableTooLarge { .. } => "table_too_large",
        }
    }
}
