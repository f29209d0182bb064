use std::fmt;

use thiserror::Error;

/// Errors raised while loading a catalog.
///
/// Every variant is a load-time defect: a catalog that fails here never
/// reaches the filter engine or the UI.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("{} invalid catalog entries, first: {}", .0.len(), first_issue(.0))]
    Invalid(Vec<CatalogIssue>),
}

fn first_issue(issues: &[CatalogIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// A required field of [`GameRecord`](crate::GameRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Id,
    Title,
    Thumbnail,
    Category,
    IframeUrl,
}

impl RecordField {
    /// Name of the field as it appears in a JSON catalog.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Title => "title",
            RecordField::Thumbnail => "thumbnail",
            RecordField::Category => "category",
            RecordField::IframeUrl => "iframeUrl",
        }
    }
}

/// A single integrity problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A required field is empty or whitespace.
    EmptyField {
        index: usize,
        id: String,
        field: RecordField,
    },
    /// Two records share an id. `first` and `second` are list positions.
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::EmptyField { index, id, field } => {
                if id.is_empty() {
                    write!(f, "entry #{} has an empty `{}`", index, field.wire_name())
                } else {
                    write!(
                        f,
                        "entry #{} ({}) has an empty `{}`",
                        index,
                        id,
                        field.wire_name()
                    )
                }
            }
            CatalogIssue::DuplicateId { id, first, second } => {
                write!(
                    f,
                    "id \"{}\" is used by entry #{} and entry #{}",
                    id, first, second
                )
            }
        }
    }
}
