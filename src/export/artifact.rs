// src/export/artifact.rs
// The one output unit of the export engine

use serde_json::Value;

/// A single unit of output handed to the host runtime.
///
/// The host renders `Blob` as a downloadable file, `Text` as plain
/// display text, and `Structured` as inspectable structured data.
/// Artifacts have no identity beyond their position in the emitted
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// Binary file content with a filename and mime type.
    Blob {
        content: Vec<u8>,
        filename: String,
        mime_type: String,
    },
    /// Plain display text.
    Text { value: String },
    /// A JSON-compatible tree.
    Structured { value: Value },
}

impl Artifact {
    pub fn blob(content: Vec<u8>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Artifact::Blob {
            content,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Artifact::Text { value: value.into() }
    }

    pub fn structured(value: Value) -> Self {
        Artifact::Structured { value }
    }

    pub fn is_blob(&self) -> bool {
        matches!(self, Artifact::Blob { .. })
    }

    /// Filename of a `Blob` artifact, `None` for the other kinds.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Artifact::Blob { filename, .. } => Some(filename),
            _ => None,
        }
    }
}
