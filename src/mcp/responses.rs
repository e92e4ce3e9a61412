// src/mcp/responses.rs
// Artifact → MCP content mapping

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rmcp::model::{Content, ResourceContents};

use crate::export::Artifact;

/// Render one engine artifact as MCP tool content.
///
/// Blobs become embedded resources (the client offers them as
/// downloads), text stays text, and structured values render as
/// pretty-printed JSON text.
pub fn artifact_content(artifact: Artifact) -> Content {
    match artifact {
        Artifact::Text { value } => Content::text(value),
        Artifact::Structured { value } => Content::text(
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".into()),
        ),
        Artifact::Blob { content, filename, mime_type } => {
            Content::resource(ResourceContents::BlobResourceContents {
                uri: format!("file:///{filename}"),
                mime_type: Some(mime_type),
                blob: BASE64.encode(content),
                meta: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blob_maps_to_embedded_resource() {
        let content = artifact_content(Artifact::blob(
            b"hello".to_vec(),
            "a.txt",
            "text/plain",
        ));
        let rmcp::model::RawContent::Resource(res) = &content.raw else {
            panic!("expected embedded resource, got {:?}", content.raw);
        };
        match &res.resource {
            ResourceContents::BlobResourceContents { uri, mime_type, blob, .. } => {
                assert_eq!(uri, "file:///a.txt");
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
                assert_eq!(blob, "aGVsbG8=");
            }
            other => panic!("expected blob resource, got {other:?}"),
        }
    }

    #[test]
    fn text_and_structured_map_to_text() {
        let content = artifact_content(Artifact::text("hi"));
        assert_eq!(content.as_text().map(|t| t.text.as_str()), Some("hi"));

        let content = artifact_content(Artifact::structured(json!({"x": 1})));
        let text = content.as_text().expect("text content");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text.text).unwrap(),
            json!({"x": 1})
        );
    }
}
