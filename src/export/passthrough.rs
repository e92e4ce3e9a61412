// src/export/passthrough.rs
// Passthrough mode: re-emit pre-encoded file descriptors as blobs

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use super::ExportParams;
use super::artifact::Artifact;
use super::coerce::{self, non_empty_str};

pub(crate) const DEFAULT_NAME: &str = "file.bin";
pub(crate) const DEFAULT_MIME: &str = "application/octet-stream";
pub(crate) const FALLBACK_MESSAGE: &str = "No files emitted in passthrough mode.";

/// Decode the `files_json` descriptor array into `Blob` artifacts, in
/// array order. Invalid descriptors are skipped, never reported; if
/// nothing decodes, a single informational text artifact is emitted
/// instead.
pub fn emit(params: &ExportParams, sink: &mut dyn FnMut(Artifact)) {
    let files = coerce::parse_json_array(params.files_json.as_deref());
    let mut emitted = 0usize;

    for entry in &files {
        let Some(desc) = entry.as_object() else {
            debug!("skipping non-object file descriptor");
            continue;
        };
        let name = non_empty_str(desc, "name").unwrap_or(DEFAULT_NAME);
        let mime = non_empty_str(desc, "mime_type").unwrap_or(DEFAULT_MIME);
        let Some(b64) = non_empty_str(desc, "b64_content") else {
            debug!("skipping descriptor {name:?} with no content");
            continue;
        };
        let content = match BASE64.decode(b64) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("skipping descriptor {name:?} with invalid base64: {e}");
                continue;
            }
        };
        sink(Artifact::blob(content, name, mime));
        emitted += 1;
    }

    if emitted == 0 {
        sink(Artifact::text(FALLBACK_MESSAGE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::collect;

    fn passthrough(files_json: Option<&str>) -> Vec<Artifact> {
        collect(&ExportParams {
            mode: Some("passthrough".into()),
            files_json: files_json.map(String::from),
            ..ExportParams::default()
        })
    }

    #[test]
    fn emits_one_blob_per_valid_descriptor() {
        let artifacts = passthrough(Some(
            r#"[
                {"name": "a.txt", "mime_type": "text/plain", "b64_content": "aGVsbG8="},
                {"name": "b.txt", "b64_content": "d29ybGQ="}
            ]"#,
        ));
        assert_eq!(artifacts.len(), 2);
        assert_eq!(
            artifacts[0],
            Artifact::blob(b"hello".to_vec(), "a.txt", "text/plain")
        );
        // Missing mime type falls back to the default.
        assert_eq!(
            artifacts[1],
            Artifact::blob(b"world".to_vec(), "b.txt", DEFAULT_MIME)
        );
    }

    #[test]
    fn invalid_elements_are_skipped_without_affecting_others() {
        let artifacts = passthrough(Some(
            r#"[
                {"name": "bad.bin", "b64_content": "!!! not base64 !!!"},
                {"name": "empty.bin", "b64_content": ""},
                {"name": "no-content.bin"},
                "not even an object",
                {"b64_content": "b2s="}
            ]"#,
        ));
        assert_eq!(artifacts.len(), 1);
        assert_eq!(
            artifacts[0],
            Artifact::blob(b"ok".to_vec(), DEFAULT_NAME, DEFAULT_MIME)
        );
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let artifacts =
            passthrough(Some(r#"[{"name": "", "mime_type": "", "b64_content": "b2s="}]"#));
        assert_eq!(artifacts[0].filename(), Some(DEFAULT_NAME));
    }

    #[test]
    fn fallback_fires_when_nothing_decodes() {
        for input in [None, Some(""), Some("[]"), Some("not json"), Some("{\"a\":1}")] {
            let artifacts = passthrough(input);
            assert_eq!(artifacts, vec![Artifact::text(FALLBACK_MESSAGE)], "input: {input:?}");
        }
        // All elements invalid also counts as nothing decoded.
        let artifacts = passthrough(Some(r#"[{"name": "x"}, {"b64_content": "???"}]"#));
        assert_eq!(artifacts, vec![Artifact::text(FALLBACK_MESSAGE)]);
    }
}
