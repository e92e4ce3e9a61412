// src/export/compose.rs
// Compose mode: synthesize CSV/JSON file artifacts from csv_text,
// result and audit

use tracing::debug;

use super::ExportParams;
use super::artifact::Artifact;
use super::coerce::{self, Payload};

pub(crate) const DEFAULT_CSV_NAME: &str = "export.csv";
pub(crate) const FALLBACK_MESSAGE: &str = "No files emitted in compose mode.";

/// UTF-8 byte order mark. Prefixed to CSV bytes so spreadsheet tools
/// detect the character set.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Emit, in order: the CSV blob, the result/audit echo artifacts, the
/// result.json/audit.json blobs, and finally the fallback text if no
/// blob was produced and both payloads are absent.
///
/// The fallback deliberately ignores echo artifacts from step 2: a run
/// that emitted only a structured/text echo (no CSV, make_json_files
/// off) stays silent. The surrounding behavior is asymmetric on
/// purpose.
pub fn emit(params: &ExportParams, sink: &mut dyn FnMut(Artifact)) {
    let mut emitted = 0usize;

    if let Some(csv) = params.csv_text.as_deref().filter(|s| !s.is_empty()) {
        let filename = params
            .csv_filename
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CSV_NAME);
        let mut content = Vec::with_capacity(UTF8_BOM.len() + csv.len());
        content.extend_from_slice(&UTF8_BOM);
        content.extend_from_slice(csv.as_bytes());
        sink(Artifact::blob(content, filename, "text/csv"));
        emitted += 1;
    }

    let result = coerce::json_or_text(params.result.as_deref());
    let audit = coerce::json_or_text(params.audit.as_deref());

    // Echo the payloads so the host can render them inline as well.
    for payload in [&result, &audit].into_iter().flatten() {
        sink(echo_artifact(payload));
    }

    if params.make_json_files.unwrap_or(true) {
        for (payload, filename) in [(&result, "result.json"), (&audit, "audit.json")] {
            if let Some(payload) = payload {
                sink(json_file(payload, filename));
                emitted += 1;
            }
        }
    }

    if emitted == 0 && result.is_none() && audit.is_none() {
        debug!("compose mode produced no file artifacts");
        sink(Artifact::text(FALLBACK_MESSAGE));
    }
}

/// Inline rendering of a payload: structured for composites, plain
/// text otherwise.
fn echo_artifact(payload: &Payload) -> Artifact {
    match payload {
        Payload::Json(v) if payload.is_composite() => Artifact::structured(v.clone()),
        other => Artifact::text(other.string_form()),
    }
}

/// Materialize a payload as an indented, non-ASCII-escaped JSON file.
fn json_file(payload: &Payload, filename: &str) -> Artifact {
    let text = serde_json::to_string_pretty(&payload.file_value())
        .unwrap_or_else(|_| "{}".into());
    Artifact::blob(text.into_bytes(), filename, "application/json")
}
