// src/export/mod.rs
// The export engine: mode dispatch over the two emitters

pub mod artifact;
pub mod coerce;
pub mod compose;
pub mod passthrough;

pub use artifact::Artifact;

/// The parameter map of one invocation. Every field is optional; the
/// engine reads, never mutates.
#[derive(Debug, Clone, Default)]
pub struct ExportParams {
    /// `passthrough` or `compose` (case-insensitive, default compose).
    pub mode: Option<String>,
    /// JSON array of `{name, mime_type, b64_content}` descriptors.
    pub files_json: Option<String>,
    /// Raw CSV body.
    pub csv_text: Option<String>,
    /// Output filename for the CSV artifact (default `export.csv`).
    pub csv_filename: Option<String>,
    /// JSON or plain-text payload.
    pub result: Option<String>,
    /// JSON or plain-text payload, same shape as `result`.
    pub audit: Option<String>,
    /// Also materialize result/audit as JSON files (default true).
    pub make_json_files: Option<bool>,
}

/// Which interpretation path processes the remaining parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Passthrough,
    Compose,
}

impl Mode {
    /// Anything other than `passthrough` (in any case) is compose.
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("passthrough") => Mode::Passthrough,
            _ => Mode::Compose,
        }
    }
}

/// Run one invocation, handing each artifact to `sink` in order.
/// Exactly one emitter path executes; malformed input degrades, it
/// never fails.
pub fn emit(params: &ExportParams, sink: &mut dyn FnMut(Artifact)) {
    match Mode::parse(params.mode.as_deref()) {
        Mode::Passthrough => passthrough::emit(params, sink),
        Mode::Compose => compose::emit(params, sink),
    }
}

/// Run one invocation and collect the full artifact sequence.
pub fn collect(params: &ExportParams) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    emit(params, &mut |artifact| artifacts.push(artifact));
    artifacts
}
