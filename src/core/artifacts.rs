//! Purpose: Render the Copr artifact document consumed as TMT run parameters.
//! Exports: `COPR_BUILD_TYPE`, `Artifact`, `render`.
//! Role: Artifact half of the run-file contract (`copr_artifacts`).
//! Invariants: A missing or blank build list or chroot renders as the empty string.
//! Invariants: Record order matches the input build-id order.
use serde::Serialize;
use serde_json::json;

/// Artifact type tag understood by TMT's Copr integration.
pub const COPR_BUILD_TYPE: &str = "fedora-copr-build";

/// One `{"type": ..., "id": "<build>:<chroot>"}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
}

impl Artifact {
    pub fn copr_build(build_id: &str, chroot: &str) -> Self {
        Self {
            kind: COPR_BUILD_TYPE,
            id: format!("{build_id}:{chroot}"),
        }
    }
}

/// Renders the artifact document for optional build-list and chroot arguments.
///
/// When either argument is missing or blank the result is the empty string,
/// not `{}` and not an empty `artifacts` list; the consuming tool treats a
/// zero-byte file as "no artifacts". Build ids are not validated or trimmed.
pub fn render(builds: Option<&str>, chroot: Option<&str>) -> String {
    let (Some(builds), Some(chroot)) = (builds, chroot) else {
        return String::new();
    };
    if builds.trim().is_empty() || chroot.trim().is_empty() {
        return String::new();
    }

    let artifacts: Vec<Artifact> = builds
        .split(';')
        .map(|build_id| Artifact::copr_build(build_id, chroot))
        .collect();
    json!({ "artifacts": artifacts }).to_string()
}
