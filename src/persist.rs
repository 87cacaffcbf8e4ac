use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::snapshot::Snapshot;

/// Replaces whatever is at `path` with the pretty-printed snapshot.
///
/// The JSON goes to a sibling `.tmp` file first and is renamed into place, so
/// readers never see a half-written artifact.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("create output dir {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(snapshot).context("serialize snapshot")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}
