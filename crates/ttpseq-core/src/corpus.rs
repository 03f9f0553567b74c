use crate::document::FlowDocument;
use crate::error::{Result, TtpseqError};
use std::path::Path;

/// File extension of attack-flow documents.
pub const FLOW_EXTENSION: &str = "afb";

/// Load every `.afb` document directly under `dir`, in sorted path order.
///
/// Fails before reading anything if `dir` is not a directory; a file that
/// does not parse as a flow document aborts the whole load. Subdirectories
/// and non-`.afb` entries are ignored, and no recursion takes place.
pub fn load_corpus(dir: &Path) -> Result<Vec<FlowDocument>> {
    if !dir.is_dir() {
        return Err(TtpseqError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path.extension().is_some_and(|ext| ext == FLOW_EXTENSION)
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let data = std::fs::read_to_string(&path)?;
        let doc: FlowDocument =
            serde_json::from_str(&data).map_err(|source| TtpseqError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            objects = doc.objects.len(),
            "loaded flow document"
        );
        documents.push(doc);
    }
    Ok(documents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
