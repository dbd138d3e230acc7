//! JSONL output and its run manifest.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::EmitError;
use crate::pipeline::{Chunk, CorpusSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub output: String,
    pub rows: usize,
    pub sha256: String,
    pub summary: CorpusSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitPaths {
    pub jsonl_path: String,
    pub manifest_path: String,
}

/// One JSON object per line, in the given order.
pub fn to_jsonl(chunks: &[Chunk]) -> Result<String, EmitError> {
    let mut out = String::new();
    for c in chunks {
        let line = serde_json::to_string(c).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), EmitError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    tmp.write_all(bytes).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    tmp.persist(path).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    Ok(())
}

/// `<out>.manifest.json` beside the JSONL file.
pub fn manifest_path_for(jsonl_path: &Path) -> PathBuf {
    let mut name = jsonl_path.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(".manifest.json");
    jsonl_path.with_file_name(name)
}

/// Atomically write the chunk stream and its manifest.
pub fn emit_corpus(chunks: &[Chunk], summary: &CorpusSummary, jsonl_path: &Path) -> Result<EmitPaths, EmitError> {
    let body = to_jsonl(chunks)?;
    write_atomic(jsonl_path, body.as_bytes())?;

    let manifest = RunManifest {
        output: jsonl_path.to_string_lossy().to_string(),
        rows: chunks.len(),
        sha256: sha256_hex(body.as_bytes()),
        summary: summary.clone(),
    };
    let manifest_path = manifest_path_for(jsonl_path);
    let bytes = serde_json::to_vec_pretty(&manifest).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    write_atomic(&manifest_path, &bytes)?;

    Ok(EmitPaths {
        jsonl_path: jsonl_path.to_string_lossy().to_string(),
        manifest_path: manifest_path.to_string_lossy().to_string(),
    })
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    out.iter().map(|b| format!("{:02x}", b)).collect()
}
