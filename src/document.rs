//! Source documents: kinds, loaders, file-name years and input discovery.

use std::path::{Path, PathBuf};

use globwalk::GlobWalkerBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EnumerateError, LoadError};

/// Declared kind of a source document. Statutes and gazette notices share the
/// pipeline but differ in which boundary markers, labels and admission rules
/// are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(alias = "act", alias = "acts")]
    Act,
    #[serde(alias = "extraordinary_gazettes", alias = "gazette")]
    ExtraordinaryGazette,
}

impl DocumentKind {
    pub fn is_gazette(self) -> bool {
        matches!(self, DocumentKind::ExtraordinaryGazette)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Act => "Act",
            DocumentKind::ExtraordinaryGazette => "ExtraordinaryGazette",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub document_id: String,
    pub raw_text: String,
    pub document_type: DocumentKind,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "si".to_string()
}

static ACT_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([12]\d{3})_").expect("act year regex"));
static GAZETTE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[-_])([12]\d{3})[-_]").expect("gazette year regex"));

/// Extract a publication year from an OCR output file name.
/// Acts are named `<title>-<year>_<n>.txt`; gazettes carry the year as a
/// `-`/`_` delimited token anywhere in the name. Returns `None` rather than a
/// sentinel when no year is present.
pub fn year_from_file_name(name: &str, kind: DocumentKind) -> Option<i32> {
    let re = match kind {
        DocumentKind::Act => &*ACT_YEAR_RE,
        DocumentKind::ExtraordinaryGazette => &*GAZETTE_YEAR_RE,
    };
    re.captures(name).and_then(|c| c[1].parse::<i32>().ok())
}

/// Read a preprocessed Document record from JSON.
pub fn load_document_json(path: &Path) -> Result<Document, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let doc: Document = serde_json::from_str(&raw).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    if doc.document_id.trim().is_empty() {
        return Err(LoadError::MissingId(path.display().to_string()));
    }
    Ok(doc)
}

/// Read a plain OCR text file as a Document. Malformed UTF-8 is decoded with
/// replacement characters; the file stem becomes the document id.
pub fn load_ocr_text(path: &Path, kind: DocumentKind, language: &str) -> Result<Document, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let document_id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| LoadError::MissingId(path.display().to_string()))?;
    let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();

    Ok(Document {
        year: year_from_file_name(file_name, kind),
        document_id,
        raw_text: String::from_utf8_lossy(&bytes).into_owned(),
        document_type: kind,
        language: language.to_string(),
    })
}

/// Load by extension: `.json` is a Document record, anything else is OCR text.
/// A JSON record keeps its own declared kind.
pub fn load_document(path: &Path, kind: DocumentKind, language: &str) -> Result<Document, LoadError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_document_json(path)
    } else {
        load_ocr_text(path, kind, language)
    }
}

/// Enumerate input documents using a glob pattern (e.g. "./ocr/**/*.txt").
/// Returns a sorted list of file paths.
pub fn enumerate_documents(glob_pattern: &str) -> Result<Vec<PathBuf>, EnumerateError> {
    let root = if Path::new(glob_pattern).is_absolute() { "/" } else { "." };
    let pat = glob_pattern.strip_prefix("./").unwrap_or(glob_pattern);
    let mut paths: Vec<PathBuf> = GlobWalkerBuilder::from_patterns(root, &[pat])
        .case_insensitive(false)
        .follow_links(false)
        .build()
        .map_err(|_| EnumerateError::NoFilesFound { guidance: folder_guidance(glob_pattern) })?
        .filter_map(|e| e.ok())
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();
    paths.retain(|p| p.is_file());

    if paths.is_empty() {
        return Err(EnumerateError::NoFilesFound { guidance: folder_guidance(glob_pattern) });
    }
    Ok(paths)
}

fn folder_guidance(pattern: &str) -> String {
    format!(
        "No input documents match {pattern}
Expected layout:
  ./actsoutput/<title>-<year>_<n>.txt
  ./extraordinary_gazettesoutput/<no>-<year>_<n>.txt
or preprocessed Document records as *.json"
    )
}
