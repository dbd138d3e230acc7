//! Structural boundary detection.
//!
//! Each cue is a named, anchored pattern tested against the opening of a
//! paragraph block. A block starts a new unit when any active cue matches.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::document::DocumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    NumberedClause,
    Subsection,
    LetteredItem,
    NoticeHeader,
    NoticePart,
    Notification,
    Schedule,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 7] = [
        BoundaryKind::NumberedClause,
        BoundaryKind::Subsection,
        BoundaryKind::LetteredItem,
        BoundaryKind::NoticeHeader,
        BoundaryKind::NoticePart,
        BoundaryKind::Notification,
        BoundaryKind::Schedule,
    ];

    /// Notice vocabulary only applies to gazette documents.
    pub fn is_notice_marker(self) -> bool {
        matches!(
            self,
            BoundaryKind::NoticeHeader | BoundaryKind::NoticePart | BoundaryKind::Notification | BoundaryKind::Schedule
        )
    }

    pub fn matches(self, paragraph: &str) -> bool {
        self.pattern().is_match(paragraph)
    }

    fn pattern(self) -> &'static Regex {
        match self {
            BoundaryKind::NumberedClause => &*NUMBERED_RE,
            BoundaryKind::Subsection => &*SUBSECTION_RE,
            BoundaryKind::LetteredItem => &*LETTER_RE,
            BoundaryKind::NoticeHeader => &*HEADER_RE,
            BoundaryKind::NoticePart => &*PART_RE,
            BoundaryKind::Notification => &*NOTICE_RE,
            BoundaryKind::Schedule => &*SCHEDULE_RE,
        }
    }
}

/// Compile a vocabulary pattern so that zero-width joiners inside the
/// Sinhala terms are optional; normalized text has them stripped.
pub(crate) fn joiner_tolerant(pattern: &str) -> Regex {
    let p = pattern.replace('\u{200D}', "\u{200D}?").replace('\u{200C}', "\u{200C}?");
    Regex::new(&p).expect("vocabulary regex")
}

static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+(?:\.\d+)*\s*[\)\.]?\s+").expect("regex"));
static SUBSECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\(\s*\d+\s*\)\s+").expect("regex"));
static LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\(\s*[a-zA-Z]\s*\)\s+").expect("regex"));
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        "(?i)^\\s*(අති\\s*විශේෂ\\s*ගැසට්\\s*පත්\u{200D}රය|ගැසට්\\s*පත්\u{200D}රය|THE\\s+GAZETTE|EXTRAORDINARY|GAZETTE)\\b",
    )
});
static PART_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(r"(?i)^\s*(PART\s*[IVXLC]+|කොටස\s*\d+|අංශය\s*\d+|අංශ\s*\d+|SECTION\s*\d+)\b")
});
static NOTICE_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        "(?i)^\\s*(නිවේදනය|දැනුම්දීම|දැන්වීම|නියෝගය|නියෝග|රෙගුලාසි|ප්\u{200D}රකාශය|NOTIFICATION|ORDER|REGULATION)\\b",
    )
});
static SCHEDULE_RE: Lazy<Regex> =
    Lazy::new(|| joiner_tolerant(r"(?i)^\s*(උපලේඛනය|උපලේඛන|SCHEDULE|ANNEX|ANNEXURE)\b"));

/// Boundary classifier for one document kind.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryClassifier {
    notice_markers: bool,
}

impl BoundaryClassifier {
    pub fn new(notice_markers: bool) -> Self {
        Self { notice_markers }
    }

    pub fn for_kind(kind: DocumentKind) -> Self {
        Self::new(kind.is_gazette())
    }

    /// First matching cue, if any.
    pub fn classify(&self, paragraph: &str) -> Option<BoundaryKind> {
        BoundaryKind::ALL
            .into_iter()
            .filter(|k| self.notice_markers || !k.is_notice_marker())
            .find(|k| k.matches(paragraph))
    }

    pub fn starts_new_unit(&self, paragraph: &str) -> bool {
        self.classify(paragraph).is_some()
    }
}

/// Does `paragraph` open a new structural unit for documents of `kind`?
pub fn starts_new_unit(paragraph: &str, kind: DocumentKind) -> bool {
    BoundaryClassifier::for_kind(kind).starts_new_unit(paragraph)
}
