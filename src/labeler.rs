//! Weak labels from surface patterns.
//!
//! Every detector is an existence test over the whole chunk and they are
//! independent of each other. A chunk nobody claims is `OTHER`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::boundary::joiner_tolerant;
use crate::config::TableLabelConfig;
use crate::document::DocumentKind;

/// Declaration order is the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    TableLike,
    Obligation,
    Deadline,
    Penalty,
    Prohibition,
    Other,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::TableLike => "TABLE_LIKE",
            Label::Obligation => "OBLIGATION",
            Label::Deadline => "DEADLINE",
            Label::Penalty => "PENALTY",
            Label::Prohibition => "PROHIBITION",
            Label::Other => "OTHER",
        }
    }
}

/// Non-empty label set, iterated and serialized in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<Label>);

impl LabelSet {
    fn from_detected(labels: BTreeSet<Label>) -> Self {
        if labels.is_empty() {
            Self(BTreeSet::from([Label::Other]))
        } else {
            Self(labels)
        }
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0.contains(&label)
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static OBLIGATION_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(r"(?i)(යුතුය|යුත්තේය|කළ යුතුය|අනිවාර්ය|වගකිය|\bshall\b|\bmust\b|\bis required to\b)")
});
static DEADLINE_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        r"(?i)(දින\s*\d+|මාස\s*\d+|අවුරුදු\s*\d+|තුළ|කට පෙර|දිනට පෙර|\bwithin\s+\S+\s+(?:days?|months?|years?)\b|\bbefore the\s+\S+\s+day\b|\bnot later than\b)",
    )
});
static PENALTY_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(r"(?i)(දඩ|දඬුවම්|සිරදඬුවම්|නඩු|වරදක්|පනවා|\bshall impose\b|\bfine\b|\bimprisonment\b|\boffence\b)")
});
static PROHIBITION_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(r"(?i)(තහනම්|නොකළ\s*යුතුය|නොහැකි|වළක්වා|\bshall not\b|\bprohibited\b)")
});
static TABLE_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*[\d\.,/:\-\s]{10,}|[A-Z]{2,}\s+\d+|\d+\s+\d+\s+\d+|\d{2,})\s*$").expect("regex")
});

/// A line that reads as a table row: a long run of digits and separators, a
/// short upper-case code followed by a number, three numbers, or a bare
/// numeric code.
pub fn is_table_row(line: &str) -> bool {
    TABLE_ROW_RE.is_match(line)
}

/// True when at least `cfg.ratio` of the non-blank lines are table rows and
/// there are at least `cfg.min_lines` of them.
pub fn is_table_like_block(text: &str, cfg: &TableLabelConfig) -> bool {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.len() < cfg.min_lines.max(1) {
        return false;
    }
    let rows = lines.iter().filter(|l| is_table_row(l)).count();
    rows as f64 / lines.len() as f64 >= cfg.ratio
}

/// Label a chunk with the built-in settings for `kind`.
pub fn label(chunk_text: &str, kind: DocumentKind) -> LabelSet {
    label_with(chunk_text, Some(&TableLabelConfig::for_kind(kind)))
}

/// Label one chunk. `table` is `Some` only for kinds that compute TABLE_LIKE.
pub fn label_with(text: &str, table: Option<&TableLabelConfig>) -> LabelSet {
    let mut labels = BTreeSet::new();
    if let Some(cfg) = table.filter(|c| c.enabled) {
        if is_table_like_block(text, cfg) {
            labels.insert(Label::TableLike);
        }
    }
    let detectors: [(&Regex, Label); 4] = [
        (&*OBLIGATION_RE, Label::Obligation),
        (&*DEADLINE_RE, Label::Deadline),
        (&*PENALTY_RE, Label::Penalty),
        (&*PROHIBITION_RE, Label::Prohibition),
    ];
    for (re, label) in detectors {
        if re.is_match(text) {
            labels.insert(label);
        }
    }
    LabelSet::from_detected(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_survives_serialization() {
        let set = LabelSet(BTreeSet::from([Label::Penalty, Label::TableLike, Label::Obligation]));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["TABLE_LIKE","OBLIGATION","PENALTY"]"#);
    }

    #[test]
    fn empty_detection_is_other() {
        let set = label_with("plain text", None);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Label::Other]);
    }
}
