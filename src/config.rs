//! Pipeline configuration: per-kind profiles with built-in defaults and a
//! YAML overlay.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentKind;
use crate::error::ConfigError;
use crate::substitutions::default_substitutions;

pub const DEFAULT_MIN_YEAR: i32 = 1991;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeForm {
    Nfc,
    #[default]
    Nfkc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub unicode_form: UnicodeForm,
    /// Leading lines (stamps, letterheads) cut before any other pass.
    pub front_matter_lines: usize,
    /// Zero-width formatting marks deleted outright.
    pub invisible_marks: Vec<char>,
    /// Ordered literal rewrite list, applied top to bottom.
    pub substitutions: Vec<(String, String)>,
    /// Drop lines holding only a 1-3 digit percentage (notice scans).
    pub strip_percent_lines: bool,
    /// Drop the republic masthead, page/number running headers and repeated
    /// lines. Off unless configured.
    #[serde(default)]
    pub strip_running_headers: bool,
}

impl NormalizerConfig {
    pub fn for_kind(kind: DocumentKind) -> Self {
        Self {
            unicode_form: UnicodeForm::Nfkc,
            front_matter_lines: 4,
            invisible_marks: vec!['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'],
            substitutions: default_substitutions(kind.is_gazette()),
            strip_percent_lines: kind.is_gazette(),
            strip_running_headers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLabelConfig {
    pub enabled: bool,
    pub min_lines: usize,
    pub ratio: f64,
}

impl TableLabelConfig {
    pub fn for_kind(kind: DocumentKind) -> Self {
        Self { enabled: kind.is_gazette(), min_lines: 4, ratio: 0.65 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoisyRule {
    pub min_glyphs: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRule {
    pub min_lines: usize,
    pub numeric_ratio: f64,
    #[serde(default)]
    pub short_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRule {
    pub short_len: usize,
    pub min_hits: usize,
    pub max_terminators: usize,
    pub max_len: usize,
}

/// Noise Filter rule set. Disabled rules are `None`, so the statute/notice
/// asymmetry lives here instead of in separate code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRules {
    pub min_chars: usize,
    #[serde(default)]
    pub noisy: Option<NoisyRule>,
    pub table: TableRule,
    #[serde(default)]
    pub metadata: Option<MetadataRule>,
}

impl AdmissionRules {
    pub fn for_kind(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Act => Self {
                min_chars: 120,
                noisy: None,
                table: TableRule { min_lines: 4, numeric_ratio: 0.6, short_ratio: None },
                metadata: None,
            },
            DocumentKind::ExtraordinaryGazette => Self {
                min_chars: 120,
                noisy: Some(NoisyRule { min_glyphs: 3, max_len: 400 }),
                table: TableRule { min_lines: 4, numeric_ratio: 0.45, short_ratio: Some(0.35) },
                metadata: Some(MetadataRule { short_len: 160, min_hits: 2, max_terminators: 1, max_len: 350 }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindProfile {
    pub max_chars: usize,
    pub normalizer: NormalizerConfig,
    /// Notice header/part/notification/schedule markers start new units.
    pub notice_markers: bool,
    pub table_label: TableLabelConfig,
    pub admission: AdmissionRules,
}

impl KindProfile {
    pub fn for_kind(kind: DocumentKind) -> Self {
        let gazette = kind.is_gazette();
        Self {
            max_chars: if gazette { 1100 } else { 900 },
            normalizer: NormalizerConfig::for_kind(kind),
            notice_markers: gazette,
            table_label: TableLabelConfig::for_kind(kind),
            admission: AdmissionRules::for_kind(kind),
        }
    }
}

/// Explicit configuration passed into every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub language: String,
    pub min_year: Option<i32>,
    pub acts: KindProfile,
    pub gazettes: KindProfile,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "si".to_string(),
            min_year: Some(DEFAULT_MIN_YEAR),
            acts: KindProfile::for_kind(DocumentKind::Act),
            gazettes: KindProfile::for_kind(DocumentKind::ExtraordinaryGazette),
        }
    }
}

impl PipelineConfig {
    pub fn profile(&self, kind: DocumentKind) -> &KindProfile {
        match kind {
            DocumentKind::Act => &self.acts,
            DocumentKind::ExtraordinaryGazette => &self.gazettes,
        }
    }

    pub fn profile_mut(&mut self, kind: DocumentKind) -> &mut KindProfile {
        match kind {
            DocumentKind::Act => &mut self.acts,
            DocumentKind::ExtraordinaryGazette => &mut self.gazettes,
        }
    }

    /// Parse a YAML config. Missing keys keep their built-in defaults.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = if raw.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?
        };
        let mut cfg = PipelineConfig::default();
        if let Some(lang) = file.language {
            cfg.language = lang;
        }
        if let Some(y) = file.min_year {
            cfg.min_year = if y > 0 { Some(y) } else { None };
        }
        file.acts.apply(&mut cfg.acts);
        file.gazettes.apply(&mut cfg.gazettes);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid("language is empty".into()));
        }
        for (name, p) in [("acts", &self.acts), ("gazettes", &self.gazettes)] {
            if p.max_chars == 0 {
                return Err(ConfigError::Invalid(format!("{name}.max_chars must be > 0")));
            }
            if let Some((i, _)) = p.normalizer.substitutions.iter().enumerate().find(|(_, (a, _))| a.is_empty()) {
                return Err(ConfigError::Invalid(format!("{name}.substitutions[{i}] has an empty pattern")));
            }
            let mut ratios = vec![p.table_label.ratio, p.admission.table.numeric_ratio];
            ratios.extend(p.admission.table.short_ratio);
            if ratios.iter().any(|r| !(0.0..=1.0).contains(r)) {
                return Err(ConfigError::Invalid(format!("{name}: ratios must lie in 0..=1")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    language: Option<String>,
    min_year: Option<i32>,
    acts: ProfileFile,
    gazettes: ProfileFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProfileFile {
    max_chars: Option<usize>,
    unicode_form: Option<UnicodeForm>,
    front_matter_lines: Option<usize>,
    invisible_marks: Option<Vec<char>>,
    substitutions: Option<Vec<(String, String)>>,
    extra_substitutions: Vec<(String, String)>,
    strip_percent_lines: Option<bool>,
    strip_running_headers: Option<bool>,
    notice_markers: Option<bool>,
    table_label: Option<TableLabelConfig>,
    admission: Option<AdmissionRules>,
}

impl ProfileFile {
    fn apply(self, p: &mut KindProfile) {
        if let Some(v) = self.max_chars {
            p.max_chars = v;
        }
        if let Some(v) = self.unicode_form {
            p.normalizer.unicode_form = v;
        }
        if let Some(v) = self.front_matter_lines {
            p.normalizer.front_matter_lines = v;
        }
        if let Some(v) = self.invisible_marks {
            p.normalizer.invisible_marks = v;
        }
        if let Some(v) = self.substitutions {
            p.normalizer.substitutions = v;
        }
        p.normalizer.substitutions.extend(self.extra_substitutions);
        if let Some(v) = self.strip_percent_lines {
            p.normalizer.strip_percent_lines = v;
        }
        if let Some(v) = self.strip_running_headers {
            p.normalizer.strip_running_headers = v;
        }
        if let Some(v) = self.notice_markers {
            p.notice_markers = v;
        }
        if let Some(v) = self.table_label {
            p.table_label = v;
        }
        if let Some(v) = self.admission {
            p.admission = v;
        }
    }
}
