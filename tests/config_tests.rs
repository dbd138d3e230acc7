use std::fs;
use std::path::Path;

use legal_chunker::{ConfigError, DocumentKind, Normalizer, PipelineConfig, UnicodeForm};

#[test]
fn defaults_follow_document_kind() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.language, "si");
    assert_eq!(cfg.min_year, Some(1991));

    assert_eq!(cfg.acts.max_chars, 900);
    assert!(!cfg.acts.notice_markers);
    assert!(!cfg.acts.table_label.enabled);
    assert!(cfg.acts.admission.noisy.is_none());
    assert!(cfg.acts.admission.metadata.is_none());

    assert_eq!(cfg.gazettes.max_chars, 1100);
    assert!(cfg.gazettes.notice_markers);
    assert!(cfg.gazettes.table_label.enabled);
    assert!(cfg.gazettes.normalizer.strip_percent_lines);
    assert!(cfg.gazettes.admission.metadata.is_some());
    assert!(cfg.gazettes.normalizer.substitutions.len() > cfg.acts.normalizer.substitutions.len());
}

#[test]
fn empty_yaml_is_default() {
    assert_eq!(PipelineConfig::from_yaml_str("").unwrap(), PipelineConfig::default());
    assert_eq!(PipelineConfig::from_yaml_str("{}").unwrap(), PipelineConfig::default());
}

#[test]
fn partial_overlay_keeps_other_defaults() {
    let cfg = PipelineConfig::from_yaml_str("gazettes:\n  max_chars: 500\n  unicode_form: nfc\n").unwrap();
    assert_eq!(cfg.gazettes.max_chars, 500);
    assert_eq!(cfg.gazettes.normalizer.unicode_form, UnicodeForm::Nfc);
    assert!(cfg.gazettes.notice_markers);
    assert_eq!(cfg.acts, PipelineConfig::default().acts);
}

#[test]
fn extra_substitutions_are_appended() {
    let yaml = "acts:\n  extra_substitutions:\n    - [\"foo\", \"bar\"]\n";
    let cfg = PipelineConfig::from_yaml_str(yaml).unwrap();
    let base = PipelineConfig::default();
    let subs = &cfg.acts.normalizer.substitutions;
    assert_eq!(subs.len(), base.acts.normalizer.substitutions.len() + 1);
    assert_eq!(subs.last().unwrap(), &("foo".to_string(), "bar".to_string()));
}

#[test]
fn substitution_table_is_hot_editable() {
    let yaml = "acts:\n  front_matter_lines: 0\n  substitutions:\n    - [\"foo\", \"bar\"]\n";
    let cfg = PipelineConfig::from_yaml_str(yaml).unwrap();
    let n = Normalizer::new(&cfg.profile(DocumentKind::Act).normalizer);
    assert_eq!(n.rule_count(), 1);
    assert_eq!(n.normalize("foo\n"), "bar\n");
}

#[test]
fn running_header_pass_is_opt_in() {
    assert!(!PipelineConfig::default().acts.normalizer.strip_running_headers);
    let cfg = PipelineConfig::from_yaml_str("acts:\n  strip_running_headers: true\n").unwrap();
    assert!(cfg.acts.normalizer.strip_running_headers);
    assert!(!cfg.gazettes.normalizer.strip_running_headers);
}

#[test]
fn zero_min_year_disables_cutoff() {
    let cfg = PipelineConfig::from_yaml_str("min_year: 0\n").unwrap();
    assert_eq!(cfg.min_year, None);
}

#[test]
fn invalid_values_are_rejected() {
    let err = PipelineConfig::from_yaml_str("acts:\n  max_chars: 0\n").err().expect("should be error");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = PipelineConfig::from_yaml_str("acts:\n  substitutions:\n    - [\"\", \"x\"]\n").err().unwrap();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let yaml = "gazettes:\n  table_label:\n    enabled: true\n    min_lines: 4\n    ratio: 1.5\n";
    assert!(matches!(PipelineConfig::from_yaml_str(yaml), Err(ConfigError::Invalid(_))));

    assert!(matches!(PipelineConfig::from_yaml_str("language: \"\"\n"), Err(ConfigError::Invalid(_))));
}

#[test]
fn unknown_keys_are_parse_errors() {
    let err = PipelineConfig::from_yaml_str("acts:\n  max_char: 10\n").err().unwrap();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file_and_reports_missing() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("pipeline.yaml");
    fs::write(&path, "language: en\nmin_year: 2000\n").unwrap();
    let cfg = PipelineConfig::load(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.min_year, Some(2000));

    let missing = PipelineConfig::load(&td.path().join("absent.yaml")).err().unwrap();
    assert!(matches!(missing, ConfigError::Read(_)));
}

#[test]
fn bundled_sample_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("pipeline.yaml");
    let cfg = PipelineConfig::load(&path).expect("sample config is valid");
    assert_eq!(cfg.acts.max_chars, 900);
    assert_eq!(cfg.gazettes.max_chars, 1100);
    assert_eq!(cfg.gazettes, PipelineConfig::default().gazettes);
}
