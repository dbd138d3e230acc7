use legal_chunker::{starts_new_unit, BoundaryClassifier, BoundaryKind, DocumentKind};

const ACT: DocumentKind = DocumentKind::Act;
const GAZETTE: DocumentKind = DocumentKind::ExtraordinaryGazette;

#[test]
fn numbered_clauses_open_units() {
    for p in ["1. Short title", "12.3) Interpretation", "4 Application", "  7. Indented"] {
        assert!(starts_new_unit(p, ACT), "{p}");
        assert!(starts_new_unit(p, GAZETTE), "{p}");
    }
    assert!(!starts_new_unit("1.text without a gap", ACT));
}

#[test]
fn subsections_and_lettered_items_open_units() {
    let c = BoundaryClassifier::for_kind(ACT);
    assert_eq!(c.classify("(2) Every employer"), Some(BoundaryKind::Subsection));
    assert_eq!(c.classify("( 3 ) spaced out"), Some(BoundaryKind::Subsection));
    assert_eq!(c.classify("(a) in the case of"), Some(BoundaryKind::LetteredItem));
    assert_eq!(c.classify("   (b) indented item"), Some(BoundaryKind::LetteredItem));
    assert_eq!(c.classify("(ab) two letters"), None);
}

#[test]
fn notice_markers_only_for_gazettes() {
    let samples = [
        ("NOTIFICATION under section 2", BoundaryKind::Notification),
        ("නිවේදනය", BoundaryKind::Notification),
        ("PART II", BoundaryKind::NoticePart),
        ("schedule of lands", BoundaryKind::Schedule),
        ("උපලේඛනය", BoundaryKind::Schedule),
        ("THE GAZETTE OF THE DEMOCRATIC SOCIALIST REPUBLIC", BoundaryKind::NoticeHeader),
    ];
    let gazette = BoundaryClassifier::for_kind(GAZETTE);
    let act = BoundaryClassifier::for_kind(ACT);
    for (p, kind) in samples {
        assert_eq!(gazette.classify(p), Some(kind), "{p}");
        assert_eq!(act.classify(p), None, "{p}");
    }
}

#[test]
fn stripped_joiners_still_match_vocabulary() {
    assert!(starts_new_unit("ගැසට් පත්\u{200D}රය", GAZETTE));
    assert!(starts_new_unit("ගැසට් පත්රය", GAZETTE));
}

#[test]
fn mid_paragraph_cues_do_not_count() {
    assert!(!starts_new_unit("The PART II applies", GAZETTE));
    assert!(!starts_new_unit("as listed in the Schedule", GAZETTE));
    assert!(!starts_new_unit("section 1. applies", ACT));
}

#[test]
fn classifier_switch_overrides_kind() {
    let c = BoundaryClassifier::new(true);
    assert!(c.starts_new_unit("SCHEDULE"));
    let c = BoundaryClassifier::new(false);
    assert!(!c.starts_new_unit("SCHEDULE"));
    assert!(c.starts_new_unit("(1) still structural"));
}
