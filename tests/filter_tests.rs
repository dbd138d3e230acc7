use legal_chunker::{admit, evaluate, label, Admission, AdmissionRules, DocumentKind, Label, RejectReason};

const ACT: DocumentKind = DocumentKind::Act;
const GAZETTE: DocumentKind = DocumentKind::ExtraordinaryGazette;

fn verdict(text: &str, kind: DocumentKind) -> Admission {
    evaluate(text, &AdmissionRules::for_kind(kind))
}

fn obligation_prose() -> String {
    let sentence = "සෑම සේවා යෝජකයෙකුම මෙම පනත යටතේ වාර්ෂික වාර්තාවක් කොමසාරිස් වෙත ඉදිරිපත් කළ යුතුය. \
                    එම වාර්තාව වර්ෂය අවසන් වී දින 30 ක් ඇතුළත භාර දිය යුතුය. ";
    sentence.repeat(4).chars().take(500).collect()
}

#[test]
fn short_chunks_are_rejected() {
    let text = "word ".repeat(20);
    assert_eq!(verdict(&text, ACT), Admission::Rejected(RejectReason::TooShort));
    assert_eq!(verdict(&text, GAZETTE), Admission::Rejected(RejectReason::TooShort));

    // Length is measured after trimming.
    let padded = format!("   {}   ", "x".repeat(119));
    assert_eq!(verdict(&padded, ACT), Admission::Rejected(RejectReason::TooShort));
    assert!(admit(&"x".repeat(120), ACT));
}

#[test]
fn masthead_without_sentences_is_pure_metadata() {
    let text = "THE GAZETTE OF THE DEMOCRATIC SOCIALIST REPUBLIC OF SRI LANKA EXTRAORDINARY No 2187/26 \
                TUESDAY JULY 19 2020 PUBLISHED BY AUTHORITY PART I GENERAL";
    assert!((120..160).contains(&text.chars().count()));
    assert_eq!(verdict(text, GAZETTE), Admission::Rejected(RejectReason::PureMetadata));
    // Statutes carry no metadata rule.
    assert!(admit(text, ACT));
}

#[test]
fn dense_boilerplate_is_pure_metadata_until_it_has_sentences() {
    let boilerplate = "Printed at the Department of Government Printing and published by the Government Printer \
                       for the Extraordinary Gazette issue No 2187/26 on behalf of the Democratic Socialist \
                       Republic of Sri Lanka";
    assert!(boilerplate.chars().count() >= 160);
    assert_eq!(verdict(boilerplate, GAZETTE), Admission::Rejected(RejectReason::PureMetadata));

    let prose = "Printed at the Department of Government Printing. Published by the Government Printer. \
                 Gazette issue of the Democratic Socialist Republic of Sri Lanka. Issued under the authority \
                 of the State for public information.";
    assert_eq!(verdict(prose, GAZETTE), Admission::Admitted);
}

#[test]
fn obligation_prose_is_admitted_and_labeled() {
    let text = obligation_prose();
    assert_eq!(text.chars().count(), 500);
    for kind in [ACT, GAZETTE] {
        assert!(admit(&text, kind));
        let labels = label(&text, kind);
        assert!(labels.contains(Label::Obligation));
        assert!(labels.contains(Label::Deadline));
    }
}

#[test]
fn numeric_tables_are_rejected_for_both_kinds() {
    let mut text = String::from("Survey of lands and extents\n");
    for i in 0..6 {
        text.push_str(&format!("00{} 2019/07/19 45{}\n", 10 + i, i));
    }
    assert!(text.trim().chars().count() >= 120);
    assert_eq!(verdict(&text, ACT), Admission::Rejected(RejectReason::TableLike));
    assert_eq!(verdict(&text, GAZETTE), Admission::Rejected(RejectReason::TableLike));
}

#[test]
fn short_line_tables_only_rejected_for_gazettes() {
    let text = "The land described in the schedule below is situated in the village\n\
                and is bounded on the north by the road to the river bank\n\
                Survey plan number and extent as shown\nab\ncd";
    assert_eq!(verdict(text, GAZETTE), Admission::Rejected(RejectReason::TableLike));
    assert_eq!(verdict(text, ACT), Admission::Admitted);
}

#[test]
fn garbage_glyphs_only_reject_gazette_chunks() {
    let text = format!("{} \u{FFFD}\u{FFFD}\u{FFFD}", "word ".repeat(40));
    assert_eq!(verdict(&text, GAZETTE), Admission::Rejected(RejectReason::TooNoisy));
    assert_eq!(verdict(&text, ACT), Admission::Admitted);
}

#[test]
fn first_failing_rule_wins() {
    let text = "\u{FFFD}\u{FFFD}\u{FFFD} gazette";
    assert_eq!(verdict(text, GAZETTE), Admission::Rejected(RejectReason::TooShort));
}

#[test]
fn rules_are_configuration() {
    let mut rules = AdmissionRules::for_kind(ACT);
    rules.min_chars = 10;
    assert_eq!(evaluate("a short clause", &rules), Admission::Admitted);
    rules.metadata = AdmissionRules::for_kind(GAZETTE).metadata;
    assert_eq!(evaluate("Government Printer", &rules), Admission::Rejected(RejectReason::PureMetadata));
}
