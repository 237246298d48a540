use webnlg_align::alignment::{canonicalize, Aligner, Counters, DocumentRecord, Tag, TagMap, Triple};
use webnlg_align::error::Error;
use webnlg_align::tables::Tables;
use webnlg_align::tokenizer::Segmenter;

fn tags(entries: &[(&str, &str)]) -> TagMap {
    entries
        .iter()
        .map(|(t, e)| (t.parse::<Tag>().unwrap(), e.to_string()))
        .collect()
}

#[test]
fn misspelling_boundaries() {
    let tables = Tables::embedded().unwrap();
    assert_eq!(tables.misspelling.fix(". accademiz ."), ". academia .");
    assert_eq!(tables.misspelling.fix("xaccademizx"), "xaccademizx");

    let fixed = tables.misspelling.fix("he studied at accademiz , then left .");
    assert_eq!(tables.misspelling.fix(&fixed), fixed);
}

#[test]
fn coreference_collapse() {
    let (unique, template) = canonicalize(
        &tags(&[("AGENT-1", "Texas"), ("AGENT-2", "Texas")]),
        "AGENT-1 is home to AGENT-2",
    )
    .unwrap();
    assert_eq!(template, "AGENT_1 is home to AGENT_1");
    assert_eq!(unique.len(), 1);
}

#[test]
fn rephrase_units() {
    let tables = Tables::embedded().unwrap();
    let phrasings = tables.rephraser.rephrase("5 (metres)").unwrap();
    for expected in ["5 m", "5 metres", "5 meters", "5.0"] {
        assert!(phrasings.contains(expected), "missing {expected}");
    }

    assert!(matches!(
        tables.rephraser.rephrase("10 (frobnicate)"),
        Err(Error::UnknownUnit(_))
    ));
}

#[test]
fn single_group_yields_one_sentence() {
    let tables = Tables::embedded().unwrap();
    let aligner = Aligner::new(&tables, Segmenter);
    let triple = Triple::new("Alan_Bean", "birthPlace", "Wheeler,_Texas");
    let doc = DocumentRecord {
        entry_id: "Id1".to_string(),
        triples: vec![triple.clone()],
        sentence_groups: vec![vec![triple]],
        tag_to_entity: tags(&[("AGENT-1", "Alan_Bean"), ("PATIENT-1", "Wheeler,_Texas")]),
        raw_text: "Alan Bean was born in Wheeler, Texas. Really.".to_string(),
        raw_template: "AGENT-1 was born in PATIENT-1 . Really .".to_string(),
        ..Default::default()
    };

    let mut counters = Counters::default();
    for event in aligner.align(&doc) {
        counters.record(&event.unwrap());
    }
    assert_eq!(counters.aligned, 1);
}

#[test]
fn mismatched_lengths_yield_nothing() {
    let tables = Tables::embedded().unwrap();
    let aligner = Aligner::new(&tables, Segmenter);
    let born = Triple::new("Alan_Bean", "birthPlace", "Wheeler,_Texas");
    let nasa = Triple::new("Alan_Bean", "operator", "NASA");
    let doc = DocumentRecord {
        entry_id: "Id1".to_string(),
        triples: vec![born.clone(), nasa.clone()],
        sentence_groups: vec![vec![born], vec![nasa]],
        tag_to_entity: tags(&[
            ("AGENT-1", "Alan_Bean"),
            ("PATIENT-1", "Wheeler,_Texas"),
            ("PATIENT-2", "NASA"),
        ]),
        raw_text: "Alan Bean was born in Wheeler, Texas and worked for NASA.".to_string(),
        raw_template: "AGENT-1 was born in PATIENT-1 . AGENT-1 worked for PATIENT-2 .".to_string(),
        ..Default::default()
    };

    let mut counters = Counters::default();
    for event in aligner.align(&doc) {
        counters.record(&event.unwrap());
    }
    assert_eq!(counters.aligned, 0);
    assert!(counters.dirty >= 1);
}
