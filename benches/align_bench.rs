use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webnlg_align::{
    alignment::{Aligner, DocumentRecord, Tag, TagMap, Triple},
    tables::Tables,
    tokenizer::{Segmenter, Tokenizer},
};

/// A document of `n` sentences, each verbalising one triple.
fn document(n: usize) -> DocumentRecord {
    let mut tag_to_entity = TagMap::new();
    tag_to_entity.insert("AGENT-1".parse::<Tag>().unwrap(), "Alan_Bean".to_string());

    let mut groups = Vec::new();
    let mut text = String::new();
    let mut template = String::new();
    for i in 1..=n {
        let entity = format!("Place_{i}");
        let tag: Tag = format!("PATIENT-{i}").parse().unwrap();
        groups.push(vec![Triple::new("Alan_Bean", "visited", &entity)]);
        text.push_str(&format!("Alan Bean visited Place {i}, accademiz. "));
        template.push_str(&format!("AGENT-1 visited {} , accademiz . ", tag.wire()));
        tag_to_entity.insert(tag, entity);
    }

    DocumentRecord {
        entry_id: "Id1".to_string(),
        lex_id: Some("Id1".to_string()),
        triples: groups.iter().flatten().cloned().collect(),
        sentence_groups: groups,
        tag_to_entity,
        entity_map: TagMap::new(),
        raw_text: text,
        raw_template: template,
    }
}

pub fn align(c: &mut Criterion) {
    let tables = Tables::embedded().unwrap();
    let aligner = Aligner::new(&tables, Segmenter);
    let doc = document(7);

    c.bench_function("align_7_sentences", |b| {
        b.iter(|| aligner.align(black_box(&doc)).count())
    });
}

pub fn tokenize(c: &mut Criterion) {
    let doc = document(7);
    c.bench_function("word_tokenize", |b| {
        b.iter(|| Segmenter.word_tokenize(black_box(&doc.raw_text), false))
    });
    c.bench_function("sentence_split", |b| {
        b.iter(|| Segmenter.sentence_split(black_box(&doc.raw_text)))
    });
}

pub fn misspelling(c: &mut Criterion) {
    let tables = Tables::embedded().unwrap();
    let doc = document(7);
    c.bench_function("misspelling_fix", |b| {
        b.iter(|| tables.misspelling.fix(black_box(&doc.raw_text)))
    });
}

criterion_group!(benches, align, tokenize, misspelling);
criterion_main!(benches);
