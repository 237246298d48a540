/*! Sentence alignment

Turns [DocumentRecord]s (one corpus verbalisation, several sentences) into [AlignedSentence]s
(one sentence with its triples, template and tag map).

```
use webnlg_align::alignment::{Aligner, Counters, Event};
use webnlg_align::io::reader::parse_str;
use webnlg_align::tables::Tables;
use webnlg_align::tokenizer::Segmenter;

let xml = r#"<benchmark><entries>
  <entry category="Astronaut" eid="Id1" size="1">
    <modifiedtripleset><mtriple>Alan_Bean | birthPlace | Wheeler,_Texas</mtriple></modifiedtripleset>
    <lex comment="good" lid="Id1">
      <sortedtripleset><sentence ID="1"><striple>Alan_Bean | birthPlace | Wheeler,_Texas</striple></sentence></sortedtripleset>
      <references>
        <reference entity="Alan_Bean" number="1" tag="AGENT-1" type="name">Alan Bean</reference>
        <reference entity="Wheeler,_Texas" number="2" tag="PATIENT-1" type="name">Wheeler, Texas</reference>
      </references>
      <text>Alan Bean was born in Wheeler, Texas.</text>
      <template>AGENT-1 was born in PATIENT-1 .</template>
    </lex>
  </entry>
</entries></benchmark>"#;

let tables = Tables::embedded()?;
let aligner = Aligner::new(&tables, Segmenter);
let mut counters = Counters::default();

for doc in parse_str(xml)? {
    for event in aligner.align(&doc) {
        let event = event?;
        counters.record(&event);
        if let Event::Aligned(sentence) = event {
            assert_eq!(sentence.template, "AGENT_1 was born in PATIENT_1 .");
        }
    }
}
assert_eq!(counters.aligned, 1);
# Ok::<(), webnlg_align::error::Error>(())
```
!*/
mod canonical;
mod engine;
mod event;
mod record;
mod tag;

pub use canonical::{canonicalize, prune, Pruned};
pub use engine::{Aligner, Alignment};
pub use event::{Counters, CorefReason, DirtyReason, Event};
pub use record::{AlignedSentence, DocumentRecord, Triple};
pub use tag::{contains_token, replace_token, template_tags, Role, Tag, TagMap};
