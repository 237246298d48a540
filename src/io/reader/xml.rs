/*! WebNLG XML reader

Deserializes a benchmark file with quick-xml and builds one [DocumentRecord] per usable `lex`.

Pipe-delimited fields that do not have the expected number of parts are logged and skipped,
as are references whose tag is not an entity tag.
!*/
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::alignment::{DocumentRecord, Tag, TagMap, Triple};
use crate::error::Error;

#[derive(Debug, Deserialize)]
struct Benchmark {
    entries: Entries,
}

#[derive(Debug, Default, Deserialize)]
struct Entries {
    #[serde(default)]
    entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "@eid")]
    eid: String,
    #[serde(default)]
    modifiedtripleset: ModifiedTripleSet,
    #[serde(default)]
    entitymap: EntityMap,
    #[serde(default)]
    lex: Vec<Lex>,
}

#[derive(Debug, Default, Deserialize)]
struct ModifiedTripleSet {
    #[serde(default)]
    mtriple: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct EntityMap {
    #[serde(default)]
    entity: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Lex {
    #[serde(rename = "@comment", default)]
    comment: Option<String>,
    #[serde(rename = "@lid", default)]
    lid: Option<String>,
    #[serde(default)]
    sortedtripleset: SortedTripleSet,
    #[serde(default)]
    references: References,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SortedTripleSet {
    #[serde(default)]
    sentence: Vec<SentenceTriples>,
}

#[derive(Debug, Default, Deserialize)]
struct SentenceTriples {
    #[serde(default)]
    striple: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct References {
    #[serde(default)]
    reference: Vec<Reference>,
}

#[derive(Debug, Deserialize)]
struct Reference {
    #[serde(rename = "@tag")]
    tag: String,
    #[serde(rename = "@entity")]
    entity: String,
}

impl Lex {
    fn is_bad(&self) -> bool {
        self.comment.as_deref() == Some("bad")
    }
}

/// Parses pipe-delimited triples, skipping malformed ones.
fn triples(entry_id: &str, lines: &[String]) -> Vec<Triple> {
    lines
        .iter()
        .filter_map(|line| {
            let triple = Triple::parse(line);
            if triple.is_none() {
                warn!("{entry_id}: malformed triple {line:?}");
            }
            triple
        })
        .collect()
}

/// Parses `TAG | entity` lines.
fn entity_map(entry_id: &str, lines: &[String]) -> TagMap {
    lines
        .iter()
        .filter_map(|line| {
            let parsed = line
                .split_once('|')
                .and_then(|(tag, entity)| Some((tag.trim().parse::<Tag>().ok()?, entity.trim())));
            if parsed.is_none() {
                warn!("{entry_id}: malformed entity map line {line:?}");
            }
            parsed.map(|(tag, entity)| (tag, entity.to_string()))
        })
        .collect()
}

fn references(entry_id: &str, references: &[Reference]) -> TagMap {
    references
        .iter()
        .filter_map(|r| match r.tag.parse::<Tag>() {
            Ok(tag) => Some((tag, r.entity.clone())),
            Err(_) => {
                warn!("{entry_id}: ignoring reference with tag {:?}", r.tag);
                None
            }
        })
        .collect()
}

impl Entry {
    fn into_documents(self) -> Vec<DocumentRecord> {
        let eid = self.eid;
        let entry_triples = triples(&eid, &self.modifiedtripleset.mtriple);
        let entity_map = entity_map(&eid, &self.entitymap.entity);

        self.lex
            .into_iter()
            .filter(|lex| {
                if lex.is_bad() {
                    debug!("{eid}: skipping bad lex {:?}", lex.lid);
                }
                !lex.is_bad()
            })
            .map(|lex| DocumentRecord {
                entry_id: eid.clone(),
                lex_id: lex.lid,
                triples: entry_triples.clone(),
                sentence_groups: lex
                    .sortedtripleset
                    .sentence
                    .iter()
                    .map(|s| triples(&eid, &s.striple))
                    .collect(),
                tag_to_entity: references(&eid, &lex.references.reference),
                entity_map: entity_map.clone(),
                raw_text: lex.text.unwrap_or_default(),
                raw_template: lex.template.unwrap_or_default(),
            })
            .collect()
    }
}

/// Parses the content of a benchmark XML file.
pub fn parse_str(xml: &str) -> Result<Vec<DocumentRecord>, Error> {
    let benchmark: Benchmark = quick_xml::de::from_str(xml)?;
    Ok(benchmark
        .entries
        .entry
        .into_iter()
        .flat_map(Entry::into_documents)
        .collect())
}

/// Reads and parses a benchmark XML file.
pub fn read_file(path: &Path) -> Result<Vec<DocumentRecord>, Error> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Role;

    const ENTRY: &str = r#"<?xml version="1.0" ?>
<benchmark>
  <entries>
    <entry category="Astronaut" eid="Id1" size="2">
      <originaltripleset>
        <otriple>Alan_Bean | birthPlace | Wheeler,_Texas</otriple>
      </originaltripleset>
      <modifiedtripleset>
        <mtriple>Alan_Bean | birthPlace | Wheeler,_Texas</mtriple>
        <mtriple>Alan_Bean | operator | NASA</mtriple>
        <mtriple>not a triple</mtriple>
      </modifiedtripleset>
      <entitymap>
        <entity>AGENT-1 | Alan_Bean</entity>
        <entity>PATIENT-1 | Wheeler,_Texas</entity>
        <entity>PATIENT-2 | NASA</entity>
      </entitymap>
      <lex comment="good" lid="Id1">
        <sortedtripleset>
          <sentence ID="1">
            <striple>Alan_Bean | birthPlace | Wheeler,_Texas</striple>
          </sentence>
          <sentence ID="2">
            <striple>Alan_Bean | operator | NASA</striple>
          </sentence>
        </sortedtripleset>
        <references>
          <reference entity="Alan_Bean" number="1" tag="AGENT-1" type="name">Alan Bean</reference>
          <reference entity="Wheeler,_Texas" number="2" tag="PATIENT-1" type="name">Wheeler , Texas</reference>
          <reference entity="NASA" number="3" tag="PATIENT-2" type="name">NASA</reference>
          <reference entity="NASA" number="4" tag="OTHER" type="name">NASA</reference>
        </references>
        <text>Alan Bean was born in Wheeler, Texas. He was hired by NASA.</text>
        <template>AGENT-1 was born in PATIENT-1 . AGENT-1 was hired by PATIENT-2 .</template>
        <lexicalization>VP[aspect=simple] ...</lexicalization>
      </lex>
      <lex comment="bad" lid="Id2">
        <sortedtripleset>
          <sentence ID="1"/>
        </sortedtripleset>
        <references/>
        <text>bad</text>
        <template>bad</template>
      </lex>
      <lex lid="Id3">
        <sortedtripleset>
          <sentence ID="1"/>
        </sortedtripleset>
        <text>no comment &amp; no references</text>
        <template/>
      </lex>
    </entry>
  </entries>
</benchmark>
"#;

    #[test]
    fn parse_entry() {
        let docs = parse_str(ENTRY).unwrap();
        assert_eq!(docs.len(), 2);

        let doc = &docs[0];
        assert_eq!(doc.entry_id, "Id1");
        assert_eq!(doc.lex_id.as_deref(), Some("Id1"));
        assert_eq!(doc.triples.len(), 2);
        assert_eq!(doc.sentence_groups.len(), 2);
        assert_eq!(
            doc.sentence_groups[1],
            vec![Triple::new("Alan_Bean", "operator", "NASA")]
        );
        assert_eq!(doc.tag_to_entity.len(), 3);
        assert_eq!(
            doc.tag_to_entity.get(&Tag::new(Role::Patient, 1)),
            Some("Wheeler,_Texas")
        );
        assert_eq!(doc.entity_map, doc.tag_to_entity);
        assert_eq!(
            doc.raw_template,
            "AGENT-1 was born in PATIENT-1 . AGENT-1 was hired by PATIENT-2 ."
        );
    }

    #[test]
    fn lex_without_comment() {
        let docs = parse_str(ENTRY).unwrap();
        let doc = &docs[1];
        assert_eq!(doc.lex_id.as_deref(), Some("Id3"));
        assert!(doc.tag_to_entity.is_empty());
        assert_eq!(doc.sentence_groups, vec![Vec::<Triple>::new()]);
        assert_eq!(doc.raw_text, "no comment & no references");
        assert_eq!(doc.raw_template, "");
    }

    #[test]
    fn invalid_xml() {
        assert!(matches!(
            parse_str("<benchmark><entries><entry>"),
            Err(Error::Xml(_))
        ));
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1triples_Astronaut.xml");
        std::fs::write(&path, ENTRY).unwrap();
        assert_eq!(read_file(&path).unwrap().len(), 2);
    }
}
