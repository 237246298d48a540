/*! Document and sentence records

A [DocumentRecord] is one annotated verbalisation of a corpus entry, as read from the XML files.
An [AlignedSentence] is one sentence of it, paired with the triples it verbalises.
!*/
use std::collections::BTreeMap;

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tag::TagMap;

/// Subject, predicate, object.
///
/// Serialized as a 3 element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TripleSer", into = "TripleSer")]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

#[derive(Serialize, Deserialize)]
struct TripleSer(String, String, String);

impl From<Triple> for TripleSer {
    fn from(t: Triple) -> Self {
        Self(t.subject, t.predicate, t.object)
    }
}

impl From<TripleSer> for Triple {
    fn from(t: TripleSer) -> Self {
        Self {
            subject: t.0,
            predicate: t.1,
            object: t.2,
        }
    }
}

impl Triple {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
        }
    }

    /// Parses a `subject | predicate | object` line.
    /// Returns [None] if the line does not have exactly 3 parts.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split('|').map(str::trim);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(s), Some(p), Some(o), None) => Some(Self::new(s, p, o)),
            _ => None,
        }
    }

    /// Subject and object, the two ends that may denote entities.
    pub fn ends(&self) -> [&str; 2] {
        [&self.subject, &self.object]
    }

    /// Strips wrapping double quotes from subject and object.
    pub fn unquoted(self) -> Self {
        Self {
            subject: self.subject.trim_matches('"').to_string(),
            predicate: self.predicate,
            object: self.object.trim_matches('"').to_string(),
        }
    }
}

impl JsonSchema for Triple {
    fn schema_name() -> String {
        "Triple".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <(String, String, String)>::json_schema(gen)
    }
}

impl JsonSchema for TagMap {
    fn schema_name() -> String {
        "TagMap".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <BTreeMap<String, String>>::json_schema(gen)
    }
}

/// One verbalisation (`lex`) of a corpus entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    pub entry_id: String,
    pub lex_id: Option<String>,
    /// Whole triple set of the entry.
    pub triples: Vec<Triple>,
    /// Triples grouped by target sentence.
    pub sentence_groups: Vec<Vec<Triple>>,
    /// Tag to entity, from the lex references.
    pub tag_to_entity: TagMap,
    /// Tag to entity, from the entry entity map.
    pub entity_map: TagMap,
    pub raw_text: String,
    pub raw_template: String,
}

/// Output unit: one sentence, its template and the triples it verbalises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AlignedSentence {
    pub triples: Vec<Triple>,
    #[serde(rename = "target")]
    pub template: String,
    #[serde(rename = "target_txt")]
    pub text: String,
    #[serde(rename = "ner2ent")]
    pub tag_to_entity: TagMap,
}

impl AlignedSentence {
    /// JSON schema of the serialized record.
    pub fn schema() -> Result<String, crate::error::Error> {
        Ok(serde_json::to_string_pretty(&schemars::schema_for!(Self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::tag::{Role, Tag};

    #[test]
    fn parse_triple() {
        let t = Triple::parse("Alan_Bean | birthPlace |  Wheeler,_Texas ").unwrap();
        assert_eq!(t, Triple::new("Alan_Bean", "birthPlace", "Wheeler,_Texas"));

        assert!(Triple::parse("Alan_Bean | birthPlace").is_none());
        assert!(Triple::parse("a | b | c | d").is_none());
    }

    #[test]
    fn unquote() {
        let t = Triple::new("\"Alan\"", "\"p\"", "\"1.0\"").unquoted();
        assert_eq!(t, Triple::new("Alan", "\"p\"", "1.0"));
    }

    #[test]
    fn serialize_sentence() {
        let mut tag_to_entity = TagMap::new();
        tag_to_entity.insert(Tag::new(Role::Agent, 1), "Alan_Bean".to_string());
        tag_to_entity.insert(Tag::new(Role::Patient, 1), "Texas".to_string());
        let sentence = AlignedSentence {
            triples: vec![Triple::new("Alan_Bean", "birthPlace", "Texas")],
            template: "AGENT_1 was born in PATIENT_1 .".to_string(),
            text: "Alan Bean was born in Texas .".to_string(),
            tag_to_entity,
        };

        let json = serde_json::to_string(&sentence).unwrap();
        assert_eq!(
            json,
            r#"{"triples":[["Alan_Bean","birthPlace","Texas"]],"target":"AGENT_1 was born in PATIENT_1 .","target_txt":"Alan Bean was born in Texas .","ner2ent":{"AGENT_1":"Alan_Bean","PATIENT_1":"Texas"}}"#
        );

        let back: AlignedSentence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sentence);
    }

    #[test]
    fn schema_names_fields() {
        let schema = AlignedSentence::schema().unwrap();
        for field in ["triples", "target", "target_txt", "ner2ent"] {
            assert!(schema.contains(field), "missing {field}");
        }
    }
}
