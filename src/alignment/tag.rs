//! Entity tags (`AGENT-1`, `BRIDGE-2`, `PATIENT-3`) and ordered tag-to-entity maps.
//!
//! The corpus writes tags with a hyphen, while aligned records use an underscore
//! (`AGENT_1`) since hyphens are not safe token separators downstream.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

lazy_static! {
    /// A tag token, in either form.
    static ref TAG_TOKEN: Regex = Regex::new(r"\b(?:AGENT|BRIDGE|PATIENT)[-_]\d+\b").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Agent,
    Bridge,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Agent => "AGENT",
            Role::Bridge => "BRIDGE",
            Role::Patient => "PATIENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    role: Role,
    index: u32,
}

impl Tag {
    pub fn new(role: Role, index: u32) -> Self {
        Self { role, index }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Corpus form, `AGENT-1`.
    pub fn wire(&self) -> String {
        format!("{}-{}", self.role.as_str(), self.index)
    }
}

/// Normalized form, `AGENT_1`.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.role.as_str(), self.index)
    }
}

/// Accepts both `AGENT-1` and `AGENT_1`.
impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Custom(format!("invalid tag: {s:?}"));

        let (role, index) = s.split_once(['-', '_']).ok_or_else(invalid)?;
        let role = match role {
            "AGENT" => Role::Agent,
            "BRIDGE" => Role::Bridge,
            "PATIENT" => Role::Patient,
            _ => return Err(invalid()),
        };
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = index.parse().map_err(|_| invalid())?;

        Ok(Tag::new(role, index))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Tag tokens (normalized) found in a template, in order of appearance.
pub fn template_tags(template: &str) -> Vec<Tag> {
    TAG_TOKEN
        .find_iter(template)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Positions of `needle` in `haystack` that are not glued to a surrounding word,
/// so that `AGENT-1` is not found inside `AGENT-10`.
fn token_matches<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let glued = |c: Option<char>| c.map_or(false, |c| c.is_alphanumeric() || c == '_');
    haystack
        .match_indices(needle)
        .map(|(idx, _)| idx)
        .filter(move |&idx| {
            let before = haystack[..idx].chars().next_back();
            let after = haystack[idx + needle.len()..].chars().next();
            !glued(before) && !glued(after)
        })
}

/// Returns true if `token` occurs in `text` as a whole token.
pub fn contains_token(text: &str, token: &str) -> bool {
    !token.is_empty() && token_matches(text, token).next().is_some()
}

/// Replaces every whole-token occurrence of `from` in `text`.
pub fn replace_token(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for idx in token_matches(text, from) {
        out.push_str(&text[last..idx]);
        out.push_str(to);
        last = idx + from.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Tag to entity map that keeps insertion order.
///
/// Inserting an existing tag updates its entity in place,
/// so iteration order is the order in which tags were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap(Vec<(Tag, String)>);

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: Tag, entity: String) {
        match self.0.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, e)) => *e = entity,
            None => self.0.push((tag, entity)),
        }
    }

    pub fn get(&self, tag: &Tag) -> Option<&str> {
        self.0
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, e)| e.as_str())
    }

    /// First tag mapped to `entity`.
    pub fn tag_of(&self, entity: &str) -> Option<Tag> {
        self.0.iter().find(|(_, e)| e == entity).map(|(t, _)| *t)
    }

    pub fn contains_tag(&self, tag: &Tag) -> bool {
        self.get(tag).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &str)> {
        self.0.iter().map(|(t, e)| (t, e.as_str()))
    }

    pub fn tags(&self) -> BTreeSet<Tag> {
        self.0.iter().map(|(t, _)| *t).collect()
    }

    pub fn entities(&self) -> BTreeSet<&str> {
        self.0.iter().map(|(_, e)| e.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keeps entries for which `f` returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Tag, &str) -> bool,
    {
        self.0.retain(|(t, e)| f(t, e));
    }

    /// Rewrites every entity.
    pub fn map_entities<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self(self.0.into_iter().map(|(t, e)| (t, f(&e))).collect())
    }
}

impl FromIterator<(Tag, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (Tag, String)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (tag, entity) in iter {
            map.insert(tag, entity);
        }
        map
    }
}

impl Serialize for TagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (tag, entity) in &self.0 {
            map.serialize_entry(tag, entity)?;
        }
        map.end()
    }
}

struct TagMapVisitor;

impl<'de> Visitor<'de> for TagMapVisitor {
    type Value = TagMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of entity tags to entities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = TagMap::new();
        while let Some((tag, entity)) = access.next_entry::<Tag, String>()? {
            map.insert(tag, entity);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for TagMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TagMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let tag: Tag = "AGENT-1".parse().unwrap();
        assert_eq!(tag, Tag::new(Role::Agent, 1));
        assert_eq!(tag.to_string(), "AGENT_1");
        assert_eq!(tag.wire(), "AGENT-1");
        assert_eq!("PATIENT_12".parse::<Tag>().unwrap().index(), 12);
    }

    #[test]
    fn parse_invalid() {
        for s in ["AGENT", "AGENT-", "AGENT-x", "SUBJECT-1", "agent-1", "AGENT-1-2"] {
            assert!(s.parse::<Tag>().is_err(), "{s}");
        }
    }

    #[test]
    fn tokens() {
        assert!(contains_token("AGENT-1 is in PATIENT-1", "AGENT-1"));
        assert!(!contains_token("AGENT-10 is in PATIENT-1", "AGENT-1"));
        assert!(contains_token("( AGENT-1 )", "AGENT-1"));
        assert_eq!(
            replace_token("AGENT-1 and AGENT-10 and AGENT-1", "AGENT-1", "X"),
            "X and AGENT-10 and X"
        );
    }

    #[test]
    fn tags_in_template() {
        let tags = template_tags("AGENT_1 is home to PATIENT-2 , not XAGENT_3 .");
        assert_eq!(
            tags,
            vec![Tag::new(Role::Agent, 1), Tag::new(Role::Patient, 2)]
        );
    }

    #[test]
    fn map_keeps_first_position() {
        let a1 = Tag::new(Role::Agent, 1);
        let p1 = Tag::new(Role::Patient, 1);
        let mut map = TagMap::new();
        map.insert(p1, "Texas".to_string());
        map.insert(a1, "Alan Bean".to_string());
        map.insert(p1, "Wheeler".to_string());

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![(&p1, "Wheeler"), (&a1, "Alan Bean")]);
        assert_eq!(map.tag_of("Alan Bean"), Some(a1));
    }

    #[test]
    fn map_serde() {
        let map: TagMap = vec![
            (Tag::new(Role::Patient, 1), "Texas".to_string()),
            (Tag::new(Role::Agent, 1), "Alan Bean".to_string()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"PATIENT_1":"Texas","AGENT_1":"Alan Bean"}"#);

        let back: TagMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
