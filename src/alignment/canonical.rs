/*! Entity-tag canonicalization

Two steps:
- [canonicalize] runs once per document and collapses the tags that denote the same entity
  into the first of them, then rewrites tags in their underscore form.
- [prune] runs once per sentence and keeps only the triples (and tags) the sentence template
  actually refers to, replacing the other tags by their entity.
!*/
use std::collections::{BTreeSet, HashMap};

use super::record::Triple;
use super::tag::{contains_token, replace_token, template_tags, Role, Tag, TagMap};
use crate::error::Error;

/// Collapses coreferent tags and normalizes tag names.
///
/// For each entity referenced by several tags, the first tag (in map order) is kept and every
/// other tag is rewritten to it in the template. Entities lose their wrapping double quotes
/// before grouping, so `"Texas"` and `Texas` are one entity. Template tags are rewritten from
/// `AGENT-1` to `AGENT_1`.
///
/// Fails with [Error::Integrity] if no tag survives, or if the surviving tags do not map to
/// distinct entities.
pub fn canonicalize(tag_to_entity: &TagMap, template: &str) -> Result<(TagMap, String), Error> {
    let unquoted = |entity: &str| entity.trim_matches('"').to_string();
    let tag_to_entity = tag_to_entity.clone().map_entities(unquoted);

    let mut canonical: HashMap<&str, Tag> = HashMap::new();
    for (tag, entity) in tag_to_entity.iter() {
        canonical.entry(entity).or_insert(*tag);
    }

    let mut template = template.to_string();
    for (tag, entity) in tag_to_entity.iter() {
        let target = canonical[entity];
        if *tag != target {
            template = replace_token(&template, &tag.wire(), &target.wire());
            template = replace_token(&template, &tag.to_string(), &target.to_string());
        }
    }

    let mut unique = tag_to_entity.clone();
    unique.retain(|tag, entity| canonical.get(entity) == Some(tag));

    if unique.is_empty() {
        return Err(Error::Integrity(
            "no tag left after coreference collapsing".to_string(),
        ));
    }
    if unique.entities().len() != unique.len() {
        return Err(Error::Integrity(format!(
            "{} canonical tags for {} entities",
            unique.len(),
            unique.entities().len()
        )));
    }

    for tag in unique.tags() {
        template = replace_token(&template, &tag.wire(), &tag.to_string());
    }
    for role in [Role::Bridge, Role::Agent, Role::Patient] {
        template = template.replace(
            &format!("{}-", role.as_str()),
            &format!("{}_", role.as_str()),
        );
    }

    Ok((unique, template))
}

/// Result of [prune].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pruned {
    pub triples: Vec<Triple>,
    pub template: String,
    pub tag_to_entity: TagMap,
    /// Template tags differ from the kept tags.
    pub mismatch: bool,
}

impl Pruned {
    /// Nothing left to align.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty() || self.template.is_empty() || self.tag_to_entity.is_empty()
    }
}

/// Restricts a sentence to the triples whose subject and object are entities
/// whose tag occurs in the template.
///
/// Tags of entities that no kept triple mentions are replaced by the entity itself
/// (with underscores turned into spaces).
pub fn prune(triples: &[Triple], template: &str, tag_to_entity: &TagMap) -> Pruned {
    let in_template = |entity: &str| {
        tag_to_entity
            .tag_of(entity)
            .map_or(false, |tag| contains_token(template, &tag.to_string()))
    };

    let triples: Vec<Triple> = triples
        .iter()
        .filter(|triple| triple.ends().into_iter().all(in_template))
        .cloned()
        .collect();

    let triple_entities: BTreeSet<&str> = triples.iter().flat_map(|t| t.ends()).collect();

    let mut template = template.to_string();
    for (tag, entity) in tag_to_entity.iter() {
        if !triple_entities.contains(entity) {
            template = replace_token(&template, &tag.to_string(), &entity.replace('_', " "));
        }
    }

    let mut kept = tag_to_entity.clone();
    kept.retain(|_, entity| triple_entities.contains(entity));
    debug_assert_eq!(kept.entities(), triple_entities);

    let template_tags: BTreeSet<Tag> = template_tags(&template).into_iter().collect();
    let mismatch = template_tags != kept.tags();

    Pruned {
        triples,
        template,
        tag_to_entity: kept,
        mismatch,
    }
}
