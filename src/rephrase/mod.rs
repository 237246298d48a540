/*! Entity paraphrases

Expands an entity surface string into the phrasings a sentence may use for it:
acronyms and demonyms, `a/b` permutations, numbers with units, and parenthetical reordering.

Used to check whether a text mentions an entity; it is not on the alignment path.
!*/
mod units;

use std::collections::BTreeSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::error::Error;

pub use units::{UnitEntry, UnitRule, UnitTable};

/// `a/b/.../z` entities with more parts are not permuted.
const MAX_PERMUTED_PARTS: usize = 6;

lazy_static! {
    /// `<number>( (<unit>))?`, numbers possibly using thousands separators.
    static ref NUMBER_UNIT: Regex =
        Regex::new(r"^(-?(\d+|\d{1,3}(,\d{3})*)(\.\d+)?)( (\((.*?)\)))?$").unwrap();
    /// `word1 (word2)`
    static ref PARENTHESIZED: Regex = Regex::new(r"^(.* ?) \((.* ?)\)$").unwrap();
    /// `word1 (word2) word3`
    static ref PARENTHESIZED_INNER: Regex = Regex::new(r"^(.*?) \((.*?)\)( .*)?$").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct Rephraser {
    rephrasing: Vec<(String, Vec<String>)>,
    rephrasing_must: Vec<(String, String)>,
    units: UnitTable,
}

impl Rephraser {
    pub fn new(
        rephrasing: Vec<(String, Vec<String>)>,
        rephrasing_must: Vec<(String, String)>,
        units: UnitTable,
    ) -> Self {
        Self {
            rephrasing,
            rephrasing_must,
            units,
        }
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Every acceptable phrasing of `entity`, `entity` included.
    ///
    /// Fails with [Error::UnknownUnit] when a `<number> (<unit>)` phrasing uses a unit
    /// that is not in the unit table.
    pub fn rephrase(&self, entity: &str) -> Result<BTreeSet<String>, Error> {
        let mut phrasings = BTreeSet::from([entity.to_string()]);

        for (pattern, alternatives) in &self.rephrasing {
            let matching: Vec<String> = phrasings
                .iter()
                .filter(|p| p.contains(pattern.as_str()))
                .cloned()
                .collect();
            for p in matching {
                for alternative in alternatives {
                    phrasings.insert(p.replace(pattern.as_str(), alternative));
                }
            }
        }

        for p in phrasings.clone() {
            let parts: Vec<&str> = p.split('/').collect();
            if parts.len() < 2 {
                continue;
            }
            if parts.len() > MAX_PERMUTED_PARTS {
                warn!(
                    "not permuting {:?}: {} parts, more than {}",
                    p,
                    parts.len(),
                    MAX_PERMUTED_PARTS
                );
                continue;
            }
            for permutation in parts.iter().permutations(parts.len()) {
                phrasings.insert(permutation.into_iter().join("/"));
            }
        }

        for p in phrasings.clone() {
            let caps = match NUMBER_UNIT.captures(&p) {
                Some(caps) => caps,
                None => continue,
            };
            let number: f64 = caps[1]
                .replace(',', "")
                .parse()
                .map_err(|e| Error::Custom(format!("{:?}: {e}", &caps[1])))?;
            let numbers = number_phrasings(number);

            if let Some(unit) = caps.get(7) {
                let unit = unit.as_str();
                let rule = self
                    .units
                    .get(unit)
                    .ok_or_else(|| Error::UnknownUnit(unit.to_string()))?;
                let words = rule.words(unit);

                for n in &numbers {
                    if let Some(abbreviation) = rule.abbreviation() {
                        phrasings.insert(format!("{n} {abbreviation}"));
                        phrasings.insert(format!("{n}{abbreviation}"));
                    }
                    for word in &words {
                        phrasings.insert(format!("{n} {word}"));
                    }
                }
            }

            phrasings.extend(numbers);
        }

        for p in phrasings.clone() {
            if let Some(caps) = PARENTHESIZED.captures(&p) {
                let (outer, inner) = (&caps[1], &caps[2]);
                phrasings.insert(format!("{outer} {inner}"));
                phrasings.insert(format!("{inner} {outer}"));
            }
        }

        Ok(phrasings)
    }

    /// Lossy phrasings of `entity`: qualifier words dropped, parenthesized content removed.
    /// Never contains the empty string.
    pub fn rephrase_if_must(&self, entity: &str) -> BTreeSet<String> {
        let mut phrasings = BTreeSet::from([entity.to_string()]);

        for (pattern, replacement) in &self.rephrasing_must {
            let matching: Vec<String> = phrasings
                .iter()
                .filter(|p| p.contains(pattern.as_str()))
                .cloned()
                .collect();
            for p in matching {
                phrasings.insert(p.replace(pattern.as_str(), replacement));
            }
        }

        for p in phrasings.clone() {
            if let Some(caps) = PARENTHESIZED.captures(&p) {
                phrasings.insert(caps[1].to_string());
            }
        }

        for p in phrasings.clone() {
            if let Some(caps) = PARENTHESIZED_INNER.captures(&p) {
                if let Some(tail) = caps.get(3) {
                    phrasings.insert(format!("{}{}", &caps[1], tail.as_str()));
                }
            }
        }

        phrasings.remove("");
        phrasings
    }
}

/// Python-like float rendering (`5.0`, `1234.5`) with and without thousands separators,
/// plus the integer renderings when the number is integral.
fn number_phrasings(number: f64) -> Vec<String> {
    let float = format!("{number:?}");
    let mut phrasings = vec![group_thousands(&float), float];

    if number.fract() == 0.0 {
        let integer = format!("{number:.0}");
        phrasings.push(group_thousands(&integer));
        phrasings.push(integer);
    }

    phrasings.into_iter().unique().collect()
}

/// `1234567.5` -> `1,234,567.5`
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",");

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Tables;

    fn rephraser() -> Rephraser {
        Tables::embedded().unwrap().rephraser
    }

    #[test]
    fn contains_entity() {
        let r = rephraser();
        for entity in [
            "united states",
            "5 (metres)",
            "a/b/c",
            "conservative party (uk)",
            "Alan Bean",
            "",
        ] {
            assert!(r.rephrase(entity).unwrap().contains(entity), "{entity}");
        }
    }

    #[test]
    fn metres() {
        let phrasings = rephraser().rephrase("5 (metres)").unwrap();
        for expected in ["5 m", "5m", "5 metres", "5 meters", "5.0", "5.0 m", "metres 5"] {
            assert!(phrasings.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn unknown_unit() {
        match rephraser().rephrase("10 (frobnicate)") {
            Err(Error::UnknownUnit(unit)) => assert_eq!(unit, "frobnicate"),
            other => panic!("expected UnknownUnit, got {other:?}"),
        }
    }

    #[test]
    fn bare_numbers() {
        let phrasings = rephraser().rephrase("100305.0").unwrap();
        for expected in ["100305.0", "100,305.0", "100305", "100,305"] {
            assert!(phrasings.contains(expected), "missing {expected}");
        }

        let phrasings = rephraser().rephrase("1,234.5").unwrap();
        assert!(phrasings.contains("1234.5"));
        assert!(!phrasings.contains("1234"));
    }

    #[test]
    fn acronyms() {
        let phrasings = rephraser().rephrase("united states air force").unwrap();
        assert!(phrasings.contains("usaf"));
        assert!(phrasings.contains("u.s. air force"));
    }

    #[test]
    fn permutations() {
        let phrasings = rephraser().rephrase("a/b/c").unwrap();
        assert!(phrasings.contains("c/b/a"));
        assert!(phrasings.contains("b/a/c"));
    }

    #[test_log::test]
    fn too_many_parts_are_not_permuted() {
        let phrasings = rephraser().rephrase("a/b/c/d/e/f/g").unwrap();
        assert!(phrasings.contains("a/b/c/d/e/f/g"));
        assert!(!phrasings.contains("g/f/e/d/c/b/a"));
    }

    #[test]
    fn parenthetical() {
        let phrasings = rephraser().rephrase("bakewell pudding (tart)").unwrap();
        assert!(phrasings.contains("bakewell pudding tart"));
        assert!(phrasings.contains("tart bakewell pudding"));
    }

    #[test]
    fn if_must() {
        let r = rephraser();
        let phrasings = r.rephrase_if_must("english language");
        assert!(phrasings.contains("english"));

        let phrasings = r.rephrase_if_must("Abilene (Texas) Regional Airport");
        assert!(phrasings.contains("Abilene Regional Airport"));

        let phrasings = r.rephrase_if_must("Bakewell pudding (tart)");
        assert!(phrasings.contains("Bakewell pudding"));
        assert!(!phrasings.contains(""));

        assert!(r.rephrase_if_must("").is_empty());
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands("1234567.5"), "1,234,567.5");
        assert_eq!(group_thousands("-1000"), "-1,000");
        assert_eq!(group_thousands("12"), "12");
    }
}
