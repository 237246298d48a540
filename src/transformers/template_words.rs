//! Whole-word substitutions on raw templates.
use std::collections::HashMap;

use itertools::Itertools;

use super::Transform;

/// Replaces whitespace-separated template words using a fixed table.
///
/// Whitespace is normalized as a side effect (words are joined back with single spaces).
#[derive(Debug, Clone, Default)]
pub struct TemplateWordFix {
    words: HashMap<String, String>,
}

impl TemplateWordFix {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            words: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn fix(&self, template: &str) -> String {
        if template.is_empty() {
            return String::new();
        }
        template
            .split_whitespace()
            .map(|word| self.words.get(word).map(String::as_str).unwrap_or(word))
            .join(" ")
    }
}

impl Transform for TemplateWordFix {
    fn transform_own(&self, text: String) -> String {
        self.fix(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateWordFix;

    #[test]
    fn whole_words_only() {
        let fix = TemplateWordFix::new(vec![("``".to_string(), "\"".to_string())]);
        assert_eq!(
            fix.fix("The name of AGENT-1 is `` PATIENT-1 ."),
            "The name of AGENT-1 is \" PATIENT-1 ."
        );
        assert_eq!(fix.fix("a``b"), "a``b");
    }

    #[test]
    fn empty_template() {
        let fix = TemplateWordFix::default();
        assert_eq!(fix.fix(""), "");
    }
}
