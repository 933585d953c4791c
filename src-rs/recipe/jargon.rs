//! Plain-language annotation of cooking jargon.

use regex::Regex;

const GLOSSARY: [(&str, &str); 9] = [
    ("sauté", "cook quickly in a small amount of oil or butter over medium-high heat"),
    ("blanch", "briefly boil then cool in ice water to soften or remove skins"),
    ("braise", "slow-cook in a small amount of liquid in a covered pot"),
    ("julienne", "cut into thin matchstick-like strips"),
    ("deglaze", "add liquid to a hot pan to loosen and dissolve browned bits"),
    ("poach", "gently cook in simmering liquid just below boiling"),
    ("caramelize", "cook slowly until sugars turn golden brown and sweet"),
    ("fold", "gently combine ingredients using a spatula to keep mixture airy"),
    ("reduce", "boil or simmer to thicken and intensify flavors by evaporating liquid"),
];

struct Term {
    pattern: Regex,
    explanation: &'static str,
}

pub struct JargonGlossary {
    terms: Vec<Term>,
}

impl JargonGlossary {
    pub fn new() -> Self {
        let terms = GLOSSARY
            .iter()
            .filter_map(|&(term, explanation)| {
                let source = format!(r"(?i)\b{}\b", regex::escape(term));
                match Regex::new(&source) {
                    Ok(pattern) => Some(Term {
                        pattern,
                        explanation,
                    }),
                    Err(err) => {
                        tracing::error!(term, error = %err, "invalid glossary pattern");
                        None
                    }
                }
            })
            .collect();
        Self { terms }
    }

    /// Explain the first whole-word occurrence of each glossary term as
    /// `term (explanation)`, keeping the casing used in the text. Later
    /// occurrences of the same term are left alone.
    ///
    /// Matches are located on the input before any insertion, so text added
    /// by one explanation is never annotated again.
    pub fn annotate(&self, text: &str) -> String {
        let mut hits: Vec<(usize, usize, &str)> = self
            .terms
            .iter()
            .filter_map(|term| {
                term.pattern
                    .find(text)
                    .map(|m| (m.start(), m.end(), term.explanation))
            })
            .collect();
        hits.sort_by_key(|(start, _, _)| *start);

        let mut out = String::with_capacity(text.len() + hits.len() * 64);
        let mut cursor = 0;
        for (start, end, explanation) in hits {
            if start < cursor {
                continue;
            }
            out.push_str(&text[cursor..end]);
            out.push_str(" (");
            out.push_str(explanation);
            out.push(')');
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}

impl Default for JargonGlossary {
    fn default() -> Self {
        Self::new()
    }
}
