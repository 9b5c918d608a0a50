use std::sync::Arc;

use crate::{corpus::CorpusStore, language::Direction};

/// Returned in place of a translation when the input has no visible text.
pub const INVALID_INPUT_MESSAGE: &str = "请输入有效文本";

/// Word separators: Unicode whitespace plus the ASCII file, group, record and
/// unit separators (U+001C..U+001F).
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Glossary-driven translator. Cloning shares the underlying corpus.
#[derive(Debug, Clone)]
pub struct Translator {
    corpus: Arc<CorpusStore>,
}

impl Translator {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self { corpus }
    }

    pub fn healthcare() -> Self {
        Self::new(Arc::new(CorpusStore::healthcare()))
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    /// Translates `text` from `source` to `target` language codes.
    ///
    /// The whole input is tried against the corpus first, without trimming.
    /// Failing that, every separator-delimited token is looked up on its own;
    /// misses are annotated for the two supported directions and passed
    /// through untouched for any other pair. Never fails.
    pub fn translate(&self, text: &str, source: &str, target: &str) -> String {
        if text.trim_matches(is_separator).is_empty() {
            return INVALID_INPUT_MESSAGE.to_string();
        }

        if let Some(hit) = self.corpus.lookup(text, source, target) {
            return hit.to_string();
        }

        let direction = Direction::from_codes(source, target);
        text.split(is_separator)
            .filter(|token| !token.is_empty())
            .map(|token| self.translate_token(token, direction))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn translate_token(&self, token: &str, direction: Option<Direction>) -> String {
        let Some(direction) = direction else {
            return token.to_string();
        };
        match self.corpus.corpus(direction).get(token) {
            Some(hit) => hit.to_string(),
            None => format!("{token}{}", direction.fallback_marker()),
        }
    }
}
