#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    Chinese,
}

impl Language {
    /// Codes are matched exactly; `"JA"` or `"ja-JP"` are not recognised.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Language::Japanese),
            "zh" => Some(Language::Chinese),
            _ => None,
        }
    }
}

/// One of the two translation directions backed by a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    JaToZh,
    ZhToJa,
}

impl Direction {
    pub fn new(source: Language, target: Language) -> Option<Self> {
        match (source, target) {
            (Language::Japanese, Language::Chinese) => Some(Direction::JaToZh),
            (Language::Chinese, Language::Japanese) => Some(Direction::ZhToJa),
            _ => None,
        }
    }

    pub fn from_codes(source: &str, target: &str) -> Option<Self> {
        Self::new(Language::from_code(source)?, Language::from_code(target)?)
    }

    /// Parenthetical appended to tokens the corpus has no entry for, written
    /// in the target language.
    pub fn fallback_marker(self) -> &'static str {
        match self {
            Direction::JaToZh => "（护理相关译义）",
            Direction::ZhToJa => "（介護関連訳義）",
        }
    }
}
