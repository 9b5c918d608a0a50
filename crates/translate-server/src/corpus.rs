use std::collections::HashMap;

use tracing::warn;

use crate::language::Direction;

/// Elder-care vocabulary, Japanese term first.
pub const HEALTHCARE_TERMS: &[(&str, &str)] = &[
    ("介護", "护理"),
    ("リハビリテーション", "康复训练"),
    ("認知症", "认知症"),
    ("在宅介護", "居家护理"),
    ("高齢者福祉", "老年人福利"),
    ("栄養補助", "营养补助"),
    ("定期健診", "定期体检"),
    ("血圧測定", "血压测量"),
    ("酸素濃度", "氧气浓度"),
    ("睡眠観察", "睡眠观察"),
    ("介護施設", "护理机构"),
    ("日常生活動作", "日常生活活动"),
    ("認知症ケア", "认知症照护"),
    ("転倒予防", "防跌倒"),
    ("栄養バランス", "营养均衡"),
    ("医療リハビリ", "医疗康复"),
    ("健康管理", "健康管理"),
    ("高齢者", "老年人"),
    ("糖尿病ケア", "糖尿病照护"),
    ("薬剤管理", "药物管理"),
];

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: HashMap<String, String>,
}

impl Corpus {
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The ja→zh table and its inverse. Immutable once built.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    ja_zh: Corpus,
    zh_ja: Corpus,
    collisions: usize,
}

impl CorpusStore {
    pub fn healthcare() -> Self {
        Self::from_pairs(HEALTHCARE_TERMS.iter().copied())
    }

    /// Builds both directions from `(ja, zh)` pairs.
    ///
    /// A later pair overwrites an earlier one with the same key but keeps its
    /// original position. The inverse is filled in that order, so when two
    /// Japanese terms share a Chinese rendering the zh→ja entry points at
    /// whichever came last.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut ordered: Vec<(String, String)> = Vec::new();
        let mut ja_zh = HashMap::new();
        for (source, target) in pairs {
            if ja_zh
                .insert(source.to_string(), target.to_string())
                .is_none()
            {
                ordered.push((source.to_string(), target.to_string()));
            } else if let Some(slot) = ordered.iter_mut().find(|(k, _)| k == source) {
                slot.1 = target.to_string();
            }
        }

        let mut zh_ja = HashMap::with_capacity(ordered.len());
        let mut collisions = 0;
        for (source, target) in ordered {
            if let Some(previous) = zh_ja.insert(target.clone(), source.clone()) {
                collisions += 1;
                warn!(
                    "Corpus: '{}' maps back from both '{}' and '{}'; keeping '{}'",
                    target, previous, source, source
                );
            }
        }

        Self {
            ja_zh: Corpus { entries: ja_zh },
            zh_ja: Corpus { entries: zh_ja },
            collisions,
        }
    }

    pub fn corpus(&self, direction: Direction) -> &Corpus {
        match direction {
            Direction::JaToZh => &self.ja_zh,
            Direction::ZhToJa => &self.zh_ja,
        }
    }

    /// Exact-match lookup. Unsupported language pairs never match.
    pub fn lookup(&self, phrase: &str, source: &str, target: &str) -> Option<&str> {
        let direction = Direction::from_codes(source, target)?;
        self.corpus(direction).get(phrase)
    }

    /// Number of forward (ja→zh) entries.
    pub fn len(&self) -> usize {
        self.ja_zh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ja_zh.is_empty()
    }

    /// Forward values that collapsed onto an earlier key in the inverse table.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
