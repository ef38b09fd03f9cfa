// ============================================
// src/deck.rs
// 単語帳・紛らわしい字・熟語をまとめて検証したもの
// ============================================

use std::collections::{HashMap, HashSet};

use crate::vocab::{CONFUSABLE_LIST, PHRASE_LIST, PhrasePattern, VOCAB_LIST, VocabEntry};

/// 単語帳の読み込みエラー (起動時に即終了する)
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("vocabulary table is empty")]
    Empty,

    #[error("duplicate character in vocabulary: {0}")]
    DuplicateCharacter(&'static str),

    #[error("vocabulary entry #{index} has an empty {field}")]
    BlankField { index: usize, field: &'static str },

    #[error("confusable set for {0} contains an empty character")]
    BlankConfusable(&'static str),

    #[error("phrase #{0} contains an empty character")]
    BlankPhrase(usize),

    #[error("{0:?} is not a single character")]
    NotSingleCharacter(&'static str),
}

/// 出題に使うデータ一式 (起動後は変更しない)
#[derive(Debug, Clone)]
pub struct Deck {
    entries: Vec<VocabEntry>,
    confusables: HashMap<&'static str, &'static [&'static str]>,
    phrases: Vec<PhrasePattern>,
}

impl Deck {
    /// 組み込みの単語帳を読み込む
    pub fn builtin() -> Result<Self, DeckError> {
        Self::new(VOCAB_LIST.to_vec(), CONFUSABLE_LIST, PHRASE_LIST.to_vec())
    }

    /// 検証つきで Deck を作る
    pub fn new(
        entries: Vec<VocabEntry>,
        confusables: &[(&'static str, &'static [&'static str])],
        phrases: Vec<PhrasePattern>,
    ) -> Result<Self, DeckError> {
        if entries.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            for (field, value) in [
                ("character", entry.character),
                ("pronunciation", entry.pronunciation),
                ("meaning", entry.meaning),
            ] {
                if value.trim().is_empty() {
                    return Err(DeckError::BlankField { index, field });
                }
            }
            if !is_single_char(entry.character) {
                return Err(DeckError::NotSingleCharacter(entry.character));
            }
            if !seen.insert(entry.character) {
                return Err(DeckError::DuplicateCharacter(entry.character));
            }
        }

        for (target, list) in confusables {
            if list.iter().any(|c| c.trim().is_empty()) {
                return Err(DeckError::BlankConfusable(*target));
            }
        }

        for (index, phrase) in phrases.iter().enumerate() {
            if phrase.chars().iter().any(|c| c.trim().is_empty()) {
                return Err(DeckError::BlankPhrase(index));
            }
            // 熟語の要素はそれぞれ1文字
            if let Some(bad) = phrase.chars().iter().find(|c| !is_single_char(c)) {
                return Err(DeckError::NotSingleCharacter(*bad));
            }
        }

        Ok(Self {
            entries,
            confusables: confusables.iter().copied().collect(),
            phrases,
        })
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// 漢字から引く
    pub fn find(&self, character: &str) -> Option<&VocabEntry> {
        self.entries.iter().find(|e| e.character == character)
    }

    /// 紛らわしい字のリスト (無ければ None → ランダム抽選にフォールバック)
    pub fn confusables_for(&self, character: &str) -> Option<&'static [&'static str]> {
        self.confusables.get(character).copied()
    }

    /// `character` を含む熟語すべて
    pub fn phrases_containing(&self, character: &str) -> Vec<&PhrasePattern> {
        self.phrases.iter().filter(|p| p.contains(character)).collect()
    }

    /// 漢字の列 (ハズレ選択肢をランダムに選ぶときの母集団)
    pub fn characters(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.character).collect()
    }
}

fn is_single_char(value: &str) -> bool {
    value.chars().count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_valid() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.entries().len(), 11);
        assert_eq!(deck.characters().len(), 11);
        assert_eq!(deck.find("喜").map(|e| e.meaning), Some("joy"));
        assert_eq!(deck.confusables_for("恭"), Some(&["工", "公", "紅"][..]));
        assert_eq!(deck.phrases_containing("紅").len(), 2);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(Deck::new(Vec::new(), &[], Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn duplicate_character_is_rejected() {
        let entries = vec![
            VocabEntry::new("福", "fuk1", "blessing"),
            VocabEntry::new("福", "fuk1", "luck"),
        ];
        assert_eq!(
            Deck::new(entries, &[], Vec::new()).unwrap_err(),
            DeckError::DuplicateCharacter("福")
        );
    }

    #[test]
    fn blank_field_is_rejected() {
        let entries = vec![
            VocabEntry::new("福", "fuk1", "blessing"),
            VocabEntry::new("紅", "hung4", " "),
        ];
        assert_eq!(
            Deck::new(entries, &[], Vec::new()).unwrap_err(),
            DeckError::BlankField { index: 1, field: "meaning" }
        );
    }

    #[test]
    fn blank_phrase_character_is_rejected() {
        let entries = vec![VocabEntry::new("福", "fuk1", "blessing")];
        let phrases = vec![PhrasePattern(["福", "", "高", "照"])];
        assert_eq!(
            Deck::new(entries, &[], phrases).unwrap_err(),
            DeckError::BlankPhrase(0)
        );
    }

    #[test]
    fn multi_character_phrase_element_is_rejected() {
        let entries = vec![
            VocabEntry::new("快", "faai3", "fast"),
            VocabEntry::new("樂", "lok6", "happiness"),
        ];
        let phrases = vec![PhrasePattern(["新年", "快", "樂", "好"])];
        assert_eq!(
            Deck::new(entries, &[], phrases).unwrap_err(),
            DeckError::NotSingleCharacter("新年")
        );
    }

    #[test]
    fn multi_character_vocab_entry_is_rejected() {
        let entries = vec![VocabEntry::new("紅包", "hung4 baau1", "red packet")];
        assert_eq!(
            Deck::new(entries, &[], Vec::new()).unwrap_err(),
            DeckError::NotSingleCharacter("紅包")
        );
    }

    #[test]
    fn missing_confusable_entry_is_none() {
        let entries = vec![VocabEntry::new("福", "fuk1", "blessing")];
        let deck = Deck::new(entries, &[], Vec::new()).unwrap();
        assert!(deck.confusables_for("福").is_none());
    }
}
