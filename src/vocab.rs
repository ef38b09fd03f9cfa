/*
 * src/vocab.rs
 * 単語帳データ (漢字・粤拼・意味) と、紛らわしい字・四字熟語の一覧
 */

/// 単語帳の1エントリ
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VocabEntry {
    pub character: &'static str,     // 出題する漢字
    pub pronunciation: &'static str, // 粤拼 (声調番号つき)
    pub meaning: &'static str,       // 英語の意味
}

impl VocabEntry {
    pub const fn new(
        character: &'static str,
        pronunciation: &'static str,
        meaning: &'static str,
    ) -> Self {
        Self { character, pronunciation, meaning }
    }
}

/// 4文字の決まり文句 (穴埋め問題用)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PhrasePattern(pub [&'static str; 4]);

impl PhrasePattern {
    /// 構成する文字 (順番どおり)
    pub fn chars(&self) -> &[&'static str; 4] {
        &self.0
    }

    /// `target` が最初に現れる位置
    pub fn position_of(&self, target: &str) -> Option<usize> {
        self.0.iter().position(|c| *c == target)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.position_of(target).is_some()
    }

    /// 連結した文字列 (例: "恭喜發財")
    pub fn text(&self) -> String {
        self.0.concat()
    }
}

/// 単語リスト (お正月の定番フレーズから)
pub const VOCAB_LIST: &[VocabEntry] = &[
    VocabEntry::new("恭", "gung1", "respectful"),
    VocabEntry::new("喜", "hei2", "joy"),
    VocabEntry::new("發", "faat3", "to prosper"),
    VocabEntry::new("財", "coi4", "wealth"),
    VocabEntry::new("新", "san1", "new"),
    VocabEntry::new("年", "nin4", "year"),
    VocabEntry::new("快", "faai3", "fast"),
    VocabEntry::new("樂", "lok6", "happiness"),
    VocabEntry::new("福", "fuk1", "blessing"),
    VocabEntry::new("紅", "hung4", "red"),
    VocabEntry::new("包", "baau1", "packet"),
];

/// 見た目・音が似ている字 (ハズレ選択肢の候補)
pub const CONFUSABLE_LIST: &[(&str, &[&str])] = &[
    ("恭", &["工", "公", "紅"]),
    ("喜", &["嬉", "吉", "囍"]),
    ("發", &["友", "髮", "福"]),
    ("財", &["才", "材", "福"]),
    ("新", &["亲", "薪", "斤"]),
    ("年", &["午", "舛", "千"]),
    ("快", &["块", "筷", "决"]),
    ("樂", &["藥", "櫟", "發"]),
    ("福", &["幅", "副", "喜"]),
    ("紅", &["江", "工", "恭"]),
    ("包", &["句", "勺", "已"]),
];

/// 四字の決まり文句
pub const PHRASE_LIST: &[PhrasePattern] = &[
    PhrasePattern(["恭", "喜", "發", "財"]),
    PhrasePattern(["新", "年", "快", "樂"]),
    PhrasePattern(["福", "星", "高", "照"]),
    PhrasePattern(["紅", "運", "當", "頭"]),
    PhrasePattern(["利", "是", "紅", "包"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_position_finds_first_occurrence() {
        let phrase = PhrasePattern(["恭", "喜", "發", "財"]);
        assert_eq!(phrase.position_of("發"), Some(2));
        assert_eq!(phrase.position_of("福"), None);
        assert_eq!(phrase.text(), "恭喜發財");
    }

    #[test]
    fn every_vocab_character_has_confusables() {
        for entry in VOCAB_LIST {
            assert!(
                CONFUSABLE_LIST.iter().any(|(c, _)| *c == entry.character),
                "{} has no confusable set",
                entry.character
            );
        }
    }
}
