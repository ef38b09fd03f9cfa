// ============================================
// src/question.rs
// 1ラウンド分の問題を組み立てる
// ============================================

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::config::QuestionMode;
use crate::deck::Deck;
use crate::distractor::pick_distractors;
use crate::vocab::{PhrasePattern, VocabEntry};

/// 選択肢の数 (正解を含む)
pub const OPTION_COUNT: usize = 4;

/// 穴埋めの空欄記号
const BLANK: &str = "＿";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// 意味から漢字を選ぶ
    Meaning,
    /// 熟語の抜けた字を選ぶ
    Missing,
}

/// 穴埋め問題の空欄情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseBlank {
    pub phrase: PhrasePattern,
    /// 隠した位置 (0..4)
    pub masked_index: usize,
    /// 隠した字を除いた残り3文字
    pub revealed: String,
}

impl PhraseBlank {
    fn new(phrase: PhrasePattern, masked_index: usize) -> Self {
        let revealed = phrase
            .chars()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != masked_index)
            .map(|(_, c)| *c)
            .collect();
        Self { phrase, masked_index, revealed }
    }

    /// `answer` を空欄に戻した文字列
    pub fn fill(&self, answer: &str) -> String {
        self.phrase
            .chars()
            .iter()
            .enumerate()
            .map(|(i, c)| if i == self.masked_index { answer } else { *c })
            .collect()
    }

    /// 空欄つきの表示 (例: "＿喜發財")
    pub fn display(&self) -> String {
        self.fill(BLANK)
    }
}

/// 1ラウンド分の問題 (ラウンドが終われば捨てる)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt_text: String,
    pub sub_prompt: String,
    pub answer: &'static str,
    pub options: Vec<&'static str>,
    pub explanation: String,
    pub blank: Option<PhraseBlank>,
}

impl Question {
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.answer
    }

    /// 描画のたびに並べ替える (位置で答えがわからないように)
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.options.shuffle(rng);
    }
}

/// 正解 + ハズレ選択肢をシャッフルして並べる
fn make_options<R: Rng + ?Sized>(deck: &Deck, answer: &'static str, rng: &mut R) -> Vec<&'static str> {
    let pool = deck.characters();
    let mut options = vec![answer];
    options.extend(pick_distractors(
        deck.confusables_for(answer),
        &pool,
        answer,
        OPTION_COUNT - 1,
        rng,
    ));
    options.shuffle(rng);
    options
}

/// 意味問題: 「<meaning> はどれ？」
pub fn build_meaning<R: Rng + ?Sized>(deck: &Deck, entry: &VocabEntry, rng: &mut R) -> Question {
    Question {
        kind: QuestionKind::Meaning,
        prompt_text: format!("Which one is the correct choice of {}?", entry.meaning),
        sub_prompt: format!("({})", entry.pronunciation),
        answer: entry.character,
        options: make_options(deck, entry.character, rng),
        explanation: format!("{} means “{}”.", entry.character, entry.meaning),
        blank: None,
    }
}

/// 穴埋め問題: 熟語から `entry` の字を隠す (熟語がなければ None)
pub fn build_missing<R: Rng + ?Sized>(
    deck: &Deck,
    entry: &VocabEntry,
    rng: &mut R,
) -> Option<Question> {
    let phrase = **deck.phrases_containing(entry.character).choose(rng)?;
    let masked_index = phrase.position_of(entry.character)?;
    let blank = PhraseBlank::new(phrase, masked_index);

    Some(Question {
        kind: QuestionKind::Missing,
        prompt_text: "Which character completes the phrase?".to_string(),
        sub_prompt: blank.display(),
        answer: entry.character,
        options: make_options(deck, entry.character, rng),
        explanation: format!("{} completes {}.", entry.character, phrase.text()),
        blank: Some(blank),
    })
}

/// 指定の形式で作る (穴埋めが作れない字は意味問題にする)
pub fn build_question<R: Rng + ?Sized>(
    deck: &Deck,
    entry: &VocabEntry,
    kind: QuestionKind,
    rng: &mut R,
) -> Question {
    let question = match kind {
        QuestionKind::Meaning => build_meaning(deck, entry, rng),
        QuestionKind::Missing => build_missing(deck, entry, rng).unwrap_or_else(|| {
            log::debug!("no phrase contains {}, using a meaning question", entry.character);
            build_meaning(deck, entry, rng)
        }),
    };
    log::debug!("built {:?} question for {}", question.kind, question.answer);
    question
}

/// そのラウンドの出題形式を決める
pub fn choose_kind<R: Rng + ?Sized>(
    mode: QuestionMode,
    tutorial: bool,
    round_index: usize,
    rng: &mut R,
) -> QuestionKind {
    if tutorial {
        match round_index {
            0 => return QuestionKind::Meaning,
            1 => return QuestionKind::Missing,
            _ => {}
        }
    }
    match mode {
        QuestionMode::Meaning => QuestionKind::Meaning,
        QuestionMode::Missing => QuestionKind::Missing,
        QuestionMode::Mixed => {
            if rng.random_bool(0.5) {
                QuestionKind::Meaning
            } else {
                QuestionKind::Missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_options_valid(q: &Question) {
        assert_eq!(q.options.len(), OPTION_COUNT);
        assert_eq!(q.options.iter().filter(|o| **o == q.answer).count(), 1);
        let mut sorted = q.options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), OPTION_COUNT, "options must be distinct: {:?}", q.options);
    }

    #[test]
    fn meaning_question_has_four_distinct_options_for_every_entry() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for entry in deck.entries() {
            for _ in 0..20 {
                let q = build_meaning(&deck, entry, &mut rng);
                assert_eq!(q.kind, QuestionKind::Meaning);
                assert_eq!(q.answer, entry.character);
                assert_options_valid(&q);
            }
        }
    }

    #[test]
    fn meaning_question_for_joy() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let entry = deck.find("喜").copied().unwrap();
        let q = build_meaning(&deck, &entry, &mut rng);
        assert!(q.options.contains(&"喜"));
        assert!(q.is_correct("喜"));
        assert!(!q.is_correct("吉"));
        assert_eq!(q.prompt_text, "Which one is the correct choice of joy?");
        assert_eq!(q.sub_prompt, "(hei2)");
        assert_eq!(q.explanation, "喜 means “joy”.");
    }

    #[test]
    fn missing_question_reconstructs_phrase() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for entry in deck.entries() {
            if deck.phrases_containing(entry.character).is_empty() {
                continue;
            }
            for _ in 0..10 {
                let q = build_missing(&deck, entry, &mut rng).unwrap();
                let blank = q.blank.as_ref().unwrap();
                assert_eq!(blank.fill(q.answer), blank.phrase.text());
                assert_eq!(blank.revealed.chars().count(), 3);
                assert_options_valid(&q);
            }
        }
    }

    #[test]
    fn missing_question_masks_first_character() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let entry = deck.find("恭").copied().unwrap();
        let q = build_missing(&deck, &entry, &mut rng).unwrap();
        let blank = q.blank.unwrap();
        assert_eq!(blank.phrase, PhrasePattern(["恭", "喜", "發", "財"]));
        assert_eq!(blank.masked_index, 0);
        assert_eq!(blank.revealed, "喜發財");
        assert_eq!(q.answer, "恭");
        assert_eq!(q.sub_prompt, "＿喜發財");
        assert_eq!(q.explanation, "恭 completes 恭喜發財.");
    }

    #[test]
    fn fill_puts_answer_back_at_masked_index() {
        let phrase = PhrasePattern(["新", "年", "快", "樂"]);
        for index in 0..4 {
            let blank = PhraseBlank::new(phrase, index);
            assert_eq!(blank.revealed.chars().count(), 3);
            assert_eq!(blank.fill(phrase.chars()[index]), "新年快樂");
        }
        assert_eq!(PhraseBlank::new(phrase, 2).display(), "新年＿樂");
    }

    #[test]
    fn missing_without_phrase_falls_back_to_meaning() {
        let entries = vec![
            VocabEntry::new("福", "fuk1", "blessing"),
            VocabEntry::new("紅", "hung4", "red"),
            VocabEntry::new("包", "baau1", "packet"),
            VocabEntry::new("年", "nin4", "year"),
        ];
        let deck = Deck::new(entries, &[], Vec::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let entry = deck.entries()[0];
        assert!(build_missing(&deck, &entry, &mut rng).is_none());
        let q = build_question(&deck, &entry, QuestionKind::Missing, &mut rng);
        assert_eq!(q.kind, QuestionKind::Meaning);
        assert_options_valid(&q);
    }

    #[test]
    fn small_deck_degrades_to_fewer_options() {
        let entries = vec![
            VocabEntry::new("福", "fuk1", "blessing"),
            VocabEntry::new("紅", "hung4", "red"),
        ];
        let deck = Deck::new(entries, &[], Vec::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let q = build_meaning(&deck, &deck.entries()[0], &mut rng);
        assert_eq!(q.options.len(), 2);
        assert!(q.options.contains(&"福"));
    }

    #[test]
    fn reshuffle_keeps_the_same_options() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let mut q = build_meaning(&deck, &deck.entries()[3], &mut rng);
        let mut before = q.options.clone();
        q.reshuffle(&mut rng);
        let mut after = q.options.clone();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn tutorial_fixes_first_two_rounds() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..10 {
            assert_eq!(choose_kind(QuestionMode::Mixed, true, 0, &mut rng), QuestionKind::Meaning);
            assert_eq!(choose_kind(QuestionMode::Mixed, true, 1, &mut rng), QuestionKind::Missing);
        }
        assert_eq!(choose_kind(QuestionMode::Meaning, false, 1, &mut rng), QuestionKind::Meaning);
        assert_eq!(choose_kind(QuestionMode::Missing, true, 5, &mut rng), QuestionKind::Missing);
    }
}
