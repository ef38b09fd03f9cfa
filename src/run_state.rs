// ============================================
// src/run_state.rs
// 1レッスン分の進行状態 (出題順・スコア・連続正解)
// ============================================

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::POINTS_PER_CORRECT;
use crate::vocab::VocabEntry;

/// ラウンドの状態
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// 回答待ち
    Active(usize),
    /// 回答済み ("Next" 待ち)
    Locked(usize),
    /// 全ラウンド終了 (Restart まで動かない)
    Complete,
}

/// 回答の判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: String,
    pub correct: bool,
}

/// レッスンの進行状態
///
/// 遷移はすべて `self` を受け取って次の状態を返す純粋関数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    order: Vec<VocabEntry>,
    current_index: usize,
    score: u32,
    streak: u32,
    best_streak: u32,
    correct: u32,
    phase: Phase,
}

impl Default for RunState {
    /// 空のレッスン (すぐ Complete)
    fn default() -> Self {
        Self::from_order(Vec::new())
    }
}

impl RunState {
    /// 単語帳をシャッフル (Fisher–Yates) してレッスンを始める
    pub fn start<R: Rng + ?Sized>(entries: &[VocabEntry], rng: &mut R) -> Self {
        let mut order = entries.to_vec();
        order.shuffle(rng);
        Self::from_order(order)
    }

    /// 出題順を指定して始める
    pub fn from_order(order: Vec<VocabEntry>) -> Self {
        let phase = if order.is_empty() { Phase::Complete } else { Phase::Active(0) };
        Self {
            order,
            current_index: 0,
            score: 0,
            streak: 0,
            best_streak: 0,
            correct: 0,
            phase,
        }
    }

    /// やり直し (新しい順番で最初から)
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self::start(&self.order, rng)
    }

    /// 回答する (Active のときだけ有効。Locked 中の二度押しは無視)
    pub fn submit(mut self, answer: &str, selected: &str) -> (Self, Option<AnswerOutcome>) {
        let Phase::Active(index) = self.phase else {
            return (self, None);
        };

        let correct = selected == answer;
        if correct {
            self.score += POINTS_PER_CORRECT;
            self.streak += 1;
            self.correct += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.phase = Phase::Locked(index);

        let outcome = AnswerOutcome { selected: selected.to_string(), correct };
        (self, Some(outcome))
    }

    /// 次のラウンドへ (Locked のときだけ有効)
    pub fn advance(mut self) -> Self {
        let Phase::Locked(index) = self.phase else {
            return self;
        };

        self.current_index = index + 1;
        self.phase = if self.current_index >= self.order.len() {
            Phase::Complete
        } else {
            Phase::Active(self.current_index)
        };
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Locked(_))
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// 今のラウンドの単語 (Complete なら None)
    pub fn current_entry(&self) -> Option<&VocabEntry> {
        match self.phase {
            Phase::Active(i) | Phase::Locked(i) => self.order.get(i),
            Phase::Complete => None,
        }
    }

    pub fn order(&self) -> &[VocabEntry] {
        &self.order
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_rounds(&self) -> usize {
        self.order.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// 満点
    pub fn total_possible(&self) -> u32 {
        self.order.len() as u32 * POINTS_PER_CORRECT
    }
}
