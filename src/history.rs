// ============================================
// src/history.rs
// 終わったレッスンの記録 (メモリ上のみ。ファイルには保存しない)
// ============================================

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::run_state::RunState;

/// 1レッスンごとの記録
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonRecord {
    pub finished_at: DateTime<Utc>,
    pub score: u32,
    pub total_possible: u32,
    pub correct: u32,
    pub rounds: usize,
    pub best_streak: u32,
    /// 正答率 (%, 四捨五入)
    pub percent: u32,
}

impl LessonRecord {
    /// 終了した RunState から記録を作る
    pub fn from_run(state: &RunState, finished_at: DateTime<Utc>) -> Self {
        Self {
            finished_at,
            score: state.score(),
            total_possible: state.total_possible(),
            correct: state.correct(),
            rounds: state.total_rounds(),
            best_streak: state.best_streak(),
            percent: percent(state.score(), state.total_possible()),
        }
    }
}

/// 満点に対する割合 (%)
pub fn percent(score: u32, total_possible: u32) -> u32 {
    if total_possible == 0 {
        return 0;
    }
    (score as f64 / total_possible as f64 * 100.0).round() as u32
}

/// このプロセスで遊んだレッスンの一覧
#[derive(Debug, Clone, Default, Serialize)]
pub struct LessonHistory {
    records: Vec<LessonRecord>,
}

impl LessonHistory {
    pub fn push(&mut self, record: LessonRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LessonRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 最高スコア
    pub fn best_score(&self) -> Option<u32> {
        self.records.iter().map(|r| r.score).max()
    }

    /// レポート出力用の JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
