// ============================================
// src/view.rs
// 表示側 (TUI / プロンプト) とクイズ本体の境界
// ============================================

use crate::question::Question;

/// クイズの進行を表示側へ伝えるコールバック
pub trait QuestionView {
    /// 新しい問題を表示する
    fn on_render_question(&mut self, question: &Question);

    /// 回答の判定結果
    fn on_answer_result(&mut self, selected: &str, correct: bool, explanation: &str);

    /// スコア・連続正解・ラウンド番号 (0始まり) の更新
    fn on_meta_update(&mut self, score: u32, streak: u32, round_index: usize, total_rounds: usize);

    /// レッスン終了
    fn on_lesson_complete(&mut self, score: u32, total_possible: u32);
}
