// ============================================
// src/config.rs
// クイズの設定 (コマンドライン引数から組み立てる)
// ============================================

use clap::ValueEnum;

/// 1問正解ごとの加点
pub const POINTS_PER_CORRECT: u32 = 10;

/// 出題形式の選び方
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum QuestionMode {
    /// 意味問題と穴埋め問題をランダムに混ぜる
    #[default]
    Mixed,
    /// 意味問題のみ
    Meaning,
    /// 穴埋め問題のみ (熟語がない字は意味問題になる)
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    pub mode: QuestionMode,
    /// 最初の2問を固定 (1問目: 意味, 2問目: 穴埋め)
    pub tutorial: bool,
    /// 乱数シード (None なら OS から)
    pub seed: Option<u64>,
}
