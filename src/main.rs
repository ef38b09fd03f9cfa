// ============================================
// src/main.rs (メインファイル)
// ============================================

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use hanziwiz::{Deck, QuestionMode, Quiz, QuizConfig};

mod plain;
mod tui;

/// お正月の広東語を4択で覚えるクイズ
#[derive(Parser)]
#[command(name = "hanziwiz", version, about)]
struct Cli {
    /// 全画面 TUI ではなく、1行ずつのプロンプトで遊ぶ
    #[arg(long)]
    plain: bool,

    /// 乱数シード (同じ値なら同じ出題順)
    #[arg(long)]
    seed: Option<u64>,

    /// 出題形式
    #[arg(long, value_enum, default_value_t = QuestionMode::Mixed)]
    mode: QuestionMode,

    /// 最初の2問を固定 (意味問題 → 穴埋め問題)
    #[arg(long)]
    tutorial: bool,

    /// 終了時に今回のレッスン記録を JSON で出力
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            mode: self.mode,
            tutorial: self.tutorial,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    // 単語帳が壊れていたら起動時に終了
    let deck = Deck::builtin()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut quiz = Quiz::new(deck, config, rng);

    if cli.plain {
        plain::run(&mut quiz)?;
    } else {
        tui::run(&mut quiz)?;
    }

    if cli.report {
        println!("{}", quiz.history().to_json()?);
    }
    Ok(())
}
