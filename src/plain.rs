// ============================================
// src/plain.rs
// 1行ずつのプロンプト表示 (dialoguer + console)
// ============================================

use anyhow::Result;
use console::{Term, style};
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use rand::Rng;

use hanziwiz::history::percent;
use hanziwiz::{Question, QuestionView, Quiz};

/// 受け取った内容をそのまま標準出力に書く
struct PlainView;

impl QuestionView for PlainView {
    fn on_render_question(&mut self, question: &Question) {
        println!();
        println!("{}", style(&question.prompt_text).bold());
        println!("  {}", style(&question.sub_prompt).dim());
    }

    fn on_answer_result(&mut self, _selected: &str, correct: bool, explanation: &str) {
        if correct {
            println!("{} {}", style("Great!").green().bold(), explanation);
        } else {
            println!("{} {}", style("Not yet.").red().bold(), explanation);
        }
    }

    fn on_meta_update(&mut self, score: u32, streak: u32, round_index: usize, total_rounds: usize) {
        let round = (round_index + 1).min(total_rounds);
        println!(
            "{}",
            style(format!(
                "Round {} / {}   Score: {}   Streak: {}",
                round, total_rounds, score, streak
            ))
            .yellow()
        );
    }

    fn on_lesson_complete(&mut self, score: u32, total_possible: u32) {
        println!();
        println!("{}", style("Lesson complete 🎉").magenta().bold());
        println!(
            "You scored {} points ({}%).",
            style(score).bold(),
            percent(score, total_possible)
        );
    }
}

pub fn run<R: Rng>(quiz: &mut Quiz<R>) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();
    let mut view = PlainView;

    quiz.start(&mut view);

    loop {
        if quiz.state().is_complete() {
            println!("Best streak: {}", quiz.state().best_streak());
            if let Some(best) = quiz.history().best_score() {
                println!("Best score this session: {}", best);
            }
            let again = Confirm::with_theme(&theme)
                .with_prompt("Practice again?")
                .default(true)
                .interact()?;
            if !again {
                break;
            }
            quiz.restart(&mut view);
            continue;
        }

        let Some(question) = quiz.current_question() else {
            break;
        };
        let index = Select::with_theme(&theme)
            .with_prompt("Choose")
            .items(&question.options)
            .default(0)
            .interact()?;
        quiz.select_option(index, &mut view);

        let last_round = quiz.state().current_index() + 1 >= quiz.state().total_rounds();
        let hint = if last_round {
            "Press any key to see your results..."
        } else {
            "Press any key for the next round..."
        };
        term.write_line(&style(hint).dim().to_string())?;
        term.read_key()?;
        quiz.next(&mut view);
    }

    Ok(())
}
