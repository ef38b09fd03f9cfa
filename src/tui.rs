// ============================================
// src/tui.rs
// 全画面の TUI 表示 (ratatui + crossterm)
// ============================================

use std::io::{Result, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyCode},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use rand::Rng;

use hanziwiz::history::percent;
use hanziwiz::{Question, QuestionView, Quiz, RunState};

// --------------------------------------------------
// 表示用の状態
// --------------------------------------------------

/// 画面に出す内容を QuestionView のコールバックで受け取って保持する
#[derive(Default)]
struct TuiView {
    question: Option<Question>,
    /// ↑↓ で動かすカーソル
    cursor: usize,
    /// 回答済みなら (選んだ字, 正解か)
    answered: Option<(String, bool)>,
    feedback: String,

    score: u32,
    streak: u32,
    round_index: usize,
    total_rounds: usize,

    /// レッスン終了時の (スコア, 満点)
    summary: Option<(u32, u32)>,
}

impl QuestionView for TuiView {
    fn on_render_question(&mut self, question: &Question) {
        self.question = Some(question.clone());
        self.answered = None;
        self.feedback.clear();
        self.cursor = 0;
        self.summary = None;
    }

    fn on_answer_result(&mut self, selected: &str, correct: bool, explanation: &str) {
        self.answered = Some((selected.to_string(), correct));
        self.feedback = if correct {
            format!("Great! {}", explanation)
        } else {
            format!("Not yet. {}", explanation)
        };
    }

    fn on_meta_update(&mut self, score: u32, streak: u32, round_index: usize, total_rounds: usize) {
        self.score = score;
        self.streak = streak;
        self.round_index = round_index;
        self.total_rounds = total_rounds;
    }

    fn on_lesson_complete(&mut self, score: u32, total_possible: u32) {
        self.question = None;
        self.answered = None;
        self.feedback.clear();
        self.summary = Some((score, total_possible));
    }
}

impl TuiView {
    fn option_count(&self) -> usize {
        self.question.as_ref().map_or(0, |q| q.options.len())
    }

    fn move_cursor(&mut self, down: bool) {
        let count = self.option_count();
        if count == 0 || self.answered.is_some() {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }
}

// --------------------------------------------------
// TUI のセットアップと実行ループ
// --------------------------------------------------

pub fn run<R: Rng>(quiz: &mut Quiz<R>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, quiz);
    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(Show)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn run_app<R: Rng>(terminal: &mut Terminal<impl Backend>, quiz: &mut Quiz<R>) -> Result<()> {
    let mut view = TuiView::default();
    quiz.start(&mut view);

    loop {
        terminal.draw(|f| ui(f, &view, quiz.state()))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != event::KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Char('r') => quiz.restart(&mut view),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        quiz.select_option(index, &mut view);
                    }
                    KeyCode::Up => view.move_cursor(false),
                    KeyCode::Down => view.move_cursor(true),
                    KeyCode::Enter => {
                        // 回答済みなら次へ、まだならカーソル位置で回答
                        if quiz.state().is_locked() {
                            quiz.next(&mut view);
                        } else {
                            quiz.select_option(view.cursor, &mut view);
                        }
                    }
                    KeyCode::Char('n') | KeyCode::Right => quiz.next(&mut view),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

// --------------------------------------------------
// UI描画
// --------------------------------------------------

fn ui(f: &mut Frame, view: &TuiView, state: &RunState) {
    let size = f.area();
    let block = Block::default().borders(Borders::ALL).title("Hanzi Wiz !");
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] 進捗ゲージ
            Constraint::Length(1), // [1] スコア / 連続正解
            Constraint::Length(1), // [2] 空白
            Constraint::Length(1), // [3] 問題文
            Constraint::Length(1), // [4] 補足 (粤拼 or 穴埋め)
            Constraint::Length(1), // [5] 空白
            Constraint::Min(4),    // [6] 選択肢 or 結果
            Constraint::Length(2), // [7] フィードバック
            Constraint::Length(1), // [8] 操作説明
        ])
        .split(inner_area);

    // 0. 進捗ゲージ
    let total = view.total_rounds.max(1);
    let ratio = if view.summary.is_some() {
        1.0
    } else {
        (view.round_index as f64 / total as f64).min(1.0)
    };
    let label = format!(
        "Round {} / {}",
        (view.round_index + 1).min(view.total_rounds),
        view.total_rounds
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, chunks[0]);

    // 1. スコア
    f.render_widget(
        Paragraph::new(format!("Score: {}   Streak: {}", view.score, view.streak))
            .style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    // レッスン終了
    if let Some((score, total_possible)) = view.summary {
        f.render_widget(
            Paragraph::new("All rounds complete!")
                .style(Style::default().fg(Color::White).bold())
                .centered(),
            chunks[3],
        );
        f.render_widget(
            Paragraph::new("Press r to practice again.")
                .style(Style::default().fg(Color::Gray))
                .centered(),
            chunks[4],
        );
        let result = Paragraph::new(vec![
            Line::from("Lesson complete 🎉").style(Style::default().fg(Color::Magenta).bold()),
            Line::from(format!(
                "You scored {} points ({}%).",
                score,
                percent(score, total_possible)
            )),
            Line::from(format!("Best streak: {}", state.best_streak())),
            Line::from("Great work learning festive Chinese words."),
        ])
        .centered();
        f.render_widget(result, chunks[6]);
        render_help(f, chunks[8], "r: restart  Esc: quit");
        return;
    }

    let Some(question) = view.question.as_ref() else {
        return;
    };

    // 3. 問題文
    f.render_widget(
        Paragraph::new(question.prompt_text.as_str())
            .style(Style::default().fg(Color::White).bold())
            .centered(),
        chunks[3],
    );

    // 4. 補足
    f.render_widget(
        Paragraph::new(question.sub_prompt.as_str())
            .style(Style::default().fg(Color::Gray))
            .centered(),
        chunks[4],
    );

    // 6. 選択肢
    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match &view.answered {
                Some(_) if *option == question.answer => {
                    Style::default().fg(Color::Black).bg(Color::Green)
                }
                Some((selected, false)) if selected == option => {
                    Style::default().fg(Color::White).bg(Color::Red)
                }
                Some(_) => Style::default().fg(Color::DarkGray),
                None if i == view.cursor => Style::default().fg(Color::Black).bg(Color::White),
                None => Style::default().fg(Color::White),
            };
            Line::from(Span::styled(format!(" {}. {} ", i + 1, option), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).centered(), chunks[6]);

    // 7. フィードバック
    let feedback_color = match view.answered {
        Some((_, true)) => Color::Green,
        _ => Color::Red,
    };
    f.render_widget(
        Paragraph::new(view.feedback.as_str())
            .style(Style::default().fg(feedback_color))
            .centered(),
        chunks[7],
    );

    // 8. 操作説明
    let help = if view.answered.is_some() {
        "Enter/n: next  r: restart  Esc: quit"
    } else {
        "1-4 or ↑↓+Enter: answer  r: restart  Esc: quit"
    };
    render_help(f, chunks[8], help);
}

fn render_help(f: &mut Frame, area: Rect, text: &str) {
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)).centered(),
        area,
    );
}
