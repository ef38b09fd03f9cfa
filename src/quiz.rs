// ============================================
// src/quiz.rs
// クイズ本体: RunState を進めて、結果を QuestionView に伝える
// ============================================

use std::mem;

use chrono::Utc;
use rand::Rng;

use crate::config::QuizConfig;
use crate::deck::Deck;
use crate::history::{LessonHistory, LessonRecord};
use crate::question::{Question, build_question, choose_kind};
use crate::run_state::{AnswerOutcome, RunState};
use crate::view::QuestionView;

pub struct Quiz<R: Rng> {
    deck: Deck,
    config: QuizConfig,
    rng: R,
    state: RunState,
    /// 今のラウンドの問題 (Complete なら None)
    current: Option<Question>,
    history: LessonHistory,
}

impl<R: Rng> Quiz<R> {
    /// 作るだけ。`start` を呼ぶまで出題しない
    pub fn new(deck: Deck, config: QuizConfig, rng: R) -> Self {
        Self {
            deck,
            config,
            rng,
            state: RunState::default(),
            current: None,
            history: LessonHistory::default(),
        }
    }

    /// レッスン開始
    pub fn start<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        self.state = RunState::start(self.deck.entries(), &mut self.rng);
        log::info!("lesson started with {} rounds", self.state.total_rounds());
        self.enter_round(view);
    }

    /// 最初からやり直す (新しい出題順)
    pub fn restart<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        if self.state.total_rounds() == 0 {
            self.start(view);
            return;
        }
        self.state = mem::take(&mut self.state).restart(&mut self.rng);
        log::info!("lesson restarted");
        self.enter_round(view);
    }

    /// 回答する (回答済み・終了後は何もしない)
    pub fn submit<V: QuestionView + ?Sized>(
        &mut self,
        selected: &str,
        view: &mut V,
    ) -> Option<AnswerOutcome> {
        let question = self.current.as_ref()?;
        let answer = question.answer;
        let explanation = question.explanation.clone();

        let (state, outcome) = mem::take(&mut self.state).submit(answer, selected);
        self.state = state;
        let outcome = outcome?;

        log::debug!("answered {} for {} (correct: {})", outcome.selected, answer, outcome.correct);
        view.on_answer_result(&outcome.selected, outcome.correct, &explanation);
        self.emit_meta(view);
        Some(outcome)
    }

    /// `index` 番目の選択肢で回答する
    pub fn select_option<V: QuestionView + ?Sized>(
        &mut self,
        index: usize,
        view: &mut V,
    ) -> Option<AnswerOutcome> {
        let selected = *self.current.as_ref()?.options.get(index)?;
        self.submit(selected, view)
    }

    /// 次のラウンドへ (回答前・終了後は何もしない)
    pub fn next<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        if !self.state.is_locked() {
            return;
        }
        self.state = mem::take(&mut self.state).advance();
        self.enter_round(view);
    }

    /// 今の問題を描き直す (回答待ちなら選択肢を並べ替える)
    pub fn render<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        let locked = self.state.is_locked();
        if let Some(question) = self.current.as_mut() {
            if !locked {
                question.reshuffle(&mut self.rng);
            }
            view.on_render_question(question);
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &LessonHistory {
        &self.history
    }

    /// 今のラウンドの問題を作って表示する (全部終わっていれば結果へ)
    fn enter_round<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        let Some(entry) = self.state.current_entry().copied() else {
            self.current = None;
            self.finish(view);
            return;
        };

        let kind = choose_kind(
            self.config.mode,
            self.config.tutorial,
            self.state.current_index(),
            &mut self.rng,
        );
        self.current = Some(build_question(&self.deck, &entry, kind, &mut self.rng));

        self.emit_meta(view);
        self.render(view);
    }

    fn finish<V: QuestionView + ?Sized>(&mut self, view: &mut V) {
        let record = LessonRecord::from_run(&self.state, Utc::now());
        log::info!(
            "lesson complete: {} / {} ({}%)",
            record.score,
            record.total_possible,
            record.percent
        );
        self.history.push(record);

        self.emit_meta(view);
        view.on_lesson_complete(self.state.score(), self.state.total_possible());
    }

    fn emit_meta<V: QuestionView + ?Sized>(&self, view: &mut V) {
        view.on_meta_update(
            self.state.score(),
            self.state.streak(),
            self.state.current_index(),
            self.state.total_rounds(),
        );
    }
}
