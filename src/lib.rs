//! HANZI WiZ: お正月の広東語の漢字を4択で覚えるクイズ。
//!
//! クイズ本体 (`Quiz`, `RunState`) は表示に依存しない。
//! 表示側は `QuestionView` を実装して進行を受け取る。

pub mod config;
pub mod deck;
pub mod distractor;
pub mod history;
pub mod question;
pub mod quiz;
pub mod run_state;
pub mod view;
pub mod vocab;

pub use config::{POINTS_PER_CORRECT, QuestionMode, QuizConfig};
pub use deck::{Deck, DeckError};
pub use question::{OPTION_COUNT, Question, QuestionKind};
pub use quiz::Quiz;
pub use run_state::{AnswerOutcome, Phase, RunState};
pub use view::QuestionView;
